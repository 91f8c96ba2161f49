pub mod market_data;
pub mod simulator;
pub mod alert_engine;
pub mod hub;
pub mod market_loop;

pub mod alerts_service;
pub mod converter;
pub mod gemini;
pub mod news;
