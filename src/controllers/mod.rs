pub mod markets_controller;
pub mod alerts_controller;
pub mod notifications_controller;
pub mod insights_controller;
pub mod realtime_controller;
