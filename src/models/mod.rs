pub mod asset;
pub mod alert;
pub mod notification;

pub use asset::{Asset, AssetType};
pub use alert::{AlertCondition, PriceAlert};
pub use notification::Notification;
