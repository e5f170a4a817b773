pub mod alert;
pub mod chat;
pub mod enums;
pub mod profile;

pub use alert::{HealthAlert, NewAlert};
pub use chat::ChatRecord;
pub use enums::Severity;
pub use profile::{ProfileUpdate, UserProfile};
