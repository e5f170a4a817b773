pub mod alert;
pub mod chat;
pub mod profile;

pub use alert::*;
pub use chat::*;
pub use profile::*;
