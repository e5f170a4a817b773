pub mod alerts;
pub mod chat;
pub mod health;
pub mod profile;
pub mod translate;
