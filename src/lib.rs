pub mod api; // HTTP surface: chat, alerts, profiles, translate stub
pub mod config;
pub mod db;
pub mod engine; // Rule engine: normalize → match → route → format
pub mod kb;
pub mod language;
pub mod models;
pub mod notify;
pub mod reminder;
