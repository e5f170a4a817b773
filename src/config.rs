use std::net::SocketAddr;
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Arogya";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fallback language code when detection yields nothing usable.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default bind address for the HTTP server.
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default log filter when RUST_LOG is not set.
pub fn default_log_filter() -> String {
    "arogya=info,tower_http=warn".to_string()
}

/// Get the application data directory.
/// `AROGYA_DATA_DIR` overrides; otherwise ~/Arogya/ (user-visible).
pub fn app_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AROGYA_DATA_DIR") {
        return PathBuf::from(dir);
    }
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Arogya")
}

/// Path of the SQLite database file.
pub fn database_path() -> PathBuf {
    app_data_dir().join("arogya.db")
}

/// Directory holding the bundled knowledge base JSON files.
/// `AROGYA_KB_DIR` overrides; defaults to ./resources/kb relative to
/// the working directory, which is where the repo ships them.
pub fn kb_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("AROGYA_KB_DIR") {
        return PathBuf::from(dir);
    }
    PathBuf::from("resources/kb")
}

/// Resolve the server bind address (`AROGYA_ADDR` override).
pub fn bind_addr() -> SocketAddr {
    std::env::var("AROGYA_ADDR")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| DEFAULT_ADDR.parse().expect("default addr is valid"))
}
