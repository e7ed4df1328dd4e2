// Build-time identity from Cargo.toml

/// Package version, logged at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name, logged at startup.
pub const NAME: &str = env!("CARGO_PKG_NAME");
