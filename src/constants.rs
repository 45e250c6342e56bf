//! Application-wide constants.

/// The display name of the application.
pub const APP_NAME: &str = "Breaky";

/// The binary name of the application (used in command examples).
pub const APP_BINARY_NAME: &str = "breaky";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Breaky";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "BREAKY_CONFIG_DIR";

/// Log file written while the terminal UI owns the screen.
pub const LOG_FILE_NAME: &str = "breaky.log";
