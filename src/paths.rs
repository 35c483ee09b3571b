//! Path resolution for the editor's config file and logs.
//!
//! In development mode (cargo run / cargo test), paths resolve to the working directory.
//! Otherwise they resolve to platform-specific locations:
//! - Windows: `%APPDATA%\Actionforge\`
//! - macOS: `~/Library/Application Support/Actionforge/`
//! - Linux: `~/.config/actionforge/` (config), `~/.local/share/actionforge/` (data)

use std::path::PathBuf;

/// Returns true when running in development mode.
///
/// Detection methods:
/// - `CARGO` env var is set (cargo run sets this)
/// - Debug assertions enabled (debug builds)
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Platform-appropriate config directory.
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join("actionforge"))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Platform-appropriate data directory.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join("actionforge"))
}

/// Path to the config file (`{config_dir}/actionforge.json`).
pub fn config_file() -> PathBuf {
    config_dir()
        .map(|p| p.join("actionforge.json"))
        .unwrap_or_else(|| PathBuf::from("actionforge.json"))
}

/// Path to the logs directory (`{data_dir}/logs/`).
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
