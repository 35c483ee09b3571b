use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// System set for config loading (other plugins can run after this)
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigLoaded;

/// Where the clipboard keeps its text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ClipboardBackend {
    /// Private to the running editor
    #[default]
    Memory,
    /// Shared with other applications through the OS clipboard
    System,
}

/// Editor configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EditorConfigData {
    #[serde(default)]
    pub clipboard_backend: ClipboardBackend,

    /// `EnvFilter` directive overriding the default log filter; hosts pass the
    /// config to [`crate::logging::setup_logging_from_config`]
    #[serde(default)]
    pub log_filter: Option<String>,
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct EditorConfig {
    /// The persisted configuration data
    pub data: EditorConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
    /// Whether config needs to be saved (dirty flag)
    pub dirty: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data: EditorConfigData::default(),
            config_path: crate::paths::config_file(),
            dirty: false,
        }
    }
}

/// Resource to notify the host when config was reset to defaults
#[derive(Resource, Default)]
pub struct ConfigResetNotification {
    pub show: bool,
    /// The reason for the reset (parse error, read error, etc.)
    pub reason: Option<String>,
}

/// Message to trigger config save
#[derive(Message)]
pub struct SaveConfigRequest;

/// Message to switch the clipboard backend
#[derive(Message)]
pub struct SetClipboardBackendRequest {
    pub backend: ClipboardBackend,
}

/// Result of loading config from disk
pub struct LoadConfigResult {
    pub data: EditorConfigData,
    /// Error message if config was reset to defaults due to an error
    pub reset_reason: Option<String>,
}

/// Load configuration from `path`, falling back to defaults
pub fn load_config(path: &Path) -> LoadConfigResult {
    let (data, reset_reason) = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", path);
                    (data, None)
                }
                Err(e) => {
                    warn!("Failed to parse config file: {}", e);
                    (
                        EditorConfigData::default(),
                        Some(format!("Configuration file was corrupted: {}", e)),
                    )
                }
            },
            Err(e) => {
                warn!("Failed to read config file: {}", e);
                (
                    EditorConfigData::default(),
                    Some(format!("Could not read configuration file: {}", e)),
                )
            }
        }
    } else {
        info!("No config file found, using defaults");
        (EditorConfigData::default(), None)
    };

    LoadConfigResult { data, reset_reason }
}

/// Save configuration to disk
pub fn save_config(config: &EditorConfig) -> bool {
    let json = match serde_json::to_string_pretty(&config.data) {
        Ok(json) => json,
        Err(e) => {
            error!("Failed to serialize config: {}", e);
            return false;
        }
    };
    if let Some(parent) = config.config_path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        error!("Failed to create config directory: {}", e);
        return false;
    }
    match std::fs::write(&config.config_path, json) {
        Ok(()) => {
            info!("Config saved to {:?}", config.config_path);
            true
        }
        Err(e) => {
            error!("Failed to save config: {}", e);
            false
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(
    mut config: ResMut<EditorConfig>,
    mut reset_notification: ResMut<ConfigResetNotification>,
) {
    let result = load_config(&config.config_path);
    config.data = result.data;
    config.dirty = false;

    if let Some(reason) = result.reset_reason {
        reset_notification.show = true;
        reset_notification.reason = Some(reason);
    }
}

/// System to save config when requested
fn save_config_system(
    mut events: MessageReader<SaveConfigRequest>,
    mut config: ResMut<EditorConfig>,
) {
    for _ in events.read() {
        if config.dirty && save_config(&config) {
            config.dirty = false;
        }
    }
}

fn set_clipboard_backend_system(
    mut events: MessageReader<SetClipboardBackendRequest>,
    mut config: ResMut<EditorConfig>,
    mut save_events: MessageWriter<SaveConfigRequest>,
) {
    for event in events.read() {
        if config.data.clipboard_backend != event.backend {
            config.data.clipboard_backend = event.backend;
            config.dirty = true;
            save_events.write(SaveConfigRequest);
            info!("Clipboard backend set to {:?}", event.backend);
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorConfig>()
            .init_resource::<ConfigResetNotification>()
            .add_message::<SaveConfigRequest>()
            .add_message::<SetClipboardBackendRequest>()
            .add_systems(Startup, load_config_system.in_set(ConfigLoaded))
            .add_systems(
                Update,
                (
                    set_clipboard_backend_system.run_if(on_message::<SetClipboardBackendRequest>),
                    save_config_system.run_if(on_message::<SaveConfigRequest>),
                )
                    .chain(),
            );
    }
}
