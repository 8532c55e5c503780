//! Service ports: data contracts shared by the kernel and the host.

pub mod config;
pub mod settings;

pub use config::EditorConfig;
pub use settings::{KeybindingRule, Settings, SettingsError};
