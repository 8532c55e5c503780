//! Service adapters: OS specific implementations (settings files, key maps).

pub mod keybinding;
pub mod settings;

pub use keybinding::KeybindingService;
pub use settings::{
    ensure_log_dir, ensure_settings_file, get_log_dir, get_settings_path, load_settings,
    parse_command, parse_keybinding, read_settings, write_default_settings,
};
