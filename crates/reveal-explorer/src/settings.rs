use reveal_core::MountDrive;
use reveal_platform::AppPaths;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_mount_drive")]
    pub wsl_mount_drive: String,

    #[serde(default)]
    pub debug_logging: bool,
}

fn default_mount_drive() -> String {
    "Z:".to_string()
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            wsl_mount_drive: default_mount_drive(),
            debug_logging: false,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::load_from(&AppPaths::new().settings_file())
    }

    pub fn load_from(settings_path: &Path) -> Self {
        if settings_path.exists() {
            match std::fs::read_to_string(settings_path) {
                Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
                Err(_) => Self::default(),
            }
        } else {
            Self::default()
        }
    }

    /// A drive given on the command line beats the one from the file.
    pub fn mount_drive(&self, override_drive: Option<&str>) -> MountDrive {
        MountDrive::new(override_drive.unwrap_or(&self.wsl_mount_drive))
    }
}
