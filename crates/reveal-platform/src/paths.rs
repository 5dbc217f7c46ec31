use std::path::PathBuf;

const APP_DIR: &str = "reveal-explorer";

pub struct AppPaths {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Self {
        let fallback = std::env::temp_dir;

        Self {
            config_dir: dirs::config_dir().unwrap_or_else(fallback).join(APP_DIR),
            data_dir: dirs::data_dir().unwrap_or_else(fallback).join(APP_DIR),
        }
    }

    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("reveal-explorer.log")
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}
