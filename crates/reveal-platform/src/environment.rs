use crate::wsl::wsl_distro_name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Windows,
    Wsl { distro: String },
    Unsupported { os: String },
}

impl Platform {
    pub fn detect() -> Self {
        Self::from_parts(std::env::consts::OS, wsl_distro_name())
    }

    /// WSL is only recognised on Linux with a distro name exported; a stray
    /// `WSL_DISTRO_NAME` elsewhere does not count.
    pub fn from_parts(os: &str, wsl_distro: Option<String>) -> Self {
        match (os, wsl_distro) {
            ("windows", _) => Platform::Windows,
            ("linux", Some(distro)) if !distro.is_empty() => Platform::Wsl { distro },
            (os, _) => Platform::Unsupported {
                os: os.to_string(),
            },
        }
    }

    pub fn explorer_binary(&self) -> Option<&'static str> {
        match self {
            Platform::Windows => Some("explorer"),
            Platform::Wsl { .. } => Some("explorer.exe"),
            Platform::Unsupported { .. } => None,
        }
    }

    pub fn is_wsl(&self) -> bool {
        matches!(self, Platform::Wsl { .. })
    }

    pub fn display_name(&self) -> String {
        match self {
            Platform::Windows => "Windows".to_string(),
            Platform::Wsl { distro } => format!("WSL: {}", distro),
            Platform::Unsupported { os } => os.clone(),
        }
    }
}
