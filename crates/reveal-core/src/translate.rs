use log::debug;
use std::fmt;

use crate::runner::ProcessRunner;

const MOUNT_PREFIX: &str = "/mnt/";

/// `wslpath` prints its own diagnostics with this prefix, sometimes on stdout.
const HELPER_ERROR_MARKER: &str = "wslpath:";

const DEFAULT_MOUNT_DRIVE: &str = "Z:";

/// Drive letter under which the Linux filesystem is mounted on the Windows
/// side. Always carries exactly one trailing colon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountDrive(String);

impl MountDrive {
    pub fn new(drive: &str) -> Self {
        Self(format!("{}:", drive.trim_end_matches(':')))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MountDrive {
    fn default() -> Self {
        Self::new(DEFAULT_MOUNT_DRIVE)
    }
}

impl fmt::Display for MountDrive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Static WSL → Windows rewrite: `/mnt/<letter>/...` maps onto that drive,
/// anything else is assumed to live under `drive`.
pub fn convert_wsl_path(source: &str, drive: &MountDrive) -> String {
    if let Some(converted) = convert_mount_path(source) {
        return converted;
    }

    format!("{}{}", drive, source.replace('/', "\\"))
}

fn convert_mount_path(source: &str) -> Option<String> {
    if !source.starts_with(MOUNT_PREFIX) {
        return None;
    }

    let parts: Vec<&str> = source.split('/').collect();
    if parts.len() < 3 {
        return None;
    }

    let mut letter = parts[2].chars();
    let drive = match (letter.next(), letter.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => return None,
    };

    Some(format!("{}:\\{}", drive, parts[3..].join("\\")))
}

#[derive(Debug, Clone, Default)]
pub struct PathTranslator {
    mount_drive: MountDrive,
    helper: Option<String>,
}

impl PathTranslator {
    pub fn new(mount_drive: MountDrive) -> Self {
        Self {
            mount_drive,
            helper: None,
        }
    }

    pub fn with_helper(mut self, helper: impl Into<String>) -> Self {
        self.helper = Some(helper.into());
        self
    }

    pub fn helper(&self) -> Option<&str> {
        self.helper.as_deref()
    }

    pub async fn translate(&self, runner: &dyn ProcessRunner, source: &str) -> String {
        if let Some(path) = self.translate_with_helper(runner, source).await {
            debug!("{} translated {} to {}", self.helper().unwrap_or_default(), source, path);
            return path;
        }

        let path = convert_wsl_path(source, &self.mount_drive);
        debug!("Converted {} to {} using mount drive {}", source, path, self.mount_drive);
        path
    }

    async fn translate_with_helper(
        &self,
        runner: &dyn ProcessRunner,
        source: &str,
    ) -> Option<String> {
        let helper = self.helper.as_deref()?;
        let args = ["-w".to_string(), source.to_string()];

        match runner.run(helper, &args).await {
            Ok(output) if output.success => {
                let result = output.stdout.trim();
                if result.is_empty() || result.contains(HELPER_ERROR_MARKER) {
                    debug!("Ignoring {} output for {}: {:?}", helper, source, result);
                    None
                } else {
                    Some(result.to_string())
                }
            }
            Ok(output) => {
                debug!(
                    "{} exited with {:?} for {}: {}",
                    helper,
                    output.code,
                    source,
                    output.stderr.trim()
                );
                None
            }
            Err(e) => {
                debug!("Failed to run {}: {}", helper, e);
                None
            }
        }
    }
}
