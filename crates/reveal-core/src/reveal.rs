use log::{error, info};
use reveal_platform::{Platform, find_path_helper};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::RevealError;
use crate::runner::{ProcessRunner, TokioRunner};
use crate::target::current_file_path;
use crate::translate::{MountDrive, PathTranslator};

const SELECT_FLAG: &str = "/select,";

/// `explorer /select,"<path>"`: opens a window with the file highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealCommand {
    program: String,
    target: String,
}

impl RevealCommand {
    pub fn select(program: &str, target: &str) -> Self {
        Self {
            program: program.to_string(),
            target: target.to_string(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> Vec<String> {
        vec![SELECT_FLAG.to_string(), self.target.clone()]
    }
}

impl fmt::Display for RevealCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}\"{}\"", self.program, SELECT_FLAG, self.target)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealOutcome {
    pub source_path: PathBuf,
    pub target_path: String,
    pub command_line: String,
    pub exit_code: Option<i32>,
}

pub struct Revealer {
    platform: Platform,
    translator: PathTranslator,
    runner: Arc<dyn ProcessRunner>,
}

impl Revealer {
    pub fn new(
        platform: Platform,
        translator: PathTranslator,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            platform,
            translator,
            runner,
        }
    }

    /// Revealer for the platform this process runs on, using `wslpath`
    /// when WSL provides it.
    pub fn detect(mount_drive: MountDrive) -> Self {
        let platform = Platform::detect();
        info!("Detected platform: {}", platform.display_name());

        info!("WSL mount drive: {}", mount_drive);
        let mut translator = PathTranslator::new(mount_drive);
        if platform.is_wsl() {
            if let Some(helper) = find_path_helper() {
                translator = translator.with_helper(helper.to_string_lossy());
            }
        }

        Self::new(platform, translator, Arc::new(TokioRunner))
    }

    fn explorer_binary(&self) -> Result<&'static str, RevealError> {
        self.platform.explorer_binary().ok_or_else(|| {
            error!(
                "Reveal requested on unsupported platform: {}",
                self.platform.display_name()
            );
            RevealError::UnsupportedPlatform {
                os: self.platform.display_name(),
            }
        })
    }

    pub async fn reveal_current(
        &self,
        explicit: Option<&Path>,
        active_document: Option<&Path>,
    ) -> Result<RevealOutcome, RevealError> {
        let path = current_file_path(explicit, active_document)?;
        self.reveal(&path).await
    }

    /// The path Explorer would be handed for `source`: translated on WSL,
    /// unchanged on Windows.
    pub async fn target_path(&self, source: &Path) -> Result<String, RevealError> {
        self.explorer_binary()?;

        let source = source.to_string_lossy();
        let target_path = match self.platform {
            Platform::Wsl { .. } => {
                self.translator
                    .translate(self.runner.as_ref(), &source)
                    .await
            }
            _ => source.into_owned(),
        };
        Ok(target_path)
    }

    pub async fn reveal(&self, source: &Path) -> Result<RevealOutcome, RevealError> {
        let program = self.explorer_binary()?;
        let target_path = self.target_path(source).await?;

        let command = RevealCommand::select(program, &target_path);
        let command_line = command.to_string();
        info!("Executing command: {}", command_line);

        let output = match self.runner.run(command.program(), &command.args()).await {
            Ok(output) => output,
            Err(e) => {
                error!("Failed to execute explorer command: {}", e);
                return Err(RevealError::Spawn {
                    command: command_line,
                    source: e,
                });
            }
        };

        // Explorer reports exit code 1 even when the window opened fine.
        if !output.success {
            info!(
                "{} returned non-zero exit code {:?} (this is normal)",
                program, output.code
            );
        }

        Ok(RevealOutcome {
            source_path: source.to_path_buf(),
            target_path,
            command_line,
            exit_code: output.code,
        })
    }
}
