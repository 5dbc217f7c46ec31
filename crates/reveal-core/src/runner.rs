use async_trait::async_trait;
use log::{debug, trace};
use reveal_platform::HideWindow;
use tokio::process::Command;

/// What a finished child process left behind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Spawns a program and waits for it. An `Err` means the process never
/// started; a non-zero exit is still `Ok`.
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<ProcessOutput>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioRunner;

#[async_trait]
impl ProcessRunner for TokioRunner {
    async fn run(&self, program: &str, args: &[String]) -> std::io::Result<ProcessOutput> {
        debug!("Running: {} {:?}", program, args);

        let output = Command::new(program)
            .args(args)
            .hide_window()
            .output()
            .await?;

        debug!("{} exit status: {:?}", program, output.status);
        trace!("{} stdout: {}", program, String::from_utf8_lossy(&output.stdout));
        trace!("{} stderr: {}", program, String::from_utf8_lossy(&output.stderr));

        Ok(ProcessOutput {
            code: output.status.code(),
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::sync::Mutex;

    impl ProcessOutput {
        pub fn exited(code: i32, stdout: &str) -> Self {
            Self {
                code: Some(code),
                success: code == 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
            }
        }
    }

    type Respond = Box<dyn Fn(&str, &[String]) -> std::io::Result<ProcessOutput> + Send + Sync>;

    /// Answers every spawn from a closure and records what was asked for.
    pub struct FakeRunner {
        respond: Respond,
        calls: Mutex<Vec<(String, Vec<String>)>>,
    }

    impl FakeRunner {
        pub fn new<F>(respond: F) -> Self
        where
            F: Fn(&str, &[String]) -> std::io::Result<ProcessOutput> + Send + Sync + 'static,
        {
            Self {
                respond: Box::new(respond),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> Vec<(String, Vec<String>)> {
            self.calls.lock().unwrap().clone()
        }

        pub fn programs(&self) -> Vec<String> {
            self.calls().into_iter().map(|(program, _)| program).collect()
        }
    }

    #[async_trait]
    impl ProcessRunner for FakeRunner {
        async fn run(&self, program: &str, args: &[String]) -> std::io::Result<ProcessOutput> {
            self.calls
                .lock()
                .unwrap()
                .push((program.to_string(), args.to_vec()));
            (self.respond)(program, args)
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_zero_exit_is_not_an_error() {
        let output = TokioRunner.run("false", &[]).await.unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(1));
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let output = TokioRunner
            .run("sh", &["-c".to_string(), "printf 'C:\\\\x'".to_string()])
            .await
            .unwrap();
        assert!(output.success);
        assert_eq!(output.stdout, "C:\\x");
    }

    #[tokio::test]
    async fn test_missing_binary_fails_to_spawn() {
        let err = TokioRunner
            .run("reveal-explorer-no-such-binary", &[])
            .await
            .unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
