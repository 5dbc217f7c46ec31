use reveal_core::{RevealError, RevealOutcome};

pub fn success_message(outcome: &RevealOutcome) -> String {
    let name = outcome
        .source_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| outcome.source_path.display().to_string());
    format!("Revealed file in Explorer: {}", name)
}

pub fn error_message(err: &RevealError) -> String {
    match err {
        RevealError::NoPath => err.to_string(),
        RevealError::UnsupportedPlatform { .. } => {
            "Reveal in Explorer is only supported on Windows and WSL environments.".to_string()
        }
        RevealError::Spawn { .. } => format!("Failed to reveal file in Explorer: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_success_uses_file_name() {
        let outcome = RevealOutcome {
            source_path: PathBuf::from("/home/me/project/file.txt"),
            target_path: "Z:\\home\\me\\project\\file.txt".to_string(),
            command_line: "explorer.exe /select,\"Z:\\home\\me\\project\\file.txt\"".to_string(),
            exit_code: Some(1),
        };
        assert_eq!(success_message(&outcome), "Revealed file in Explorer: file.txt");
    }

    #[test]
    fn test_spawn_failure_keeps_detail() {
        let err = RevealError::Spawn {
            command: "explorer.exe /select,\"C:\\a.txt\"".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = error_message(&err);
        assert!(message.starts_with("Failed to reveal file in Explorer: "));
        assert!(message.contains("No such file or directory"));
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            error_message(&RevealError::NoPath),
            "No file is currently selected or open."
        );
        assert_eq!(
            error_message(&RevealError::UnsupportedPlatform {
                os: "macos".to_string()
            }),
            "Reveal in Explorer is only supported on Windows and WSL environments."
        );
    }
}
