use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "reveal-explorer",
    version,
    about = "Reveal a file in Windows Explorer from Windows or WSL",
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub reveal: RevealArgs,

    /// Drive the Linux filesystem is mounted as on Windows (overrides settings)
    #[arg(long, global = true, value_name = "DRIVE")]
    pub mount_drive: Option<String>,

    /// Log to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Open Explorer with the file selected (default)
    Reveal(RevealArgs),

    /// Print the Windows path Explorer would be given
    Translate { path: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RevealArgs {
    /// File to reveal
    pub path: Option<PathBuf>,

    /// Document the editor has open, used when no path is given
    #[arg(long, value_name = "PATH")]
    pub active_document: Option<PathBuf>,
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command.unwrap_or(Command::Reveal(self.reveal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_path_reveals() {
        let cli = Cli::try_parse_from(["reveal-explorer", "/home/me/a.txt"]).unwrap();
        match cli.into_command() {
            Command::Reveal(args) => {
                assert_eq!(args.path, Some(PathBuf::from("/home/me/a.txt")));
                assert_eq!(args.active_document, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_no_arguments_reveals_nothing_explicit() {
        let cli = Cli::try_parse_from(["reveal-explorer"]).unwrap();
        match cli.into_command() {
            Command::Reveal(args) => assert_eq!(args.path, None),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_reveal_subcommand_with_active_document() {
        let cli = Cli::try_parse_from([
            "reveal-explorer",
            "reveal",
            "--active-document",
            "/mnt/c/a.txt",
            "--mount-drive",
            "Y",
        ])
        .unwrap();
        assert_eq!(cli.mount_drive.as_deref(), Some("Y"));
        match cli.into_command() {
            Command::Reveal(args) => {
                assert_eq!(args.path, None);
                assert_eq!(args.active_document, Some(PathBuf::from("/mnt/c/a.txt")));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_translate_subcommand() {
        let cli = Cli::try_parse_from(["reveal-explorer", "translate", "-v", "/home/me"]).unwrap();
        assert!(cli.verbose);
        match cli.into_command() {
            Command::Translate { path } => assert_eq!(path, "/home/me"),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
