mod error;
mod reveal;
mod runner;
mod target;
mod translate;

pub use error::RevealError;
pub use reveal::{RevealCommand, RevealOutcome, Revealer};
pub use runner::{ProcessOutput, ProcessRunner, TokioRunner};
pub use target::current_file_path;
pub use translate::{MountDrive, PathTranslator, convert_wsl_path};
