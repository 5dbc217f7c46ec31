use thiserror::Error;

#[derive(Error, Debug)]
pub enum RevealError {
    #[error("No file is currently selected or open.")]
    NoPath,

    #[error("Reveal in Explorer is only supported on Windows and WSL environments (detected: {os}).")]
    UnsupportedPlatform { os: String },

    #[error("Failed to execute `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}
