mod commands;
mod environment;
mod paths;
mod wsl;

pub use commands::HideWindow;
pub use environment::Platform;
pub use paths::AppPaths;
pub use wsl::{find_path_helper, wsl_distro_name};
