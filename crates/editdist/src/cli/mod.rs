pub mod batch;
pub mod completions;
pub mod config;
pub mod distance;
pub mod manpage;
pub mod similarity;
pub mod suggest;

use editdist_core::config::Config;

/// Effective config for the current working directory.
pub fn load_config() -> Config {
    let cwd = std::env::current_dir()
        .ok()
        .map(|p| p.display().to_string());
    Config::discover(cwd.as_deref())
}

/// Report an error on stderr and return the failure exit code.
pub fn fail(err: impl std::fmt::Display) -> i32 {
    eprintln!("editdist: {err}");
    1
}
