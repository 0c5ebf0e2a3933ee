use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

use crate::utils::ffi_bindings::HEADER_FILE;

/// Environment variable overriding where the C header is written
pub const HEADER_PATH_KEY: &str = "GREETBRIDGE_HEADER";

/// Environment variable overriding the project directory
pub const PROJECT_DIR_KEY: &str = "GREETBRIDGE_DIR";

/// Where header generation reads from and writes to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderConfig {
    pub ffi_dir: PathBuf,
    pub output: PathBuf,
}

/// Load `.env` from the current directory or its parents, if there is one
pub fn load_dotenv() {
    // A missing .env is the common case
    let _ = dotenv::dotenv();
}

pub fn find_project_dir() -> Result<PathBuf> {
    let start = env::current_dir().context("Failed to read current directory")?;
    Ok(project_dir_for(env::var(PROJECT_DIR_KEY).ok(), &start))
}

fn project_dir_for(override_dir: Option<String>, start: &Path) -> PathBuf {
    // Check for environment variable override (blank counts as unset)
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return PathBuf::from(dir);
    }

    // Walk up until a directory holding src/ffi is found
    let mut current = start.to_path_buf();
    loop {
        if current.join("src").join("ffi").is_dir() {
            return current;
        }
        if !current.pop() {
            break;
        }
    }

    // Fallback: use the start directory
    start.to_path_buf()
}

/// Resolve the header settings: flag first, then GREETBRIDGE_HEADER, then include/greetbridge.h
pub fn resolve_header_config(output: Option<&Path>) -> Result<HeaderConfig> {
    let project_dir = find_project_dir()?;
    Ok(header_config_for(
        &project_dir,
        output,
        env::var(HEADER_PATH_KEY).ok(),
    ))
}

fn header_config_for(
    project_dir: &Path,
    flag: Option<&Path>,
    env_value: Option<String>,
) -> HeaderConfig {
    let output = match (flag, env_value) {
        (Some(path), _) => path.to_path_buf(),
        (None, Some(value)) if !value.trim().is_empty() => PathBuf::from(value),
        _ => project_dir.join("include").join(HEADER_FILE),
    };

    HeaderConfig {
        ffi_dir: project_dir.join("src").join("ffi"),
        output,
    }
}
