//! Path utilities: expand ~ and validate user-supplied output paths.

use crate::errors::{AppError, AppResult};
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Output files (exports, backups) must be given as absolute paths.
pub fn require_absolute(path: &str) -> AppResult<PathBuf> {
    let p = expand_tilde(path);
    if p.is_absolute() {
        Ok(p)
    } else {
        Err(AppError::Other(format!(
            "'{path}' is not an absolute path; please pass a full path"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_output_path_is_rejected() {
        assert!(require_absolute("out.xlsx").is_err());
        #[cfg(unix)]
        assert!(require_absolute("/tmp/out.xlsx").is_ok());
    }
}
