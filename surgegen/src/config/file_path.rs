use crate::config::FileError;
use std::fs;
use std::path::{Path, PathBuf};

pub(crate) fn test_or_create_path(path: &Path) -> Result<bool, FileError> {
    let mut current_path = PathBuf::new();
    let mut created = false;
    for comp in path.components() {
        current_path.push(comp);
        let io_error = |e| FileError::Io(current_path.to_string_lossy().to_string(), e);
        match current_path.try_exists() {
            Ok(true) => {}
            Ok(false) => {
                created = true;
                fs::create_dir(&current_path).map_err(io_error)?;
            }
            Err(e) => Err(io_error(e))?,
        }
    }
    Ok(created)
}

pub(crate) fn parse_profile_path(profile: &Option<PathBuf>) -> Result<PathBuf, FileError> {
    match profile {
        None => {
            let home = PathBuf::from(std::env::var("HOME")?);
            Ok(home.join(".config").join("surgegen").join("profile.json"))
        }
        Some(p) => Ok(p.clone()),
    }
}
