use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the log directory
///
/// Resolution order:
/// 1. Custom directory from parameter (if provided)
/// 2. RADIO_READ_LOG_DIR environment variable
/// 3. Per-user data directory
/// 4. Temp directory as last resort
pub fn get_log_directory(custom_dir: Option<&str>) -> Result<PathBuf, std::io::Error> {
    if let Some(dir) = custom_dir {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    if let Ok(dir) = env::var("RADIO_READ_LOG_DIR") {
        return ensure_directory_exists(PathBuf::from(dir));
    }

    ensure_directory_exists(default_log_dir())
}

fn default_log_dir() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        let path = data_dir.join("radio-read").join("logs");
        if is_writable(&path) || can_create(&path) {
            return path;
        }
    }

    env::temp_dir().join("radio_read_logs")
}

/// Check if a directory is writable
fn is_writable(path: &Path) -> bool {
    if !path.exists() {
        return false;
    }
    let test_file = path.join(".write_test");
    fs::write(&test_file, "test").is_ok() && {
        let _ = fs::remove_file(&test_file);
        true
    }
}

/// Check if we can create a directory
fn can_create(path: &Path) -> bool {
    if path.exists() {
        return is_writable(path);
    }
    match path.parent() {
        Some(parent) if parent.exists() => is_writable(parent),
        Some(parent) => can_create(parent),
        None => false,
    }
}

fn ensure_directory_exists(path: PathBuf) -> Result<PathBuf, std::io::Error> {
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory_exists() {
        let temp_dir = TempDir::new().unwrap();
        let log_dir = temp_dir.path().join("nested").join("logs");

        let result = ensure_directory_exists(log_dir.clone());
        assert!(result.is_ok());
        assert!(log_dir.exists());
    }

    #[test]
    fn test_is_writable() {
        let temp_dir = TempDir::new().unwrap();
        assert!(is_writable(temp_dir.path()));
        assert!(!is_writable(&temp_dir.path().join("missing")));
    }

    #[test]
    fn test_can_create_under_writable_parent() {
        let temp_dir = TempDir::new().unwrap();
        assert!(can_create(&temp_dir.path().join("a").join("b")));
    }

    #[test]
    fn test_custom_directory_override() {
        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("custom_logs");

        let result = get_log_directory(Some(custom_path.to_str().unwrap()));
        assert_eq!(result.unwrap(), custom_path);
        assert!(custom_path.exists());
    }
}
