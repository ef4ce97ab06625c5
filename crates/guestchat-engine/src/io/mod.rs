use crate::models::MessageFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid transcripts directory: {0}")]
    InvalidTranscriptsDir(String),
}

/// Read a saved message and return its content
pub fn read_message(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Scan for message files whose extension is one of `extensions`.
///
/// Results are relative to `root` and sorted by path.
pub fn scan_message_files(root: &Path, extensions: &[String]) -> Result<Vec<MessageFile>, IoError> {
    validate_transcripts_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, extensions, &mut files)?;
    files.sort();

    let mut messages = Vec::with_capacity(files.len());
    for path in files {
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        match RelativePathBuf::from_path(relative) {
            Ok(relative) => messages.push(MessageFile::new(relative)),
            Err(e) => log::warn!("Skipping {}: {e}", path.display()),
        }
    }
    Ok(messages)
}

fn scan_directory_recursive(
    dir: &Path,
    extensions: &[String],
    files: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, extensions, files)?;
        } else if let Some(ext) = path.extension()
            && extensions.iter().any(|e| ext == e.as_str())
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_transcripts_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidTranscriptsDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_file, create_test_transcripts_dir};

    fn default_extensions() -> Vec<String> {
        vec!["txt".to_string(), "md".to_string()]
    }

    #[test]
    fn test_scan_and_load_files() {
        // Given a transcripts directory with saved messages
        let dir = create_test_transcripts_dir();
        create_test_file(&dir, "b.txt", "✅ Spa appointment booked");
        create_test_file(&dir, "a.md", "Hello");

        // When scanning for files
        let files = scan_message_files(dir.path(), &default_extensions()).unwrap();

        // Then we find both, sorted
        let names: Vec<_> = files.iter().map(|f| f.display_name()).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_scan_nested_directories() {
        let dir = create_test_transcripts_dir();
        create_test_file(&dir, "root.txt", "Hi");
        let sub_dir = dir.path().join("room-204");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("dinner.txt"), "Available Restaurants:").unwrap();

        let files = scan_message_files(dir.path(), &default_extensions()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(
            files
                .iter()
                .any(|f| f.relative_path().as_str() == "room-204/dinner.txt")
        );
    }

    #[test]
    fn test_ignore_other_extensions() {
        let dir = create_test_transcripts_dir();
        create_test_file(&dir, "message.txt", "Hi");
        create_test_file(&dir, "image.png", "fake image data");
        create_test_file(&dir, "export.json", "{}");

        let files = scan_message_files(dir.path(), &default_extensions()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].display_name(), "message");
    }

    #[test]
    fn test_custom_extensions() {
        let dir = create_test_transcripts_dir();
        create_test_file(&dir, "message.txt", "Hi");
        create_test_file(&dir, "export.log", "log line");

        let files = scan_message_files(dir.path(), &["log".to_string()]).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].display_name(), "export");
    }

    #[test]
    fn test_handle_invalid_directory() {
        let result = scan_message_files(Path::new("/this/path/does/not/exist"), &default_extensions());
        assert!(matches!(result, Err(IoError::InvalidTranscriptsDir(_))));
    }

    #[test]
    fn test_validate_transcripts_dir_exists() {
        let dir = create_test_transcripts_dir();
        assert!(validate_transcripts_dir(dir.path()).is_ok());
    }

    #[test]
    fn test_read_message_success() {
        let dir = create_test_transcripts_dir();
        create_test_file(&dir, "test.txt", "Hello, how can I help you today?");

        let content = read_message(RelativePath::new("test.txt"), dir.path()).unwrap();
        assert_eq!(content, "Hello, how can I help you today?");
    }

    #[test]
    fn test_read_message_not_found() {
        let dir = create_test_transcripts_dir();
        let result = read_message(RelativePath::new("missing.txt"), dir.path());
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }
}
