use relative_path::{RelativePath, RelativePathBuf};

/// A saved assistant message with a relative path and display-friendly name
#[derive(Debug, Clone, PartialEq)]
pub struct MessageFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MessageFile {
    /// Create a new MessageFile from a relative path
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = Self::extract_display_name(&relative_path);
        Self {
            relative_path,
            display_name,
        }
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Get the display name: the relative path without its extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    fn extract_display_name(path: &RelativePath) -> String {
        if path.file_name().is_none() {
            return "Untitled".to_string();
        }
        path.with_extension("").as_str().to_string()
    }
}

impl From<&str> for MessageFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
