use std::path::PathBuf;

use fontia_read::ReadError;
use thiserror::Error;

/// An error that occurs while loading a [`Font`](crate::Font).
#[derive(Debug, Error)]
pub enum FontError {
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error reading font data: {0}")]
    Read(#[from] ReadError),
}

#[cfg(test)]
mod tests {
    use fontia_read::types::Tag;

    use super::*;

    #[test]
    fn read_errors_convert() {
        let err: FontError = ReadError::TableNotFound(Tag::new(b"name")).into();
        assert_eq!(
            err.to_string(),
            "Error reading font data: the 'name' table is missing"
        );
        assert!(matches!(
            err,
            FontError::Read(ReadError::TableNotFound(tag)) if tag == Tag::new(b"name")
        ));
    }

    #[test]
    fn io_errors_name_the_file() {
        let err = FontError::Io {
            path: PathBuf::from("missing.ttf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.to_string().starts_with("Failed to read 'missing.ttf'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
