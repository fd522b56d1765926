use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to write {}: {source}", .path.display())]
    WriteImage {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("{program} exited with {}: {stderr}", describe_code(.code))]
    Packaging {
        program: String,
        code: Option<i32>,
        stderr: String,
    },

    #[error("{program} succeeded but {} was not created", .path.display())]
    MissingOutput { program: String, path: PathBuf },

    #[error("usage: {0}")]
    Usage(String),
}

fn describe_code(code: &Option<i32>) -> String {
    match code {
        Some(c) => format!("status {}", c),
        None => "no status (terminated by signal)".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packaging_message_includes_stderr() {
        let err = IconError::Packaging {
            program: "iconutil".into(),
            code: Some(1),
            stderr: "Invalid Iconset.".into(),
        };
        assert_eq!(err.to_string(), "iconutil exited with status 1: Invalid Iconset.");
    }

    #[test]
    fn test_signal_termination_message() {
        let err = IconError::Packaging {
            program: "iconutil".into(),
            code: None,
            stderr: String::new(),
        };
        assert!(err.to_string().contains("terminated by signal"));
    }
}
