//! Unified error types for cforge generation.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while scaffolding a project.
#[derive(Error, Debug)]
pub enum CforgeError {
    /// The program stem was empty.
    #[error("program name must not be empty")]
    EmptyStem,

    /// Attempted to scaffold into a directory that already exists.
    #[error("project directory already exists: {0}")]
    ProjectExists(PathBuf),

    /// Writing a generated artifact to disk failed.
    #[error("failed to write {path}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Handlebars template rendering failed (invalid template or missing variables).
    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, CforgeError>`.
pub type Result<T> = std::result::Result<T, CforgeError>;
