//! Project directory creation and artifact writing.
//!
//! [`generate`] is the whole run: create `<working_dir>/<stem>`, render each
//! planned artifact, write it verbatim. The directory must not already
//! exist; any failure aborts immediately, and artifacts written before a
//! failing step stay on disk (no rollback, no retries).

use std::path::{Path, PathBuf};

use crate::artifacts;
use crate::error::{CforgeError, Result};
use crate::request::GenerationRequest;
use crate::templates::renderer::TemplateRenderer;

/// Create the project directory. Fails if it already exists.
pub fn create_project_dir(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        return Err(CforgeError::ProjectExists(project_dir.to_path_buf()));
    }
    std::fs::create_dir_all(project_dir)?;
    Ok(())
}

/// Write one artifact's contents verbatim.
pub fn write_artifact(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents).map_err(|source| CforgeError::WriteArtifact {
        path: path.to_path_buf(),
        source,
    })
}

/// Run a full generation. Returns the written paths, in generation order.
pub fn generate(request: &GenerationRequest, working_dir: &Path) -> Result<Vec<PathBuf>> {
    if request.stem.is_empty() {
        return Err(CforgeError::EmptyStem);
    }

    let project_dir = working_dir.join(&request.stem);
    create_project_dir(&project_dir)?;

    let renderer = TemplateRenderer::new();
    let mut written = Vec::new();
    for kind in artifacts::plan(request) {
        let contents = artifacts::render(kind, request, &renderer)?;
        let path = project_dir.join(kind.file_name(&request.stem));
        write_artifact(&path, &contents)?;
        tracing::debug!(path = %path.display(), "wrote artifact");
        written.push(path);
    }
    Ok(written)
}
