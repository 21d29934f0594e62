//! The publishing collaborator: copies tagged stub groups into a project.
//!
//! Overwrite-vs-skip policy for existing files lives here, not in the
//! commands that call it.

pub mod stubs;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single request to publish one tagged asset group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishRequest {
    pub tag: String,
    /// Overwrite files that already exist at the destination
    pub force: bool,
}

/// What a publisher did with a request. Callers trust this without
/// re-checking the filesystem.
#[derive(Debug, Default)]
pub struct PublishReport {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Errors a publisher can raise. Commands never intercept these; they
/// surface through the CLI's default error presentation.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("no stub group is registered under tag '{0}'")]
    UnknownTag(String),

    #[error("failed to write {path}")]
    Unwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The boundary commands publish through.
pub trait Publisher {
    fn publish(&self, request: &PublishRequest) -> Result<PublishReport, PublishError>;
}

/// Publishes embedded stub groups into a target directory.
pub struct StubPublisher {
    target_root: PathBuf,
}

impl StubPublisher {
    pub fn new(target_root: impl AsRef<Path>) -> Self {
        Self {
            target_root: target_root.as_ref().to_path_buf(),
        }
    }
}

impl Publisher for StubPublisher {
    fn publish(&self, request: &PublishRequest) -> Result<PublishReport, PublishError> {
        let files = stubs::group(&request.tag)
            .ok_or_else(|| PublishError::UnknownTag(request.tag.clone()))?;

        let mut report = PublishReport::default();
        for stub in files {
            let dest = self.target_root.join(stub.relative_path);

            if dest.exists() && !request.force {
                report.skipped.push(dest);
                continue;
            }

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|source| PublishError::Unwritable {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            fs::write(&dest, stub.contents).map_err(|source| PublishError::Unwritable {
                path: dest.clone(),
                source,
            })?;
            report.written.push(dest);
        }

        Ok(report)
    }
}
