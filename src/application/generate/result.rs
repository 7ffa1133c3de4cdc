//! Generate Result

use std::path::Path;

use crate::domain::entities::GeneratedArtifact;

/// How a generation run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// The file was (re)written
    Written(GeneratedArtifact),
    /// The output was already newer than every source
    UpToDate { path: std::path::PathBuf },
    /// Rendered only (`dry_run`)
    DryRun(GeneratedArtifact),
}

impl GenerateOutcome {
    /// Destination path of the generated file
    pub fn path(&self) -> &Path {
        match self {
            GenerateOutcome::Written(artifact) | GenerateOutcome::DryRun(artifact) => {
                artifact.path()
            }
            GenerateOutcome::UpToDate { path } => path,
        }
    }

    /// The rendered artifact, unless the run was skipped
    pub fn artifact(&self) -> Option<&GeneratedArtifact> {
        match self {
            GenerateOutcome::Written(artifact) | GenerateOutcome::DryRun(artifact) => {
                Some(artifact)
            }
            GenerateOutcome::UpToDate { .. } => None,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, GenerateOutcome::Written(_))
    }
}
