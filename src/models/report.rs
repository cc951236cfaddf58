use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::models::project::Project;
use crate::utils::error::StackgenError;

/// One step of a scaffold run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaffoldStep {
    Directories,
    BuildManifest,
    ServerEntrypoint,
    Placeholders,
    ComposeManifest,
    Readme,
    FrontendBootstrap,
}

impl ScaffoldStep {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Directories => "directories",
            Self::BuildManifest => "build_manifest",
            Self::ServerEntrypoint => "server_entrypoint",
            Self::Placeholders => "placeholders",
            Self::ComposeManifest => "compose_manifest",
            Self::Readme => "readme",
            Self::FrontendBootstrap => "frontend_bootstrap",
        }
    }
}

impl fmt::Display for ScaffoldStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a scaffold run: which steps completed and where it stopped.
///
/// A failed run leaves the partial tree on disk; the report is the
/// caller's only signal distinguishing a full tree from a partial one.
#[derive(Debug, Clone, Serialize)]
pub struct ScaffoldReport {
    pub project_name: String,
    pub root: PathBuf,
    pub completed_steps: Vec<ScaffoldStep>,
    pub failed_step: Option<ScaffoldStep>,
    pub error: Option<String>,
}

impl ScaffoldReport {
    pub fn new(project: &Project) -> Self {
        Self {
            project_name: project.name().to_string(),
            root: project.root().to_path_buf(),
            completed_steps: Vec::new(),
            failed_step: None,
            error: None,
        }
    }

    pub fn complete(&mut self, step: ScaffoldStep) {
        self.completed_steps.push(step);
    }

    pub fn fail(&mut self, step: ScaffoldStep, err: &StackgenError) {
        self.failed_step = Some(step);
        self.error = Some(err.to_string());
    }

    pub fn is_complete(&self) -> bool {
        self.failed_step.is_none()
    }

    pub fn status(&self) -> &'static str {
        if self.is_complete() {
            "success"
        } else {
            "partial"
        }
    }
}
