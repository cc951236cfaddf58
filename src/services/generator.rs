// Project generator: directory tree, backend boilerplate, frontend delegation

use std::collections::HashMap;

use crate::models::project::Project;
use crate::models::report::{ScaffoldReport, ScaffoldStep};
use crate::services::frontend::{BunBootstrapper, FrontendBootstrapper};
use crate::services::templates::{self, Template};
use crate::utils::error::Result;
use crate::utils::fs_utils;

/// Scaffolds a project tree and delegates frontend setup.
///
/// Steps run strictly in order with no branching; the only decision
/// anywhere is "this step succeeded / the run stops here".
pub struct Generator {
    bootstrapper: Box<dyn FrontendBootstrapper>,
}

impl Generator {
    /// Generator wired to the production bun bootstrapper
    pub fn new() -> Self {
        Self::with_bootstrapper(Box::new(BunBootstrapper::new()))
    }

    pub fn with_bootstrapper(bootstrapper: Box<dyn FrontendBootstrapper>) -> Self {
        Self { bootstrapper }
    }

    /// Run every scaffold step in order, stopping at the first failure.
    ///
    /// Never terminates the process and never cleans up: a failed run
    /// leaves the partial tree on disk and the report records how far
    /// the run got. The caller decides what a partial tree is worth.
    pub async fn scaffold(&self, project: &Project) -> ScaffoldReport {
        println!("Scaffolding project: {}", project.name());

        let mut report = ScaffoldReport::new(project);

        if let Err(err) = self.create_directories(project).await {
            report.fail(ScaffoldStep::Directories, &err);
            return report;
        }
        report.complete(ScaffoldStep::Directories);

        if let Err(err) = self.write_build_manifest(project).await {
            report.fail(ScaffoldStep::BuildManifest, &err);
            return report;
        }
        report.complete(ScaffoldStep::BuildManifest);

        if let Err(err) = self.write_server_entrypoint(project).await {
            report.fail(ScaffoldStep::ServerEntrypoint, &err);
            return report;
        }
        report.complete(ScaffoldStep::ServerEntrypoint);

        if let Err(err) = self.touch_placeholders(project).await {
            report.fail(ScaffoldStep::Placeholders, &err);
            return report;
        }
        report.complete(ScaffoldStep::Placeholders);

        if let Err(err) = self.write_compose_manifest(project).await {
            report.fail(ScaffoldStep::ComposeManifest, &err);
            return report;
        }
        report.complete(ScaffoldStep::ComposeManifest);

        if let Err(err) = self.write_readme(project).await {
            report.fail(ScaffoldStep::Readme, &err);
            return report;
        }
        report.complete(ScaffoldStep::Readme);

        if let Err(err) = self.bootstrap_frontend(project) {
            report.fail(ScaffoldStep::FrontendBootstrap, &err);
            return report;
        }
        report.complete(ScaffoldStep::FrontendBootstrap);

        report
    }

    /// The directory set must exist before any file beneath it is written
    async fn create_directories(&self, project: &Project) -> Result<()> {
        for dir in project.directories() {
            fs_utils::ensure_directory_exists(&dir).await?;
        }
        Ok(())
    }

    async fn write_build_manifest(&self, project: &Project) -> Result<()> {
        let content = render_named(&templates::GO_MOD, project.name())?;
        fs_utils::write_file(&project.join("go.mod"), &content).await
    }

    async fn write_server_entrypoint(&self, project: &Project) -> Result<()> {
        fs_utils::write_file(&project.join("cmd/web/main.go"), templates::MAIN_GO.fixed()).await
    }

    /// Zero-byte files the user fills in later
    async fn touch_placeholders(&self, project: &Project) -> Result<()> {
        fs_utils::touch(&project.join("cmd/web/handlers.go")).await?;
        fs_utils::touch(&project.join("sqlc.yaml")).await
    }

    async fn write_compose_manifest(&self, project: &Project) -> Result<()> {
        let content = render_named(&templates::DOCKER_COMPOSE, project.name())?;
        fs_utils::write_file(&project.join("docker-compose.yml"), &content).await
    }

    async fn write_readme(&self, project: &Project) -> Result<()> {
        let content = render_named(&templates::README, project.name())?;
        fs_utils::write_file(&project.join("README.md"), &content).await
    }

    fn bootstrap_frontend(&self, project: &Project) -> Result<()> {
        self.bootstrapper.bootstrap(&project.static_ui_dir())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

fn render_named(template: &Template, name: &str) -> Result<String> {
    let mut vars = HashMap::new();
    vars.insert("name", name);
    template.render(&vars)
}
