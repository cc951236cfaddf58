use clap::Args;
use serde_json::json;

use crate::models::project::Project;
use crate::services::generator::Generator;
use crate::utils::error::{Result, StackgenError};
use crate::utils::validation::validate_project_name;

/// Scaffold a new project directory
#[derive(Debug, Args)]
pub struct InitCommand {
    /// Project name, used verbatim as the directory name
    pub name: String,

    /// Output JSON instead of human-readable text
    #[arg(long)]
    pub json: bool,
}

impl InitCommand {
    /// Execute the init command
    pub async fn run(&self) -> Result<()> {
        self.run_with_generator(&Generator::new()).await
    }

    /// Scaffold with an explicit generator (tests inject a stub bootstrapper)
    pub async fn run_with_generator(&self, generator: &Generator) -> Result<()> {
        // Rejecting bad names here keeps them out of the file system and
        // out of the generated manifests alike
        validate_project_name(&self.name)?;

        let project = Project::new(&self.name);
        let report = generator.scaffold(&project).await;

        if self.json {
            let response = json!({
                "status": report.status(),
                "project_name": &report.project_name,
                "root": &report.root,
                "completed_steps": &report.completed_steps,
                "failed_step": &report.failed_step,
                "error": &report.error,
            });

            println!(
                "{}",
                serde_json::to_string_pretty(&response).map_err(|e| {
                    StackgenError::ExecutionError(format!("JSON serialization error: {}", e))
                })?
            );
        }

        if let Some(step) = report.failed_step {
            let detail = report
                .error
                .clone()
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(StackgenError::ExecutionError(format!(
                "scaffolding '{}' failed at step '{}': {}\n\nA partial tree may be left at ./{} - inspect or remove it before retrying.",
                self.name, step, detail, self.name
            )));
        }

        if !self.json {
            println!("Scaffolded project {} at ./{}", self.name, self.name);
            println!("\nNext steps:");
            println!("  cd {}", self.name);
            println!("  docker compose up -d");
            println!("  go run ./cmd/web");
        }

        Ok(())
    }
}
