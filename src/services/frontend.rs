// Frontend toolchain bootstrap (bun + Vite + Tailwind)

use std::path::Path;
use std::process::{Command, Stdio};

use crate::services::templates::{INDEX_CSS, TAILWIND_CONFIG};
use crate::utils::error::{Result, StackgenError};

/// Capability interface for setting up the client-side build toolchain.
///
/// The production implementation shells out to an external package
/// manager; tests substitute a stub so no real process is spawned.
pub trait FrontendBootstrapper {
    /// Scaffold and configure the frontend application under `static_dir`
    fn bootstrap(&self, static_dir: &Path) -> Result<()>;
}

/// Bootstrapper backed by the `bun` package manager and its `bunx` runner.
///
/// Both executables are assumed present on the search path; there is no
/// presence check, no version pinning and no fallback package manager.
#[derive(Debug, Clone, Copy, Default)]
pub struct BunBootstrapper;

impl BunBootstrapper {
    pub fn new() -> Self {
        Self
    }

    /// Run one external invocation, sharing our stdio streams so the
    /// package manager's own progress output reaches the user directly.
    fn run_tool(&self, dir: &Path, program: &str, args: &[&str]) -> Result<()> {
        let status = Command::new(program)
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| {
                StackgenError::ExecutionError(format!(
                    "failed to start {}: {} (is it installed and on PATH?)",
                    program, e
                ))
            })?;

        if !status.success() {
            return Err(StackgenError::ExecutionError(format!(
                "{} {} failed with {}",
                program,
                args.join(" "),
                status
            )));
        }

        Ok(())
    }
}

impl FrontendBootstrapper for BunBootstrapper {
    fn bootstrap(&self, static_dir: &Path) -> Result<()> {
        println!("Setting up frontend with bun + Vite + Tailwind...");

        let static_arg = static_dir.to_string_lossy().to_string();
        self.run_tool(
            Path::new("."),
            "bun",
            &["create", "vite", static_arg.as_str(), "--template", "react-ts"],
        )?;
        self.run_tool(static_dir, "bun", &["install"])?;
        self.run_tool(
            static_dir,
            "bun",
            &["add", "-d", "tailwindcss", "postcss", "autoprefixer"],
        )?;
        self.run_tool(static_dir, "bunx", &["tailwindcss", "init", "-p"])?;

        // tailwindcss init wrote its own config; replace it with ours
        std::fs::write(static_dir.join("tailwind.config.ts"), TAILWIND_CONFIG.fixed())?;

        let src_dir = static_dir.join("src");
        std::fs::create_dir_all(&src_dir)?;
        std::fs::write(src_dir.join("index.css"), INDEX_CSS.fixed())?;

        Ok(())
    }
}

/// Bootstrapper that does nothing; lets the generator run in tests
/// without bun installed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopBootstrapper;

impl FrontendBootstrapper for NoopBootstrapper {
    fn bootstrap(&self, _static_dir: &Path) -> Result<()> {
        Ok(())
    }
}
