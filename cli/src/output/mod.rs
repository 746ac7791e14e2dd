//! Output formatting module

pub mod human;
pub mod json;
pub mod progress;
pub mod styles;

use std::path::Path;

use anyhow::Result;
use console::Term;
use owo_colors::OwoColorize as _;

pub use human::HumanRenderer;
pub use json::JsonRenderer;
pub use styles::Styles;

use crate::application::{InstanceStatus, LaunchedInstance};
use crate::domain::config::OrchestratorConfig;
use crate::domain::naming::ContainerNames;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// Print a success message prefixed with `✓`. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "✓".style(self.styles.success));
        }
    }

    /// Print a warning message prefixed with `⚠`. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "⚠".style(self.styles.warning));
        }
    }

    /// Print an error message prefixed with `✗` to stderr. Never suppressed.
    pub fn error(&self, msg: &str) {
        eprintln!("  {} {msg}", "✗".style(self.styles.error));
    }

    /// Print an info message prefixed with `ℹ`. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("  {} {msg}", "ℹ".style(self.styles.info));
        }
    }

    /// Print a section header. Suppressed when `quiet`.
    pub fn header(&self, msg: &str) {
        if !self.quiet {
            println!("  {}", msg.style(self.styles.header));
        }
    }

    /// Print a key-value pair with the key dimmed. Suppressed when `quiet`.
    pub fn kv(&self, key: &str, value: &str) {
        if !self.quiet {
            println!("  {}  {value}", key.style(self.styles.dim));
        }
    }
}

/// Output renderer selected by `--json`.
pub enum Renderer<'a> {
    /// Terminal output through an `OutputContext`.
    Human(HumanRenderer<'a>),
    /// One JSON object on stdout.
    Json(JsonRenderer),
}

impl Renderer<'_> {
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_names(&self, names: &ContainerNames) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_names(names);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_names(names),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_port(&self, port: u16) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_port(port);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_port(port),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_pairlist(&self, slug: &str, pairs: &[String]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_pairlist(slug, pairs);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_pairlist(slug, pairs),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_launched(
        &self,
        slug: &str,
        names: &ContainerNames,
        launched: &LaunchedInstance,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_launched(slug, names, launched);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_launched(slug, launched),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_stopped(&self, slug: &str, containers: &[&str]) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_stopped(slug, containers);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_stopped(slug, containers),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_status(
        &self,
        slug: &str,
        names: &ContainerNames,
        status: InstanceStatus,
    ) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_status(slug, names, status);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_status(slug, names, status),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_config(&self, config: &OrchestratorConfig, path: &Path) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_config(config, path);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_config(config, path),
        }
    }

    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn render_version(&self, version: &str) -> Result<()> {
        match self {
            Self::Human(r) => {
                r.render_version(version);
                Ok(())
            }
            Self::Json(_) => JsonRenderer::render_version(version),
        }
    }
}
