//! Human-readable terminal renderer.

use std::path::Path;

use owo_colors::OwoColorize as _;

use crate::application::{InstanceStatus, LaunchedInstance};
use crate::domain::config::OrchestratorConfig;
use crate::domain::naming::ContainerNames;
use crate::infra::config::CONFIG_ENV;
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version information.
    pub fn render_version(&self, version: &str) {
        if !self.ctx.quiet {
            println!("botfleet {version}");
        }
    }

    /// Render the container names of an instance.
    ///
    /// Quiet mode prints the bare names, core first, one per line.
    pub fn render_names(&self, names: &ContainerNames) {
        if self.ctx.quiet {
            println!("{}\n{}", names.core, names.ui);
        } else {
            self.ctx.kv("Core:", &names.core);
            self.ctx.kv("UI:  ", &names.ui);
        }
    }

    /// Render an allocated port.
    ///
    /// Quiet mode prints the bare number so scripts can capture it.
    pub fn render_port(&self, port: u16) {
        if self.ctx.quiet {
            println!("{port}");
        } else {
            self.ctx.kv("Port:", &port.to_string());
        }
    }

    /// Render a pairlist, one pair per line. Empty lists get a warning.
    pub fn render_pairlist(&self, slug: &str, pairs: &[String]) {
        if pairs.is_empty() {
            self.ctx.warn(&format!("No pairs found for {slug}"));
            return;
        }
        for pair in pairs {
            println!("{pair}");
        }
    }

    pub fn render_launched(&self, slug: &str, names: &ContainerNames, launched: &LaunchedInstance) {
        self.ctx.kv("Core:", &format!("{} ({})", names.core, short_id(&launched.core)));
        match &launched.ui {
            Some(id) => self.ctx.kv("UI:  ", &format!("{} ({})", names.ui, short_id(id))),
            None => self.ctx.kv("UI:  ", "not started"),
        }
        self.ctx.success(&format!("{slug} launched"));
    }

    pub fn render_stopped(&self, slug: &str, containers: &[&str]) {
        for container in containers {
            self.ctx.info(&format!("Stopped {container}"));
        }
        self.ctx.success(&format!("{slug} stopped"));
    }

    /// Render liveness of both containers.
    pub fn render_status(&self, slug: &str, names: &ContainerNames, status: InstanceStatus) {
        self.ctx.header(&format!("Instance {slug}"));
        self.print_liveness(status.core, &names.core);
        self.print_liveness(status.ui, &names.ui);
    }

    /// Render the current configuration.
    pub fn render_config(&self, config: &OrchestratorConfig, path: &Path) {
        if self.ctx.quiet {
            return;
        }
        println!();
        println!(
            "  {}",
            format!("Configuration ({})", path.display()).style(self.ctx.styles.header)
        );
        println!();
        println!("  {:<22} {}", "runtime:", config.runtime);
        println!("  {:<22} {}", "domain:", config.domain);
        println!("  {:<22} {}", "project_dir:", config.project_dir.display());
        println!("  {:<22} {}", "host_manager_dir:", config.host_manager_dir.display());
        println!("  {:<22} {}", "scripts_dir:", config.scripts_dir.display());
        println!("  {:<22} {}", "images.core:", config.images.core);
        println!("  {:<22} {}", "images.ui:", config.images.ui);
        println!("  {:<22} {}", "images.scraper:", config.images.scraper);
        println!(
            "  {:<22} {}",
            "command_timeout_secs:",
            config
                .command_timeout_secs
                .map_or_else(|| "(none)".to_string(), |s| s.to_string())
        );
        println!();
        println!("  {}", "Environment:".style(self.ctx.styles.bold));
        for var in [CONFIG_ENV, "RUST_LOG", "NO_COLOR"] {
            println!(
                "    {:<20} {}",
                format!("{var}:"),
                std::env::var(var).unwrap_or_else(|_| "(not set)".to_string())
            );
        }
        println!();
    }

    fn print_liveness(&self, running: bool, container: &str) {
        if running {
            self.ctx.success(&format!("{container} running"));
        } else {
            self.ctx.warn(&format!("{container} not running"));
        }
    }
}

/// Shorten a container id to the 12 characters `docker ps` shows.
#[must_use]
pub fn short_id(id: &str) -> &str {
    id.get(..12).unwrap_or(id)
}
