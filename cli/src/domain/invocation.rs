//! Argument-vector builders for every external invocation.
//!
//! Builders are pure: they take the instance and the deployment config and
//! return the exact `program` + `args` that will be executed. Nothing here
//! is ever passed through a shell, so slug and path values cannot inject
//! extra arguments.

use std::fmt;
use std::path::Path;

use botfleet_common::Instance;

use crate::domain::config::OrchestratorConfig;
use crate::domain::naming::{ContainerNames, pairlist_container_name};

// ── Fixed runtime contract ───────────────────────────────────────────────────
// These paths and ports are baked into the core and UI images.

pub const HOST_LOCALTIME: &str = "/etc/localtime";
pub const CORE_CONFIG_PATH: &str = "/freqtrade/config.json";
pub const CORE_LOG_PATH: &str = "/freqtrade/freqtrade.log";
pub const CORE_STRATEGY_DIR: &str = "/freqtrade";
pub const CORE_STRATEGY_PATH: &str = "/freqtrade/strategy.py";
pub const CORE_USER_DATA_DIR: &str = "/freqtrade/user_data";
pub const CORE_DB_DRY_RUN_PATH: &str = "/freqtrade/tradesv3.dryrun.sqlite";
pub const CORE_DB_PRODUCTION_PATH: &str = "/freqtrade/tradesv3.sqlite";
pub const CORE_API_PORT: u16 = 8080;
pub const UI_HTTP_PORT: u16 = 80;
pub const UI_ENTRYPOINT_PATH: &str = "/docker-entrypoint.d/100-ui-instance-entrypoint.sh";
pub const SCRAPER_ENTRY_PATH: &str = "/app/index.js";

pub const PORT_SCRIPT: &str = "scripts/generate-random-available-port.sh";
pub const PAIRLIST_SCRIPT: &str = "scrap-instance-config-pairlist.js";
pub const UI_ENTRYPOINT_SCRIPT: &str = "ui-instance-entrypoint.sh";

pub const ENV_PAIRLIST_STAKE: &str = "TRADING_BOT_INSTANCE_CONFIG_PAIR";
pub const ENV_UI_API_PORT: &str = "TRADING_BOT_API_PORT";
pub const ENV_UI_DOMAIN: &str = "TRADING_BOT_DOMAIN";

// ── Invocation ───────────────────────────────────────────────────────────────

/// One external command: a program and its argument vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    fn volume(self, host: impl fmt::Display, target: &str, mode: &str) -> Self {
        self.arg("--volume").arg(format!("{host}:{target}:{mode}"))
    }

    fn env(self, key: &str, value: impl fmt::Display) -> Self {
        self.arg("-e").arg(format!("{key}={value}"))
    }

    /// Borrow the arguments as `&str`, the shape `CommandRunner` takes.
    #[must_use]
    pub fn arg_refs(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

// ── Builders ─────────────────────────────────────────────────────────────────

/// `sh <project_dir>/scripts/generate-random-available-port.sh`
#[must_use]
pub fn allocate_port(config: &OrchestratorConfig) -> Invocation {
    Invocation::new("sh").arg(path_arg(&config.project_dir.join(PORT_SCRIPT)))
}

/// One-shot scraper container printing a JSON array of pairs.
#[must_use]
pub fn scrape_pairlist(instance: &Instance, config: &OrchestratorConfig) -> Invocation {
    Invocation::new(&config.runtime)
        .args(["run", "--rm", "--name"])
        .arg(pairlist_container_name(&instance.slug))
        .env(ENV_PAIRLIST_STAKE, &instance.config.stake_currency)
        .arg("-v")
        .arg(format!(
            "{}:{SCRAPER_ENTRY_PATH}",
            config.scripts_dir.join(PAIRLIST_SCRIPT).display()
        ))
        .arg(&config.images.scraper)
}

/// Detached, auto-restarting trading engine container.
#[must_use]
pub fn run_core(instance: &Instance, config: &OrchestratorConfig) -> Invocation {
    let names = ContainerNames::for_instance(instance);
    let files = &instance.files.host;
    let strategy_file = config
        .host_manager_dir
        .join("strategies")
        .join(format!("{}.py", instance.strategy));

    detached_run(&config.runtime, &names.core)
        .volume(HOST_LOCALTIME, HOST_LOCALTIME, "ro")
        .volume(files.config.display(), CORE_CONFIG_PATH, "ro")
        .volume(strategy_file.display(), CORE_STRATEGY_PATH, "ro")
        .volume(files.logs.display(), CORE_LOG_PATH, "rw")
        .volume(
            instance.directories.host.data.display(),
            CORE_USER_DATA_DIR,
            "rw",
        )
        .volume(files.db_dry_run.display(), CORE_DB_DRY_RUN_PATH, "rw")
        .volume(files.db_production.display(), CORE_DB_PRODUCTION_PATH, "rw")
        .arg("--publish")
        .arg(format!(
            "{}:{CORE_API_PORT}/tcp",
            instance.parameters.ports.api
        ))
        .arg(&config.images.core)
        .args(["trade", "--config", CORE_CONFIG_PATH])
        .args(["--logfile", CORE_LOG_PATH])
        .args(["--strategy-path", CORE_STRATEGY_DIR])
        .arg("--strategy")
        .arg(&instance.strategy)
}

/// Detached, auto-restarting UI companion container.
#[must_use]
pub fn run_ui(instance: &Instance, config: &OrchestratorConfig) -> Invocation {
    let names = ContainerNames::for_instance(instance);

    detached_run(&config.runtime, &names.ui)
        .env(ENV_UI_API_PORT, instance.parameters.ports.api)
        .env(ENV_UI_DOMAIN, &config.domain)
        .volume(HOST_LOCALTIME, HOST_LOCALTIME, "ro")
        .volume(
            config.scripts_dir.join(UI_ENTRYPOINT_SCRIPT).display(),
            UI_ENTRYPOINT_PATH,
            "ro",
        )
        .arg("--publish")
        .arg(format!("{}:{UI_HTTP_PORT}/tcp", instance.parameters.ports.ui))
        .arg(&config.images.ui)
}

/// `<runtime> kill <name>`
#[must_use]
pub fn kill(config: &OrchestratorConfig, container: &str) -> Invocation {
    Invocation::new(&config.runtime).arg("kill").arg(container)
}

/// `<runtime> rm <name>`
#[must_use]
pub fn remove(config: &OrchestratorConfig, container: &str) -> Invocation {
    Invocation::new(&config.runtime).arg("rm").arg(container)
}

/// `<runtime> ps -q -f name=^<name>$`
///
/// The name filter is a regex in the runtime, so it is anchored to keep
/// `trading-bot-foo-core` from matching `trading-bot-foo-core-core`.
#[must_use]
pub fn find_running(config: &OrchestratorConfig, container: &str) -> Invocation {
    Invocation::new(&config.runtime)
        .args(["ps", "-q", "-f"])
        .arg(format!("name=^{container}$"))
}

fn detached_run(runtime: &str, name: &str) -> Invocation {
    Invocation::new(runtime)
        .args(["run", "--name", name, "--detach", "--restart=always"])
}

fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
