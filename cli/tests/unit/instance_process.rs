//! Behaviour tests for `InstanceProcess` against a recording runner.

#![allow(clippy::expect_used)]

use botfleet_cli::application::{InstanceProcess, InstanceStatus};
use botfleet_cli::domain::config::OrchestratorConfig;
use botfleet_cli::domain::error::ProcessError;

use crate::mocks::{RecordingRunner, err_output, instance, ok_output, runs_container};

fn default_process(runner: RecordingRunner) -> InstanceProcess<RecordingRunner> {
    InstanceProcess::new(runner, OrchestratorConfig::default())
}

// ── launch ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn launch_without_ui_issues_one_invocation() {
    let runner = RecordingRunner::always_ok(b"abc123\n");
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    let launched = process
        .launch(&instance("alpha"), false)
        .await
        .expect("launch");

    assert_eq!(launched.core, "abc123");
    assert_eq!(launched.ui, None);
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert!(runs_container(&calls[0], "trading-bot-alpha-core"));
}

#[tokio::test]
async fn launch_with_ui_starts_core_then_ui() {
    let runner = RecordingRunner::new(|call| {
        if runs_container(call, "trading-bot-alpha-core") {
            Ok(ok_output(b"core-id\n"))
        } else {
            Ok(ok_output(b"ui-id\n"))
        }
    });
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    let launched = process
        .launch(&instance("alpha"), true)
        .await
        .expect("launch");

    assert_eq!(launched.core, "core-id");
    assert_eq!(launched.ui.as_deref(), Some("ui-id"));
    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert!(runs_container(&calls[0], "trading-bot-alpha-core"));
    assert!(runs_container(&calls[1], "trading-bot-alpha-ui"));
}

#[tokio::test]
async fn ui_failure_keeps_core_id() {
    let runner = RecordingRunner::new(|call| {
        if runs_container(call, "trading-bot-alpha-ui") {
            Ok(err_output(b"port is already allocated"))
        } else {
            Ok(ok_output(b"core-id\n"))
        }
    });
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    let launched = process
        .launch(&instance("alpha"), true)
        .await
        .expect("core succeeded, so launch succeeds");

    assert_eq!(launched.core, "core-id");
    assert_eq!(launched.ui, None);
}

#[tokio::test]
async fn core_failure_skips_ui() {
    let runner = RecordingRunner::new(|_| Ok(err_output(b"Conflict. The container name is in use")));
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    let err = process
        .launch(&instance("alpha"), true)
        .await
        .expect_err("core failure must propagate");

    match err {
        ProcessError::Failed {
            code, diagnostics, ..
        } => {
            assert_eq!(code, Some(1));
            assert!(diagnostics.contains("Conflict"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(runner.calls().len(), 1, "UI must not be attempted");
}

#[tokio::test]
async fn launch_core_trims_container_id() {
    let process = default_process(RecordingRunner::always_ok(b"  abc123\n\n"));
    let id = process
        .launch_core(&instance("alpha"))
        .await
        .expect("launch core");
    assert_eq!(id, "abc123");
}

#[tokio::test]
async fn launch_ui_spawn_failure_is_absent() {
    let process = default_process(RecordingRunner::new(|_| anyhow::bail!("No such file or directory")));
    assert_eq!(process.launch_ui(&instance("alpha")).await, None);
}

// ── stop ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stop_attempts_every_invocation_when_core_kill_fails() {
    let runner = RecordingRunner::new(|call| {
        if call[1] == "kill" && call[2] == "trading-bot-alpha-core" {
            Ok(err_output(b"No such container"))
        } else {
            Ok(ok_output(b""))
        }
    });
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    process.stop(&instance("alpha")).await;

    let mut calls: Vec<String> = runner.calls().iter().map(|c| c[1..].join(" ")).collect();
    calls.sort();
    assert_eq!(
        calls,
        [
            "kill trading-bot-alpha-core",
            "kill trading-bot-alpha-ui",
            "rm trading-bot-alpha-core",
            "rm trading-bot-alpha-ui",
        ]
    );
}

#[tokio::test]
async fn stop_core_kills_before_removing() {
    let runner = RecordingRunner::always_ok(b"");
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    process.stop_core(&instance("alpha")).await;

    let calls = runner.calls();
    assert_eq!(calls[0], ["docker", "kill", "trading-bot-alpha-core"]);
    assert_eq!(calls[1], ["docker", "rm", "trading-bot-alpha-core"]);
    assert!(runner.calls_to("kill").iter().all(|c| c[2].ends_with("-core")));
}

#[tokio::test]
async fn stop_ui_survives_missing_runtime() {
    let runner = RecordingRunner::new(|_| anyhow::bail!("failed to spawn docker"));
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    process.stop_ui(&instance("alpha")).await;
    assert_eq!(runner.calls_to("rm").len(), 1);
}

// ── liveness ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn running_when_ps_prints_an_id() {
    let process = default_process(RecordingRunner::always_ok(b"4f1c2b7a9e0d\n"));
    assert!(process.is_core_running(&instance("alpha")).await.expect("query"));
}

#[tokio::test]
async fn not_running_when_ps_prints_nothing() {
    let process = default_process(RecordingRunner::always_ok(b"\n"));
    assert!(!process.is_ui_running(&instance("alpha")).await.expect("query"));
}

#[tokio::test]
async fn liveness_query_failure_is_an_error() {
    let process = default_process(RecordingRunner::new(|_| {
        Ok(err_output(b"Cannot connect to the Docker daemon"))
    }));
    let err = process
        .is_core_running(&instance("alpha"))
        .await
        .expect_err("query failure must propagate");
    assert_eq!(err.code(), "PROCESS_FAILED");
}

#[tokio::test]
async fn status_reports_each_container() {
    let runner = RecordingRunner::new(|call| {
        if call.last().is_some_and(|f| f == "name=^trading-bot-alpha-core$") {
            Ok(ok_output(b"abc\n"))
        } else {
            Ok(ok_output(b""))
        }
    });
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    let status = process.status(&instance("alpha")).await.expect("status");
    assert_eq!(status, InstanceStatus { core: true, ui: false });
    assert_eq!(runner.calls_to("ps").len(), 2);
}

// ── derived data ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn allocate_port_parses_script_output() {
    let runner = RecordingRunner::always_ok(b"40123\n");
    let process = InstanceProcess::new(&runner, OrchestratorConfig::default());
    assert_eq!(process.allocate_port().await.expect("port"), 40123);
    assert_eq!(
        runner.calls(),
        [[
            "sh",
            "/opt/freqtrade-manager/scripts/generate-random-available-port.sh"
        ]]
    );
}

#[tokio::test]
async fn fetch_pairlist_failure_is_empty() {
    let process = default_process(RecordingRunner::new(|_| Ok(err_output(b"net::ERR_NAME_NOT_RESOLVED"))));
    assert!(process.fetch_pairlist(&instance("alpha"), 50).await.is_empty());
}
