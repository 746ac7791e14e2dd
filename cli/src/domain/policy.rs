//! Failure policy of every orchestrator operation.
//!
//! Operations that gate correctness (a usable port, a started core, a
//! liveness fact) are strict. Advisory or optional ones fall back to a
//! default, and stops never report failure at all.

use std::fmt;

/// How an operation reacts when its external invocation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Return a `ProcessError` to the caller.
    Strict,
    /// Log the failure and return a default value.
    Lenient,
    /// Log the failure and complete normally; there is no value to default.
    BestEffort,
}

/// Every external-invocation-backed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AllocatePort,
    FetchPairlist,
    LaunchCore,
    LaunchUi,
    StopCore,
    StopUi,
    QueryCore,
    QueryUi,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::AllocatePort,
        Operation::FetchPairlist,
        Operation::LaunchCore,
        Operation::LaunchUi,
        Operation::StopCore,
        Operation::StopUi,
        Operation::QueryCore,
        Operation::QueryUi,
    ];

    #[must_use]
    pub const fn policy(self) -> FailurePolicy {
        match self {
            Operation::AllocatePort
            | Operation::LaunchCore
            | Operation::QueryCore
            | Operation::QueryUi => FailurePolicy::Strict,
            Operation::FetchPairlist | Operation::LaunchUi => FailurePolicy::Lenient,
            Operation::StopCore | Operation::StopUi => FailurePolicy::BestEffort,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::AllocatePort => "allocate-port",
            Operation::FetchPairlist => "fetch-pairlist",
            Operation::LaunchCore => "launch-core",
            Operation::LaunchUi => "launch-ui",
            Operation::StopCore => "stop-core",
            Operation::StopUi => "stop-ui",
            Operation::QueryCore => "query-core",
            Operation::QueryUi => "query-ui",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
