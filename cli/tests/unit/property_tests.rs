//! Property-based tests for naming and validation invariants.
//!
//! Uses `proptest` to verify invariants across many random inputs.

#![allow(clippy::expect_used)]

use proptest::prelude::*;

use botfleet_cli::domain::config::{OrchestratorConfig, validate_config_key, validate_config_value};
use botfleet_cli::domain::invocation;
use botfleet_cli::domain::naming::{ContainerNames, pairlist_container_name};
use botfleet_common::validate_slug;

use crate::mocks::instance;

fn slug() -> impl Strategy<Value = String> {
    "[a-z0-9]([a-z0-9-]{0,20}[a-z0-9])?"
}

proptest! {
    /// Core and UI names never collide for the same slug.
    #[test]
    fn prop_core_and_ui_names_differ(slug in slug()) {
        let names = ContainerNames::for_slug(&slug);
        prop_assert_ne!(&names.core, &names.ui);
        prop_assert_ne!(&names.core, &pairlist_container_name(&slug));
        prop_assert_ne!(&names.ui, &pairlist_container_name(&slug));
    }

    /// Names are a pure function of the slug.
    #[test]
    fn prop_names_are_stable(slug in slug()) {
        prop_assert_eq!(ContainerNames::for_slug(&slug), ContainerNames::for_slug(&slug));
    }

    /// Distinct slugs never share a core name.
    #[test]
    fn prop_distinct_slugs_distinct_names(a in slug(), b in slug()) {
        prop_assume!(a != b);
        prop_assert_ne!(ContainerNames::for_slug(&a).core, ContainerNames::for_slug(&b).core);
    }

    /// Every generated slug passes validation.
    #[test]
    fn prop_generated_slugs_validate(slug in slug()) {
        prop_assert!(validate_slug(&slug).is_ok());
    }

    /// Whatever the slug, the core invocation names its container with a
    /// single argument.
    #[test]
    fn prop_core_invocation_names_container(slug in "[ -~]{1,30}") {
        let inv = invocation::run_core(&instance(&slug), &OrchestratorConfig::default());
        prop_assert_eq!(&inv.args[1], "--name");
        prop_assert_eq!(&inv.args[2], &format!("trading-bot-{slug}-core"));
    }

    /// Relative directory values are always rejected.
    #[test]
    fn prop_relative_dirs_rejected(dir in "[a-z]{1,10}(/[a-z]{1,10}){0,3}") {
        for key in ["project_dir", "host_manager_dir", "scripts_dir"] {
            prop_assert!(validate_config_value(key, &dir).is_err());
        }
    }

    /// Positive timeouts are accepted.
    #[test]
    fn prop_positive_timeouts_accepted(secs in 1u64..100_000) {
        prop_assert!(validate_config_value("command_timeout_secs", &secs.to_string()).is_ok());
    }
}

#[test]
fn test_unknown_config_keys_rejected() {
    for key in ["", "images", "security.level", "RUNTIME"] {
        assert!(validate_config_key(key).is_err(), "accepted {key:?}");
    }
}
