//! Integration tests for botfleet CLI
//!
//! These tests spawn the actual binary and test end-to-end behavior.
//! Container runtime calls go to throwaway shell scripts, never to a real
//! runtime.

mod cli_tests;
mod config_command;
