//! Unit tests for botfleet CLI
//!
//! These tests use recorded command runners and run fast without spawning
//! any container runtime.

mod instance_process;
mod property_tests;
