//! Crate-level behaviour tests for the analyzer host.

mod behaviour;
mod support;
