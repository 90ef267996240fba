//! Test doubles shared across behaviour tests.

mod scripted;

pub(crate) use scripted::ScriptedTransport;
