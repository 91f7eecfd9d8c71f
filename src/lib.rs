//! Dashboard state container: keyed registries, composable reducers and
//! the one-shot initializer that derives a session's state from the
//! bootstrap payload.

pub mod action;
pub mod bootstrap;
pub mod charts;
pub mod config;
pub mod controls;
pub mod dashboard;
pub mod logging;
pub mod mvi;
pub mod registry;
pub mod root;
