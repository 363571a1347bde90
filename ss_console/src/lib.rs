//! Internal modules for the moderator console.
//!
//! This library provides command parsing and board rendering used by the
//! ss_console binary.

pub mod commands;
pub mod view;
