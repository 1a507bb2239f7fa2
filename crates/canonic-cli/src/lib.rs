//! Canonic CLI library.
//!
//! Registry loading, logging setup and the command implementations behind
//! the `canonic` binary.

pub mod commands;
pub mod input;
pub mod logging;
