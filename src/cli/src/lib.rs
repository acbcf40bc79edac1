//! A3S KRP CLI - Key release policy evaluation from the command line.

pub mod commands;
pub mod output;
