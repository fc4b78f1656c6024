//! Command-line front end: builds graphs from arguments and renders results.

pub mod commands;
