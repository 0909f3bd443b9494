// Crate root library declaration and module exports.
pub mod app;
pub mod cli;
pub mod config;
pub mod model;
pub mod output;
