pub mod bref;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod resolve;
pub mod roster;
