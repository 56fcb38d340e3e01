pub mod cards;
pub mod cli;
pub mod config;
pub mod log;
