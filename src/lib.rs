pub mod app;
pub mod calendar;
pub mod config;
pub mod error;
pub mod repl;
pub mod startup;
