pub mod cli;
pub mod config;
pub mod error;
pub mod navigation;
pub mod observability;
pub mod screens;
