// Public API exports
pub mod domain;
pub mod shared;
pub mod config;

pub mod app;
