// erdwatch-core/src/infrastructure/mod.rs

pub mod collector;
pub mod config;
pub mod error;
pub mod fs;
pub mod generator;
pub mod report;
