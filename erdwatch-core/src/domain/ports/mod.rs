// src/domain/ports/mod.rs

pub mod collector;

pub use collector::SchemaCollector;
