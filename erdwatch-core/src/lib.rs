// erdwatch-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contrat du générateur de diagrammes (LLM), injectable dans les tests.
pub mod ports;

// 2. Domain (Cœur du métier)
// Prompt, normalisation et classification des diagrammes.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// Collecte des fichiers, client HTTP, configuration YAML, reporters.
pub mod infrastructure;

// 4. Application (Use Cases)
// Orchestration : Collector -> Prompt -> Generator -> Classifier.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::ErdwatchError;
