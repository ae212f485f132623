//! Persistence gateways for quizforge.
//!
//! Implements the `QuestionStore` trait for the hosted REST gateway and an
//! in-memory backend, allowing quizforge to persist generated questions
//! without committing callers to a particular backend.

pub mod config;
pub mod memory;
pub mod rest;

pub use config::{create_store, load_config, QuizforgeConfig, StoreConfig};
pub use memory::InMemoryStore;
pub use rest::RestStore;
