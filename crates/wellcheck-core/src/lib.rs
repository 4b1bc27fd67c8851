//! wellcheck-core — Session, scoring, and badge engine.
//!
//! This crate defines the content model, the catalog parser and validator,
//! the session state machine, the scorer, the badge rule evaluator, the
//! progress persistence contract, and the recommendation mapper that the
//! rest of the wellcheck system builds on.

pub mod badges;
pub mod engine;
pub mod error;
pub mod model;
pub mod parser;
pub mod progress;
pub mod recommend;
pub mod scorer;
pub mod session;
