//! Utility module - validation helpers shared across the engine

pub mod validation;
