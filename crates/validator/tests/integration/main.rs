//! Integration tests for keel-validator.
//!
//! One binary, one module per area.

mod collections;
mod concurrency;
mod dynamic_models;
mod logging;
mod mapping;
mod model_verification;
mod support;
