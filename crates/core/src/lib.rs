//! `glassdesk-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no UI concerns).

pub mod entity;
pub mod error;
pub mod money;
pub mod version;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use money::Money;
pub use version::ExpectedVersion;
