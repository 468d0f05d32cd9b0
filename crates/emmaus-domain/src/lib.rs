//! Domain types shared across all Emmaus services.
//!
//! This crate contains only pure types with no framework dependencies.
//! Import in `usecase/` and `domain/` layers; never in `infra/` or `handlers/`.

pub mod catalog;
pub mod pagination;
pub mod progress;
pub mod role;
