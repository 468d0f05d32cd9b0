//! Identity contract between the gateway and Emmaus services.
//!
//! Provides the `IdentityHeaders` extractor. Sessions themselves live in the
//! external auth provider; services only see the headers it injects.

pub mod identity;
