//! Request-boundary driver for the agegate filter
//!
//! Connects the pure decision core to the registry that hosts it:
//! - [`MetadataStore`]: the seam to the registry's storage collaborator
//! - [`AgeFilter`]: evaluates one metadata request and says what the
//!   owning request handler must send back
//! - [`MockStore`]: in-memory store for tests
//!
//! The filter never blocks delivery on its own failures: storage errors
//! and unevaluable metadata degrade to pass-through.

mod filter;
mod mock;
mod store;

pub use filter::*;
pub use mock::*;
pub use store::*;
