//! Core decision logic for the agegate filter
//!
//! Two pure components:
//! - Stability classifier: is a version string a stable release or a
//!   pre-release/snapshot?
//! - Age-gated version selector: given a package's publish history and
//!   the configured age policy, decide whether to pass the metadata
//!   through, rewrite the `latest` tag, or reject the request.
//!
//! Both are side-effect free and take the current instant as a parameter,
//! so they are deterministic and safe for unsynchronized concurrent use.
//! All logging and I/O belongs to the caller.

mod selector;
mod stability;

pub use selector::*;
pub use stability::*;
