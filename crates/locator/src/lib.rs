//! Locator descriptors and resilient interaction policies.
//!
//! A [`Locator`] names an element semantically and lowers to a driver
//! query only at interaction time. On top of that sit the two resilience
//! policies the suite distinguishes: best-effort obstruction dismissal
//! ([`DismissChain`]) which may never fail its caller, and the fatal
//! primary-action path ([`primary_click`]) whose forced fallback failure
//! propagates.

mod dismiss;
mod interact;
mod types;

pub use dismiss::{DismissCandidate, DismissChain, DismissOutcome};
pub use interact::{primary_click, InteractionPolicy};
pub use types::{xpath_literal, Locator};
