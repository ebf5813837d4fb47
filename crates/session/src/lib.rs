//! Chromium-backed session layer.
//!
//! One [`Driver`] owns the browser process; each scenario borrows one
//! [`Session`] (a browser tab) and drives it through a small semantic API:
//! navigation, bounded element queries, form interactions, text and
//! visibility reads, upload injection and download staging. All waits are
//! bounded; nothing blocks past its timeout.

mod driver;
mod errors;
mod selector;
mod session;

pub use driver::{Driver, DriverConfig, TimeoutsConfig};
pub use errors::SessionError;
pub use selector::Selector;
pub use session::{Session, SessionId};
