//! End-to-end journeys for the storefront demo site.
//!
//! Two layers compose the suite. The page abstraction layer
//! (`storefront-pages` over `storefront-session`) turns page-specific DOM
//! structure into small semantic APIs. This crate is the scenario layer:
//! independent journeys that each own one browser session, a shared
//! bootstrap that registers a synthetic user, and the CLI runner that
//! executes journeys and reports results.
//!
//! State lives in the live browser session; a journey's assertions target
//! rendered text, visibility and counts on the external site, never
//! internal state of the automation code.

pub mod bootstrap;
pub mod errors;
pub mod report;
pub mod scenarios;
pub mod settings;

pub use errors::ScenarioError;
pub use report::{RunReport, ScenarioResult};
pub use settings::Settings;
