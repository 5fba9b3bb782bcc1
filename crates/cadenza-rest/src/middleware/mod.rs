//! HTTP middleware.

mod identity;
mod logging;

pub use identity::{identity_gate, CurrentUser};
pub use logging::request_logging;
