//! New-tab domain: modes, resolved targets and the mode resolver.

mod mode;
pub mod resolver;
mod target;

pub use mode::{InternalPage, NewTabMode};
pub use target::{NewTabTarget, BLANK_TARGET};
