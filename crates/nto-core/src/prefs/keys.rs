//! Preference keys watched and read by the controller.

/// Selected mode, stored as its pref value string.
pub const TYPE: &str = "type";

/// Custom target for [`crate::NewTabMode::CustomUrl`].
pub const URL: &str = "url";

/// The host browser's localized homepage preference. Lives outside the
/// extension namespace and changes through the host's own preference
/// pages, so it is watched separately from `type`/`url`.
pub const HOST_HOMEPAGE: &str = "browser.startup.homepage";
