//! Pure mapping from a configured mode to a concrete new-tab target.

use super::{NewTabMode, NewTabTarget};

/// Resolve a mode plus its parameters to a target.
///
/// `homepage` is only invoked for [`NewTabMode::Homepage`]; it should yield
/// the host's localized homepage preference, which may be a `|`-delimited
/// list of startup tabs. Only the first segment is used.
///
/// Clipboard mode resolves to the blank sentinel here; the real targets
/// arrive asynchronously from the clipboard poller while that mode is
/// active.
pub fn resolve<F>(mode: NewTabMode, custom_url: &str, homepage: F) -> NewTabTarget
where
    F: FnOnce() -> String,
{
    match mode {
        NewTabMode::InternalPage(page) => NewTabTarget::new(page.as_target_str()),
        NewTabMode::CustomUrl => {
            if custom_url.is_empty() {
                NewTabTarget::blank()
            } else {
                NewTabTarget::new(custom_url)
            }
        }
        NewTabMode::Homepage => {
            let raw = homepage();
            match raw.split('|').next() {
                Some(first) if !first.is_empty() => NewTabTarget::new(first),
                _ => NewTabTarget::blank(),
            }
        }
        NewTabMode::Clipboard => NewTabTarget::blank(),
    }
}
