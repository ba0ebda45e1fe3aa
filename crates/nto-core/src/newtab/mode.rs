use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Internal browser pages the new tab surface can be pointed at.
///
/// These are trusted constants; they bypass target validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalPage {
    Blank,
    Home,
    NewTab,
    SyncTabs,
}

impl InternalPage {
    /// The full `about:` identifier for this page.
    pub fn as_target_str(&self) -> &'static str {
        match self {
            InternalPage::Blank => "about:blank",
            InternalPage::Home => "about:home",
            InternalPage::NewTab => "about:newtab",
            InternalPage::SyncTabs => "about:sync-tabs",
        }
    }
}

/// Strategy for determining the new-tab target.
///
/// A mode value is rebuilt from the preference store on every change
/// notification; it is never cached across changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewTabMode {
    /// A fixed internal page, applied verbatim.
    InternalPage(InternalPage),
    /// The user-supplied `url` preference.
    CustomUrl,
    /// The host's configured homepage (first `|`-delimited segment).
    Homepage,
    /// Follow URLs appearing on the system clipboard.
    Clipboard,
}

impl NewTabMode {
    /// Map a stored `type` preference value to a mode.
    ///
    /// Total: unrecognized values fall back to the default internal page,
    /// so a malformed configuration is never an error.
    pub fn from_pref_value(value: &str) -> Self {
        match value {
            "about:blank" => NewTabMode::InternalPage(InternalPage::Blank),
            "about:home" => NewTabMode::InternalPage(InternalPage::Home),
            "about:newtab" => NewTabMode::InternalPage(InternalPage::NewTab),
            "about:sync-tabs" => NewTabMode::InternalPage(InternalPage::SyncTabs),
            "custom_url" => NewTabMode::CustomUrl,
            "homepage" => NewTabMode::Homepage,
            "clipboard" => NewTabMode::Clipboard,
            _ => NewTabMode::default(),
        }
    }

    /// The `type` preference value this mode is stored as.
    pub fn as_pref_value(&self) -> &'static str {
        match self {
            NewTabMode::InternalPage(page) => page.as_target_str(),
            NewTabMode::CustomUrl => "custom_url",
            NewTabMode::Homepage => "homepage",
            NewTabMode::Clipboard => "clipboard",
        }
    }
}

impl Default for NewTabMode {
    /// The safe fallback: the browser's default new tab page.
    fn default() -> Self {
        NewTabMode::InternalPage(InternalPage::NewTab)
    }
}

// Modes cross the settings-UI channel as their pref value strings, so the
// serde form must match the stored representation rather than a derived
// variant name.
impl Serialize for NewTabMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_pref_value())
    }
}

impl<'de> Deserialize<'de> for NewTabMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(NewTabMode::from_pref_value(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_pref_values_map_to_modes() {
        assert_eq!(
            NewTabMode::from_pref_value("about:blank"),
            NewTabMode::InternalPage(InternalPage::Blank)
        );
        assert_eq!(
            NewTabMode::from_pref_value("about:home"),
            NewTabMode::InternalPage(InternalPage::Home)
        );
        assert_eq!(
            NewTabMode::from_pref_value("about:newtab"),
            NewTabMode::InternalPage(InternalPage::NewTab)
        );
        assert_eq!(
            NewTabMode::from_pref_value("about:sync-tabs"),
            NewTabMode::InternalPage(InternalPage::SyncTabs)
        );
        assert_eq!(NewTabMode::from_pref_value("custom_url"), NewTabMode::CustomUrl);
        assert_eq!(NewTabMode::from_pref_value("homepage"), NewTabMode::Homepage);
        assert_eq!(NewTabMode::from_pref_value("clipboard"), NewTabMode::Clipboard);
    }

    #[test]
    fn unknown_pref_values_fall_back_to_default_page() {
        assert_eq!(NewTabMode::from_pref_value("unknown_value"), NewTabMode::default());
        assert_eq!(NewTabMode::from_pref_value(""), NewTabMode::default());
        assert_eq!(
            NewTabMode::from_pref_value("CLIPBOARD"),
            NewTabMode::InternalPage(InternalPage::NewTab)
        );
    }

    #[test]
    fn pref_value_round_trips() {
        for value in [
            "about:blank",
            "about:home",
            "about:newtab",
            "about:sync-tabs",
            "custom_url",
            "homepage",
            "clipboard",
        ] {
            assert_eq!(NewTabMode::from_pref_value(value).as_pref_value(), value);
        }
    }

    #[test]
    fn serde_uses_pref_value_strings() {
        let json = serde_json::to_string(&NewTabMode::Clipboard).unwrap();
        assert_eq!(json, "\"clipboard\"");

        let mode: NewTabMode = serde_json::from_str("\"about:sync-tabs\"").unwrap();
        assert_eq!(mode, NewTabMode::InternalPage(InternalPage::SyncTabs));

        let mode: NewTabMode = serde_json::from_str("\"nonsense\"").unwrap();
        assert_eq!(mode, NewTabMode::default());
    }
}
