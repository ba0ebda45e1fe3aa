mod file_repo;

use std::path::PathBuf;

pub use file_repo::FilePrefsRepository;

/// Default preference store location under the user's config directory.
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("newtab-override").join("prefs.json"))
}
