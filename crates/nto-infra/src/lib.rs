//! Infrastructure adapters for New Tab Override: the file-backed
//! preference store, the OS clipboard reader and the override sink used
//! by the standalone daemon.

pub mod clipboard;
pub mod prefs;
pub mod sink;
pub mod ui;

pub use clipboard::SystemClipboard;
pub use prefs::FilePrefsRepository;
pub use sink::FileOverrideSink;
pub use ui::NullSettingsUi;
