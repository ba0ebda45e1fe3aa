mod null;

pub use null::NullSettingsUi;
