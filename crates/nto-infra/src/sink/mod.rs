mod file;

pub use file::FileOverrideSink;
