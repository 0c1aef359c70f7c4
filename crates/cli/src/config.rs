//! Binary configuration.

use std::ffi::OsString;
use std::path::PathBuf;

/// Backing file used when no path is given on the command line.
pub const DEFAULT_FILE: &str = "productos.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub file: PathBuf,
}

impl Config {
    /// Build from the process arguments (program name already skipped).
    ///
    /// The first argument, if any, is the backing file; the rest are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = OsString>,
    {
        let file = match args.into_iter().next() {
            Some(path) => PathBuf::from(path),
            None => {
                tracing::debug!("no inventory file given; using {DEFAULT_FILE}");
                PathBuf::from(DEFAULT_FILE)
            }
        };
        Self { file }
    }
}
