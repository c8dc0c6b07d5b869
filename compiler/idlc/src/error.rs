//! Driver errors.
//!
//! Only input loading can fail a run. Generation failures are diagnostics.

use std::path::PathBuf;

/// A failure loading the declaration graph.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode declarations in `{}`: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
