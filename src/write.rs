//! Output writer, the only side-effecting step after collection.

use anyhow::{Context, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Result of a run, reported to the user on stdout.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Written(PathBuf),
    NothingFound,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Written(path) => write!(f, "Generated {}", path.display()),
            Outcome::NothingFound => {
                write!(f, "No C/C++ source files found; no output written.")
            }
        }
    }
}

/// Write `document` to `output`, creating or truncating it.
///
/// `None` means nothing was found; no file is touched.
pub fn write_output(output: &Path, document: Option<&str>) -> Result<Outcome> {
    let Some(document) = document else {
        return Ok(Outcome::NothingFound);
    };

    fs::write(output, document)
        .with_context(|| format!("failed to write {}", output.display()))?;
    log::info!("wrote {} bytes to {}", document.len(), output.display());

    Ok(Outcome::Written(output.to_path_buf()))
}
