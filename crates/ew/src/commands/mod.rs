//! CLI command implementations.

use std::io::{Read, Write};
use std::path::Path;

pub(crate) mod extract;
pub(crate) mod render;

pub(crate) use extract::ExtractArgs;
pub(crate) use render::RenderArgs;

use crate::error::CliError;

/// Read the input document from a file, or stdin when the path is `-`.
pub(crate) fn read_input(path: &Path) -> Result<String, CliError> {
    let content = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(path)?
    };
    tracing::debug!(bytes = content.len(), "Read input document");
    Ok(content)
}

/// Write the payload to a file, or stdout when no path is given.
pub(crate) fn write_payload(path: Option<&Path>, payload: &str) -> Result<(), CliError> {
    match path {
        Some(path) => std::fs::write(path, payload)?,
        None => std::io::stdout().write_all(payload.as_bytes())?,
    }
    Ok(())
}
