//! Rewrites the generated `package.json` so the dev server listens on every
//! interface, which makes the site reachable from other devices on the LAN.

use std::{fs, path::Path};

use serde_json::Value;

use crate::error::{ScaffoldError, ScaffoldErrorTypes};

pub const DEV_SCRIPT: &str = "vite";
pub const HOST_DEV_SCRIPT: &str = "vite --host";

#[derive(Debug, PartialEq, Eq)]
pub enum ManifestEdit {
    /// New manifest text, to be written back.
    Patched(String),
    /// `scripts.dev` already passes `--host`.
    AlreadyExposed,
    /// `scripts.dev` is something other than the generator's default; holds it.
    Unrecognized(String),
}

impl ManifestEdit {
    /// What to tell the user about an edit that wrote nothing.
    pub fn notice(&self) -> Option<String> {
        match self {
            ManifestEdit::Patched(_) => None,
            ManifestEdit::AlreadyExposed => {
                Some("dev server already listens on all interfaces".to_owned())
            }
            ManifestEdit::Unrecognized(script) => {
                Some(format!("unexpected dev script {:?}, left unchanged", script))
            }
        }
    }
}

/// Makes `scripts.dev` pass `--host`.
///
/// This works on the parsed manifest, not on its text. Only a dev script of
/// exactly [`DEV_SCRIPT`] is rewritten, and the whole file is then
/// re-serialized pretty-printed, so a compact manifest comes back reformatted.
/// Any other dev script is reported and left alone. A manifest that isn't JSON
/// or has no string `scripts.dev` is an error rather than a silent no-op.
pub fn expose_dev_server(text: &str) -> Result<ManifestEdit, ScaffoldError> {
    let mut manifest: Value = serde_json::from_str(text).map_err(|e| {
        ScaffoldError::new(
            ScaffoldErrorTypes::ManifestParse,
            format!("Couldn't parse manifest: {}", e),
        )
    })?;

    let dev = manifest
        .get_mut("scripts")
        .and_then(|scripts| scripts.get_mut("dev"))
        .ok_or_else(|| {
            ScaffoldError::new(
                ScaffoldErrorTypes::ManifestField,
                "Manifest has no scripts.dev entry",
            )
        })?;
    let Some(current) = dev.as_str() else {
        return Err(ScaffoldError::new(
            ScaffoldErrorTypes::ManifestField,
            "Manifest scripts.dev is not a string",
        ));
    };

    if current.split_whitespace().any(|arg| arg == "--host") {
        return Ok(ManifestEdit::AlreadyExposed);
    }
    if current != DEV_SCRIPT {
        return Ok(ManifestEdit::Unrecognized(current.to_owned()));
    }
    *dev = Value::String(HOST_DEV_SCRIPT.to_owned());

    let mut out = serde_json::to_string_pretty(&manifest).map_err(|e| {
        ScaffoldError::new(
            ScaffoldErrorTypes::ManifestParse,
            format!("Couldn't serialize manifest: {}", e),
        )
    })?;
    out.push('\n');
    Ok(ManifestEdit::Patched(out))
}

/// Applies [`expose_dev_server`] to the file at `path`. The file is only
/// written when the edit is [`ManifestEdit::Patched`].
pub fn patch_file(path: &Path) -> Result<ManifestEdit, ScaffoldError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ScaffoldError::io(ScaffoldErrorTypes::FileRead, path, e))?;
    let edit = expose_dev_server(&text)?;
    if let ManifestEdit::Patched(new_text) = &edit {
        fs::write(path, new_text)
            .map_err(|e| ScaffoldError::io(ScaffoldErrorTypes::FileWrite, path, e))?;
    }
    Ok(edit)
}
