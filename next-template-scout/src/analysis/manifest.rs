//! `package.json` decoding.

use super::AnalyzeError;
use crate::source::EncodedFile;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Path of the manifest relative to the repository root.
pub(crate) const MANIFEST_FILE: &str = "package.json";

const TAILWIND_PACKAGE: &str = "tailwindcss";

/// The parts of a `package.json` the analyzer reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    /// Runtime dependencies, package name to version range.
    #[serde(default)]
    pub dependencies: Option<BTreeMap<String, String>>,

    /// Development dependencies, package name to version range.
    #[serde(default)]
    pub dev_dependencies: Option<BTreeMap<String, String>>,
}

impl PackageManifest {
    /// Decodes and parses a manifest fetched from the contents API.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzeError`] if the payload is missing, not base64,
    /// not UTF-8, or not a JSON manifest.
    pub fn from_encoded(file: &EncodedFile) -> Result<Self, AnalyzeError> {
        let text = decode_content(file)?;
        Self::parse(&text)
    }

    /// Parses manifest text.
    pub fn parse(text: &str) -> Result<Self, AnalyzeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Version range of `tailwindcss`, looked up in dependencies first.
    ///
    /// Empty version strings are treated as absent.
    pub fn tailwind_version(&self) -> Option<String> {
        let lookup = |deps: &Option<BTreeMap<String, String>>| {
            deps.as_ref()
                .and_then(|deps| deps.get(TAILWIND_PACKAGE))
                .filter(|version| !version.is_empty())
                .cloned()
        };

        lookup(&self.dependencies).or_else(|| lookup(&self.dev_dependencies))
    }
}

/// Decodes a base64 payload. GitHub wraps the payload across lines.
fn decode_content(file: &EncodedFile) -> Result<String, AnalyzeError> {
    if let Some(encoding) = file.encoding.as_deref() {
        if encoding != "base64" {
            return Err(AnalyzeError::UnsupportedEncoding {
                encoding: encoding.to_string(),
            });
        }
    }

    let content = file
        .content
        .as_deref()
        .ok_or_else(|| AnalyzeError::MissingContent {
            path: MANIFEST_FILE.to_string(),
        })?;

    let compact: String = content
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = BASE64.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
