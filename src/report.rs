use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

/// Closed category set used by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sports,
    Leisure,
    Culture,
}

/// One named activity extracted from a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Category,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityData {
    pub activities: Vec<Activity>,
}

/// Entry for one URL that produced at least one activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityResult {
    pub url: String,
    pub data: ActivityData,
}

/// The final persisted document: `{"result": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    pub result: Vec<ActivityResult>,
}

/// Render the document as JSON with 4-space indentation.
pub fn to_json(results: &ResultSet) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    results
        .serialize(&mut ser)
        .context("Failed to serialize results")?;
    String::from_utf8(buf).context("Serialized results are not UTF-8")
}

/// Write the document, overwriting any existing file at `path`.
pub fn write_results(path: &Path, results: &ResultSet) -> Result<()> {
    let json = to_json(results)?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}
