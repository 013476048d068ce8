use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{Map, Serializer, Value, ser::PrettyFormatter};
use std::{fmt, fs, path::Path};

/// Parsed messages file: category name to its value, in file order.
pub type Document = Map<String, Value>;

const INDENT: &[u8] = b"    ";

/// Outcome of applying a patch set to one category.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PatchSummary {
    pub added: usize,
    pub updated: usize,
    pub unchanged: usize,
}

impl PatchSummary {
    /// True when the patch did not change any value.
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.updated == 0
    }
}

impl fmt::Display for PatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} added, {} updated, {} unchanged",
            self.added, self.updated, self.unchanged
        )
    }
}

pub fn parse_document(input: &str) -> Result<Document> {
    let value: Value = serde_json::from_str(input)?;
    match value {
        Value::Object(map) => Ok(map),
        other => bail!("expected a JSON object at the top level, found {}", kind(&other)),
    }
}

pub fn load_document(path: &Path) -> Result<Document> {
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_document(&input).with_context(|| format!("failed to parse JSON in {}", path.display()))
}

/// Sets every `(key, value)` of `patch` inside the `category` object.
///
/// Keys already present keep their position; new keys are appended in patch
/// order. The document is left untouched if `category` is missing or is not an
/// object.
pub fn apply_patch(
    doc: &mut Document,
    category: &str,
    patch: &[(&str, &str)],
) -> Result<PatchSummary> {
    let Some(entry) = doc.get_mut(category) else {
        bail!("missing top-level key \"{}\"", category);
    };
    let target = match entry {
        Value::Object(map) => map,
        other => bail!("\"{}\" must be a JSON object, found {}", category, kind(other)),
    };

    let mut summary = PatchSummary::default();
    for (key, value) in patch {
        match target.get(*key) {
            None => summary.added += 1,
            Some(existing) if existing.as_str() == Some(*value) => summary.unchanged += 1,
            Some(_) => summary.updated += 1,
        }
        target.insert((*key).to_string(), Value::String((*value).to_string()));
    }
    Ok(summary)
}

/// Pretty prints with 4-space indentation. Non-ASCII text is written as-is.
pub fn render_document(doc: &Document) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    doc.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

pub fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let output = render_document(doc)?;
    // truncates before writing; a failed write can lose the original
    fs::write(path, output).with_context(|| format!("failed to write {}", path.display()))
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
