//! Text bundle used for multi-schema exports.
//!
//! Entries are concatenated as `--- FILE: <name> ---\n<contents>\n` blocks
//! and the whole text is wrapped in standard base64. There is no compression.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::errors::GenerationError;

const HEADER_PREFIX: &str = "--- FILE: ";
const HEADER_SUFFIX: &str = " ---";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleEntry {
    pub name: String,
    pub contents: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: Vec<BundleEntry>,
}

impl Bundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, contents: impl Into<String>) {
        self.entries.push(BundleEntry {
            name: name.into(),
            contents: contents.into(),
        });
    }

    pub fn entries(&self) -> &[BundleEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.contents.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Plain-text form before base64 wrapping.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(HEADER_PREFIX);
            text.push_str(&entry.name);
            text.push_str(HEADER_SUFFIX);
            text.push('\n');
            text.push_str(&entry.contents);
            text.push('\n');
        }
        text
    }

    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_text())
    }

    pub fn decode(encoded: &str) -> Result<Self, GenerationError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::parse(&String::from_utf8(bytes)?)
    }

    pub fn parse(text: &str) -> Result<Self, GenerationError> {
        let mut bundle = Bundle::new();
        let mut current: Option<(String, String)> = None;

        for line in text.split_inclusive('\n') {
            if let Some(name) = parse_header(line) {
                if let Some((name, body)) = current.take() {
                    bundle.push(name, finish_body(body));
                }
                current = Some((name.to_string(), String::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push_str(line);
            } else if !line.trim().is_empty() {
                return Err(GenerationError::InvalidBundle(
                    "content before the first file header".to_string(),
                ));
            }
        }

        if let Some((name, body)) = current.take() {
            bundle.push(name, finish_body(body));
        }

        Ok(bundle)
    }
}

fn parse_header(line: &str) -> Option<&str> {
    line.strip_suffix('\n')?
        .strip_prefix(HEADER_PREFIX)?
        .strip_suffix(HEADER_SUFFIX)
        .filter(|name| !name.is_empty())
}

fn finish_body(mut body: String) -> String {
    if body.ends_with('\n') {
        body.pop();
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_layout() {
        let mut bundle = Bundle::new();
        bundle.push("a.csv", "id\n1\n");
        bundle.push("manifest.json", "{}");
        assert_eq!(
            bundle.to_text(),
            "--- FILE: a.csv ---\nid\n1\n\n--- FILE: manifest.json ---\n{}\n"
        );
    }

    #[test]
    fn decode_restores_entries() {
        let mut bundle = Bundle::new();
        bundle.push("companies.csv", "# comment\n\nid,name\n1,\"a\nb\"\n");
        bundle.push("contacts.csv", "id\n1\n");
        bundle.push("manifest.json", "{\n  \"generator\": \"MockEm\"\n}");

        let decoded = Bundle::decode(&bundle.encode()).unwrap();
        assert_eq!(decoded, bundle);
        assert_eq!(
            decoded.names().collect::<Vec<_>>(),
            vec!["companies.csv", "contacts.csv", "manifest.json"]
        );
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(
            Bundle::decode("not base64!"),
            Err(GenerationError::Base64(_))
        ));
        assert!(matches!(
            Bundle::parse("stray\n--- FILE: a ---\n"),
            Err(GenerationError::InvalidBundle(_))
        ));
    }
}
