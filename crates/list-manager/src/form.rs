//! Form Fields
//!
//! Staged modal input: text values plus optional binary attachments.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// An uploaded file read into memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl Attachment {
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    File(Attachment),
}

impl FieldValue {
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::File(file) => file.is_empty(),
        }
    }
}

/// Ordered map of field name to value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    fields: BTreeMap<String, FieldValue>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style text field
    pub fn with(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_text(name, value);
        self
    }

    pub fn set_text(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_string(), FieldValue::Text(value.into()));
    }

    pub fn set_file(&mut self, name: &str, file: Attachment) {
        self.fields.insert(name.to_string(), FieldValue::File(file));
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Text value, or "" when absent or a file
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(text)) => text,
            _ => "",
        }
    }

    pub fn file(&self, name: &str) -> Option<&Attachment> {
        match self.fields.get(name) {
            Some(FieldValue::File(file)) => Some(file),
            _ => None,
        }
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.fields.get(name).map_or(true, FieldValue::is_blank)
    }

    /// First blank field among `required`, if any
    pub fn first_blank<'a>(&self, required: &[&'a str]) -> Option<&'a str> {
        required.iter().copied().find(|name| self.is_blank(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Text fields as a JSON object; attachments are skipped
    pub fn text_json(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|(name, value)| match value {
                FieldValue::Text(text) => Some((name.clone(), Value::String(text.clone()))),
                FieldValue::File(_) => None,
            })
            .collect()
    }
}

/// First letter uppercased, the rest untouched
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `my_partner_name` -> "My partner name"
pub fn humanize(field: &str) -> String {
    capitalize(field.replace(['_', '-'], " ").trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_detection() {
        let mut fields = FormFields::new().with("question", "   ").with("status", "active");
        assert!(fields.is_blank("question"));
        assert!(fields.is_blank("missing"));
        assert!(!fields.is_blank("status"));

        fields.set_file("image", Attachment {
            file_name: "a.png".to_string(),
            mime_type: "image/png".to_string(),
            bytes: Vec::new(),
        });
        assert!(fields.is_blank("image"));
        assert_eq!(fields.first_blank(&["status", "question"]), Some("question"));
    }

    #[test]
    fn test_text_json_skips_files() {
        let mut fields = FormFields::new().with("answer", "We talked");
        fields.set_file("upload_photo", Attachment {
            file_name: "me.jpg".to_string(),
            mime_type: "image/jpeg".to_string(),
            bytes: vec![1, 2, 3],
        });
        let json = fields.text_json();
        assert_eq!(json.len(), 1);
        assert_eq!(json["answer"], "We talked");
        assert_eq!(fields.text("upload_photo"), "");
        assert_eq!(fields.file("upload_photo").map(|f| f.bytes.len()), Some(3));
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("my_partner_name"), "My partner name");
        assert_eq!(humanize("question"), "Question");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("active"), "Active");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }
}
