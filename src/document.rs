//! Document model for INI-style configuration data.
//!
//! A [`Document`] is an ordered list of [`Section`]s, each holding an ordered
//! list of [`Key`]s. Section and key names are matched case-insensitively but
//! stored with their original casing, and both kinds of entity can carry a
//! free-form comment that is rendered above them when the document is
//! serialized back to text.
//!
//! The unnamed default section (the empty-string name) always exists in a
//! freshly constructed document and holds the keys that appear before any
//! `[...]` header in a file.

use crate::error::{IniError, IniResult};

/// Character that separates keys from values in the text form
pub const DELIMITER: char = '=';

/// Character that starts a comment line in the text form
pub const COMMENT_INDICATOR: char = ';';

fn name_eq(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// A named string value with an optional comment
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Key {
    /// Key name, unique within its section ignoring case
    pub name: String,

    /// Stored value, always text
    pub value: String,

    /// Comment rendered above the key, possibly multi-line
    pub comment: String,
}

impl Key {
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            comment: comment.into(),
        }
    }
}

/// A named group of keys with an optional comment
#[derive(Debug, Clone, Default)]
pub struct Section {
    /// Section name; the empty string denotes the default section
    pub name: String,

    /// Comment rendered above the `[name]` header, possibly multi-line
    pub comment: String,

    /// Keys in insertion order
    pub keys: Vec<Key>,
}

impl Section {
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            comment: comment.into(),
            keys: Vec::new(),
        }
    }

    /// Find a key by name, ignoring case
    pub fn find_key(&self, name: &str) -> Option<&Key> {
        self.keys.iter().find(|k| name_eq(&k.name, name))
    }

    /// Find a key by name for mutation, ignoring case
    pub fn find_key_mut(&mut self, name: &str) -> Option<&mut Key> {
        self.keys.iter_mut().find(|k| name_eq(&k.name, name))
    }

    /// Check whether a key exists, ignoring case
    pub fn has_key(&self, name: &str) -> bool {
        self.find_key(name).is_some()
    }
}

/// An ordered collection of sections
#[derive(Debug, Clone)]
pub struct Document {
    sections: Vec<Section>,
}

impl Document {
    /// Create a document holding only the empty default section
    pub fn new() -> Self {
        Self {
            sections: vec![Section::default()],
        }
    }

    /// All sections in insertion order, default section first
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Find a section by name, ignoring case; `""` matches the default section
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| name_eq(&s.name, name))
    }

    /// Find a section by name for mutation, ignoring case
    pub fn find_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| name_eq(&s.name, name))
    }

    /// Check whether a section exists, ignoring case
    pub fn has_section(&self, name: &str) -> bool {
        self.find_section(name).is_some()
    }

    /// Find a key within a section; `None` when either is missing
    pub fn find_key(&self, key: &str, section: &str) -> Option<&Key> {
        self.find_section(section)?.find_key(key)
    }

    /// Number of sections, the default section included
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of keys over all sections
    pub fn key_count(&self) -> usize {
        self.sections.iter().map(|s| s.keys.len()).sum()
    }

    /// Append a new empty section.
    ///
    /// Fails without side effect when a section with that name (ignoring
    /// case) already exists.
    pub fn create_section(&mut self, name: &str, comment: &str) -> IniResult<()> {
        if self.has_section(name) {
            return Err(IniError::section_exists(name));
        }

        self.sections.push(Section::new(name, comment));
        Ok(())
    }

    /// Append a new section seeded with an ordered key list
    pub fn create_section_with_keys(
        &mut self,
        name: &str,
        comment: &str,
        keys: Vec<Key>,
    ) -> IniResult<()> {
        self.create_section(name, comment)?;

        if let Some(section) = self.find_section_mut(name) {
            section.keys = keys;
        }

        Ok(())
    }

    /// Remove the first section matching the name, ignoring case.
    ///
    /// The default section is not special-cased; deleting it is permitted.
    pub fn delete_section(&mut self, name: &str) -> IniResult<()> {
        match self.sections.iter().position(|s| name_eq(&s.name, name)) {
            Some(idx) => {
                self.sections.remove(idx);
                Ok(())
            }
            None => Err(IniError::section_not_found(name)),
        }
    }

    /// Remove a key from a section, preserving the order of the rest
    pub fn delete_key(&mut self, key: &str, section: &str) -> IniResult<()> {
        let section_entry = self
            .find_section_mut(section)
            .ok_or_else(|| IniError::section_not_found(section))?;

        match section_entry.keys.iter().position(|k| name_eq(&k.name, key)) {
            Some(idx) => {
                section_entry.keys.remove(idx);
                Ok(())
            }
            None => Err(IniError::key_not_found(key, section)),
        }
    }

    /// Overwrite a key's value and comment, appending the key when allowed.
    ///
    /// The target section must already exist. When the key is missing and
    /// `create_missing` is false the document is left untouched.
    pub fn set_value(
        &mut self,
        key: &str,
        value: &str,
        comment: &str,
        section: &str,
        create_missing: bool,
    ) -> IniResult<()> {
        let section_entry = self
            .find_section_mut(section)
            .ok_or_else(|| IniError::section_not_found(section))?;

        match section_entry.find_key_mut(key) {
            Some(entry) => {
                entry.value = value.to_string();
                entry.comment = comment.to_string();
                Ok(())
            }
            None if create_missing => {
                section_entry.keys.push(Key::new(key, value, comment));
                Ok(())
            }
            None => Err(IniError::key_not_found(key, section)),
        }
    }

    /// Replace a section's comment
    pub fn set_section_comment(&mut self, name: &str, comment: &str) -> IniResult<()> {
        let section = self
            .find_section_mut(name)
            .ok_or_else(|| IniError::section_not_found(name))?;

        section.comment = comment.to_string();
        Ok(())
    }

    /// Replace a key's comment
    pub fn set_key_comment(&mut self, key: &str, comment: &str, section: &str) -> IniResult<()> {
        let section_entry = self
            .find_section_mut(section)
            .ok_or_else(|| IniError::section_not_found(section))?;

        let entry = section_entry
            .find_key_mut(key)
            .ok_or_else(|| IniError::key_not_found(key, section))?;

        entry.comment = comment.to_string();
        Ok(())
    }

    /// Reset to a default-section-only document
    pub fn clear(&mut self) {
        self.sections = vec![Section::default()];
    }

    /// True when there is nothing worth persisting: no keys, no named
    /// sections, no comments
    pub fn is_vacant(&self) -> bool {
        self.sections
            .iter()
            .all(|s| s.name.is_empty() && s.comment.is_empty() && s.keys.is_empty())
    }

    /// Serialize the document to its canonical text form.
    ///
    /// Sections are written in order, each preceded by a blank line and its
    /// comment block; the `[name]` header is omitted for the default section.
    /// Keys follow in order as `name=value` lines, each preceded by a blank
    /// line and a comment block when the key has a comment.
    pub fn serialize(&self) -> String {
        let mut out = String::new();

        for section in &self.sections {
            let mut wrote_comment = false;

            if !section.comment.is_empty() {
                out.push('\n');
                out.push_str(&comment_block(&section.comment));
                wrote_comment = true;
            }

            if !section.name.is_empty() {
                if !wrote_comment {
                    out.push('\n');
                }
                out.push('[');
                out.push_str(&section.name);
                out.push_str("]\n");
            }

            for key in &section.keys {
                if key.name.is_empty() {
                    continue;
                }

                if !key.comment.is_empty() {
                    out.push('\n');
                    out.push_str(&comment_block(&key.comment));
                }

                out.push_str(&key.name);
                out.push(DELIMITER);
                out.push_str(&key.value);
                out.push('\n');
            }
        }

        out
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a comment as indicator-prefixed lines, leaving lines that already
/// carry the indicator untouched
fn comment_block(comment: &str) -> String {
    let mut block = String::new();

    for line in comment.trim().lines() {
        let line = line.trim();

        if line.starts_with(COMMENT_INDICATOR) {
            block.push_str(line);
        } else if line.is_empty() {
            block.push(COMMENT_INDICATOR);
        } else {
            block.push(COMMENT_INDICATOR);
            block.push(' ');
            block.push_str(line);
        }
        block.push('\n');
    }

    block
}
