use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, Key, Section};
use crate::error::{IniError, IniResult};
use crate::parser::{IniParser, Record};
use crate::value;

/// Behavior switches held per store instance
#[derive(Debug, Clone, Copy)]
pub struct StoreOptions {
    /// Allow [`IniStore::set_value`] to create missing sections
    pub auto_create_sections: bool,

    /// Allow [`IniStore::set_value`] to create missing keys
    pub auto_create_keys: bool,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            auto_create_sections: true,
            auto_create_keys: true,
        }
    }
}

/// A persistent INI-style key/value store.
///
/// The store owns an in-memory [`Document`], the path it was loaded from (or
/// will be saved to), a dirty flag tracking divergence from disk, and the
/// auto-create options. Mutating operations act purely on the in-memory
/// model and mark the store dirty; [`IniStore::save`] writes the whole model
/// back and clears the flag. A dirty store saves itself on drop, best
/// effort.
pub struct IniStore {
    document: Document,
    path: Option<PathBuf>,
    dirty: bool,
    options: StoreOptions,
}

impl IniStore {
    /// Create an empty store with default options
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            path: None,
            dirty: false,
            options: StoreOptions::default(),
        }
    }

    /// Create an empty store with custom options
    pub fn with_options(options: StoreOptions) -> Self {
        Self {
            document: Document::new(),
            path: None,
            dirty: false,
            options,
        }
    }

    /// Create a store bound to `path`, loading it when it exists.
    ///
    /// A file that cannot be read is reported through the log and otherwise
    /// ignored, leaving an empty store ready to be saved to that path.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut store = Self::new();
        store.path = Some(path.as_ref().to_path_buf());
        let _ = store.load(path);
        store
    }

    /// Read and parse a file into the store.
    ///
    /// Fails without mutating the store when the file cannot be opened; the
    /// file is never created. Parsed content merges into the current
    /// document as described by [`IniStore::parse`].
    pub fn load(&mut self, path: impl AsRef<Path>) -> IniResult<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| {
            log::info!("unable to open {}: {}", path.display(), err);
            IniError::io(path.display().to_string(), err.to_string())
        })?;

        self.parse(&content)
    }

    /// Parse input text into the store.
    ///
    /// Comment lines accumulate and attach to the next section header or key;
    /// keys before any header land in the default section. Auto-create
    /// options are forced on for the duration of the parse and restored
    /// afterward. On success the store is clean: its state mirrors the
    /// input.
    pub fn parse(&mut self, input: &str) -> IniResult<()> {
        let records = IniParser::parse_records(input)?;

        let saved = self.options;
        self.options.auto_create_sections = true;
        self.options.auto_create_keys = true;
        self.merge_records(records);
        self.options = saved;

        self.dirty = false;
        Ok(())
    }

    fn merge_records(&mut self, records: Vec<Record>) {
        let mut pending = String::new();
        let mut current = String::new();

        for record in records {
            match record {
                Record::Comment { text } => {
                    if !pending.is_empty() {
                        pending.push('\n');
                    }
                    pending.push_str(&text);
                }

                Record::Section { name } => {
                    // A repeated header merges into the existing section and
                    // drops its pending comment.
                    let _ = self.create_section(&name, &pending);
                    current = name;
                    pending.clear();
                }

                Record::Pair { key, value } => {
                    if key.is_empty() {
                        continue;
                    }
                    let _ = self.set_value(&key, &value, &pending, &current);
                    pending.clear();
                }
            }
        }
    }

    /// Write the document to the recorded path
    pub fn save(&mut self) -> IniResult<()> {
        if self.document.is_vacant() {
            log::info!("nothing to save");
            return Err(IniError::NothingToSave);
        }

        match self.path.clone() {
            Some(path) => self.write_document(&path),
            None => {
                log::error!("no file name has been set");
                Err(IniError::NoFileName)
            }
        }
    }

    /// Write the document to an explicit path, leaving the recorded path
    /// untouched
    pub fn save_as(&mut self, path: impl AsRef<Path>) -> IniResult<()> {
        if self.document.is_vacant() {
            log::info!("nothing to save");
            return Err(IniError::NothingToSave);
        }

        self.write_document(path.as_ref())
    }

    fn write_document(&mut self, path: &Path) -> IniResult<()> {
        fs::write(path, self.document.serialize()).map_err(|err| {
            log::error!("unable to write {}: {}", path.display(), err);
            IniError::io(path.display().to_string(), err.to_string())
        })?;

        self.dirty = false;
        Ok(())
    }

    /// Record the path used by [`IniStore::save`].
    ///
    /// Replacing a different previously recorded name marks the store dirty,
    /// since its contents no longer mirror any file at the new path.
    pub fn set_file_name(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        if let Some(old) = &self.path {
            if !old.as_os_str().eq_ignore_ascii_case(path.as_os_str()) {
                log::warn!(
                    "file name changed from {} to {}",
                    old.display(),
                    path.display()
                );
                self.dirty = true;
            }
        }

        self.path = Some(path.to_path_buf());
    }

    /// The recorded file path, if any
    pub fn file_name(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether in-memory state has diverged from the last load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Override the dirty flag
    pub fn set_dirty(&mut self, dirty: bool) {
        self.dirty = dirty;
    }

    /// Current auto-create options
    pub fn options(&self) -> StoreOptions {
        self.options
    }

    /// Replace the auto-create options
    pub fn set_options(&mut self, options: StoreOptions) {
        self.options = options;
    }

    /// Reset to an empty store: default section only, no path, not dirty
    pub fn clear(&mut self) {
        self.document.clear();
        self.path = None;
        self.dirty = false;
    }

    /// The underlying document
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Serialize the document to its text form without touching any file
    pub fn serialize(&self) -> String {
        self.document.serialize()
    }

    /// All sections in order
    pub fn sections(&self) -> &[Section] {
        self.document.sections()
    }

    /// Find a section by name, ignoring case
    pub fn find_section(&self, name: &str) -> Option<&Section> {
        self.document.find_section(name)
    }

    /// Find a key within a section, ignoring case
    pub fn find_key(&self, key: &str, section: &str) -> Option<&Key> {
        self.document.find_key(key, section)
    }

    /// Check whether a section exists, ignoring case
    pub fn has_section(&self, name: &str) -> bool {
        self.document.has_section(name)
    }

    /// Number of sections, the default section included
    pub fn section_count(&self) -> usize {
        self.document.section_count()
    }

    /// Total number of keys over all sections
    pub fn key_count(&self) -> usize {
        self.document.key_count()
    }

    /// Append a new empty section, failing when the name is taken
    pub fn create_section(&mut self, name: &str, comment: &str) -> IniResult<()> {
        match self.document.create_section(name, comment) {
            Ok(()) => {
                self.dirty = true;
                Ok(())
            }
            Err(err) => {
                log::info!("section <{}> already exists", name);
                Err(err)
            }
        }
    }

    /// Append a new section seeded with an ordered key list
    pub fn create_section_with_keys(
        &mut self,
        name: &str,
        comment: &str,
        keys: Vec<Key>,
    ) -> IniResult<()> {
        match self.document.create_section_with_keys(name, comment, keys) {
            Ok(()) => {
                self.dirty = true;
                Ok(())
            }
            Err(err) => {
                log::info!("section <{}> already exists", name);
                Err(err)
            }
        }
    }

    /// Remove a section and everything in it
    pub fn delete_section(&mut self, name: &str) -> IniResult<()> {
        self.document.delete_section(name)?;
        self.dirty = true;
        Ok(())
    }

    /// Remove a single key from a section
    pub fn delete_key(&mut self, key: &str, section: &str) -> IniResult<()> {
        self.document.delete_key(key, section)?;
        self.dirty = true;
        Ok(())
    }

    /// Set a key's value and comment, creating the section and key as the
    /// options allow.
    ///
    /// An existing key is overwritten unconditionally. A missing section is
    /// created when `auto_create_sections` is on and reported otherwise; a
    /// missing key likewise under `auto_create_keys`.
    pub fn set_value(
        &mut self,
        key: &str,
        value: &str,
        comment: &str,
        section: &str,
    ) -> IniResult<()> {
        self.set_value_with(key, value, comment, section, self.options.auto_create_keys)
    }

    /// [`IniStore::set_value`] with key creation forced on for this one call
    pub fn create_key(
        &mut self,
        key: &str,
        value: &str,
        comment: &str,
        section: &str,
    ) -> IniResult<()> {
        self.set_value_with(key, value, comment, section, true)
    }

    fn set_value_with(
        &mut self,
        key: &str,
        value: &str,
        comment: &str,
        section: &str,
        create_missing_key: bool,
    ) -> IniResult<()> {
        if !self.document.has_section(section) {
            if !self.options.auto_create_sections {
                return Err(IniError::section_not_found(section));
            }
            self.document.create_section(section, "")?;
            self.dirty = true;
        }

        self.document
            .set_value(key, value, comment, section, create_missing_key)?;
        self.dirty = true;
        Ok(())
    }

    /// Store an integer as text
    pub fn set_int(&mut self, key: &str, value: i64, comment: &str, section: &str) -> IniResult<()> {
        self.set_value(key, &value.to_string(), comment, section)
    }

    /// Store a float as text
    pub fn set_float(
        &mut self,
        key: &str,
        value: f64,
        comment: &str,
        section: &str,
    ) -> IniResult<()> {
        self.set_value(key, &value.to_string(), comment, section)
    }

    /// Store a boolean as `True` or `False`
    pub fn set_bool(
        &mut self,
        key: &str,
        value: bool,
        comment: &str,
        section: &str,
    ) -> IniResult<()> {
        self.set_value(key, value::format_bool(value), comment, section)
    }

    /// Get a value as stored
    pub fn get_string(&self, key: &str, section: &str) -> IniResult<&str> {
        let section_entry = self
            .document
            .find_section(section)
            .ok_or_else(|| IniError::section_not_found(section))?;

        let entry = section_entry
            .find_key(key)
            .ok_or_else(|| IniError::key_not_found(key, section))?;

        Ok(&entry.value)
    }

    /// Get a value as a signed integer
    pub fn get_int(&self, key: &str, section: &str) -> IniResult<i64> {
        let raw = self.get_string(key, section)?;
        value::parse_int(raw).ok_or_else(|| IniError::type_error(key, "an integer", raw))
    }

    /// Get a value as a float
    pub fn get_float(&self, key: &str, section: &str) -> IniResult<f64> {
        let raw = self.get_string(key, section)?;
        value::parse_float(raw).ok_or_else(|| IniError::type_error(key, "a float", raw))
    }

    /// Get a value as a boolean.
    ///
    /// Reading is lenient and cannot fail once the key is found: values
    /// starting with `1` or equal to `true`/`yes` ignoring case are true,
    /// everything else is false.
    pub fn get_bool(&self, key: &str, section: &str) -> IniResult<bool> {
        Ok(value::parse_bool(self.get_string(key, section)?))
    }

    /// Replace a section's comment
    pub fn set_section_comment(&mut self, name: &str, comment: &str) -> IniResult<()> {
        self.document.set_section_comment(name, comment)?;
        self.dirty = true;
        Ok(())
    }

    /// Replace a key's comment
    pub fn set_key_comment(&mut self, key: &str, comment: &str, section: &str) -> IniResult<()> {
        self.document.set_key_comment(key, comment, section)?;
        self.dirty = true;
        Ok(())
    }
}

impl Default for IniStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for IniStore {
    fn drop(&mut self) {
        if self.dirty {
            if let Err(err) = self.save() {
                log::error!("auto-save failed: {}", err);
            }
        }
    }
}
