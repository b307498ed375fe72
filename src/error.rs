use std::fmt;

/// Result type alias for store operations
pub type IniResult<T> = Result<T, IniError>;

/// Errors that can occur while loading, querying, mutating, or saving a store
#[derive(Debug, Clone)]
pub enum IniError {
    /// Section lookup failed
    SectionNotFound { name: String },

    /// Key lookup failed within an existing section
    KeyNotFound { key: String, section: String },

    /// Section creation collided with an existing name
    SectionExists { name: String },

    /// File could not be opened for reading or writing
    Io { path: String, message: String },

    /// Input text could not be parsed
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    /// Stored text could not be converted to the requested type
    TypeError {
        key: String,
        expected: String,
        found: String,
    },

    /// Save was called on a document with nothing to persist
    NothingToSave,

    /// Save was called with no file name recorded or supplied
    NoFileName,
}

impl IniError {
    /// Create a section-not-found error
    pub fn section_not_found(name: impl Into<String>) -> Self {
        IniError::SectionNotFound { name: name.into() }
    }

    /// Create a key-not-found error
    pub fn key_not_found(key: impl Into<String>, section: impl Into<String>) -> Self {
        IniError::KeyNotFound {
            key: key.into(),
            section: section.into(),
        }
    }

    /// Create a section-exists error
    pub fn section_exists(name: impl Into<String>) -> Self {
        IniError::SectionExists { name: name.into() }
    }

    /// Create an I/O error
    pub fn io(path: impl Into<String>, message: impl Into<String>) -> Self {
        IniError::Io {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a type conversion error
    pub fn type_error(
        key: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        IniError::TypeError {
            key: key.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for IniError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IniError::SectionNotFound { name } => {
                if name.is_empty() {
                    write!(f, "Default section not found")
                } else {
                    write!(f, "Section '{}' not found", name)
                }
            }
            IniError::KeyNotFound { key, section } => {
                if section.is_empty() {
                    write!(f, "Key '{}' not found in the default section", key)
                } else {
                    write!(f, "Key '{}' not found in section '{}'", key, section)
                }
            }
            IniError::SectionExists { name } => {
                write!(f, "Section '{}' already exists", name)
            }
            IniError::Io { path, message } => {
                write!(f, "I/O error for '{}': {}", path, message)
            }
            IniError::Parse {
                line,
                column,
                message,
            } => {
                write!(
                    f,
                    "Parse error at line {}, column {}: {}",
                    line, column, message
                )
            }
            IniError::TypeError {
                key,
                expected,
                found,
            } => {
                write!(f, "Value of '{}' is not {}: {:?}", key, expected, found)
            }
            IniError::NothingToSave => {
                write!(f, "Nothing to save: the document is empty")
            }
            IniError::NoFileName => {
                write!(f, "No file name has been set")
            }
        }
    }
}

impl std::error::Error for IniError {}

impl<R: pest::RuleType> From<pest::error::Error<R>> for IniError {
    fn from(err: pest::error::Error<R>) -> Self {
        let (line, column) = match err.line_col {
            pest::error::LineColLocation::Pos((line, col)) => (line, col),
            pest::error::LineColLocation::Span((line, col), _) => (line, col),
        };

        IniError::Parse {
            line,
            column,
            message: err.variant.to_string(),
        }
    }
}
