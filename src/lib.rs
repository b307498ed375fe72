//! # inistore
//!
//! A persistent key/value configuration store built on the classic INI file
//! format: named sections of ordered key/value pairs, with free-form
//! comments attached to both sections and individual keys.
//!
//! An application loads settings from a text file, queries and mutates them
//! in memory, and writes the modified state back to disk while preserving
//! comments and section structure.
//!
//! ## Features
//!
//! - **Ordered document model**: sections and keys iterate in insertion
//!   order, exactly as they appeared in the file
//! - **Case-insensitive lookup**: names match ignoring case but keep their
//!   original casing
//! - **Comment preservation**: comment blocks reattach to the section or
//!   key that follows them and are written back on save
//! - **Typed access**: integer, float, and (leniently parsed) boolean
//!   getters and setters over the stored text
//! - **Auto-create options**: missing sections and keys can be created on
//!   the fly by `set_value`, per store instance
//! - **Dirty tracking**: every mutation marks the store dirty; saving or
//!   loading clears it, and a dirty store saves itself on drop
//! - **Lenient parsing**: malformed lines are mined for what they contain
//!   rather than rejected
//!
//! ## Example
//!
//! ```rust
//! use inistore::IniStore;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut store = IniStore::new();
//!
//! store.parse(r#"
//! ; network settings
//! [Server]
//! Port=1200
//! IP_Address=127.0.0.1
//! Verbose=yes
//! "#)?;
//!
//! // Typed, case-insensitive retrieval
//! assert_eq!(store.get_int("Port", "Server")?, 1200);
//! assert_eq!(store.get_string("ip_address", "server")?, "127.0.0.1");
//! assert!(store.get_bool("Verbose", "Server")?);
//!
//! // Mutations mark the store dirty until it is saved
//! store.set_int("Port", 1201, "", "Server")?;
//! assert!(store.is_dirty());
//!
//! # Ok(())
//! # }
//! ```
//!
//! ## File format
//!
//! ```ini
//! [SectionName]
//! Key=Value
//! ;
//! ; multi-line comment block, each line prefixed with ';'
//! ;
//! AnotherKey=AnotherValue
//! ```
//!
//! Lines are classified in priority order: comment, section header,
//! key/value pair, blank. Keys appearing before any `[...]` header belong to
//! the unnamed default section.
//!
//! Operational events (unreadable files, duplicate section names, file name
//! changes) are reported through the [`log`] facade; install any logger
//! implementation to observe them.

// Module declarations
mod document;
mod error;
mod parser;
mod store;
mod value;

// Public API exports
pub use document::{COMMENT_INDICATOR, DELIMITER, Document, Key, Section};
pub use error::{IniError, IniResult};
pub use parser::{IniParser, Record};
pub use store::{IniStore, StoreOptions};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
