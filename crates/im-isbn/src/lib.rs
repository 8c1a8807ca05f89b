//! ISBN hyphenation for bare ISBN-10 and ISBN-13 strings
//!
//! This crate provides:
//! - An immutable registration group / registrant range table
//! - Table-driven hyphenation (`9780585030159` → `978-0-585-03015-9`)
//! - ISBN checksum validation and cleaning of free-text input

pub mod hyphenate;
pub mod range_data;
pub mod range_table;
pub mod validators;

pub use hyphenate::{hyphenate_isbn, hyphenate_or_bare, split_isbn, IsbnParts};
pub use range_table::{AliasSpec, GroupSpec, RangeTable, RangeTableError, RegistrantRange};
pub use validators::{clean_isbn, is_valid_isbn};
