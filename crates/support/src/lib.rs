//! `staffhub-support` — small pure helpers shared by the web layer.
//!
//! Nothing here depends on the authenticated principal; every helper returns
//! a safe default (`false` / empty string) for missing input.

pub mod collections;
pub mod color;
pub mod config;
pub mod error;
pub mod field_errors;
pub mod images;
pub mod random;
pub mod text;

pub use collections::append_element;
pub use color::{HexColor, is_valid_hex_color};
pub use config::StaticAssetsConfig;
pub use error::SupportError;
pub use field_errors::{FieldError, field_error_description, has_error_in_field, join_error_lines};
pub use images::ImageLocator;
pub use random::{ALPHANUMERIC_ALPHABET_LEN, random_alphanumeric};
pub use text::{capitalize_words, is_blank};
