//! Letter-class checks for names and surnames.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{NAME_PATTERN, OPTIONAL_NAME_PATTERN};

/// Whole-string match of one or more ASCII letters.
pub static LETTERS_ONLY: Lazy<Regex> = Lazy::new(|| Regex::new(NAME_PATTERN).expect("valid regex"));

/// Like [`LETTERS_ONLY`] but also accepts the empty string, which a partial
/// update treats as "field absent".
pub static LETTERS_OR_EMPTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(OPTIONAL_NAME_PATTERN).expect("valid regex"));
