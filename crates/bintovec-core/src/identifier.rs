//! Variable name derivation.
//!
//! Turns an arbitrary seed (a user-supplied name or the input path) into a
//! token matching `[A-Za-z_][A-Za-z0-9_]*`.

use crate::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Maps `seed` to a valid variable-name token, one byte at a time.
///
/// - `_` and ASCII alphanumerics are copied through
/// - a digit arriving at an empty buffer is preceded by `_`
/// - any other byte becomes `_`, so a multi-byte UTF-8 character turns
///   into one underscore per byte
///
/// Case is kept and runs of underscores are not collapsed. An empty seed
/// yields an empty string; see [`Identifier::from_seed`] for the checked form.
pub fn sanitize(seed: &str) -> String {
    let mut name = String::with_capacity(seed.len() + 1);

    for b in seed.bytes() {
        if b == b'_' {
            name.push('_');
        } else if b.is_ascii_alphanumeric() {
            if name.is_empty() && !b.is_ascii_alphabetic() {
                name.push('_');
            }
            name.push(char::from(b));
        } else {
            name.push('_');
        }
    }

    name
}

/// A sanitized, non-empty variable name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Sanitizes `seed`, rejecting seeds that produce an empty name
    pub fn from_seed(seed: &str) -> Result<Self> {
        let name = sanitize(seed);
        if name.is_empty() {
            return Err(Error::invalid_identifier(seed));
        }
        Ok(Self(name))
    }

    /// Uses the full path text (directories and extension included) as the seed
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_seed(&path.as_ref().to_string_lossy())
    }

    /// Returns the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_valid_token(s: &str) -> bool {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) if first == '_' || first.is_ascii_alphabetic() => {
                chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
            }
            _ => false,
        }
    }

    #[test]
    fn test_sanitize_known_values() {
        assert_eq!(sanitize("3abc"), "_3abc");
        assert_eq!(sanitize("my-file.bin"), "my_file_bin");
        assert_eq!(sanitize("_ok_123"), "_ok_123");
    }

    #[test]
    fn test_sanitize_paths() {
        assert_eq!(sanitize("assets/logo.png"), "assets_logo_png");
        assert_eq!(sanitize("./data.bin"), "__data_bin");
        assert_eq!(sanitize("C:\\fw\\image v2.bin"), "C__fw_image_v2_bin");
    }

    #[test]
    fn test_sanitize_leading_digit_only_at_start() {
        assert_eq!(sanitize("0"), "_0");
        assert_eq!(sanitize("a1"), "a1");
        // the buffer is no longer empty once a separator is replaced
        assert_eq!(sanitize("-1"), "_1");
        assert_eq!(sanitize("_1"), "_1");
    }

    #[test]
    fn test_sanitize_keeps_case_and_runs() {
        assert_eq!(sanitize("Hello..World"), "Hello__World");
    }

    #[test]
    fn test_sanitize_non_ascii_is_one_underscore_per_byte() {
        assert_eq!(sanitize("café"), "caf__");
        assert_eq!(sanitize("caféx"), "caf__x");
        assert_eq!(sanitize("日本"), "______");
        assert_eq!(sanitize("é1"), "__1");
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn test_sanitize_output_is_always_a_token() {
        let seeds = [
            "x", "9lives", "a b c", "../../etc/passwd", "--", "名前", "\t\n", "0x1F", "__init__",
            "ünïcødé.bin", "123", ".",
        ];
        for seed in seeds {
            let name = sanitize(seed);
            assert!(is_valid_token(&name), "{seed:?} -> {name:?}");
        }
    }

    #[test]
    fn test_identifier_rejects_empty_seed() {
        let err = Identifier::from_seed("").unwrap_err();
        assert!(matches!(err, Error::InvalidIdentifier { .. }));
    }

    #[test]
    fn test_identifier_from_path() {
        let id = Identifier::from_path("res/font.ttf").unwrap();
        assert_eq!(id.as_str(), "res_font_ttf");
        assert_eq!(id.to_string(), "res_font_ttf");
    }
}
