//! Hex literal rendering for the array body.
//!
//! Bytes render as `0xHH` with two lowercase digits, grouped into lines of a
//! fixed width. The grammar is byte-for-byte deterministic:
//!
//! - tokens within a line are separated by `", "`
//! - every line after the first is preceded by `","`, a line break and the
//!   line prefix
//! - the first line starts with a line break and the prefix, no comma
//! - nothing follows the final token
//!
//! Grouping counts bytes across all pushed chunks, so how the input is
//! split into chunks never shows up in the output.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Renders `byte` as the four ASCII characters `0xHH`
#[inline]
pub fn hex_token(byte: u8) -> [u8; 4] {
    [
        b'0',
        b'x',
        HEX_DIGITS[usize::from(byte >> 4)],
        HEX_DIGITS[usize::from(byte & 0x0f)],
    ]
}

/// Appends the `0xHH` rendering of `byte` to `out`
#[inline]
pub fn push_hex_token(out: &mut String, byte: u8) {
    for c in hex_token(byte) {
        out.push(char::from(c));
    }
}

/// Incrementally builds the line-wrapped token text of an array literal
#[derive(Debug, Clone)]
pub struct LiteralBuilder {
    buffer: String,
    line_prefix: String,
    bytes_per_line: usize,
    count: u64,
}

impl LiteralBuilder {
    /// Creates a builder that wraps every `bytes_per_line` tokens and
    /// starts each line with `line_prefix`. A width of zero is treated as one.
    pub fn new(line_prefix: impl Into<String>, bytes_per_line: usize) -> Self {
        Self {
            buffer: String::new(),
            line_prefix: line_prefix.into(),
            bytes_per_line: bytes_per_line.max(1),
            count: 0,
        }
    }

    /// Appends a chunk of input bytes
    pub fn push_bytes(&mut self, chunk: &[u8]) {
        // ",\n" + prefix per line, ", 0xHH" per byte
        let lines = chunk.len() / self.bytes_per_line + 1;
        self.buffer
            .reserve(chunk.len() * 6 + lines * (self.line_prefix.len() + 2));

        let width = self.bytes_per_line as u64;
        for &byte in chunk {
            if self.count % width == 0 {
                if self.count != 0 {
                    self.buffer.push(',');
                }
                self.buffer.push('\n');
                self.buffer.push_str(&self.line_prefix);
            } else {
                self.buffer.push_str(", ");
            }
            push_hex_token(&mut self.buffer, byte);
            self.count += 1;
        }
    }

    /// Number of bytes rendered so far
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Returns true if no bytes have been pushed
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the rendered text so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Consumes the builder, returning the rendered text
    pub fn finish(self) -> String {
        self.buffer
    }
}

/// Recovers the bytes from rendered text.
///
/// Only lines whose first non-blank characters are `0x` are considered, so
/// the declaration line and braces are skipped. Returns `None` if such a
/// line holds a token that is not a valid `0xHH` literal.
pub fn parse_hex_tokens(text: &str) -> Option<Vec<u8>> {
    let mut bytes = Vec::new();

    for line in text.lines().map(str::trim) {
        if !line.starts_with("0x") {
            continue;
        }
        for token in line.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            let digits = token.strip_prefix("0x")?;
            if digits.len() != 2 {
                return None;
            }
            bytes.push(u8::from_str_radix(digits, 16).ok()?);
        }
    }

    Some(bytes)
}
