//! # bintovec-core
//!
//! A library for embedding binary files into C++ sources as
//! `std::vector<unsigned char>` literals.
//!
//! This crate provides the core functionality for:
//! - Deriving a valid variable name from a path or user-supplied seed
//! - Streaming a byte source into a line-wrapped hex array literal
//! - Emitting a combined source file, or a declaration/definition pair,
//!   optionally wrapped in a namespace
//!
//! ## Architecture
//!
//! - [`identifier`]: Variable name sanitization
//! - [`render`]: Hex token grammar and C++ source layout
//! - [`transcoder`]: Chunked reading and artifact assembly
//! - [`sink`]: Artifact destinations
//! - [`error`]: Error types and handling
//!
//! ## Example
//!
//! ```
//! use bintovec_core::{OutputOptions, Transcoder};
//! use std::io::Cursor;
//! use std::path::Path;
//!
//! let artifacts = Transcoder::new().transcode(
//!     Cursor::new([0xdeu8, 0xad, 0xbe, 0xef]),
//!     Path::new("magic.bin"),
//!     Path::new("magic"),
//!     &OutputOptions::new(),
//! )?;
//!
//! let definition = artifacts.definition().unwrap();
//! assert!(definition.content.contains("magic_bin"));
//! assert!(definition.content.contains("0xde, 0xad, 0xbe, 0xef"));
//! # Ok::<(), bintovec_core::Error>(())
//! ```
//!
//! ## Extensibility
//!
//! - [`ArtifactSink`]: Customize where rendered artifacts are written
//!

#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, unreachable_pub)]

pub mod error;
pub mod identifier;
pub mod render;
pub mod sink;
pub mod transcoder;

// Re-export primary types for convenience
pub use error::{Error, ErrorKind, Result};
pub use identifier::{sanitize, Identifier};
pub use render::{hex_token, parse_hex_tokens, LiteralBuilder};
pub use sink::{ArtifactSink, FileSink, MemorySink};
pub use transcoder::{
    Artifact, ArtifactKind, ArtifactSet, OutputOptions, Transcoder, TranscoderConfig,
};

/// Crate version for programmatic access
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
