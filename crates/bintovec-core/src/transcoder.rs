//! Streaming byte-to-literal transcoding.
//!
//! The [`Transcoder`] reads its input in fixed-size chunks, renders every
//! byte into the array body as it goes, and assembles one artifact
//! (combined mode) or two (split mode) once the input is exhausted.
//!
//! Everything is rendered in memory before any output target is touched,
//! so a read failure leaves existing outputs exactly as they were.
//!
//! ## Example
//!
//! ```no_run
//! use bintovec_core::{FileSink, OutputOptions, Transcoder};
//!
//! let options = OutputOptions::new().namespace("assets").split_output(true);
//! let artifacts = Transcoder::new().run("logo.png", "src/logo", &options, &mut FileSink::new())?;
//! for artifact in artifacts.iter() {
//!     println!("{}", artifact.path.display());
//! }
//! # Ok::<(), bintovec_core::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::identifier::Identifier;
use crate::render::{render_declaration, render_definition, Layout, LiteralBuilder};
use crate::sink::ArtifactSink;
use std::ffi::OsString;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Formatting and I/O constants for the transcoder
#[derive(Debug, Clone)]
pub struct TranscoderConfig {
    /// Bytes requested per read (does not affect output)
    pub chunk_size: usize,
    /// Byte tokens per line
    pub bytes_per_line: usize,
    /// One level of indentation
    pub indent: String,
    /// Extension appended to the stem for the declaration file
    pub declaration_extension: String,
    /// Extension appended to the stem for the definition file
    pub definition_extension: String,
}

impl Default for TranscoderConfig {
    fn default() -> Self {
        Self {
            chunk_size: 32 * 1024,
            bytes_per_line: 8,
            indent: "    ".to_string(),
            declaration_extension: "hpp".to_string(),
            definition_extension: "cpp".to_string(),
        }
    }
}

impl TranscoderConfig {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read chunk size (clamped to at least 1)
    pub fn chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Sets the number of byte tokens per line (clamped to at least 1)
    pub fn bytes_per_line(mut self, count: usize) -> Self {
        self.bytes_per_line = count.max(1);
        self
    }

    /// Sets the indentation string
    pub fn indent(mut self, s: impl Into<String>) -> Self {
        self.indent = s.into();
        self
    }

    /// Sets the declaration file extension
    pub fn declaration_extension(mut self, ext: impl Into<String>) -> Self {
        self.declaration_extension = ext.into();
        self
    }

    /// Sets the definition file extension
    pub fn definition_extension(mut self, ext: impl Into<String>) -> Self {
        self.definition_extension = ext.into();
        self
    }
}

/// Per-run options: naming, scoping, and whether to split the output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputOptions {
    /// Seed for the variable name; the input path is used when absent
    pub identifier_override: Option<String>,
    /// Enclosing namespace, inserted verbatim
    pub namespace: Option<String>,
    /// Emit a declaration file alongside the definition
    pub split_output: bool,
}

impl OutputOptions {
    /// Creates options for combined output with a path-derived name
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the variable name seed
    pub fn identifier_override(mut self, seed: impl Into<String>) -> Self {
        self.identifier_override = Some(seed.into());
        self
    }

    /// Sets the enclosing namespace
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Sets whether a separate declaration file is emitted
    pub fn split_output(mut self, split: bool) -> Self {
        self.split_output = split;
        self
    }

    /// Resolves the variable name for an input read from `source`
    pub fn resolve_identifier(&self, source: &Path) -> Result<Identifier> {
        match &self.identifier_override {
            Some(seed) => Identifier::from_seed(seed),
            None => Identifier::from_path(source),
        }
    }
}

/// Which half of the output an artifact is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    /// `extern` declaration, no byte data
    Declaration,
    /// Full array definition
    Definition,
}

/// A rendered text output and where it should go
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Declaration or definition
    pub kind: ArtifactKind,
    /// Target path
    pub path: PathBuf,
    /// Full file contents
    pub content: String,
}

/// The artifacts produced by one run, definition first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    artifacts: Vec<Artifact>,
}

impl ArtifactSet {
    /// Returns true if nothing was produced (empty input)
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }

    /// Number of artifacts
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// Iterates over the artifacts in write order
    pub fn iter(&self) -> std::slice::Iter<'_, Artifact> {
        self.artifacts.iter()
    }

    /// Returns the definition artifact, if any
    pub fn definition(&self) -> Option<&Artifact> {
        self.find(ArtifactKind::Definition)
    }

    /// Returns the declaration artifact, if any
    pub fn declaration(&self) -> Option<&Artifact> {
        self.find(ArtifactKind::Declaration)
    }

    fn find(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.kind == kind)
    }

    /// Writes every artifact to `sink`, stopping at the first failure.
    ///
    /// The definition goes first, so a declaration is only written once
    /// the data it refers to exists.
    pub fn write_to<S: ArtifactSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        for artifact in &self.artifacts {
            sink.write(artifact)?;
            info!("Wrote {}", artifact.path.display());
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = &'a Artifact;
    type IntoIter = std::slice::Iter<'a, Artifact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Converts byte streams into C++ array sources
#[derive(Debug, Clone, Default)]
pub struct Transcoder {
    config: TranscoderConfig,
}

impl Transcoder {
    /// Creates a new transcoder with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new transcoder with custom configuration
    pub fn with_config(config: TranscoderConfig) -> Self {
        Self { config }
    }

    /// Output path for one artifact kind: the stem with `.ext` appended
    pub fn artifact_path(&self, output_stem: &Path, kind: ArtifactKind) -> PathBuf {
        let ext = match kind {
            ArtifactKind::Declaration => &self.config.declaration_extension,
            ArtifactKind::Definition => &self.config.definition_extension,
        };
        let mut path = OsString::from(output_stem.as_os_str());
        path.push(".");
        path.push(ext);
        PathBuf::from(path)
    }

    /// Reads `reader` to the end and renders the artifacts.
    ///
    /// `source` names the input in errors and seeds the variable name when
    /// no override is set. An empty input yields an empty [`ArtifactSet`].
    pub fn transcode<R: Read>(
        &self,
        mut reader: R,
        source: &Path,
        output_stem: &Path,
        options: &OutputOptions,
    ) -> Result<ArtifactSet> {
        let identifier = options.resolve_identifier(source)?;
        let layout = Layout::new(
            &identifier,
            options.namespace.as_deref(),
            &self.config.indent,
        );

        let mut builder = LiteralBuilder::new(layout.body_prefix(), self.config.bytes_per_line);
        let mut buffer = vec![0u8; self.config.chunk_size.max(1)];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(Error::read(source, e)),
            };
            trace!("Read chunk of {} bytes from {}", read, source.display());
            builder.push_bytes(&buffer[..read]);
        }

        if builder.is_empty() {
            debug!("{} is empty, nothing to emit", source.display());
            return Ok(ArtifactSet::default());
        }

        debug!(
            "Read {} bytes from {} as '{}'",
            builder.len(),
            source.display(),
            identifier
        );

        let mut artifacts = vec![Artifact {
            kind: ArtifactKind::Definition,
            path: self.artifact_path(output_stem, ArtifactKind::Definition),
            content: render_definition(&layout, builder.as_str()),
        }];

        if options.split_output {
            artifacts.push(Artifact {
                kind: ArtifactKind::Declaration,
                path: self.artifact_path(output_stem, ArtifactKind::Declaration),
                content: render_declaration(&layout),
            });
        }

        Ok(ArtifactSet { artifacts })
    }

    /// Opens `input` and transcodes it
    pub fn transcode_file(
        &self,
        input: impl AsRef<Path>,
        output_stem: impl AsRef<Path>,
        options: &OutputOptions,
    ) -> Result<ArtifactSet> {
        let input = input.as_ref();
        trace!("Opening {}", input.display());
        let file = File::open(input).map_err(|e| Error::input_open(input, e))?;
        self.transcode(file, input, output_stem.as_ref(), options)
    }

    /// Transcodes `input` and writes the result to `sink`
    pub fn run<S: ArtifactSink + ?Sized>(
        &self,
        input: impl AsRef<Path>,
        output_stem: impl AsRef<Path>,
        options: &OutputOptions,
        sink: &mut S,
    ) -> Result<ArtifactSet> {
        let artifacts = self.transcode_file(input, output_stem, options)?;
        artifacts.write_to(sink)?;
        Ok(artifacts)
    }
}
