//! Destinations for rendered artifacts.
//!
//! The [`ArtifactSink`] trait decouples rendering from where the text ends
//! up. [`FileSink`] writes to disk; [`MemorySink`] keeps artifacts around,
//! which is handy for previews and tests.

use crate::error::{Error, Result};
use crate::transcoder::Artifact;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::{debug, trace};

/// Trait for consuming rendered artifacts
pub trait ArtifactSink {
    /// Persist a single artifact
    fn write(&mut self, artifact: &Artifact) -> Result<()>;
}

/// Writes each artifact to its target path, truncating existing files
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSink;

impl FileSink {
    /// Creates a new file sink
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactSink for FileSink {
    fn write(&mut self, artifact: &Artifact) -> Result<()> {
        let path = &artifact.path;
        trace!("Opening {}", path.display());

        let file = File::create(path).map_err(|e| Error::output_open(path, e))?;
        let mut writer = BufWriter::new(file);

        writer
            .write_all(artifact.content.as_bytes())
            .map_err(|e| Error::output_write(path, e))?;
        writer.flush().map_err(|e| Error::output_write(path, e))?;

        debug!(
            "Flushed {} bytes to {}",
            artifact.content.len(),
            path.display()
        );
        Ok(())
    }
}

/// Collects artifacts in memory
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    /// Artifacts in the order they were written
    pub artifacts: Vec<Artifact>,
}

impl MemorySink {
    /// Creates an empty memory sink
    pub fn new() -> Self {
        Self::default()
    }
}

impl ArtifactSink for MemorySink {
    fn write(&mut self, artifact: &Artifact) -> Result<()> {
        self.artifacts.push(artifact.clone());
        Ok(())
    }
}
