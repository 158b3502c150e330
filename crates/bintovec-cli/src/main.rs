//! bintovec - Embed binary files into C++ sources
//!
//! This tool reads any file and writes it back out as a
//! `const std::vector<unsigned char>` literal, either as a single `.cpp`
//! file or as a `.hpp`/`.cpp` pair.

use anyhow::{Context, Result};
use bintovec_core::{Artifact, ArtifactSink, ErrorKind, FileSink, OutputOptions, Transcoder};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, Level};
use tracing_subscriber::EnvFilter;

/// Embed a binary file into C++ source as a std::vector<unsigned char>
#[derive(Parser, Debug)]
#[command(name = "bintovec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// The input file to turn into a C++ vector<>
    input: PathBuf,

    /// Output path stem; extensions are appended (example -> example.hpp/example.cpp)
    output: PathBuf,

    /// C++ variable name used in the output (defaults to the input path)
    #[arg(short, long)]
    name: Option<String>,

    /// C++ namespace the resulting vector is placed into
    #[arg(long, visible_alias = "ns")]
    namespace: Option<String>,

    /// Also write a header with an extern declaration
    #[arg(short, long)]
    split: bool,

    /// Dry run - print the generated sources instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn output_options(&self) -> OutputOptions {
        OutputOptions {
            identifier_override: self.name.clone(),
            namespace: self.namespace.clone(),
            split_output: self.split,
        }
    }
}

/// Prints artifacts to stdout instead of writing them
struct DryRunSink<W: Write> {
    out: W,
}

impl<W: Write> ArtifactSink for DryRunSink<W> {
    fn write(&mut self, artifact: &Artifact) -> bintovec_core::Result<()> {
        let path = &artifact.path;
        writeln!(self.out, "// ---- {} ----", path.display())
            .and_then(|()| self.out.write_all(artifact.content.as_bytes()))
            .map_err(|e| bintovec_core::Error::output_write(path, e))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code(&e))
        }
    }
}

/// Transcode the input and write (or print) the artifacts
fn run(cli: &Cli) -> Result<()> {
    let options = cli.output_options();
    debug!("Options: {:?}", options);

    let transcoder = Transcoder::new();
    let artifacts = if cli.dry_run {
        let mut sink = DryRunSink {
            out: io::stdout().lock(),
        };
        transcoder.run(&cli.input, &cli.output, &options, &mut sink)
    } else {
        transcoder.run(&cli.input, &cli.output, &options, &mut FileSink::new())
    }
    .with_context(|| format!("Failed to embed {}", cli.input.display()))?;

    if artifacts.is_empty() {
        info!("{} is empty, no output written", cli.input.display());
    } else if !cli.dry_run {
        for artifact in &artifacts {
            println!("Wrote {}", artifact.path.display());
        }
    }

    Ok(())
}

/// Maps a failure to a distinct exit status per error class
fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<bintovec_core::Error>().map(|e| e.kind()) {
        Some(ErrorKind::Argument) => 2,
        Some(ErrorKind::InputOpen) => 3,
        Some(ErrorKind::Read) => 4,
        Some(ErrorKind::Output) => 5,
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bintovec").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_output_options_from_args() {
        let cli = parse(&["in.bin", "out", "-n", "blob", "--ns", "assets", "--split"]);
        assert_eq!(
            cli.output_options(),
            OutputOptions::new()
                .identifier_override("blob")
                .namespace("assets")
                .split_output(true)
        );

        let cli = parse(&["in.bin", "out"]);
        assert_eq!(cli.output_options(), OutputOptions::new());
    }

    #[test]
    fn test_missing_output_is_usage_error() {
        assert!(Cli::try_parse_from(["bintovec", "in.bin"]).is_err());
    }

    #[test]
    fn test_run_writes_pair() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("icon.ico");
        fs::write(&input, [0u8, 0, 1, 0]).unwrap();
        let stem = temp_dir.path().join("icon");

        let cli = parse(&[
            input.to_str().unwrap(),
            stem.to_str().unwrap(),
            "--name",
            "icon",
            "--namespace",
            "res",
            "-s",
        ]);
        run(&cli).unwrap();

        let hpp = fs::read_to_string(temp_dir.path().join("icon.hpp")).unwrap();
        let cpp = fs::read_to_string(temp_dir.path().join("icon.cpp")).unwrap();
        assert!(hpp.contains("    extern const std::vector<unsigned char> icon;\n"));
        assert!(cpp.contains("        0x00, 0x00, 0x01, 0x00\n    };\n}\n"));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("a.bin");
        fs::write(&input, [1u8]).unwrap();
        let stem = temp_dir.path().join("a");

        let cli = parse(&[input.to_str().unwrap(), stem.to_str().unwrap(), "--dry-run"]);
        run(&cli).unwrap();

        assert!(!temp_dir.path().join("a.cpp").exists());
    }

    #[test]
    fn test_dry_run_sink_output() {
        let mut sink = DryRunSink { out: Vec::new() };
        let artifact = Artifact {
            kind: bintovec_core::ArtifactKind::Definition,
            path: PathBuf::from("x.cpp"),
            content: "body\n".to_string(),
        };
        sink.write(&artifact).unwrap();

        assert_eq!(String::from_utf8(sink.out).unwrap(), "// ---- x.cpp ----\nbody\n");
    }

    #[test]
    fn test_exit_codes() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.bin");
        let cli = parse(&[missing.to_str().unwrap(), "out"]);
        assert_eq!(exit_code(&run(&cli).unwrap_err()), 3);

        let input = temp_dir.path().join("data.bin");
        fs::write(&input, [1u8]).unwrap();
        let bad_stem = temp_dir.path().join("no_dir").join("data");
        let cli = parse(&[input.to_str().unwrap(), bad_stem.to_str().unwrap()]);
        assert_eq!(exit_code(&run(&cli).unwrap_err()), 5);

        let cli = parse(&[input.to_str().unwrap(), "out", "--name", ""]);
        assert_eq!(exit_code(&run(&cli).unwrap_err()), 2);

        assert_eq!(exit_code(&anyhow::anyhow!("other")), 1);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
