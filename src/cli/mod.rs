pub(crate) mod logger;

use iniread::{Document, ParseError};
use log::{debug, warn};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub(crate) const VERSION: &str = env!("CARGO_PKG_VERSION");

const STDIN_PATH: &str = "-";

#[derive(Debug, Default, PartialEq)]
pub(crate) struct Config {
    pub(crate) help: bool,
    pub(crate) inputs: Vec<PathBuf>,
    pub(crate) verbose: bool,
    pub(crate) version: bool,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum RuntimeError {
    #[error("missing input file argument")]
    CliMissingInput,
    #[error("unknown argument: {0}")]
    CliUnknownArgument(String),
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum LoadError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseError),
}

pub(crate) fn help() {
    println!(
        "Usage:
iniread --version
iniread [-v|--verbose] FILE...

Lists every option of the given INI files as section.key=value.
Use - to read from stdin."
    );
}

pub(crate) fn parse_args(args: Vec<String>) -> Result<Config, RuntimeError> {
    let mut cfg = Config::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "-v" | "--verbose" => cfg.verbose = true,
            "--version" => cfg.version = true,
            s if s.starts_with('-') && s != STDIN_PATH => {
                return Err(RuntimeError::CliUnknownArgument(s.to_owned()))
            }
            s => cfg.inputs.push(PathBuf::from(s)),
        }
    }

    if cfg.inputs.is_empty() && !(cfg.help || cfg.version) {
        return Err(RuntimeError::CliMissingInput);
    }

    Ok(cfg)
}

pub(crate) fn load_path(path: &Path) -> Result<Document, LoadError> {
    if path == Path::new(STDIN_PATH) {
        return Ok(iniread::read_all(io::stdin().lock())?);
    }

    let file = File::open(path)?;
    Ok(iniread::read_all(file)?)
}

pub(crate) fn write_listing<W: Write>(doc: &Document, writer: &mut W) -> io::Result<()> {
    for (section, options) in doc.iter() {
        for (key, value) in options.iter() {
            writeln!(writer, "{section}.{key}={value}")?;
        }
    }

    Ok(())
}

/// List all inputs of `cfg`, returns `false` if any of them failed to load
pub(crate) fn run<W: Write>(cfg: &Config, writer: &mut W) -> io::Result<bool> {
    let mut all_loaded = true;

    for path in &cfg.inputs {
        debug!("Loading {path:?}");

        match load_path(path) {
            Ok(doc) => write_listing(&doc, writer)?,
            Err(e) => {
                warn!("Error loading {path:?}: {e}");
                all_loaded = false;
            }
        }
    }

    writer.flush()?;

    Ok(all_loaded)
}
