//! Report writers.
//!
//! Every run produces two files next to each other:
//! * `<prefix>_subdomains.csv` with a `Subdomain,IP` header.
//! * `<prefix>_subdomains.json`, an array of `{"subdomain", "ip"}` objects.
//!
//! Both describe the same records in the same order. Unlike the source and
//! resolution stages, a failure here is fatal for the run.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use subscout_common::{Domain, ResolutionResult, debug};
use thiserror::Error;

const CSV_HEADER: [&str; 2] = ["Subdomain", "IP"];
const JSON_INDENT: &[u8] = b"    ";

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("cannot create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot write CSV report {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("cannot write JSON report {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
}

impl OutputPaths {
    pub fn from_prefix(prefix: &Path) -> Self {
        Self {
            csv: with_suffix(prefix, "_subdomains.csv"),
            json: with_suffix(prefix, "_subdomains.json"),
        }
    }
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
    let mut path: OsString = prefix.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

/// Report prefix for `domain` inside `output_dir`.
pub fn destination_prefix(output_dir: &Path, domain: &Domain) -> PathBuf {
    output_dir.join(domain.as_str())
}

/// Creates `dir` and its parents if needed.
pub fn prepare_output_dir(dir: &Path) -> Result<(), SinkError> {
    if !dir.is_dir() {
        debug!("creating output directory {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|source| SinkError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes both reports for `results`. The parent directory must exist.
pub fn persist(results: &[ResolutionResult], prefix: &Path) -> Result<OutputPaths, SinkError> {
    let paths = OutputPaths::from_prefix(prefix);
    write_csv(results, &paths.csv)?;
    write_json(results, &paths.json)?;
    Ok(paths)
}

pub fn write_csv(results: &[ResolutionResult], path: &Path) -> Result<(), SinkError> {
    let csv_err = |source: csv::Error| SinkError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = csv::Writer::from_path(path).map_err(csv_err)?;
    writer.write_record(CSV_HEADER).map_err(csv_err)?;
    for result in results {
        let ip: String = result.ip_or_unresolved();
        writer
            .write_record([result.subdomain.as_str(), ip.as_str()])
            .map_err(csv_err)?;
    }
    writer.flush().map_err(|source| SinkError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_json(results: &[ResolutionResult], path: &Path) -> Result<(), SinkError> {
    let io_err = |source: io::Error| SinkError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut serializer =
        Serializer::with_formatter(BufWriter::new(file), PrettyFormatter::with_indent(JSON_INDENT));
    results
        .serialize(&mut serializer)
        .map_err(|source| SinkError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    serializer.into_inner().flush().map_err(io_err)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
