use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;

use super::model::SampleSeries;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read input")]
    Read {
        #[source]
        source: io::Error,
    },

    #[error("line {line}: not valid UTF-8")]
    NotUtf8 { line: u64 },

    #[error("line {line}: invalid CSV record")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },

    #[error("line {line}: expected 2 fields, found {found}")]
    FieldCount { line: u64, found: usize },

    #[error("line {line}, column {column}: '{text}' is not a number")]
    NotNumeric {
        line: u64,
        column: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },

    #[error("no samples in input")]
    Empty,
}

/// Coarse classification of a [`LoadError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    FileNotFound,
    Io,
    Parse,
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::NotFound { .. } => LoadErrorKind::FileNotFound,
            LoadError::Io { .. } | LoadError::Read { .. } => LoadErrorKind::Io,
            LoadError::NotUtf8 { .. }
            | LoadError::Csv { .. }
            | LoadError::FieldCount { .. }
            | LoadError::NotNumeric { .. }
            | LoadError::Empty => LoadErrorKind::Parse,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a `(u, f)` table from a headerless two-column CSV file.
pub fn load_series(path: &Path) -> Result<SampleSeries, LoadError> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let series = read_series(file)?;
    log::info!("Loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}

/// Parse a `(u, f)` table from any reader.
///
/// Layout: no header, one `u, f` pair per line. Whitespace around fields
/// is ignored, `#` starts a comment running to the end of the line, and
/// lines left blank are skipped.
pub fn read_series<R: Read>(reader: R) -> Result<SampleSeries, LoadError> {
    let text = strip_comments(reader)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut pairs = Vec::new();
    let mut record = StringRecord::new();

    loop {
        // Line of the record about to be read, for diagnostics.
        let line = reader.position().line();
        match reader.read_record(&mut record) {
            Ok(true) => {}
            Ok(false) => break,
            Err(source) => return Err(LoadError::Csv { line, source }),
        }
        let line = record.position().map_or(line, |p| p.line());
        pairs.push(parse_pair(&record, line)?);
    }

    if pairs.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(SampleSeries::from_pairs(pairs))
}

/// Drop comments and whitespace-only content, keeping one output line per
/// input line so record positions still match the file.
fn strip_comments<R: Read>(reader: R) -> Result<String, LoadError> {
    let mut text = String::new();
    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line.map_err(|source| match source.kind() {
            io::ErrorKind::InvalidData => LoadError::NotUtf8 {
                line: idx as u64 + 1,
            },
            _ => LoadError::Read { source },
        })?;
        let data = line.split('#').next().unwrap_or_default().trim();
        text.push_str(data);
        text.push('\n');
    }
    Ok(text)
}

fn parse_pair(record: &StringRecord, line: u64) -> Result<(f64, f64), LoadError> {
    if record.len() != 2 {
        return Err(LoadError::FieldCount {
            line,
            found: record.len(),
        });
    }
    Ok((
        parse_field(&record[0], line, 1)?,
        parse_field(&record[1], line, 2)?,
    ))
}

fn parse_field(text: &str, line: u64, column: usize) -> Result<f64, LoadError> {
    text.parse::<f64>().map_err(|source| LoadError::NotNumeric {
        line,
        column,
        text: text.to_string(),
        source,
    })
}
