use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;
use tracing::debug;

use crate::core::types::{Series, Value, ValueKind};
use crate::parsing::value::parse_value;
use crate::utils::validation::{check_line_length, check_series_limit};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid series format: {0}")]
    InvalidFormat(String),

    #[error("Line {line}: expected a {expected} value, found {found}")]
    MixedKinds {
        line: usize,
        expected: ValueKind,
        found: ValueKind,
    },

    #[error("Too many values: {0} exceeds maximum allowed ({max})", max = crate::utils::validation::MAX_SERIES_LEN)]
    TooManyValues(usize),
}

/// How values are laid out in a delimited text file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesFormat {
    /// Field separator
    pub delimiter: char,
    /// Zero-based column holding the values
    pub column: usize,
}

impl Default for SeriesFormat {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            column: 0,
        }
    }
}

impl SeriesFormat {
    /// Default format for a file, choosing `,` for `.csv` (optionally `.gz`) and tab otherwise
    #[must_use]
    pub fn for_path(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        let name = name.strip_suffix(".gz").unwrap_or(&name);
        #[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
        let delimiter = if name.ends_with(".csv") { ',' } else { '\t' };
        Self {
            delimiter,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
fn is_gzipped(path: &Path) -> bool {
    path.to_string_lossy().to_lowercase().ends_with(".gz")
}

/// Parse a series from a delimited text file, decompressing `.gz` files
///
/// Lines are streamed, so the value and line-length limits apply before the
/// whole file is held in memory.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse errors
/// if the content is invalid.
pub fn parse_series_file(path: &Path, format: &SeriesFormat) -> Result<Series, ParseError> {
    let file = std::fs::File::open(path)?;
    let series = if is_gzipped(path) {
        parse_series_reader(BufReader::new(GzDecoder::new(file)), format)?
    } else {
        parse_series_reader(BufReader::new(file), format)?
    };

    debug!(
        path = %path.display(),
        kind = %series.kind(),
        values = series.len(),
        "Parsed series"
    );
    Ok(series)
}

/// Parse a series from delimited text, one value per line
///
/// See [`parse_series_reader`].
///
/// # Errors
///
/// Same as [`parse_series_reader`].
pub fn parse_series_text(text: &str, format: &SeriesFormat) -> Result<Series, ParseError> {
    parse_series_reader(text.as_bytes(), format)
}

/// Parse a series from a buffered reader, one value per line
///
/// Blank lines and lines starting with `#` are skipped. If the first data line
/// does not hold a value in the chosen column it is taken as a header.
///
/// # Errors
///
/// Returns `ParseError::Io` if reading fails, `ParseError::InvalidFormat` if
/// a line is too long, lacks the column or holds an unparseable value, or no
/// values are found; `ParseError::MixedKinds` if numbers and timestamps are
/// mixed; `ParseError::TooManyValues` if the limit is exceeded.
pub fn parse_series_reader<R: BufRead>(
    reader: R,
    format: &SeriesFormat,
) -> Result<Series, ParseError> {
    let mut values: Vec<Value> = Vec::new();
    let mut kind: Option<ValueKind> = None;
    let mut first_data_line = true;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        if let Some(msg) = check_line_length(&line, line_num) {
            return Err(ParseError::InvalidFormat(msg));
        }

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let field = line.split(format.delimiter).nth(format.column);
        let value = field.and_then(parse_value);

        if first_data_line {
            first_data_line = false;
            if value.is_none() {
                debug!(line = line_num, "Treating first data line as header");
                continue;
            }
        }

        let Some(field) = field else {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has no column {}",
                format.column + 1
            )));
        };
        let Some(value) = value else {
            return Err(ParseError::InvalidFormat(format!(
                "Invalid value on line {line_num}: '{}'",
                field.trim()
            )));
        };

        match kind {
            None => kind = Some(value.kind()),
            Some(expected) if expected != value.kind() => {
                return Err(ParseError::MixedKinds {
                    line: line_num,
                    expected,
                    found: value.kind(),
                });
            }
            Some(_) => {}
        }

        // Check value limit for DOS protection
        if check_series_limit(values.len()).is_some() {
            return Err(ParseError::TooManyValues(values.len()));
        }

        values.push(value);
    }

    if values.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No values found in input".to_string(),
        ));
    }

    Series::from_values(&values).ok_or_else(|| {
        ParseError::InvalidFormat("Series mixes numeric and timestamp values".to_string())
    })
}
