//! Delimited text input
//!
//! Loads a survey export (one header row, one row per respondent) into a
//! boolean [`Dataset`]. Every field goes through [`coerce_field`], so blanks
//! and `NA` markers become "not reached" before the engine sees them.

use crate::constants::{DEFAULT_DELIMITER, QUOTE_CHAR};
use crate::domain::coercion::coerce_field;
use crate::domain::dataset::Dataset;
use crate::error::LoadError;
use log::debug;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Parsing options for delimited text
#[derive(Clone, Debug)]
pub struct CsvOptions {
    /// Field delimiter
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl CsvOptions {
    /// Set the field delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check that the delimiter can be told apart from quoting and line breaks
    pub fn validate(&self) -> Result<(), LoadError> {
        match self.delimiter {
            QUOTE_CHAR | '\n' | '\r' => Err(LoadError::InvalidDelimiter(self.delimiter)),
            _ => Ok(()),
        }
    }
}

/// A parsed record and the line it starts on
type Record = (usize, Vec<String>);

/// Load a dataset from a file
pub fn load_dataset(path: impl AsRef<Path>, options: &CsvOptions) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    debug!("Loading dataset from {}", path.display());
    options.validate()?;
    let file = File::open(path)?;
    parse_dataset(BufReader::new(file), options)
}

/// Load a dataset from any reader
pub fn parse_dataset<R: Read>(mut reader: R, options: &CsvOptions) -> Result<Dataset, LoadError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text, options)
}

/// Load a dataset from in-memory text
///
/// Rows shorter than the header are padded with missing values; fully blank
/// lines are skipped.
///
/// # Errors
///
/// [`LoadError::InvalidDelimiter`] if the delimiter is the quote character or
/// a line break, since records could not be split unambiguously.
pub fn parse_str(text: &str, options: &CsvOptions) -> Result<Dataset, LoadError> {
    options.validate()?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text, options.delimiter)?.into_iter();

    let (_, header) = records.next().ok_or(LoadError::MissingHeader)?;
    if let Some(pos) = header.iter().position(|name| name.trim().is_empty()) {
        return Err(LoadError::EmptyHeaderName(pos + 1));
    }

    let width = header.len();
    let mut columns: Vec<Vec<bool>> = vec![Vec::new(); width];
    for (line, fields) in records {
        if fields.len() > width {
            return Err(LoadError::RaggedRow {
                line,
                expected: width,
                found: fields.len(),
            });
        }
        for (col, values) in columns.iter_mut().enumerate() {
            values.push(fields.get(col).is_some_and(|f| coerce_field(f)));
        }
    }

    let names = header.into_iter().map(|name| name.trim().to_string());
    let dataset = Dataset::from_columns(names.zip(columns))?;
    debug!(
        "Loaded {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Split text into records of raw fields
fn split_records(text: &str, delimiter: char) -> Result<Vec<Record>, LoadError> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut quoted = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut quote_line = 1;

    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            if c == QUOTE_CHAR {
                if chars.peek() == Some(&QUOTE_CHAR) {
                    chars.next();
                    field.push(QUOTE_CHAR);
                } else {
                    in_quotes = false;
                }
            } else {
                if c == '\n' {
                    line += 1;
                }
                field.push(c);
            }
            continue;
        }

        match c {
            QUOTE_CHAR => {
                in_quotes = true;
                quoted = true;
                quote_line = line;
            }
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, record_line, std::mem::take(&mut fields), quoted);
                quoted = false;
                line += 1;
                record_line = line;
            }
            c if c == delimiter => fields.push(std::mem::take(&mut field)),
            c => field.push(c),
        }
    }

    if in_quotes {
        return Err(LoadError::UnterminatedQuote { line: quote_line });
    }
    if !field.is_empty() || !fields.is_empty() || quoted {
        fields.push(field);
        push_record(&mut records, record_line, fields, quoted);
    }

    Ok(records)
}

fn push_record(records: &mut Vec<Record>, line: usize, fields: Vec<String>, quoted: bool) {
    let blank = !quoted && fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        records.push((line, fields));
    }
}
