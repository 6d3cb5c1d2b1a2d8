//! Tab-delimited load file encoding.
//!
//! Rows are sequences of nullable text values. This module is the only place
//! the bulk-loader NULL marker exists: callers hand in `None` and get `None`
//! back when reading.

use crate::error::{LoaderError, LoaderResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Bulk-loader NULL marker
const NULL_TOKEN: &str = "\\N";
const DELIMITER: &str = "\t";
const DELIMITER_CHAR: char = '\t';
const LINE_TERMINATOR: &str = "\r\n";
/// Replacement for newlines inside free-text values
pub const NEWLINE_FOLD: &str = "~";

/// Anything that can be written as one load-file row
pub trait TabularRow {
    /// Column values in fixed order
    fn columns(&self) -> Vec<Option<String>>;

    /// Encode as a single line, without terminator
    fn to_line(&self) -> String {
        join_fields(&self.columns())
    }
}

/// Fold embedded newlines in free text into `~` so a record stays on one
/// physical line. This is one-way: a `~` already in the text reads back the
/// same as a folded newline.
pub fn fold_newlines(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace(['\n', '\r'], NEWLINE_FOLD)
}

fn encode_field(value: Option<&str>) -> String {
    match value {
        None => NULL_TOKEN.to_string(),
        Some(v) if v.is_empty() => NULL_TOKEN.to_string(),
        // a stray tab or line break would add a column or split the record
        Some(v) => v
            .replace("\r\n", " ")
            .replace([DELIMITER_CHAR, '\n', '\r'], " "),
    }
}

/// Join values with tabs, writing absent or empty values as the NULL marker
pub fn join_fields(values: &[Option<String>]) -> String {
    values
        .iter()
        .map(|v| encode_field(v.as_deref()))
        .collect::<Vec<_>>()
        .join(DELIMITER)
}

/// Split one encoded line back into values, recognising the NULL marker
pub fn split_line(line: &str) -> Vec<Option<String>> {
    let line = line.strip_suffix(LINE_TERMINATOR).unwrap_or(line);
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.split(DELIMITER)
        .map(|field| {
            if field == NULL_TOKEN {
                None
            } else {
                Some(field.to_string())
            }
        })
        .collect()
}

/// Read every row of an encoded file
pub fn read_rows(path: impl AsRef<Path>) -> LoaderResult<Vec<Vec<Option<String>>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoaderError::io(path, e))?;
    let mut rows = Vec::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LoaderError::io(path, e))?;
        // lines() strips "\n" but leaves the "\r" of a CRLF terminator
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if line.is_empty() {
            continue;
        }
        rows.push(split_line(line));
    }
    Ok(rows)
}

/// Buffered writer producing UTF-8 (no byte-order mark), CRLF-terminated rows
pub struct TabularWriter<W: Write> {
    inner: BufWriter<W>,
    path: PathBuf,
    rows_written: usize,
}

impl TabularWriter<File> {
    pub fn create(path: impl AsRef<Path>) -> LoaderResult<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| LoaderError::io(path, e))?;
        Ok(Self::new(file, path))
    }
}

impl<W: Write> TabularWriter<W> {
    /// Wrap any writer; `path` is only used in error messages
    pub fn new(inner: W, path: impl Into<PathBuf>) -> Self {
        Self {
            inner: BufWriter::new(inner),
            path: path.into(),
            rows_written: 0,
        }
    }

    pub fn write_row<R: TabularRow + ?Sized>(&mut self, row: &R) -> LoaderResult<()> {
        self.write_fields(&row.columns())
    }

    pub fn write_fields(&mut self, values: &[Option<String>]) -> LoaderResult<()> {
        let line = join_fields(values);
        self.inner
            .write_all(line.as_bytes())
            .and_then(|_| self.inner.write_all(LINE_TERMINATOR.as_bytes()))
            .map_err(|e| LoaderError::io(&self.path, e))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Write every row, returning how many were written
    pub fn write_all_rows<'a, R, I>(&mut self, rows: I) -> LoaderResult<usize>
    where
        R: TabularRow + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let before = self.rows_written;
        for row in rows {
            self.write_row(row)?;
        }
        Ok(self.rows_written - before)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flush and hand back the underlying writer
    pub fn finish(self) -> LoaderResult<W> {
        let path = self.path;
        self.inner
            .into_inner()
            .map_err(|e| LoaderError::io(&path, e.into_error()))
    }
}
