use super::config::LoaderConfig;
use super::error::LoaderError;
use super::parse::{is_numeric, parse_cell, parse_time};
use crate::dynamic_data::DynamicData;
use crate::types::{FIELD_SYMBOL, FIELD_TIME, FIELD_VALUE};
use csv::{ReaderBuilder, StringRecord};
use smol_str::SmolStr;
use std::io::Read;
use tracing::{debug, trace};

/// Builds [`DynamicData`] records from a delimited feed: one header row naming
/// the columns, then one record per data row.
///
/// Every cell is written through `set_by_name` under its column name, so a
/// column literally called `Symbol` or `Value` lands on the reserved field
/// and a `Price` column fails the row.
#[derive(Debug, Clone)]
pub struct ColumnarLoader {
    config: LoaderConfig,
    columns: Vec<SmolStr>,
    time_idx: usize,
    value_idx: Option<usize>,
}

impl ColumnarLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self {
            config,
            columns: Vec::new(),
            time_idx: 0,
            value_idx: None,
        }
    }

    #[inline]
    pub fn columns(&self) -> &[SmolStr] {
        &self.columns
    }

    /// Parse the header row. Replaces any previous header.
    pub fn read_header(&mut self, line: &str) -> Result<(), LoaderError> {
        let record = self.split_line(line)?;
        self.set_header(&record)
    }

    /// Parse one data row into a fresh record.
    pub fn read_row(&self, line: &str) -> Result<DynamicData, LoaderError> {
        if self.columns.is_empty() {
            return Err(LoaderError::HeaderNotRead);
        }
        let record = self.split_line(line)?;
        self.read_record(&record)
    }

    /// Read a whole feed: the first non-blank row is the header, blank rows
    /// are skipped.
    pub fn read_all<R: Read>(&mut self, reader: R) -> Result<Vec<DynamicData>, LoaderError> {
        let mut csv_reader = self.builder()?.from_reader(reader);
        let mut records = Vec::new();
        let mut row = StringRecord::new();
        let mut header_read = false;
        while csv_reader.read_record(&mut row)? {
            if is_blank(&row) {
                continue;
            }
            if !header_read {
                self.set_header(&row)?;
                header_read = true;
                continue;
            }
            records.push(self.read_record(&row)?);
        }
        Ok(records)
    }

    fn builder(&self) -> Result<ReaderBuilder, LoaderError> {
        let delimiter = u8::try_from(self.config.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(LoaderError::InvalidDelimiter(self.config.delimiter))?;
        let mut builder = ReaderBuilder::new();
        // Row width is checked against the header in `read_record`.
        builder.delimiter(delimiter).has_headers(false).flexible(true);
        Ok(builder)
    }

    fn split_line(&self, line: &str) -> Result<StringRecord, LoaderError> {
        let mut reader = self.builder()?.from_reader(line.as_bytes());
        Ok(reader.records().next().transpose()?.unwrap_or_default())
    }

    fn set_header(&mut self, record: &StringRecord) -> Result<(), LoaderError> {
        if is_blank(record) {
            return Err(LoaderError::EmptyHeader);
        }
        let columns: Vec<SmolStr> = record
            .iter()
            .map(|c| SmolStr::new(c.trim_start_matches('\u{feff}').trim()))
            .collect();

        let find = |name: &str| columns.iter().position(|c| c.eq_ignore_ascii_case(name));
        let time_idx = find(self.config.time_column.as_str())
            .ok_or_else(|| LoaderError::MissingColumn(self.config.time_column.clone()))?;
        let value_idx = find(self.config.value_column.as_str());
        if value_idx.is_none() {
            debug!(column = %self.config.value_column, "value column not in header");
        }

        trace!(columns = columns.len(), "read header");
        self.time_idx = time_idx;
        self.value_idx = value_idx;
        self.columns = columns;
        Ok(())
    }

    fn read_record(&self, record: &StringRecord) -> Result<DynamicData, LoaderError> {
        if record.len() != self.columns.len() {
            return Err(LoaderError::ColumnCount {
                expected: self.columns.len(),
                actual: record.len(),
            });
        }

        let mut data = DynamicData::new();
        if !self.config.symbol.is_empty() {
            data.set_by_name(FIELD_SYMBOL, self.config.symbol.clone())?;
        }

        for (i, (name, cell)) in self.columns.iter().zip(record.iter()).enumerate() {
            if i == self.time_idx {
                let time = parse_time(cell, &self.config.time_formats)
                    .ok_or_else(|| LoaderError::InvalidTime(cell.trim().to_string()))?;
                data.set_by_name(FIELD_TIME, time)?;
                continue;
            }
            let value = parse_cell(cell, &self.config.time_formats);
            if Some(i) == self.value_idx && is_numeric(&value) {
                data.set_by_name(FIELD_VALUE, value.clone())?;
            }
            data.set_by_name(name, value)?;
        }

        debug!(symbol = data.symbol(), time = %data.time(), "loaded row");
        Ok(data)
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|c| c.trim().is_empty())
}
