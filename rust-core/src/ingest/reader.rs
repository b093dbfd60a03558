//! CSV ingestion of two-column (time, amplitude) data
//!
//! Rows must carry exactly two numeric fields. A header row is optional.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, trace};

use super::series::SampleSeries;
use crate::error::{Result, SpectralError, MIN_SAMPLES};

/// How the first CSV record is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeaderMode {
    /// Skip the first record only if none of its fields is numeric
    #[default]
    Auto,

    /// First record is always a header
    Present,

    /// Every record is data
    Absent,
}

/// CSV reader configuration
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Header handling for the first record
    pub header: HeaderMode,

    /// Field delimiter
    pub delimiter: u8,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            header: HeaderMode::Auto,
            delimiter: b',',
        }
    }
}

/// Read a series from a CSV file with default options
pub fn read_series<P: AsRef<Path>>(path: P) -> Result<SampleSeries> {
    read_series_with(path, &ReadOptions::default())
}

/// Read a series from a CSV file
///
/// # Errors
/// * `Io` - the file cannot be opened or read
/// * `MalformedInput` - a row has the wrong field count or a non-numeric value
/// * `EmptyInput` - fewer than two data rows
pub fn read_series_with<P: AsRef<Path>>(path: P, options: &ReadOptions) -> Result<SampleSeries> {
    let path = path.as_ref();
    debug!("Reading sample series from {}", path.display());
    let file = File::open(path)?;
    read_series_from_reader(file, options)
}

/// Read a series from any byte source
pub fn read_series_from_reader<R: Read>(reader: R, options: &ReadOptions) -> Result<SampleSeries> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .delimiter(options.delimiter)
        .from_reader(reader);

    let mut time = Vec::new();
    let mut amplitude = Vec::new();
    let mut record = StringRecord::new();
    let mut first = true;

    while csv_reader.read_record(&mut record)? {
        let line = record.position().map(|pos| pos.line()).unwrap_or(0);

        if first {
            first = false;
            match options.header {
                HeaderMode::Present => {
                    debug!("Skipping header on line {}", line);
                    continue;
                }
                HeaderMode::Auto if is_header(&record) => {
                    debug!("Treating line {} as header: {:?}", line, record);
                    continue;
                }
                _ => {}
            }
        }

        let (t, a) = parse_row(&record, line)?;
        trace!("line {}: t={} a={}", line, t, a);
        time.push(t);
        amplitude.push(a);
    }

    if time.len() < MIN_SAMPLES {
        return Err(SpectralError::EmptyInput {
            found: time.len(),
            required: MIN_SAMPLES,
        });
    }

    debug!("Read {} samples", time.len());
    SampleSeries::new(time, amplitude)
}

fn is_header(record: &StringRecord) -> bool {
    !record.iter().any(|field| field.parse::<f64>().is_ok())
}

fn parse_row(record: &StringRecord, line: u64) -> Result<(f64, f64)> {
    if record.len() != 2 {
        return Err(SpectralError::MalformedInput {
            line,
            reason: format!("expected 2 columns, found {}", record.len()),
        });
    }

    Ok((parse_field(&record[0], "time", line)?, parse_field(&record[1], "amplitude", line)?))
}

fn parse_field(field: &str, column: &str, line: u64) -> Result<f64> {
    let value: f64 = field.parse().map_err(|_| SpectralError::MalformedInput {
        line,
        reason: format!("{} value {:?} is not a number", column, field),
    })?;

    if !value.is_finite() {
        return Err(SpectralError::MalformedInput {
            line,
            reason: format!("{} value {:?} is not finite", column, field),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<SampleSeries> {
        read_series_from_reader(text.as_bytes(), &ReadOptions::default())
    }

    #[test]
    fn test_read_without_header() {
        let series = read("0.0,1.0\n0.5,2.0\n1.0,3.0\n").unwrap();
        assert_eq!(series.time(), &[0.0, 0.5, 1.0]);
        assert_eq!(series.amplitude(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_read_auto_header() {
        let series = read("time,measured\n0,1\n1,2\n").unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.amplitude(), &[1.0, 2.0]);
    }

    #[test]
    fn test_read_trims_whitespace_and_blank_lines() {
        let series = read(" 0 , 1 \n\n 1 , -2.5e-1 \n").unwrap();
        assert_eq!(series.amplitude(), &[1.0, -0.25]);
    }

    #[test]
    fn test_non_numeric_amplitude_is_malformed() {
        let err = read("0,1\n1,abc\n2,3\n").unwrap_err();
        match err {
            SpectralError::MalformedInput { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("amplitude"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_column_count_is_malformed() {
        let err = read("0,1\n1,2,3\n").unwrap_err();
        assert!(matches!(err, SpectralError::MalformedInput { line: 2, .. }));

        let err = read("0,1\n1\n").unwrap_err();
        assert!(matches!(err, SpectralError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn test_non_finite_is_malformed() {
        let err = read("0,1\n1,NaN\n").unwrap_err();
        assert!(matches!(err, SpectralError::MalformedInput { .. }));
    }

    #[test]
    fn test_too_few_rows() {
        let err = read("t,a\n0,1\n").unwrap_err();
        assert!(matches!(err, SpectralError::EmptyInput { found: 1, required: 2 }));

        let err = read("").unwrap_err();
        assert!(matches!(err, SpectralError::EmptyInput { found: 0, .. }));
    }

    #[test]
    fn test_malformed_first_row_is_not_a_header() {
        for text in ["0,abc\n1,2\n2,3\n", "0,1,7\n1,2\n2,3\n", "0,NaN\n1,2\n2,3\n"] {
            match read(text) {
                Err(SpectralError::MalformedInput { line, .. }) => assert_eq!(line, 1, "{:?}", text),
                other => panic!("{:?}: unexpected result {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_header_absent_rejects_text() {
        let options = ReadOptions {
            header: HeaderMode::Absent,
            ..ReadOptions::default()
        };
        let err = read_series_from_reader("time,value\n0,1\n1,2\n".as_bytes(), &options).unwrap_err();
        assert!(matches!(err, SpectralError::MalformedInput { line: 1, .. }));
    }

    #[test]
    fn test_header_present_skips_numeric_row() {
        let options = ReadOptions {
            header: HeaderMode::Present,
            ..ReadOptions::default()
        };
        let series = read_series_from_reader("9,9\n0,1\n1,2\n".as_bytes(), &options).unwrap();
        assert_eq!(series.time(), &[0.0, 1.0]);
    }

    #[test]
    fn test_custom_delimiter() {
        let options = ReadOptions {
            delimiter: b';',
            ..ReadOptions::default()
        };
        let series = read_series_from_reader("0;1\n1;2\n".as_bytes(), &options).unwrap();
        assert_eq!(series.amplitude(), &[1.0, 2.0]);
    }
}
