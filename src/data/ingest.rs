//! Measured profile ingest
//!
//! Reads the two-column text files produced by the measurement workflow:
//!
//! ```text
//! Distance,Concentration      <- optional header
//! 1,1.56822
//! 2,1.40110
//! ...
//! ```
//!
//! or the same data separated by tabs, without header.
//!
//! - **Delimiter**: tab when the first non-empty line contains one, comma otherwise
//! - **Header**: a first row whose distance is not numeric is skipped
//! - **Extra columns**: ignored
//! - **Blank lines**: skipped
//!
//! Every row must parse; a bad row aborts the load with its line number. The
//! resulting profile is validated by [`MeasuredProfile::new`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data::MeasuredProfile;
use crate::error::{Result, TimingError};

/// Load a profile from `path`, applying one uncertainty to every point
pub fn load_profile(path: impl AsRef<Path>, uncertainty: f64) -> Result<MeasuredProfile> {
    let path = path.as_ref();
    let file = File::open(path)?;
    log::info!("Loading measured profile from '{}'", path.display());
    read_profile(file, uncertainty)
}

/// Read a profile from any reader, applying one uncertainty to every point
pub fn read_profile<R: Read>(mut reader: R, uncertainty: f64) -> Result<MeasuredProfile> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let delimiter = detect_delimiter(&text);

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut pairs: Vec<(f64, f64)> = Vec::new();

    for (index, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| TimingError::Parse {
            line: e.position().map(|p| p.line() as usize).unwrap_or(0),
            message: e.to_string(),
        })?;

        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);

        let distance_field = record.get(0).unwrap_or("");
        let concentration_field = record.get(1);

        let distance = match distance_field.parse::<f64>() {
            Ok(value) => value,
            // Header row: only the very first record may be non-numeric
            Err(_) if index == 0 => {
                log::debug!("Skipping header row '{}'", distance_field);
                continue;
            }
            Err(_) => {
                return Err(TimingError::Parse {
                    line,
                    message: format!("distance '{distance_field}' is not a number"),
                });
            }
        };

        let concentration = match concentration_field {
            Some(field) => field.parse::<f64>().map_err(|_| TimingError::Parse {
                line,
                message: format!("concentration '{field}' is not a number"),
            })?,
            None => {
                return Err(TimingError::Parse {
                    line,
                    message: "expected two columns (distance, concentration)".to_string(),
                });
            }
        };

        pairs.push((distance, concentration));
    }

    log::debug!("Read {} measured points", pairs.len());

    MeasuredProfile::from_pairs(&pairs, uncertainty)
}

/// Tab if the first non-empty line has one, comma otherwise
fn detect_delimiter(text: &str) -> u8 {
    let first = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    if first.contains('\t') { b'\t' } else { b',' }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_comma_with_header() {
        let data = "Distance,Concentration\n1,1.5\n2,1.2\n3,0.96\n";
        let profile = read_profile(data.as_bytes(), 0.02).unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.distances(), &[1.0, 2.0, 3.0]);
        assert_eq!(profile.concentrations(), &[1.5, 1.2, 0.96]);
    }

    #[test]
    fn test_tab_without_header() {
        let data = "1\t1.5\n2\t1.2\n\n3\t0.96\n";
        let profile = read_profile(data.as_bytes(), 0.02).unwrap();

        assert_eq!(profile.len(), 3);
        assert_eq!(profile.length(), 3.0);
    }

    #[test]
    fn test_extra_columns_ignored() {
        let data = "x,c,comment\n1,1.5,rim\n2,1.2,\n";
        let profile = read_profile(data.as_bytes(), 0.02).unwrap();
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn test_whitespace_trimmed() {
        let data = "1 , 1.5\r\n2 , 1.2\r\n";
        let profile = read_profile(data.as_bytes(), 0.02).unwrap();
        assert_eq!(profile.concentrations(), &[1.5, 1.2]);
    }

    #[test]
    fn test_bad_concentration_reports_line() {
        let data = "Distance,Concentration\n1,1.5\n2,abc\n";
        let err = read_profile(data.as_bytes(), 0.02).unwrap_err();

        match err {
            TimingError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("abc"));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_missing_column_rejected() {
        let data = "1,1.5\n2\n";
        let err = read_profile(data.as_bytes(), 0.02).unwrap_err();
        assert!(matches!(err, TimingError::Parse { .. }));
    }

    #[test]
    fn test_non_numeric_after_first_row_rejected() {
        let data = "1,1.5\nfoo,1.2\n";
        assert!(matches!(
            read_profile(data.as_bytes(), 0.02),
            Err(TimingError::Parse { .. })
        ));
    }

    #[test]
    fn test_header_only_is_configuration_error() {
        let data = "Distance,Concentration\n";
        let err = read_profile(data.as_bytes(), 0.02).unwrap_err();
        assert!(matches!(err, TimingError::Configuration { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Distance,Concentration").unwrap();
        for (x, c) in [(1, 1.56822), (2, 1.4011), (3, 1.25)] {
            writeln!(file, "{x},{c}").unwrap();
        }
        file.flush().unwrap();

        let profile = load_profile(file.path(), 0.02).unwrap();
        assert_eq!(profile.len(), 3);
        assert_eq!(profile.max_concentration(), 1.56822);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_profile("/definitely/not/here.csv", 0.02).unwrap_err();
        assert!(matches!(err, TimingError::Io(_)));
    }
}
