use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use carprice::Dataset;
use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{DatasetError, Result};

/// Name of the mileage column
pub const FEATURE_COLUMN: &str = "km";
/// Name of the price column
pub const TARGET_COLUMN: &str = "price";

/// Read a car price dataset from a CSV file
///
/// The first line must be a header naming the `km` and `price` columns. Their order does not
/// matter and further columns are ignored.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Dataset<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound(path.to_path_buf()),
        _ => DatasetError::Io(err),
    })?;

    let dataset = from_reader(file)?;
    log::debug!("loaded {} rows from {}", dataset.nsamples(), path.display());

    Ok(dataset)
}

/// Read a car price dataset from CSV data with a header row
pub fn from_reader<R: Read>(reader: R) -> Result<Dataset<f64>> {
    from_reader_with_columns(reader, FEATURE_COLUMN, TARGET_COLUMN)
}

/// Read a single-feature dataset from CSV data, looking the two columns up by name
///
/// Every row must contain a finite number in both columns, a missing or malformed cell is an
/// error and never skipped. At least two rows are required.
pub fn from_reader_with_columns<R: Read>(
    reader: R,
    feature: &str,
    target: &str,
) -> Result<Dataset<f64>> {
    // create a CSV reader with headers, trimming whitespace around every cell
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let feature_idx = column_index(&headers, feature)?;
    let target_idx = column_index(&headers, target)?;

    let mut pairs = Vec::new();
    for record in reader.records() {
        let record = record?;
        // header is line 1
        let line = record
            .position()
            .map(|pos| pos.line())
            .unwrap_or(pairs.len() as u64 + 2);

        let x = parse_cell(&record, feature_idx, feature, line)?;
        let y = parse_cell(&record, target_idx, target, line)?;
        pairs.push((x, y));
    }

    if pairs.len() < 2 {
        return Err(DatasetError::TooFewRows(pairs.len()));
    }

    Ok(Dataset::from_pairs(pairs).with_names(feature, target))
}

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
}

fn parse_cell(record: &StringRecord, idx: usize, column: &str, line: u64) -> Result<f64> {
    let value = record.get(idx).unwrap_or("");

    match value.parse::<f64>() {
        Ok(x) if x.is_finite() => Ok(x),
        _ => Err(DatasetError::InvalidValue {
            line,
            column: column.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn reads_named_columns() {
        let data = "km,price\n240000,3650\n139800,3800\n150500,4400\n";
        let dataset = from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.nsamples(), 3);
        assert_eq!(dataset.records(), &array![240000., 139800., 150500.]);
        assert_eq!(dataset.targets(), &array![3650., 3800., 4400.]);
        assert_eq!(dataset.feature_name(), "km");
        assert_eq!(dataset.target_name(), "price");
    }

    #[test]
    fn column_order_and_extra_columns_do_not_matter() {
        let data = "model, price , km\nclio, 5000, 120000\nc3, 6000.5, 80000\n";
        let dataset = from_reader(data.as_bytes()).unwrap();

        assert_eq!(dataset.records(), &array![120000., 80000.]);
        assert_eq!(dataset.targets(), &array![5000., 6000.5]);
    }

    #[test]
    fn missing_column() {
        let data = "mileage,price\n1,2\n3,4\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::MissingColumn(ref name) if name == "km"));
    }

    #[test]
    fn non_numeric_cell_is_reported_with_its_line() {
        let data = "km,price\n1000,2000\n2000,abc\n3000,1000\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        match err {
            DatasetError::InvalidValue {
                line,
                column,
                value,
            } => {
                assert_eq!(line, 3);
                assert_eq!(column, "price");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn empty_cell_is_not_skipped() {
        let data = "km,price\n1000,2000\n,1500\n3000,1000\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::InvalidValue { ref value, .. } if value.is_empty()));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let data = "km,price\n1000,2000\nNaN,1500\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::InvalidValue { .. }));
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let data = "km,price\n1000,2000\n3000\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn needs_two_rows() {
        let data = "km,price\n1000,2000\n";
        let err = from_reader(data.as_bytes()).unwrap_err();

        assert!(matches!(err, DatasetError::TooFewRows(1)));
    }

    #[test]
    fn missing_file() {
        let path = std::env::temp_dir().join("carprice-datasets-does-not-exist.csv");
        let err = load_csv(&path).unwrap_err();

        assert!(matches!(err, DatasetError::NotFound(ref p) if p == &path));
    }

    #[test]
    fn custom_column_names() {
        let data = "x,y\n1,2\n3,4\n";
        let dataset = from_reader_with_columns(data.as_bytes(), "x", "y").unwrap();

        assert_eq!(dataset.feature_name(), "x");
        assert_eq!(dataset.targets(), &array![2., 4.]);
    }
}
