//! One-shot record sources over readers.
//!
//! Supported inputs:
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n` (whitespace-separated values work too)
//! - CSV with a header row (requires the Cargo feature `csv`, on by default)
//!
//! Records are deserialized with `serde` as they are pulled. A record that fails to parse is
//! yielded as an `Err` element rather than ending the pipeline with a panic; downstream
//! operators decide whether to skip it (`filter(Result::is_ok)`) or stop on it
//! (`limit_while(Result::is_ok)`).
//!
//! ```rust
//! use lazy_sequence::source::json_lines;
//! use lazy_sequence::{SequenceExt, SequenceResult};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct Event {
//!     id: u32,
//!     kind: String,
//! }
//!
//! let input = "{\"id\":1,\"kind\":\"click\"}\n{\"id\":2,\"kind\":\"view\"}\n{\"id\":3,\"kind\":\"click\"}\n";
//! let clicks = json_lines::<Event, _>(input.as_bytes())
//!     .filter(|r: &SequenceResult<Event>| matches!(r, Ok(e) if e.kind == "click"))
//!     .count();
//! assert_eq!(clicks, 2);
//! ```

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::de::IoRead;

use crate::error::{SequenceError, SequenceResult};

use super::OneShot;

/// Iterator over NDJSON records. Wrapped in a [`OneShot`] by [`json_lines`].
pub struct JsonLines<R, T>
where
    R: Read,
{
    inner: serde_json::StreamDeserializer<'static, IoRead<R>, T>,
}

impl<R, T> Iterator for JsonLines<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    type Item = SequenceResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| record.map_err(SequenceError::from))
    }
}

/// A one-shot sequence of NDJSON records read from `reader`.
///
/// Parsing stops after the first malformed value, which is yielded as `Err`.
pub fn json_lines<T, R>(reader: R) -> OneShot<JsonLines<R, T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let inner = serde_json::Deserializer::from_reader(reader).into_iter::<T>();
    OneShot::new(JsonLines { inner })
}

/// Iterator over CSV records. Wrapped in a [`OneShot`] by [`csv_records`].
#[cfg(feature = "csv")]
pub struct CsvRecords<R, T> {
    inner: csv::DeserializeRecordsIntoIter<R, T>,
}

#[cfg(feature = "csv")]
impl<R, T> Iterator for CsvRecords<R, T>
where
    R: Read,
    T: DeserializeOwned,
{
    type Item = SequenceResult<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|record| record.map_err(SequenceError::from))
    }
}

/// A one-shot sequence of CSV records read from `reader`, whose first row is a header.
///
/// A malformed record is yielded as `Err`; reading continues with the next record.
#[cfg(feature = "csv")]
pub fn csv_records<T, R>(reader: R) -> OneShot<CsvRecords<R, T>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv_records_from(csv::Reader::from_reader(reader))
}

/// Like [`csv_records`], for a caller-configured [`csv::Reader`] (delimiter, headers, ...).
#[cfg(feature = "csv")]
pub fn csv_records_from<T, R>(reader: csv::Reader<R>) -> OneShot<CsvRecords<R, T>>
where
    T: DeserializeOwned,
    R: Read,
{
    OneShot::new(CsvRecords {
        inner: reader.into_deserialize(),
    })
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::json_lines;
    use crate::error::SequenceError;
    use crate::sequence::SequenceExt;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        sensor: String,
        value: f64,
    }

    #[test]
    fn json_lines_deserializes_lazily() {
        let input = r#"{"sensor":"a","value":1.5}
{"sensor":"b","value":2.0}
{"sensor":"a","value":3.5}
"#;
        let total = json_lines::<Reading, _>(input.as_bytes())
            .map(|r| r.expect("valid record"))
            .filter(|r| r.sensor == "a")
            .reduce(0.0, |acc, r| acc + r.value);
        assert_eq!(total, 5.0);
    }

    #[test]
    fn json_lines_yields_error_for_bad_record() {
        let input = "{\"sensor\":\"a\",\"value\":1}\n{\"sensor\":\"b\",\"value\":\"oops\"}\n";
        let out = json_lines::<Reading, _>(input.as_bytes()).to_vec();
        assert_eq!(out.len(), 2);
        assert!(out[0].is_ok());
        assert!(matches!(out[1], Err(SequenceError::Json(_))));
    }

    #[cfg(feature = "csv")]
    #[test]
    fn csv_records_continue_after_bad_row() {
        let input = "sensor,value\na,1.0\nb,not-a-number\nc,3.0\n";
        let out = super::csv_records::<Reading, _>(input.as_bytes()).to_vec();
        assert_eq!(out.len(), 3);
        assert!(matches!(out[1], Err(SequenceError::Csv(_))));
        let good: Vec<String> = out.into_iter().filter_map(Result::ok).map(|r| r.sensor).collect();
        assert_eq!(good, vec!["a", "c"]);
    }
}
