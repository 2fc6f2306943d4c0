//! Occurrence counts over the engine's game log.
//!
//! The native engine appends one CSV row per finished game:
//! `moves,score,max_tile,board_hex`. The statistics here tally the
//! `max_tile` column ([`KEY_FIELD`]) and render the tally as a plain table or
//! as BASIC `DATA` statements (see [`report`]).
//!
//! ```
//! use ai_2048_bridge::stats::{aggregate_reader, write_report, ReportFormat};
//!
//! let log = "a,b,5,c\na,b,5,c\na,b,6,c\na,b\n";
//! let table = aggregate_reader(log.as_bytes()).unwrap();
//! let mut out = Vec::new();
//! write_report(&table, ReportFormat::Basic, &mut out).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "100 DATA 2,5\n101 DATA \"    5\",2\n102 DATA \"    6\",1\n"
//! );
//! ```

use std::collections::btree_map::{self, BTreeMap};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use log::debug;

pub mod report;

pub use report::{write_report, ReportFormat};

/// Fields in a well-formed log row.
pub const LOG_FIELDS: usize = 4;
/// Column that gets counted (the game's highest tile).
pub const KEY_FIELD: usize = 2;

#[derive(thiserror::Error, Debug)]
pub enum StatsError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Key -> number of rows carrying that key, iterated in ascending key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable(BTreeMap<i64, u64>);

impl CountTable {
    pub fn new() -> Self { Self::default() }

    /// Count one more occurrence of `key`.
    #[inline]
    pub fn record(&mut self, key: i64) {
        *self.0.entry(key).or_insert(0) += 1;
    }

    pub fn get(&self, key: i64) -> u64 {
        self.0.get(&key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Number of rows that contributed.
    pub fn total(&self) -> u64 { self.0.values().sum() }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.0.iter())
    }
}

/// Ascending `(key, count)` pairs.
pub struct Iter<'a>(btree_map::Iter<'a, i64, u64>);

impl Iterator for Iter<'_> {
    type Item = (i64, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(&k, &c)| (k, c))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { self.0.size_hint() }
}

impl<'a> IntoIterator for &'a CountTable {
    type Item = (i64, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl FromIterator<i64> for CountTable {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut table = CountTable::new();
        for key in iter {
            table.record(key);
        }
        table
    }
}

/// Tally [`KEY_FIELD`] over every row of `reader` that has exactly
/// [`LOG_FIELDS`] fields.
///
/// Rows with another field count, and rows whose key is not an integer, are
/// skipped. Only read failures are errors.
pub fn aggregate_reader<R: Read>(reader: R) -> Result<CountTable, StatsError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut table = CountTable::new();
    let mut skipped = 0u64;
    for record in csv_reader.byte_records() {
        let record = record?;
        if record.len() != LOG_FIELDS {
            skipped += 1;
            continue;
        }
        match parse_key(&record[KEY_FIELD]) {
            Some(key) => table.record(key),
            None => {
                debug!(
                    "skipping row {}: key field {:?} is not an integer",
                    record.position().map_or(0, |p| p.line()),
                    String::from_utf8_lossy(&record[KEY_FIELD])
                );
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        debug!("skipped {} malformed row(s)", skipped);
    }
    Ok(table)
}

/// Like [`aggregate_reader`], reading from `path`. A missing file is an empty log.
pub fn aggregate_path<P: AsRef<Path>>(path: P) -> Result<CountTable, StatsError> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => aggregate_reader(io::BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("log file {} not found; treating as empty", path.display());
            Ok(CountTable::new())
        }
        Err(e) => Err(e.into()),
    }
}

fn parse_key(field: &[u8]) -> Option<i64> {
    std::str::from_utf8(field).ok()?.trim().parse().ok()
}
