//! Raw per-position score records.

use indexmap::IndexMap;

use crate::error::MutviewError;

/// One row of the raw score table: amino-acid letter to the unparsed
/// numeric score string, for a single sequence position.
///
/// Key iteration order is insertion order and is semantically load-bearing:
/// the first record's key order becomes the table's axis labels, and every
/// matrix row is laid out in it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PositionRecord {
    values: IndexMap<String, String>,
}

impl PositionRecord {
    /// Build a record from `(letter, raw score)` pairs, keeping order.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Raw score strings in key order.
    pub fn raw_scores(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }

    /// Raw score string for one amino-acid letter.
    #[must_use]
    pub fn get(&self, letter: &str) -> Option<&str> {
        self.values.get(letter).map(String::as_str)
    }

    /// Number of score columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether this record's key sequence matches `labels` exactly
    /// (same letters, same order).
    pub(crate) fn keys_match(&self, labels: &[String]) -> bool {
        self.values.len() == labels.len()
            && self.values.keys().zip(labels).all(|(k, l)| k == l)
    }
}

/// Tokenize CSV text into ordered position records.
///
/// The first line is the header; its first column is the position column
/// and is skipped, the remaining columns are amino-acid letters. Each
/// following non-empty line yields one [`PositionRecord`], in file order
/// (increasing sequence position).
///
/// # Errors
///
/// [`MutviewError::ScoreParse`] when the header has no score columns or a
/// data line's field count does not match the header's.
pub fn read_records(text: &str) -> Result<Vec<PositionRecord>, MutviewError> {
    let mut lines = text.lines().filter(|l| !l.trim().is_empty());

    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns: Vec<&str> = header.split(',').map(str::trim).collect();
    if columns.len() < 2 {
        return Err(MutviewError::ScoreParse(format!(
            "header has {} columns, expected a position column plus at \
             least one score column",
            columns.len()
        )));
    }
    let letters = &columns[1..];

    let mut records = Vec::new();
    for (line_idx, line) in lines.enumerate() {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() != columns.len() {
            return Err(MutviewError::ScoreParse(format!(
                "line {}: {} fields, header has {}",
                line_idx + 2,
                fields.len(),
                columns.len()
            )));
        }
        records.push(PositionRecord::from_pairs(
            letters.iter().copied().zip(fields[1..].iter().copied()),
        ));
    }

    log::debug!(
        "read {} position records, {} score columns",
        records.len(),
        letters.len()
    );
    Ok(records)
}
