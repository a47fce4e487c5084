//! Score-table parsing: raw position records to the display-ready matrix.
//!
//! The raw table arrives as one record per sequence position, each mapping
//! amino-acid letters to LLR score strings. [`parse`] turns that into a
//! dense numeric matrix in display order (reversed, so the last sequence
//! position is row 0 — the orientation the heatmap's y-axis expects),
//! plus the derived axis labels and per-position aggregates.

mod record;

pub use record::{read_records, PositionRecord};

use crate::error::MutviewError;

/// The 20 standard amino-acid letters, in the canonical row order used by
/// the heatmap's letter axis.
pub const ALPHABET: [&str; 20] = [
    "A", "C", "D", "E", "F", "G", "H", "I", "K", "L", "M", "N", "P", "Q",
    "R", "S", "T", "V", "W", "Y",
];

/// A parsed substitution-score table in display order.
///
/// Built once per loaded dataset by [`parse`] and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScoreTable {
    /// Numeric score rows. Row 0 is the LAST input position (display
    /// order); each row is laid out in [`ScoreTable::axis_labels`] order.
    pub matrix: Vec<Vec<f64>>,
    /// Key order of the first input record.
    pub axis_labels: Vec<String>,
    /// Per-position aggregate of the display-ordered rows.
    ///
    /// Historical name from the upstream data contract: the value is the
    /// row SUM, not a mean. Consumers key on the name, so both the name
    /// and the computation are preserved as-is.
    pub averages: Vec<f64>,
}

impl ScoreTable {
    /// Number of sequence positions (matrix rows).
    #[must_use]
    pub fn positions(&self) -> usize {
        self.matrix.len()
    }

    /// Number of score columns per position.
    #[must_use]
    pub fn letters(&self) -> usize {
        self.axis_labels.len()
    }
}

/// Parse ordered position records into a [`ScoreTable`].
///
/// The first record's key order defines the axis labels and the column
/// layout of every row. After construction the matrix is reversed end to
/// end (last input position becomes row 0) and the aggregates are computed
/// over the reversed rows. Pure function of the input: no side effects,
/// no I/O.
///
/// Empty input returns an empty table.
///
/// # Errors
///
/// - [`MutviewError::ScoreValidation`] when a record's key sequence
///   differs from the first record's.
/// - [`MutviewError::ScoreParse`] when a score string is not numeric.
///   Parsing fails fast rather than coercing to NaN; a NaN would silently
///   corrupt the downstream aggregates.
pub fn parse(records: &[PositionRecord]) -> Result<ScoreTable, MutviewError> {
    let Some(first) = records.first() else {
        return Ok(ScoreTable::default());
    };
    let axis_labels: Vec<String> =
        first.keys().map(str::to_owned).collect();

    let mut matrix = Vec::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if !record.keys_match(&axis_labels) {
            return Err(MutviewError::ScoreValidation(format!(
                "position {position}: key set [{}] differs from the first \
                 record's [{}]",
                record.keys().collect::<Vec<_>>().join(","),
                axis_labels.join(","),
            )));
        }

        let mut row = Vec::with_capacity(axis_labels.len());
        for (letter, raw) in record.keys().zip(record.raw_scores()) {
            let value = raw.parse::<f64>().map_err(|_| {
                MutviewError::ScoreParse(format!(
                    "position {position}, letter {letter}: {raw:?} is not \
                     a number"
                ))
            })?;
            row.push(value);
        }
        matrix.push(row);
    }

    // Display order: the heatmap's y-axis runs bottom-up, so the last
    // sequence position becomes row 0.
    matrix.reverse();

    let averages: Vec<f64> =
        matrix.iter().map(|row| row.iter().sum()).collect();

    log::debug!(
        "parsed score table: {} positions x {} letters",
        matrix.len(),
        axis_labels.len()
    );

    Ok(ScoreTable {
        matrix,
        axis_labels,
        averages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pairs: &[(&str, &str)]) -> PositionRecord {
        PositionRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn matrix_rows_are_reversed_input_rows() {
        let records: Vec<PositionRecord> = (0..5)
            .map(|i| {
                PositionRecord::from_pairs([
                    ("A".to_owned(), format!("{i}.0")),
                    ("C".to_owned(), format!("-{i}.5")),
                ])
            })
            .collect();
        let table = parse(&records).unwrap();

        assert_eq!(table.positions(), 5);
        for (i, row) in table.matrix.iter().enumerate() {
            assert_eq!(row.len(), 2);
            let source = 5 - 1 - i;
            assert_eq!(row[0], source as f64);
            assert_eq!(row[1], -(source as f64) - 0.5);
        }
    }

    #[test]
    fn averages_are_row_sums_not_means() {
        let records = vec![
            record(&[("A", "1.0"), ("C", "3.0")]),
            record(&[("A", "2.0"), ("C", "-6.0")]),
        ];
        let table = parse(&records).unwrap();
        // Row 0 is the reversed last input row: 2.0 + -6.0.
        assert_eq!(table.averages, vec![-4.0, 4.0]);
        for (row, avg) in table.matrix.iter().zip(&table.averages) {
            assert_eq!(row.iter().sum::<f64>(), *avg);
        }
    }

    #[test]
    fn double_reversal_restores_construction_order() {
        let records = vec![
            record(&[("A", "1.0")]),
            record(&[("A", "2.0")]),
            record(&[("A", "3.0")]),
        ];
        let table = parse(&records).unwrap();
        let mut restored = table.matrix.clone();
        restored.reverse();
        assert_eq!(restored, vec![vec![1.0], vec![2.0], vec![3.0]]);
    }

    #[test]
    fn end_to_end_reference_example() {
        let records = vec![
            record(&[("A", "1.0"), ("B", "-2.0")]),
            record(&[("A", "0.5"), ("B", "0.5")]),
        ];
        let table = parse(&records).unwrap();
        assert_eq!(table.matrix, vec![vec![0.5, 0.5], vec![1.0, -2.0]]);
        assert_eq!(table.averages, vec![1.0, -1.0]);
        assert_eq!(table.axis_labels, vec!["A", "B"]);
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = parse(&[]).unwrap();
        assert!(table.matrix.is_empty());
        assert!(table.axis_labels.is_empty());
        assert!(table.averages.is_empty());
    }

    #[test]
    fn non_numeric_value_fails_fast() {
        let records = vec![record(&[("A", "1.0"), ("C", "oops")])];
        let err = parse(&records).unwrap_err();
        assert!(matches!(err, MutviewError::ScoreParse(_)), "{err:?}");
        let msg = err.to_string();
        assert!(msg.contains("letter C"), "{msg}");
    }

    #[test]
    fn mismatched_key_set_is_rejected() {
        let records = vec![
            record(&[("A", "1.0"), ("C", "2.0")]),
            record(&[("A", "1.0"), ("D", "2.0")]),
        ];
        let err = parse(&records).unwrap_err();
        assert!(matches!(err, MutviewError::ScoreValidation(_)));
    }

    #[test]
    fn reordered_keys_are_rejected() {
        let records = vec![
            record(&[("A", "1.0"), ("C", "2.0")]),
            record(&[("C", "2.0"), ("A", "1.0")]),
        ];
        assert!(matches!(
            parse(&records),
            Err(MutviewError::ScoreValidation(_))
        ));
    }

    #[test]
    fn alphabet_has_twenty_unique_letters() {
        let mut letters = ALPHABET.to_vec();
        letters.sort_unstable();
        letters.dedup();
        assert_eq!(letters.len(), 20);
    }

    #[test]
    fn csv_text_through_parse() {
        let text = "pos,A,C\n1,1.0,2.0\n2,3.0,4.0\n";
        let table = parse(&read_records(text).unwrap()).unwrap();
        assert_eq!(table.matrix, vec![vec![3.0, 4.0], vec![1.0, 2.0]]);
        assert_eq!(table.averages, vec![7.0, 3.0]);
    }
}
