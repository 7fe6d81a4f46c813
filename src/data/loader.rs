use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::model::{Dataset, Row, default_label};

// ---------------------------------------------------------------------------
// Ingestion options
// ---------------------------------------------------------------------------

/// How raw text is cut into rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestOptions {
    /// Line 0 carries column labels.
    pub has_header: bool,
    /// Leading lines dropped before data starts. The header line counts
    /// towards this, and is always dropped when `has_header` is set.
    pub skip_rows: usize,
    /// Field separator; must be a single ASCII character.
    pub delimiter: char,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            skip_rows: 1,
            delimiter: ',',
        }
    }
}

impl IngestOptions {
    /// Number of leading lines that never become data.
    pub fn effective_skip(&self) -> usize {
        if self.has_header {
            self.skip_rows.max(1)
        } else {
            self.skip_rows
        }
    }

    fn delimiter_byte(&self) -> u8 {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .unwrap_or_else(|| {
                log::warn!(
                    "delimiter {:?} is not ASCII, falling back to ','",
                    self.delimiter
                );
                b','
            })
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Read a delimited text file from disk and parse it.
pub fn load_file(path: &Path, options: &IngestOptions) -> Result<Dataset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let dataset = parse_text(&text, options);
    log::info!(
        "Loaded {} rows x {} columns from {}",
        dataset.len(),
        dataset.arity(),
        path.display()
    );
    Ok(dataset)
}

/// Parse raw delimited text into a [`Dataset`].
///
/// Never fails: unparsable cells become `NaN`, blank lines are dropped and an
/// empty body yields an empty dataset.
pub fn parse_text(text: &str, options: &IngestOptions) -> Dataset {
    let delimiter = options.delimiter_byte();

    let header: Option<Vec<String>> = if options.has_header {
        text.lines()
            .next()
            .map(|line| split_fields(line, delimiter))
    } else {
        None
    };

    let body: Vec<&str> = text
        .lines()
        .skip(options.effective_skip())
        .filter(|line| !line.trim().is_empty())
        .collect();

    let rows = parse_rows(&body.join("\n"), delimiter);

    let arity = match &header {
        Some(labels) => labels.len(),
        None => rows.iter().map(Vec::len).max().unwrap_or(0),
    };
    if rows.iter().any(|r| r.len() != arity) {
        log::warn!("ragged rows: normalising every row to {arity} columns");
    }

    let labels = (0..arity)
        .map(|i| {
            header
                .as_ref()
                .and_then(|h| h.get(i))
                .filter(|label| !label.is_empty())
                .cloned()
                .unwrap_or_else(|| default_label(i))
        })
        .collect();

    Dataset::new(rows, labels)
}

// ---------------------------------------------------------------------------
// CSV helpers
// ---------------------------------------------------------------------------

fn reader(text: &str, delimiter: u8) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .quoting(false)
        .delimiter(delimiter)
        .from_reader(text.as_bytes())
}

fn split_fields(line: &str, delimiter: u8) -> Vec<String> {
    reader(line, delimiter)
        .records()
        .next()
        .and_then(|r| r.ok())
        .map(|record| record.iter().map(str::to_string).collect())
        .unwrap_or_default()
}

fn parse_rows(body: &str, delimiter: u8) -> Vec<Row> {
    let mut rows = Vec::new();
    for (row_no, result) in reader(body, delimiter).records().enumerate() {
        match result {
            Ok(record) => rows.push(record.iter().map(parse_cell).collect()),
            Err(e) => {
                log::warn!("CSV row {row_no}: {e}; keeping it as an all-NaN row");
                rows.push(Row::new());
            }
        }
    }
    rows
}

fn parse_cell(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_header(skip_rows: usize) -> IngestOptions {
        IngestOptions {
            has_header: false,
            skip_rows,
            delimiter: ',',
        }
    }

    #[test]
    fn header_labels_and_rows() {
        let ds = parse_text("h1,h2\n1,2\n3,4\n", &IngestOptions::default());
        assert_eq!(ds.labels(), ["h1", "h2"]);
        assert_eq!(ds.rows(), [vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn header_is_dropped_even_with_zero_skip() {
        let opts = IngestOptions {
            skip_rows: 0,
            ..IngestOptions::default()
        };
        let ds = parse_text("a,b\n5,6\n", &opts);
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.rows()[0], vec![5.0, 6.0]);
    }

    #[test]
    fn skips_preamble_lines() {
        let text = "instrument v2\nexported 2024-01-01\ntime,value\n0,1\n1,2\n";
        let opts = IngestOptions {
            has_header: true,
            skip_rows: 3,
            delimiter: ',',
        };
        let ds = parse_text(text, &opts);
        // header comes from line 0 regardless of the skip count
        assert_eq!(ds.labels(), ["instrument v2"]);
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn unparsable_cells_become_nan() {
        let ds = parse_text("1,abc\n,3\n", &no_header(0));
        assert_eq!(ds.rows()[0][0], 1.0);
        assert!(ds.rows()[0][1].is_nan());
        assert!(ds.rows()[1][0].is_nan());
        assert_eq!(ds.rows()[1][1], 3.0);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let ds = parse_text("1,2\n\n   \n3,4\r\n", &no_header(0));
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows()[1], vec![3.0, 4.0]);
    }

    #[test]
    fn blank_header_cells_get_synthetic_labels() {
        let ds = parse_text("time, ,\n1,2,3\n", &IngestOptions::default());
        assert_eq!(ds.labels(), ["time", "Column 2", "Column 3"]);
    }

    #[test]
    fn no_header_uses_widest_row_and_pads() {
        let ds = parse_text("1\n2,3,4\n", &no_header(0));
        assert_eq!(ds.arity(), 3);
        assert_eq!(ds.labels(), ["Column 1", "Column 2", "Column 3"]);
        assert!(ds.rows()[0][2].is_nan());
    }

    #[test]
    fn empty_body_after_skip() {
        let ds = parse_text("h1,h2\n", &IngestOptions::default());
        assert!(ds.is_empty());
        assert_eq!(ds.arity(), 2);
    }

    #[test]
    fn stray_quote_does_not_swallow_later_lines() {
        let ds = parse_text("1,\"2\n3,4\n5,6\n", &no_header(0));
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.rows()[0][0], 1.0);
        assert!(ds.rows()[0][1].is_nan());
        assert_eq!(ds.rows()[1], vec![3.0, 4.0]);
        assert_eq!(ds.rows()[2], vec![5.0, 6.0]);
    }

    #[test]
    fn custom_delimiter() {
        let opts = IngestOptions {
            has_header: false,
            skip_rows: 0,
            delimiter: ';',
        };
        let ds = parse_text("1;2\n", &opts);
        assert_eq!(ds.rows()[0], vec![1.0, 2.0]);
    }
}
