use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::model::RawTable;

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a delimited table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv` / `.txt` – comma separated, first line is the header
/// * `.tsv`          – tab separated, first line is the header
pub fn load_file(path: &Path) -> Result<RawTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let delimiter = match ext.as_str() {
        "csv" | "txt" => b',',
        "tsv" => b'\t',
        other => bail!("Unsupported file extension: .{other}"),
    };

    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let table = read_table(file, delimiter)?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.len(),
        table.column_count(),
        path.display()
    );
    Ok(table)
}

// ---------------------------------------------------------------------------
// Delimited text reader
// ---------------------------------------------------------------------------

/// Read delimited text into a [`RawTable`].
///
/// The first record becomes the header. Rows may have differing widths;
/// blank lines are skipped. Cells are kept verbatim, numeric coercion
/// happens during validation.
pub fn read_table<R: Read>(reader: R, delimiter: u8) -> Result<RawTable> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = reader
        .headers()
        .context("reading header row")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(RawTable::new(Some(header), rows))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn header_and_rows_split() {
        let text = "Index,Marks\n1,45\n2,78.5\n";
        let table = read_table(text.as_bytes(), b',').unwrap();
        assert_eq!(
            table.header,
            Some(vec!["Index".to_string(), "Marks".to_string()])
        );
        assert_eq!(table.rows, vec![vec!["1", "45"], vec!["2", "78.5"]]);
    }

    #[test]
    fn ragged_rows_and_blank_lines_tolerated() {
        let text = "id,marks\n1,40\n\n2\n3,60,extra\n";
        let table = read_table(text.as_bytes(), b',').unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.column_count(), 3);
        let marks: Vec<_> = table.column(1).collect();
        assert_eq!(marks, vec![Some("40"), None, Some("60")]);
    }

    #[test]
    fn header_only_file_has_no_rows() {
        let table = read_table("Index,Marks\n".as_bytes(), b',').unwrap();
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn loads_tsv_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".tsv").tempfile().unwrap();
        write!(file, "id\tmarks\n1\t55\n").unwrap();

        let table = load_file(file.path()).unwrap();
        assert_eq!(table.rows, vec![vec!["1", "55"]]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".xlsx").tempfile().unwrap();
        let err = load_file(file.path()).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }
}
