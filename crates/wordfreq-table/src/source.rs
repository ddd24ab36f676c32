use std::path::Path;

use calamine::{Reader, open_workbook_auto};

use crate::TableError;
use crate::cell::Cell;

/// On-disk layout of a frequency table, chosen by file extension.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TableFormat {
    Spreadsheet,
    Delimited { delimiter: u8, quoting: bool },
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self, TableError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(TableFormat::Spreadsheet),
            "csv" => Ok(TableFormat::Delimited {
                delimiter: b',',
                quoting: true,
            }),
            "tsv" | "txt" => Ok(TableFormat::Delimited {
                delimiter: b'\t',
                quoting: false,
            }),
            _ => Err(TableError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: ext,
            }),
        }
    }
}

/// Read every row of the chosen worksheet, anchored at cell A1.
pub(crate) fn read_spreadsheet(
    path: &Path,
    sheet: Option<&str>,
) -> Result<Vec<Vec<Cell>>, TableError> {
    let spreadsheet_err = |source| TableError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = open_workbook_auto(path).map_err(spreadsheet_err)?;
    let range = match sheet {
        Some(name) => {
            let available = workbook.sheet_names();
            if !available.iter().any(|n| n == name) {
                return Err(TableError::SheetNotFound {
                    path: path.to_path_buf(),
                    name: name.to_string(),
                    available,
                });
            }
            workbook.worksheet_range(name).map_err(spreadsheet_err)?
        }
        None => workbook
            .worksheet_range_at(0)
            .ok_or_else(|| TableError::NoSheets(path.to_path_buf()))?
            .map_err(spreadsheet_err)?,
    };

    // calamine starts the range at the first non-empty cell; re-anchor at A1.
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(Cell::from));
        rows.push(cells);
    }
    Ok(rows)
}

/// Read a comma- or tab-separated file. Invalid UTF-8 is replaced, not fatal.
pub(crate) fn read_delimited(
    path: &Path,
    delimiter: u8,
    quoting: bool,
) -> Result<Vec<Vec<Cell>>, TableError> {
    let delimited_err = |source| TableError::Delimited {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .quoting(quoting)
        .from_path(path)
        .map_err(delimited_err)?;

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record.map_err(delimited_err)?;
        rows.push(
            record
                .iter()
                .map(|field| Cell::from_text(&String::from_utf8_lossy(field)))
                .collect(),
        );
    }
    Ok(rows)
}
