//! Spreadsheet export of the password history.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Workbook, XlsxError};
use thiserror::Error;

use crate::history::{HistoryError, HistoryStore};

/// Column header of the exported sheet.
pub const EXPORT_HEADER: &str = "Passwords";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error(transparent)]
    History(#[from] HistoryError),
    #[error("Failed to write workbook")]
    Xlsx(#[from] XlsxError),
}

/// Writes the history to an `.xlsx` workbook at `dest`.
///
/// The sheet has a single `Passwords` column, one row per record in
/// insertion order, and no index column. An existing file at `dest` is
/// overwritten.
///
/// # Returns
/// - `Ok(Some(dest))` when the workbook was written
/// - `Ok(None)` when the history is empty or missing; nothing is written
pub fn export_to_xlsx<P: AsRef<Path>>(
    store: &HistoryStore,
    dest: P,
) -> Result<Option<PathBuf>, ExportError> {
    let passwords = store.read_all()?;
    if passwords.is_empty() {
        return Ok(None);
    }

    let dest = dest.as_ref();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, EXPORT_HEADER)?;
    for (row, password) in (1u32..).zip(passwords.iter()) {
        worksheet.write_string(row, 0, password.as_str())?;
    }
    workbook.save(dest)?;

    #[cfg(feature = "tracing")]
    tracing::info!("Exported {} passwords to {:?}", passwords.len(), dest);

    Ok(Some(dest.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::tests::{secret, temp_store};
    use calamine::{open_workbook, Reader, Xlsx};

    fn read_column(path: &Path) -> Vec<String> {
        let mut workbook: Xlsx<_> = open_workbook(path).expect("Failed to open workbook");
        let range = workbook
            .worksheet_range("Sheet1")
            .expect("Failed to read sheet");
        assert_eq!(range.width(), 1);
        range.rows().map(|row| row[0].to_string()).collect()
    }

    #[test]
    fn test_export_missing_history() {
        let (dir, store) = temp_store();
        let dest = dir.path().join("out.xlsx");
        assert_eq!(export_to_xlsx(&store, &dest).unwrap(), None);
        assert!(!dest.exists());
    }

    #[test]
    fn test_export_after_clear() {
        let (dir, store) = temp_store();
        store.append(&secret("gone")).unwrap();
        store.clear().unwrap();
        let dest = dir.path().join("out.xlsx");
        assert_eq!(export_to_xlsx(&store, &dest).unwrap(), None);
        assert!(!dest.exists());
    }

    #[test]
    fn test_export_writes_records_in_order() {
        let (dir, store) = temp_store();
        let passwords = ["first", "Second2!", "first", "x,y"];
        for pwd in passwords {
            store.append(&secret(pwd)).unwrap();
        }

        let dest = dir.path().join("out.xlsx");
        let written = export_to_xlsx(&store, &dest).unwrap();
        assert_eq!(written.as_deref(), Some(dest.as_path()));

        let column = read_column(&dest);
        assert_eq!(column.len(), passwords.len() + 1);
        assert_eq!(column[0], EXPORT_HEADER);
        assert_eq!(column[1..].to_vec(), passwords.to_vec());
    }

    #[test]
    fn test_export_into_missing_directory_fails() {
        let (dir, store) = temp_store();
        store.append(&secret("one")).unwrap();
        let dest = dir.path().join("missing").join("out.xlsx");

        let err = export_to_xlsx(&store, &dest).unwrap_err();
        assert!(matches!(err, ExportError::Xlsx(_)));
        assert_eq!(err.to_string(), "Failed to write workbook");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_export_overwrites_previous_file() {
        let (dir, store) = temp_store();
        let dest = dir.path().join("out.xlsx");

        store.append(&secret("one")).unwrap();
        store.append(&secret("two")).unwrap();
        export_to_xlsx(&store, &dest).unwrap();

        store.clear().unwrap();
        store.append(&secret("three")).unwrap();
        export_to_xlsx(&store, &dest).unwrap();

        assert_eq!(read_column(&dest), vec!["Passwords", "three"]);
    }
}
