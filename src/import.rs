//! Loading name blocks from disk. Plain text files hold one name per line,
//! spreadsheets contribute the first column of their first worksheet.

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use calamine::{open_workbook, Reader, Xlsx};

use crate::names::{parse_name_block, NameKind};

type Result<T> = std::result::Result<T, Box<dyn Error>>;

/// Read the raw text of a name block. `-` reads from stdin.
pub fn read_block(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        read_text(std::io::stdin().lock())
    } else if is_xlsx(path) {
        read_xlsx_column(path)
    } else {
        read_text(File::open(path)?)
    }
}

/// Read a plain text name block, tolerating the BOM and CRLF line endings of
/// files saved on Windows
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);
    Ok(text.replace("\r\n", "\n"))
}

/// Read and validate the names stored in `path`
pub fn load_names(path: &Path, kind: NameKind) -> Result<Vec<String>> {
    let names = parse_name_block(&read_block(path)?, kind)?;
    info!("Read {} {} from {}", names.len(), kind.label(), path.display());
    Ok(names)
}

fn is_xlsx(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_ascii_lowercase() == "xlsx")
        .unwrap_or(false)
}

/// First column of the first worksheet, one cell per line, empty cells skipped
fn read_xlsx_column(path: &Path) -> Result<String> {
    let mut workbook: Xlsx<_> = open_workbook(path)?;
    let sheetname = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| Box::<dyn Error>::from(format!("{} has no worksheets", path.display())))?;
    debug!("Reading names from sheet {} of {}", sheetname, path.display());

    let sheet = workbook
        .worksheet_range(&sheetname)
        .ok_or_else(|| Box::<dyn Error>::from(format!("Cannot open sheet {}", sheetname)))??;

    let names: Vec<String> = sheet
        .rows()
        .filter_map(|row| row.first())
        .map(|cell| cell.to_string().trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    Ok(names.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn reads_text_file() -> Result<()> {
        let mut f = tempfile::Builder::new().suffix(".txt").tempfile()?;
        f.write_all(b"CTRL_A\r\nCTRL_B\r\n")?;
        assert_eq!(load_names(f.path(), NameKind::Controls)?, vec!["CTRL_A", "CTRL_B"]);
        Ok(())
    }

    #[test]
    fn strips_byte_order_mark() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        f.write_all("\u{feff}CTRL_A\nCTRL_B\n".as_bytes())?;
        assert_eq!(load_names(f.path(), NameKind::Controls)?, vec!["CTRL_A", "CTRL_B"]);

        let placeholder = format!("\u{feff}{}", NameKind::Samples.placeholder());
        assert!(parse_name_block(&read_text(placeholder.as_bytes())?, NameKind::Samples)?.is_empty());
        Ok(())
    }

    #[test]
    fn reads_from_any_reader() -> Result<()> {
        assert_eq!(read_text(&b"S_1\r\nS_2\r\n"[..])?, "S_1\nS_2\n");
        assert_eq!(read_text(&b""[..])?, "");
        Ok(())
    }

    fn fixture(name: &str) -> PathBuf {
        [env!("CARGO_MANIFEST_DIR"), "tests", "data", name].iter().collect()
    }

    #[test]
    fn reads_first_column_of_spreadsheet() -> Result<()> {
        // A2 is empty, A3 holds the number 42, A4 is padded with spaces
        let names = load_names(&fixture("names.xlsx"), NameKind::Samples)?;
        assert_eq!(names, vec!["S_1", "42", "S_2"]);
        Ok(())
    }

    #[test]
    fn rejects_invalid_spreadsheet_names() {
        let err = load_names(&fixture("bad_names.xlsx"), NameKind::Samples).unwrap_err();
        assert!(err.to_string().contains("Invalid character ' '"));
    }

    #[test]
    fn rejects_invalid_file_content() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        f.write_all(b"sample 1\n")?;
        assert!(load_names(f.path(), NameKind::Samples).is_err());
        Ok(())
    }

    #[test]
    fn placeholder_file_is_empty() -> Result<()> {
        let mut f = tempfile::NamedTempFile::new()?;
        f.write_all(NameKind::Samples.placeholder().as_bytes())?;
        assert!(load_names(f.path(), NameKind::Samples)?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_file() {
        assert!(load_names(Path::new("/nonexistent/names.txt"), NameKind::Samples).is_err());
    }

    #[test]
    fn detects_spreadsheets() {
        assert!(is_xlsx(Path::new("plate.xlsx")));
        assert!(is_xlsx(Path::new("PLATE.XLSX")));
        assert!(!is_xlsx(Path::new("plate.txt")));
        assert!(!is_xlsx(Path::new("xlsx")));
    }
}
