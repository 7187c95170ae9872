use super::{ContentDetails, ContentKind, ExtractError, ExtractedContent};
use calamine::{open_workbook_auto, Reader};
use std::path::Path;

const PREVIEW_ROWS: usize = 6;

/// First sheet only, rendered as pipe-joined rows.
pub(super) fn extract(path: &Path) -> Result<ExtractedContent, ExtractError> {
    let mut workbook = open_workbook_auto(path)?;

    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Ok(ExtractedContent {
            kind: ContentKind::Spreadsheet,
            preview: String::new(),
            lines: None,
            details: ContentDetails::Spreadsheet {
                sheet_name: String::new(),
                total_rows: 0,
            },
        });
    };

    let range = workbook.worksheet_range(&sheet_name)?;

    let mut preview = String::new();
    for row in range.rows().take(PREVIEW_ROWS) {
        let cells: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        preview.push_str(&cells.join(" | "));
        preview.push('\n');
    }

    Ok(ExtractedContent {
        kind: ContentKind::Spreadsheet,
        preview,
        lines: None,
        details: ContentDetails::Spreadsheet {
            sheet_name,
            total_rows: range.height(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    const WORKBOOK: &str = r#"<workbook xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="Budget" sheetId="1" r:id="rId1"/></sheets></workbook>"#;
    const WORKBOOK_RELS: &str = r#"<Relationships><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

    /// Header row plus `rows` numeric rows of `month | month * 10`.
    fn write_xlsx(path: &std::path::Path, rows: usize) {
        let mut sheet = String::from(
            r#"<worksheet><sheetData><row r="1"><c r="A1" t="str"><v>Month</v></c><c r="B1" t="str"><v>Spend</v></c></row>"#,
        );
        for month in 1..=rows {
            let r = month + 1;
            sheet.push_str(&format!(
                r#"<row r="{r}"><c r="A{r}"><v>{month}</v></c><c r="B{r}"><v>{}</v></c></row>"#,
                month * 10
            ));
        }
        sheet.push_str("</sheetData></worksheet>");

        let mut zip = ZipWriter::new(std::fs::File::create(path).unwrap());
        for (name, body) in [
            ("[Content_Types].xml", "<Types/>"),
            ("xl/workbook.xml", WORKBOOK),
            ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
            ("xl/worksheets/sheet1.xml", sheet.as_str()),
        ] {
            zip.start_file(name, SimpleFileOptions::default()).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap();
    }

    #[test]
    fn test_first_sheet_preview() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("budget.xlsx");
        write_xlsx(&path, 7);

        let content = extract(&path).unwrap();
        assert_eq!(content.kind, ContentKind::Spreadsheet);
        assert_eq!(
            content.details,
            ContentDetails::Spreadsheet {
                sheet_name: "Budget".to_string(),
                total_rows: 8,
            }
        );

        let rows: Vec<&str> = content.preview.lines().collect();
        assert_eq!(rows.len(), PREVIEW_ROWS);
        assert_eq!(rows[0], "Month | Spend");
        assert_eq!(rows[1], "1 | 10");
        assert_eq!(rows[5], "5 | 50");
    }

    #[test]
    fn test_corrupt_workbook_is_error() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("budget.xlsx");
        std::fs::write(&path, b"not really a workbook").unwrap();
        assert!(extract(&path).is_err());
    }
}
