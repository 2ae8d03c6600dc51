use crate::domain::model::{MatchReport, RankingRow, Table};
use crate::utils::error::{MatchError, Result};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use std::io::Cursor;
use std::path::Path;

const SPREADSHEET_EXTENSIONS: &[&str] = &["xls", "xlsx", "xlsm", "xlsb", "ods"];

/// Decodes a survey export, choosing the format from the file extension.
pub fn decode_table(path: &str, bytes: &[u8]) -> Result<Table> {
    let extension = Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => decode_csv(bytes),
        ext if SPREADSHEET_EXTENSIONS.contains(&ext) => decode_spreadsheet(bytes),
        _ => Err(MatchError::UnsupportedFormat {
            path: path.to_string(),
        }),
    }
}

fn blank_to_none(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn decode_csv(bytes: &[u8]) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader.headers()?.iter().map(str::to_string).collect();
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(blank_to_none).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Reads the first worksheet; its first used row is the header.
///
/// Columns stay anchored at column A even when the leading columns are blank,
/// so positional selectors count the same way as in the spreadsheet.
pub fn decode_spreadsheet(bytes: &[u8]) -> Result<Table> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Table::default()),
    };
    let leading_blank = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => std::iter::repeat(String::new()).take(leading_blank)
            .chain(header_row.iter().map(|c| c.to_string()))
            .collect(),
        None => return Ok(Table::default()),
    };

    let rows = rows
        .map(|row| {
            std::iter::repeat(None).take(leading_blank)
                .chain(row.iter().map(|cell| match cell {
                    Data::Empty => None,
                    other => blank_to_none(&other.to_string()),
                }))
                .collect()
        })
        .collect();

    Ok(Table::new(headers, rows))
}

/// Serializes rankings as `Name,Rank 1..Rank N` with one row per ranked mentee,
/// rows ordered by mentee name.
pub fn encode_rankings(report: &MatchReport) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    let mut header = vec!["Name".to_string()];
    header.extend((1..=report.rank_columns()).map(|rank| format!("Rank {}", rank)));
    writer.write_record(&header)?;

    let mut rows: Vec<&RankingRow> = report.rankings.iter().collect();
    rows.sort_by(|a, b| a.mentee.cmp(&b.mentee));

    for row in rows {
        let mut record = Vec::with_capacity(row.ranked.len() + 1);
        record.push(row.mentee.clone());
        record.extend(row.formatted());
        writer.write_record(&record)?;
    }

    writer
        .into_inner()
        .map_err(|e| MatchError::IoError(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RankedMentor;
    use rust_xlsxwriter::Workbook;

    #[test]
    fn test_decode_csv_treats_empty_cells_as_missing() {
        let data = "Timestamp,Name,Hobbies\n2024-01-01,Ann,\"chess, go\"\n2024-01-02,Ben,\n";
        let table = decode_table("Mentor matching survey (Responses).csv", data.as_bytes())
            .unwrap();

        assert_eq!(table.headers, vec!["Timestamp", "Name", "Hobbies"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(0, 2), Some("chess, go"));
        assert_eq!(table.cell(1, 2), None);
    }

    #[test]
    fn test_decode_csv_accepts_ragged_rows() {
        let table = decode_csv(b"Name,A,B\nAnn,x\n").unwrap();
        assert_eq!(table.cell(0, 1), Some("x"));
        assert_eq!(table.cell(0, 2), None);
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let err = decode_table("responses.json", b"{}").unwrap_err();
        assert!(matches!(err, MatchError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_encode_rankings_layout() {
        let mut report = MatchReport::default();
        let mut mentors = crate::domain::model::Cohort::new();
        mentors.merge(crate::domain::model::PersonEntry::new("Bob", Default::default()));
        mentors.merge(crate::domain::model::PersonEntry::new("Cara", Default::default()));
        report.mentors = mentors;
        report.rankings.push(RankingRow {
            mentee: "Alice".to_string(),
            ranked: vec![
                RankedMentor {
                    name: "Cara".to_string(),
                    score: 1.0,
                },
                RankedMentor {
                    name: "Bob".to_string(),
                    score: 0.5,
                },
            ],
        });

        let csv = String::from_utf8(encode_rankings(&report).unwrap()).unwrap();
        assert_eq!(csv, "Name,Rank 1,Rank 2\nAlice,Cara-1.00,Bob-0.50\n");
    }

    fn row(mentee: &str, mentor: &str, score: f64) -> RankingRow {
        RankingRow {
            mentee: mentee.to_string(),
            ranked: vec![RankedMentor {
                name: mentor.to_string(),
                score,
            }],
        }
    }

    #[test]
    fn test_encode_rankings_orders_rows_by_mentee_name() {
        let mut report = MatchReport::default();
        report
            .mentors
            .merge(crate::domain::model::PersonEntry::new("Dan", Default::default()));
        report.rankings = vec![
            row("Zed", "Dan", 0.625),
            row("Amy", "Dan", 0.125),
            row("Mo", "Dan", 0.375),
        ];

        let csv = String::from_utf8(encode_rankings(&report).unwrap()).unwrap();
        assert_eq!(
            csv,
            "Name,Rank 1\nAmy,Dan-0.12\nMo,Dan-0.38\nZed,Dan-0.62\n"
        );
        // processing order in the report is untouched
        assert_eq!(report.rankings[0].mentee, "Zed");
    }

    #[test]
    fn test_spreadsheet_with_blank_first_column_keeps_positions() {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (c, value) in ["Name", "Hobbies"].iter().enumerate() {
            worksheet.write_string(0, c as u16 + 1, *value).unwrap();
        }
        worksheet.write_string(1, 1, "Ann").unwrap();
        worksheet.write_string(1, 2, "chess, go").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let table = decode_table("Mentors.xlsx", &bytes).unwrap();
        assert_eq!(table.headers, vec!["", "Name", "Hobbies"]);
        assert_eq!(table.cell(0, 0), None);
        assert_eq!(table.cell(0, 1), Some("Ann"));
        assert_eq!(table.cell(0, 2), Some("chess, go"));
    }
}
