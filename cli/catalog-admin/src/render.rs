//! Table rendering for catalog listings.

use std::fmt::Display;

use catalog_client::CatalogRecord;

use crate::form::DATE_FORMAT;

/// Shown instead of a table when there is nothing to render.
pub const EMPTY_STATE: &str = "No catalogs found.";

const HEADERS: [&str; 6] = ["ID", "Name", "Description", "Start Date", "End Date", "Status"];

/// A catalog listing rendered as a padded text table.
///
/// Records appear in the order they were received.
pub struct CatalogTable<'a> {
    records: &'a [CatalogRecord],
}

impl<'a> CatalogTable<'a> {
    pub fn new(records: &'a [CatalogRecord]) -> Self {
        CatalogTable { records }
    }

    fn cells(record: &CatalogRecord) -> [String; 6] {
        [
            record.id.to_string(),
            record.name.clone(),
            record.description.clone(),
            record.start_date.format(DATE_FORMAT).to_string(),
            record.end_date.format(DATE_FORMAT).to_string(),
            record.status.to_string(),
        ]
    }
}

impl Display for CatalogTable<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows: Vec<[String; 6]> = self.records.iter().map(Self::cells).collect();

        let mut widths: [usize; 6] = HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let write_row = |f: &mut std::fmt::Formatter<'_>, cells: &[&str; 6]| {
            for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}")?;
            }
            writeln!(f)
        };

        write_row(f, &HEADERS)?;
        for row in &rows {
            let cells: [&str; 6] = [
                &row[0], &row[1], &row[2], &row[3], &row[4], &row[5],
            ];
            write_row(f, &cells)?;
        }
        Ok(())
    }
}

/// Render a listing, or the empty-state indicator when there are no
/// rows to show.
pub fn render_list(records: &[CatalogRecord]) -> String {
    if records.is_empty() {
        EMPTY_STATE.to_string()
    } else {
        CatalogTable::new(records).to_string()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_listing_renders_the_empty_state() {
        assert_eq!(render_list(&[]), EMPTY_STATE);
    }

    #[test]
    fn sole_row_renders_all_fields() {
        let record = CatalogRecord::new_mock(7, "Spring Sale");
        let rendered = render_list(&[record.clone()]);

        let mut lines = rendered.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("ID"));
        assert!(header.contains("Status"));

        let row = lines.next().unwrap();
        assert!(row.starts_with("7"));
        assert!(row.contains("Spring Sale"));
        assert!(row.contains("2999-01-01"));
        assert!(row.contains("upcoming"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn rows_keep_insertion_order_and_columns_align() {
        let records = vec![
            CatalogRecord::new_mock(1, "short"),
            CatalogRecord::new_mock(2, "a considerably longer name"),
        ];
        let rendered = render_list(&records);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1"));
        assert!(lines[2].starts_with("2"));

        // Every row pads to the same column positions.
        let status_col = lines[0].find("Status").unwrap();
        assert_eq!(&lines[1][status_col..status_col + "upcoming".len()], "upcoming");
    }
}
