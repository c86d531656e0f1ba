//! Fetch-then-render views. Each submodule owns the client-side filtering,
//! sorting, and formatting for one screen of the original console.

pub mod calendar;
pub mod customers;
pub mod trainings;

/// Render a plain-text table with a header row and a dashed separator.
/// Column widths fit the widest cell.
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() && cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    let render_row = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        padded.join("  ").trim_end().to_string()
    };

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.push_str(&render_row(&header_cells));
    out.push('\n');
    let sep: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(sep.join("  ").trim_end());
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_to_widest_cell() {
        let out = render_table(
            &["Name", "City"],
            &[
                vec!["Aino".into(), "Helsinki".into()],
                vec!["Maximilian".into(), "Espoo".into()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Name        City");
        assert_eq!(lines[1], "----------  --------");
        assert_eq!(lines[2], "Aino        Helsinki");
        assert_eq!(lines[3], "Maximilian  Espoo");
    }

    #[test]
    fn table_with_no_rows_keeps_header() {
        let out = render_table(&["Id"], &[]);
        assert_eq!(out.lines().count(), 2);
    }
}
