//! Output rendering for command results.

use serde::Serialize;

use crate::cli::OutputFormat;

/// Print `value` in the requested format, using `table` for the aligned
/// human view.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized to JSON.
pub fn emit<T: Serialize>(format: OutputFormat, value: &T, table: &str) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Raw => println!("{}", serde_json::to_string(value)?),
        OutputFormat::Table => println!("{table}"),
    }
    Ok(())
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(String::len)
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let padded_header = headers
        .iter()
        .zip(widths.iter().copied())
        .map(|(header, width)| format!("{header:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(padded_header.len());
    let header_line = padded_header.trim_end().to_string();

    let row_lines = rows
        .iter()
        .map(|row| {
            widths
                .iter()
                .enumerate()
                .map(|(index, &width)| {
                    let value = row.get(index).map_or("-", String::as_str);
                    format!("{value:<width$}")
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n");

    if rows.is_empty() {
        format!("{header_line}\n{divider}\n(empty)")
    } else {
        format!("{header_line}\n{divider}\n{row_lines}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_aligns_columns_to_widest_cell() {
        let table = render_table(
            &["ID", "NAME"],
            &[
                vec!["7".to_string(), "Atlas".to_string()],
                vec!["9".to_string(), "Beacon".to_string()],
            ],
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID  NAME");
        assert_eq!(lines[2], "7   Atlas");
        assert_eq!(lines[3], "9   Beacon");
    }

    #[test]
    fn empty_table_renders_placeholder() {
        let table = render_table(&["ID"], &[]);
        assert!(table.ends_with("(empty)"));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["A", "B"], &[vec!["x".to_string()]]);
        assert!(table.lines().last().expect("row").contains('-'));
    }
}
