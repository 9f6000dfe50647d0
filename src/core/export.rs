use crate::domain::model::Table;
use crate::utils::error::Result;

/// Render an extracted table as CSV, one record per row. Flexible widths,
/// since extraction does not guarantee uniform rows.
pub fn table_to_csv(table: &Table) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for row in table {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_record_per_row() {
        let table = vec![
            vec!["BW".to_string(), "Beg.".to_string()],
            vec!["120".to_string(), "67 x0.56".to_string()],
        ];
        let csv_text = table_to_csv(&table).unwrap();
        assert_eq!(csv_text, "BW,Beg.\n120,67 x0.56\n");
    }

    #[test]
    fn ragged_rows_are_allowed() {
        let table = vec![
            vec!["a".to_string()],
            vec!["b".to_string(), "c".to_string()],
        ];
        assert_eq!(table_to_csv(&table).unwrap(), "a\nb,c\n");
    }
}
