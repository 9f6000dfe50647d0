use crate::core::markup::{decode_reference, Event, Tokenizer};
use crate::domain::model::{Row, Table, TableSet};

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Decode character references into cell text. Off by default; the
    /// threshold cells never need it.
    pub decode_entities: bool,
    /// Separator joining the text fragments of one cell.
    pub cell_separator: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            decode_entities: false,
            cell_separator: " ".to_string(),
        }
    }
}

/// Table state machine fed by markup events.
///
/// Cell text accumulates only while inside a `td` or `th`; closing the cell
/// joins the trimmed fragments with the configured separator, closing a row
/// or table moves the buffer up one level. Unclosed cells, rows and tables
/// are never appended. One instance per parse call; buffers are not shared
/// across invocations.
pub struct TableExtractor {
    options: ExtractOptions,
    in_data_cell: bool,
    in_header_cell: bool,
    current_cell: Vec<String>,
    current_row: Row,
    current_table: Table,
    tables: TableSet,
}

impl TableExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            in_data_cell: false,
            in_header_cell: false,
            current_cell: Vec::new(),
            current_row: Row::new(),
            current_table: Table::new(),
            tables: TableSet::new(),
        }
    }

    pub fn feed(&mut self, document: &str) {
        for event in Tokenizer::new(document) {
            self.handle(event);
        }
    }

    pub fn into_tables(self) -> TableSet {
        self.tables
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::StartTag(name) => {
                if name.eq_ignore_ascii_case("td") {
                    self.in_data_cell = true;
                } else if name.eq_ignore_ascii_case("th") {
                    self.in_header_cell = true;
                }
            }
            Event::Text(fragment) => self.push_fragment(fragment),
            Event::CharRef(raw) => {
                if self.options.decode_entities {
                    if let Some(ch) = decode_reference(raw) {
                        let mut buf = [0u8; 4];
                        self.push_fragment(ch.encode_utf8(&mut buf));
                    }
                }
            }
            Event::EndTag(name) => self.close_tag(name),
        }
    }

    fn push_fragment(&mut self, fragment: &str) {
        if self.in_data_cell || self.in_header_cell {
            self.current_cell.push(fragment.trim().to_string());
        }
    }

    fn close_tag(&mut self, name: &str) {
        if name.eq_ignore_ascii_case("td") {
            self.in_data_cell = false;
            self.finish_cell();
        } else if name.eq_ignore_ascii_case("th") {
            self.in_header_cell = false;
            self.finish_cell();
        } else if name.eq_ignore_ascii_case("tr") {
            self.current_table.push(std::mem::take(&mut self.current_row));
        } else if name.eq_ignore_ascii_case("table") {
            self.tables.push(std::mem::take(&mut self.current_table));
        }
    }

    fn finish_cell(&mut self) {
        let cell = self
            .current_cell
            .join(&self.options.cell_separator)
            .trim()
            .to_string();
        self.current_row.push(cell);
        self.current_cell.clear();
    }
}

/// Extract every `<table>` in `document` into rows of trimmed cell strings.
pub fn extract_tables(document: &str, options: &ExtractOptions) -> TableSet {
    let mut extractor = TableExtractor::new(options.clone());
    extractor.feed(document);
    extractor.into_tables()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(document: &str) -> TableSet {
        extract_tables(document, &ExtractOptions::default())
    }

    /// Render rows back to markup, the inverse of extraction for clean cells.
    fn render_table(header: &[&str], rows: &[Vec<&str>]) -> String {
        let mut html = String::from("<table>\n  <tr>");
        for cell in header {
            html.push_str(&format!("<th>{}</th>", cell));
        }
        html.push_str("</tr>\n");
        for row in rows {
            html.push_str("  <tr>");
            for cell in row {
                html.push_str(&format!("<td>{}</td>", cell));
            }
            html.push_str("</tr>\n");
        }
        html.push_str("</table>");
        html
    }

    #[test]
    fn one_table_per_table_element() {
        let doc = format!(
            "<html><body>{}{}</body></html>",
            render_table(&["BW", "Beg."], &[vec!["120", "67 x0.56"]]),
            render_table(&["BW", "Beg."], &[vec!["100", "23 x0.23"]]),
        );
        let tables = extract(&doc);
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0][0], vec!["BW", "Beg."]);
        assert_eq!(tables[1][1], vec!["100", "23 x0.23"]);
    }

    #[test]
    fn round_trips_known_cells() {
        let header = ["BW", "Beg.", "Nov.", "Int.", "Adv.", "Elite"];
        let rows = vec![
            vec!["150", "96 x0.64", "135 x0.9", "184 x1.22", "240 x1.6", "300 x2"],
            vec!["160", "105 x0.66", "146 x0.91", "196 x1.23", "254 x1.59", "316 x1.97"],
        ];
        let tables = extract(&render_table(&header, &rows));
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0][0], header);
        assert_eq!(tables[0][1], rows[0]);
        assert_eq!(tables[0][2], rows[1]);
    }

    #[test]
    fn fragments_are_trimmed_and_joined() {
        let tables = extract("<table><tr><td>\n  96\n  <b>x0.64</b>\n</td></tr></table>");
        assert_eq!(tables[0][0], vec!["96 x0.64"]);
    }

    #[test]
    fn separator_is_configurable() {
        let options = ExtractOptions {
            decode_entities: false,
            cell_separator: "|".to_string(),
        };
        let tables = extract_tables("<table><tr><td>a<b>b</b>c</td></tr></table>", &options);
        assert_eq!(tables[0][0], vec!["a|b|c"]);
    }

    #[test]
    fn empty_cell_yields_empty_string_not_absence() {
        let tables = extract("<table><tr><td></td><td>x</td></tr></table>");
        assert_eq!(tables[0][0], vec!["", "x"]);
    }

    #[test]
    fn references_ignored_unless_decoding_enabled() {
        let doc = "<table><tr><td>a&#x2d;b&nbsp;</td></tr></table>";
        assert_eq!(extract(doc)[0][0], vec!["a b"]);

        let options = ExtractOptions {
            decode_entities: true,
            cell_separator: "".to_string(),
        };
        assert_eq!(extract_tables(doc, &options)[0][0], vec!["a-b"]);
    }

    #[test]
    fn text_outside_cells_is_ignored() {
        let tables = extract("<table>noise<tr>more noise<td>kept</td></tr></table>");
        assert_eq!(tables[0][0], vec!["kept"]);
    }

    #[test]
    fn unclosed_structures_are_never_appended() {
        let tables = extract("<table><tr><td>done</td></tr><tr><td>pending");
        assert_eq!(tables.len(), 0);

        let tables = extract("<table><tr><td>done</td></tr>");
        assert_eq!(tables.len(), 0);
    }

    #[test]
    fn header_row_comes_first() {
        let tables = extract(
            "<table><tr><th>BW</th><th>Beg.</th></tr><tr><td>120</td><td>67 x0.56</td></tr></table>",
        );
        assert_eq!(tables[0][0], vec!["BW", "Beg."]);
        assert_eq!(tables[0][1], vec!["120", "67 x0.56"]);
    }

    #[test]
    fn each_call_owns_fresh_state() {
        let options = ExtractOptions::default();
        let first = extract_tables("<table><tr><td>a", &options);
        assert!(first.is_empty());
        // Leftover buffers from the truncated parse must not leak into a
        // later call.
        let second = extract_tables("<table><tr><td>b</td></tr></table>", &options);
        assert_eq!(second[0][0], vec!["b"]);
    }
}
