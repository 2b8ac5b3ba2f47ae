//! Pure building blocks for the summary export.
//!
//! The shell scans the table and writes the file; this module decides the
//! object key, the columns and what each cell contains.

use chrono::NaiveDate;

use crate::item::{AttributeValue, Item};

/// Object key for the summary of `date`: `<prefix>/summary-DD-MM-YYYY.csv`.
pub fn summary_key(prefix: &str, date: NaiveDate) -> String {
    format!("{}/summary-{}.csv", prefix, date.format("%d-%m-%Y"))
}

/// Column names taken from the first exported item.
pub fn header_row(item: &Item) -> Vec<String> {
    item.to_attributes().into_keys().collect()
}

/// A data row aligned to a header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
    /// Attributes of the item that have no column in the header.
    pub dropped: Vec<String>,
}

/// Renders `item` in the column order of `header`.
///
/// Attributes missing from the item become empty cells; attributes the
/// header does not know about are reported in [`Row::dropped`].
pub fn item_row(header: &[String], item: &Item) -> Row {
    let attributes = item.to_attributes();

    let cells = header
        .iter()
        .map(|column| attributes.get(column).map(render_cell).unwrap_or_default())
        .collect();

    let dropped = attributes
        .into_keys()
        .filter(|name| !header.contains(name))
        .collect();

    Row { cells, dropped }
}

/// Renders one attribute value as CSV cell text.
pub fn render_cell(value: &AttributeValue) -> String {
    match value {
        AttributeValue::String(s) => s.clone(),
        AttributeValue::Number(n) => n.clone(),
        AttributeValue::Bool(b) => b.to_string(),
        AttributeValue::Null => String::new(),
        AttributeValue::List(_) | AttributeValue::Map(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::AttributeMap;
    use chrono::Utc;

    fn vehicle(make: &str, year: i64) -> Item {
        let attributes = AttributeMap::from([
            ("make".to_string(), AttributeValue::string(make)),
            ("year".to_string(), AttributeValue::number(year)),
        ]);
        Item::new(attributes, Utc::now())
    }

    #[test]
    fn test_summary_key() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(summary_key("reports", date), "reports/summary-07-03-2024.csv");
    }

    #[test]
    fn test_header_row_includes_reserved_fields() {
        let header = header_row(&vehicle("Toyota", 2020));
        assert_eq!(
            header,
            vec!["created_at", "make", "object_id", "updated_at", "year"]
        );
    }

    #[test]
    fn test_item_row_follows_header_order() {
        let item = vehicle("Toyota", 2020);
        let header = header_row(&item);
        let row = item_row(&header, &item);

        assert_eq!(row.cells.len(), header.len());
        assert_eq!(row.cells[1], "Toyota");
        assert_eq!(row.cells[2], item.object_id);
        assert_eq!(row.cells[4], "2020");
        assert!(row.dropped.is_empty());
    }

    #[test]
    fn test_item_row_with_missing_and_extra_attributes() {
        let header = header_row(&vehicle("Toyota", 2020));

        let mut other = Item::sparse("id-2");
        other
            .attributes
            .insert("make".to_string(), AttributeValue::string("Honda"));
        other
            .attributes
            .insert("color".to_string(), AttributeValue::string("red"));

        let row = item_row(&header, &other);

        assert_eq!(row.cells, vec!["", "Honda", "id-2", "", ""]);
        assert_eq!(row.dropped, vec!["color"]);
    }

    #[test]
    fn test_render_cell() {
        assert_eq!(render_cell(&AttributeValue::string("sedan")), "sedan");
        assert_eq!(render_cell(&AttributeValue::number("19.99")), "19.99");
        assert_eq!(render_cell(&AttributeValue::Bool(true)), "true");
        assert_eq!(render_cell(&AttributeValue::Null), "");
        assert_eq!(
            render_cell(&AttributeValue::List(vec![
                AttributeValue::string("a"),
                AttributeValue::number(1)
            ])),
            r#"["a",1.0]"#
        );
    }
}
