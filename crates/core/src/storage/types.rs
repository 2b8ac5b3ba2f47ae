use crate::item::Item;

/// One page of a table scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScanPage {
    pub items: Vec<Item>,
    /// Identifier to resume the scan after; `None` once the table is exhausted.
    pub last_evaluated_key: Option<String>,
}

impl ScanPage {
    /// Returns true when no further page follows this one.
    pub fn is_last(&self) -> bool {
        self.last_evaluated_key.is_none()
    }
}
