//! Pure planning of table changes (Functional Core).

use objects_core::item::OBJECT_ID;

/// Lifecycle of an existing table, as far as provisioning cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    /// Creating, updating or deleting.
    Transitioning,
}

/// What `DescribeTable` reported about an existing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub status: TableStatus,
    /// Name of the hash key attribute.
    pub partition_key: Option<String>,
}

/// The single change a provisioning run applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    Create,
    Delete,
    /// The table already exists with the right key.
    Keep,
    /// There is no table to delete.
    Absent,
    /// The table exists under another key. Key schemas cannot be altered.
    Conflict { partition_key: String },
}

impl Plan {
    /// Plan that leaves an item table keyed by `object_id` in place.
    pub fn deploy(current: Option<&TableState>) -> Self {
        match current {
            None => Plan::Create,
            Some(TableState {
                partition_key: Some(key),
                ..
            }) if key != OBJECT_ID => Plan::Conflict {
                partition_key: key.clone(),
            },
            Some(_) => Plan::Keep,
        }
    }

    /// Plan that leaves no table behind.
    pub fn destroy(current: Option<&TableState>) -> Self {
        match current {
            Some(_) => Plan::Delete,
            None => Plan::Absent,
        }
    }

    /// One line summary for the operator.
    pub fn describe(&self, table_name: &str) -> String {
        match self {
            Plan::Create => format!(
                "+ create table '{table_name}' keyed by {OBJECT_ID} (S), on-demand billing"
            ),
            Plan::Delete => format!("- delete table '{table_name}' (ALL DATA WILL BE LOST)"),
            Plan::Keep => format!("= table '{table_name}' is already keyed by {OBJECT_ID}"),
            Plan::Absent => format!("= table '{table_name}' does not exist"),
            Plan::Conflict { partition_key } => format!(
                "! table '{table_name}' is keyed by {partition_key}; destroy it and deploy again"
            ),
        }
    }
}
