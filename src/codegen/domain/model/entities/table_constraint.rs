use serde::Serialize;

pub const PRIMARY_KEY_CONSTRAINT: &str = "PRIMARY KEY";

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct TableConstraint {
    pub column_name: String,
    pub constraint_type: String,
    pub is_deferrable: bool,
    pub is_initially_deferred: bool,
}

impl TableConstraint {
    pub fn is_primary_key_for(&self, column_name: &str) -> bool {
        self.column_name == column_name && self.constraint_type == PRIMARY_KEY_CONSTRAINT
    }
}
