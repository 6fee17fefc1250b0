use serde::Serialize;

/// A catalog column. `default` is empty when the column has no default.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub default: String,
    pub nullable: bool,
    #[serde(rename = "type")]
    pub catalog_type: String,
}

impl Column {
    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }
}
