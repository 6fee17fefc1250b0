use serde::Serialize;

pub const DEFAULT_SCHEMA: &str = "public";

#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize)]
pub struct Table {
    pub schema: String,
    pub name: String,
}

impl Table {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }

    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Name used in generated statements; `public` tables rely on the default search_path.
    pub fn statement_name(&self) -> String {
        if self.schema == DEFAULT_SCHEMA {
            self.name.clone()
        } else {
            self.qualified_name()
        }
    }
}
