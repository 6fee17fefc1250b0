use crate::codegen::domain::model::entities::table::Table;

#[derive(Clone, Debug)]
pub struct TableContextQuery {
    table: Table,
    package_root: String,
}

impl TableContextQuery {
    pub fn new(table: Table, package_root: String) -> Self {
        Self {
            table,
            package_root,
        }
    }

    pub fn table(&self) -> &Table {
        &self.table
    }
    pub fn package_root(&self) -> &str {
        &self.package_root
    }
}
