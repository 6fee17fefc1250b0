use crate::codegen::domain::model::entities::table::Table;

#[derive(Clone, Debug, PartialEq)]
pub struct RenderedArtifact {
    pub table: Table,
    pub template_name: String,
    pub contents: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SkippedTable {
    pub table: Table,
    pub reason: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GenerationRunReport {
    pub artifacts: Vec<RenderedArtifact>,
    pub skipped_tables: Vec<SkippedTable>,
}

impl GenerationRunReport {
    pub fn generated_table_count(&self) -> usize {
        let mut tables = self
            .artifacts
            .iter()
            .map(|artifact| &artifact.table)
            .collect::<Vec<_>>();
        tables.dedup();
        tables.len()
    }
}
