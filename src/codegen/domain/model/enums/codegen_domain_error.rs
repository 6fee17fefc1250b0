use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenDomainError {
    #[error("catalog is unreachable: {0}")]
    Connectivity(String),

    #[error("unknown catalog type: {catalog_type}")]
    UnknownType { catalog_type: String },

    #[error("column {schema}.{table}.{column} has unknown catalog type: {catalog_type}")]
    UnknownColumnType {
        schema: String,
        table: String,
        column: String,
        catalog_type: String,
    },

    #[error("field {field} has unsupported kind: {kind}")]
    UnsupportedFieldType { field: String, kind: String },

    #[error("template name is invalid")]
    InvalidTemplateName,

    #[error("render error: {0}")]
    RenderError(String),

    #[error("infrastructure error: {0}")]
    InfrastructureError(String),
}

impl CodegenDomainError {
    /// Errors that only invalidate the table being generated, not the whole run.
    pub fn is_table_scoped(&self) -> bool {
        matches!(
            self,
            Self::UnknownType { .. }
                | Self::UnknownColumnType { .. }
                | Self::UnsupportedFieldType { .. }
        )
    }
}
