use serde::Serialize;

/// Capability a generated module has to import support for.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum ImportMarker {
    Formatting,
    Reflection,
    Temporal,
}

impl ImportMarker {
    pub fn import_path(&self) -> &'static str {
        match self {
            Self::Formatting => "fmt",
            Self::Reflection => "reflect",
            Self::Temporal => "time",
        }
    }
}
