use std::collections::BTreeSet;

use serde::{Serialize, Serializer};

use crate::codegen::domain::model::enums::import_marker::ImportMarker;

/// Deduplicated, ordered set of imports a generated module needs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ImportSet(BTreeSet<ImportMarker>);

impl ImportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markers(markers: &[ImportMarker]) -> Self {
        Self(markers.iter().copied().collect())
    }

    /// Returns `true` the first time `marker` is added.
    pub fn insert(&mut self, marker: ImportMarker) -> bool {
        self.0.insert(marker)
    }

    pub fn contains(&self, marker: ImportMarker) -> bool {
        self.0.contains(&marker)
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.0.iter().map(ImportMarker::import_path).collect()
    }
}

impl Serialize for ImportSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.paths())
    }
}
