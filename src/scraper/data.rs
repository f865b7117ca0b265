//! The namespaced aggregate every scraper contributes to.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{collections::BTreeMap, path::Path};

use crate::{
    core::{read_json, write_json},
    Result,
};

/// One category's output: sub-type name -> records.
pub type CategoryData = BTreeMap<String, Vec<Value>>;

/// Category name -> [`CategoryData`].
///
/// Contributions are additive: merging into an existing category/sub-type
/// appends the new records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScrapedData(BTreeMap<String, CategoryData>);

impl ScrapedData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.contains_key(category)
    }

    pub fn get(&self, category: &str) -> Option<&CategoryData> {
        self.0.get(category)
    }

    /// Records of one sub-type, if that category/sub-type exists.
    pub fn records(&self, category: &str, sub_type: &str) -> Option<&[Value]> {
        self.0
            .get(category)
            .and_then(|c| c.get(sub_type))
            .map(Vec::as_slice)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Append `data` under `category`. The category key is created even when
    /// `data` is empty, so a scraper that found nothing is still visible.
    pub fn merge(&mut self, category: &str, data: CategoryData) {
        let entry = self.0.entry(category.to_string()).or_default();
        for (sub_type, records) in data {
            entry.entry(sub_type).or_default().extend(records);
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn into_inner(self) -> BTreeMap<String, CategoryData> {
        self.0
    }

    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        write_json(path, self)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        read_json(path)
    }
}

impl From<BTreeMap<String, CategoryData>> for ScrapedData {
    fn from(map: BTreeMap<String, CategoryData>) -> Self {
        Self(map)
    }
}

/// Build a single-sub-type [`CategoryData`].
pub fn single(sub_type: &str, records: Vec<Value>) -> CategoryData {
    let mut data = CategoryData::new();
    data.insert(sub_type.to_string(), records);
    data
}
