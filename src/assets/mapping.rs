use indexmap::IndexMap;
use serde::Serialize;

// ── MappingDocument ───────────────────────────────────────────────────────────

/// What the tile renderer reads back: the tile size plus, for every tile,
/// its index (as a decimal string) and semantic name.
///
/// Serialises as `{"w":W,"h":H,"dict":{"0":"grass","1":"dirt"}}` with the
/// `dict` keys in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MappingDocument {
    pub w: u32,
    pub h: u32,
    pub dict: IndexMap<String, String>,
}

impl MappingDocument {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h, dict: IndexMap::new() }
    }

    /// Record tile `index` as `name`.  A repeated index replaces the earlier
    /// name in place.
    pub fn insert(&mut self, index: usize, name: &str) {
        self.dict.insert(index.to_string(), name.to_string());
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
