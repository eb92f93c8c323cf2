//! Merging color values with their documentation.

use vstheme_shared::{ColorMap, DocMap, MergedMap, MergedRecord};

/// Pair every color key with its documentation.
///
/// The result has exactly the keys of `colors`, in the same order. Keys with
/// no documentation get `meaning: None`; documentation for keys the theme
/// does not define is dropped.
pub fn merge_colors_with_docs(colors: &ColorMap, docs: &DocMap) -> MergedMap {
    colors
        .iter()
        .map(|(key, color)| {
            let record = MergedRecord {
                color: color.clone(),
                meaning: docs.get(key).cloned(),
            };
            (key.clone(), record)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Coverage report
// ---------------------------------------------------------------------------

/// Documentation coverage of a theme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Number of color keys that have documentation.
    pub documented: usize,
    /// Color keys without documentation, in theme order.
    pub undocumented: Vec<String>,
    /// Documented keys the theme does not define, in document order.
    pub orphaned: Vec<String>,
}

impl MergeReport {
    /// Compare the key sets of a theme and its documentation.
    pub fn from_maps(colors: &ColorMap, docs: &DocMap) -> Self {
        let (documented, undocumented): (Vec<&String>, Vec<&String>) =
            colors.keys().partition(|key| docs.contains_key(key.as_str()));

        let orphaned = docs
            .keys()
            .filter(|key| !colors.contains_key(key.as_str()))
            .cloned()
            .collect();

        Self {
            documented: documented.len(),
            undocumented: undocumented.into_iter().cloned().collect(),
            orphaned,
        }
    }

    /// Total number of color keys in the theme.
    pub fn total(&self) -> usize {
        self.documented + self.undocumented.len()
    }

    /// True when every color key is documented.
    pub fn is_complete(&self) -> bool {
        self.undocumented.is_empty()
    }
}

impl std::fmt::Display for MergeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} color keys documented, {} undocumented, {} orphaned docs",
            self.documented,
            self.total(),
            self.undocumented.len(),
            self.orphaned.len()
        )
    }
}
