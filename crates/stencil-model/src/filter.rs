//! Sparse indexed filter lists

use serde::{Deserialize, Serialize};

/// One slot in a filter list. `index` is 1-based and unique within its
/// list; the list position of an entry carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub index: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

/// A sparse collection of filters, matched by the `index` field rather than
/// by position. Used for entity, tile, item, and request filters alike.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterList(Vec<Filter>);

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert-or-delete the slot at `index`. `Some(name)` overwrites an
    /// existing entry in place (keeping its list position) or appends a new
    /// one at the end; `None` removes the entry, doing nothing when the
    /// index is unoccupied.
    ///
    /// Index bounds are not checked here; out-of-range indices surface as
    /// warnings during inspection.
    pub fn set(&mut self, index: u32, name: Option<&str>, count: Option<u32>) {
        if let Some(pos) = self.0.iter().position(|f| f.index == index) {
            match name {
                Some(name) => {
                    self.0[pos].name = name.to_string();
                    self.0[pos].count = count;
                }
                None => {
                    self.0.remove(pos);
                }
            }
        } else if let Some(name) = name {
            self.0.push(Filter {
                index,
                name: name.to_string(),
                count,
            });
        }
    }

    /// Assign slots 1..=N from `names` in order. Entries at indices beyond
    /// the input length keep whatever they held before; this partial
    /// overwrite is intentional.
    pub fn set_many<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, name) in names.into_iter().enumerate() {
            self.set(i as u32 + 1, Some(name.as_ref()), None);
        }
    }

    /// Get the entry at `index`
    pub fn get(&self, index: u32) -> Option<&Filter> {
        self.0.iter().find(|f| f.index == index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.0.iter()
    }

    /// The entries in current list order, for serialization
    pub fn as_slice(&self) -> &[Filter] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a FilterList {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &FilterList) -> Vec<(u32, &str)> {
        list.iter().map(|f| (f.index, f.name.as_str())).collect()
    }

    #[test]
    fn test_set_appends_new_indices() {
        let mut list = FilterList::new();
        list.set(3, Some("tree-01"), None);
        list.set(1, Some("rock-huge"), None);
        // Append order, not index order.
        assert_eq!(names(&list), vec![(3, "tree-01"), (1, "rock-huge")]);
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut list = FilterList::new();
        list.set(1, Some("tree-01"), None);
        list.set(2, Some("tree-02"), None);
        list.set(1, Some("rock-big"), None);
        assert_eq!(names(&list), vec![(1, "rock-big"), (2, "tree-02")]);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut list = FilterList::new();
        list.set(1, Some("tree-01"), None);
        let snapshot = list.clone();
        list.set(1, Some("tree-01"), None);
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_clear_removes_entry() {
        let mut list = FilterList::new();
        list.set(1, Some("tree-01"), None);
        list.set(2, Some("tree-02"), None);
        list.set(1, None, None);
        assert_eq!(names(&list), vec![(2, "tree-02")]);
    }

    #[test]
    fn test_clear_missing_index_is_noop() {
        let mut list = FilterList::new();
        list.set(5, None, None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_set_many_assigns_from_slot_one() {
        let mut list = FilterList::new();
        list.set_many(["a", "b", "c"]);
        assert_eq!(names(&list), vec![(1, "a"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_set_many_leaves_trailing_slots_untouched() {
        // The documented asymmetry: a shorter second call only reassigns
        // the slots it covers.
        let mut list = FilterList::new();
        list.set_many(["a", "b", "c"]);
        list.set_many(["x"]);
        assert_eq!(names(&list), vec![(1, "x"), (2, "b"), (3, "c")]);
    }

    #[test]
    fn test_count_roundtrip() {
        let mut list = FilterList::new();
        list.set(1, Some("iron-plate"), Some(100));
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, r#"[{"index":1,"name":"iron-plate","count":100}]"#);
        let back: FilterList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
    }

    #[test]
    fn test_count_omitted_when_unset() {
        let mut list = FilterList::new();
        list.set(1, Some("tree-01"), None);
        let json = serde_json::to_string(&list).unwrap();
        assert!(!json.contains("count"));
    }
}
