//! Later-wins combination of same-kind records

use crate::record::Record;

impl Record {
    /// Merge `other` into `self`. For every field the kind declares, a set
    /// value on `other` replaces whatever `self` holds; unset fields keep
    /// `self`'s value. Filter lists move wholesale, not per index. Merging
    /// never fails on attribute conflicts; "other wins" is the sole rule.
    ///
    /// Calling this with records of different kinds is a programmer error.
    pub fn merge(&mut self, other: &Record) {
        assert_eq!(
            self.kind_name(),
            other.kind_name(),
            "merge requires records of the same kind"
        );

        for def in self.kind().fields() {
            if let Some(value) = other.raw_field(def) {
                let value = value.clone();
                self.insert_raw(def, value);
            }
        }
        self.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use crate::kind;
    use crate::record::Record;
    use crate::{fields, FilterList};
    use stencil_core::Direction;

    #[test]
    fn test_other_wins_when_set() {
        let mut a = Record::new(kind::inserter());
        a.set_direction(Some(Direction::East)).unwrap();
        a.set(&fields::OVERRIDE_STACK_SIZE, Some(1u32)).unwrap();

        let mut b = Record::new(kind::inserter());
        b.set_direction(Some(Direction::South)).unwrap();

        a.merge(&b);
        assert_eq!(a.direction().unwrap(), Some(Direction::South));
        // b never set a stack size, so a's survives.
        assert_eq!(a.get::<u32>(&fields::OVERRIDE_STACK_SIZE).unwrap(), Some(1));
    }

    #[test]
    fn test_control_fields_merge_per_attribute() {
        let mut a = Record::new(kind::inserter());
        a.set(&fields::CIRCUIT_ENABLE_DISABLE, Some(true)).unwrap();

        let mut b = Record::new(kind::inserter());
        b.set(&fields::CIRCUIT_SET_STACK_SIZE, Some(true)).unwrap();

        a.merge(&b);
        assert_eq!(a.get::<bool>(&fields::CIRCUIT_ENABLE_DISABLE).unwrap(), Some(true));
        assert_eq!(a.get::<bool>(&fields::CIRCUIT_SET_STACK_SIZE).unwrap(), Some(true));
    }

    #[test]
    fn test_filter_lists_replace_wholesale() {
        let mut a = Record::new(kind::deconstruction_planner());
        a.set_entity_filters(["tree-01", "tree-02"]).unwrap();

        let mut b = Record::new(kind::deconstruction_planner());
        b.set_entity_filter(5, Some("rock-huge")).unwrap();

        a.merge(&b);
        let merged = a.filters(&fields::ENTITY_FILTERS).unwrap().unwrap();
        let mut expected = FilterList::new();
        expected.set(5, Some("rock-huge"), None);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_invalidates() {
        let mut a = Record::new(kind::land_mine());
        let b = Record::new(kind::land_mine());
        a.validate().unwrap();
        assert!(a.is_valid());
        a.merge(&b);
        assert!(!a.is_valid());
    }

    #[test]
    #[should_panic(expected = "same kind")]
    fn test_kind_mismatch_panics() {
        let mut a = Record::new(kind::inserter());
        let b = Record::new(kind::land_mine());
        a.merge(&b);
    }
}
