use crate::collect::Partition;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::fmt::Display;

pub(super) fn list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    format!("[{}]", items.into_iter().join(", "))
}

pub(super) fn groups<K: Display, V>(groups: &BTreeMap<K, V>, value: impl Fn(&V) -> String) -> String {
    format!("{{{}}}", groups.iter().map(|(key, group)| format!("{key}={}", value(group))).join(", "))
}

pub(super) fn partition<R>(partition: &Partition<R>, value: impl Fn(&R) -> String) -> String {
    format!("{{false={}, true={}}}", value(&partition.unmatched), value(&partition.matched))
}

pub(super) fn optional<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "<none>".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        assert_eq!(list([1, 2, 3]), "[1, 2, 3]");
        assert_eq!(list(Vec::<i32>::new()), "[]");
    }

    #[test]
    fn test_groups() {
        let map = BTreeMap::from([("b", vec![2]), ("a", vec![1, 3])]);
        assert_eq!(groups(&map, |group| list(group)), "{a=[1, 3], b=[2]}");
    }

    #[test]
    fn test_partition() {
        let parts = Partition { matched: 2, unmatched: 3 };
        assert_eq!(partition(&parts, |n| n.to_string()), "{false=3, true=2}");
    }

    #[test]
    fn test_optional() {
        assert_eq!(optional(&Some("IT")), "IT");
        assert_eq!(optional::<i32>(&None), "<none>");
    }
}
