//! Adapters lifting single-side functions into pair-shaped ones.
//!
//! Every adapter is a free function returning a closure, meant to be passed
//! straight to an iterator combinator:
//!
//! ```
//! use std::collections::HashMap;
//! use twofold_stream::pairs;
//!
//! let inventory = HashMap::from([("bolt", 40), ("nut", 120)]);
//!
//! let restocked: HashMap<&str, i32> = inventory
//!     .iter()
//!     .map(pairs::cloned)
//!     .map(pairs::values(|count| count + 10))
//!     .collect();
//!
//! assert_eq!(restocked["bolt"], 50);
//! assert_eq!(restocked["nut"], 130);
//! ```

use std::cmp::Ordering;

/// Bridges a borrowed map entry into an owned pair.
///
/// Useful at the head of a pipeline over `HashMap::iter` or
/// `BTreeMap::iter`, which yield `(&K, &V)`.
pub fn cloned<K: Clone, V: Clone>(entry: (&K, &V)) -> (K, V) {
    (entry.0.clone(), entry.1.clone())
}

/// Spreads a pair into a two-argument consumer.
pub fn to_entry<K, V, F: FnMut(K, V)>(mut consumer: F) -> impl FnMut((K, V)) {
    move |(key, value)| consumer(key, value)
}

/// Consumes only the key of each pair.
pub fn to_key<K, V, F: FnMut(K)>(mut consumer: F) -> impl FnMut((K, V)) {
    move |(key, _)| consumer(key)
}

/// Consumes only the value of each pair.
pub fn to_value<K, V, F: FnMut(V)>(mut consumer: F) -> impl FnMut((K, V)) {
    move |(_, value)| consumer(value)
}

/// Lifts a two-argument function into a pair-to-result function.
pub fn entries<K, V, T, F: FnMut(K, V) -> T>(mut f: F) -> impl FnMut((K, V)) -> T {
    move |(key, value)| f(key, value)
}

/// Transforms the key of each pair, preserving the value.
pub fn keys<K, V, T, F: FnMut(K) -> T>(mut f: F) -> impl FnMut((K, V)) -> (T, V) {
    move |(key, value)| (f(key), value)
}

/// Transforms the value of each pair, preserving the key.
pub fn values<K, V, T, F: FnMut(V) -> T>(mut f: F) -> impl FnMut((K, V)) -> (K, T) {
    move |(key, value)| (key, f(value))
}

/// Swaps the sides of a pair.
pub fn swap<K, V>((key, value): (K, V)) -> (V, K) {
    (value, key)
}

/// Lifts a two-argument predicate into a pair predicate for `filter`.
pub fn is_entry<K, V, P: FnMut(&K, &V) -> bool>(mut predicate: P) -> impl FnMut(&(K, V)) -> bool {
    move |(key, value)| predicate(key, value)
}

/// Lifts a key predicate into a pair predicate for `filter`.
pub fn is_key<K, V, P: FnMut(&K) -> bool>(mut predicate: P) -> impl FnMut(&(K, V)) -> bool {
    move |(key, _)| predicate(key)
}

/// Lifts a value predicate into a pair predicate for `filter`.
pub fn is_value<K, V, P: FnMut(&V) -> bool>(mut predicate: P) -> impl FnMut(&(K, V)) -> bool {
    move |(_, value)| predicate(value)
}

/// Pairs every produced item with a fixed key.
pub fn pair_with_key<K: Clone, V>(key: K) -> impl Fn(V) -> (K, V) {
    move |value| (key.clone(), value)
}

/// Pairs every produced item with a fixed value.
pub fn pair_with_value<K, V: Clone>(value: V) -> impl Fn(K) -> (K, V) {
    move |key| (key, value.clone())
}

/// Fans the value out through `f`, replicating the key across every
/// produced item. Meant for `flat_map`.
pub fn with_value<K, V, R, I, F>(mut f: F) -> impl FnMut((K, V)) -> Vec<(K, R)>
where
    K: Clone,
    F: FnMut(V) -> I,
    I: IntoIterator<Item = R>,
{
    move |(key, value)| f(value).into_iter().map(pair_with_key(key)).collect()
}

/// Fans the key out through `f`, replicating the value across every
/// produced item. Meant for `flat_map`.
pub fn with_key<K, V, R, I, F>(mut f: F) -> impl FnMut((K, V)) -> Vec<(R, V)>
where
    V: Clone,
    F: FnMut(K) -> I,
    I: IntoIterator<Item = R>,
{
    move |(key, value)| f(key).into_iter().map(pair_with_value(value)).collect()
}

/// Lifts a key comparator into a pair comparator for `sort_by`.
pub fn by_key<K, V, C: Fn(&K, &K) -> Ordering>(
    comparator: C,
) -> impl Fn(&(K, V), &(K, V)) -> Ordering {
    move |a, b| comparator(&a.0, &b.0)
}

/// Lifts a value comparator into a pair comparator for `sort_by`.
pub fn by_value<K, V, C: Fn(&V, &V) -> Ordering>(
    comparator: C,
) -> impl Fn(&(K, V), &(K, V)) -> Ordering {
    move |a, b| comparator(&a.1, &b.1)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn sample() -> HashMap<i32, &'static str> {
        HashMap::from([(1, "first"), (2, "second"), (3, "third"), (4, "fourth"), (5, "fifth")])
    }

    #[test]
    fn test_to_entry_spreads_pairs() {
        let mut seen = Vec::new();
        sample().into_iter().for_each(to_entry(|k, v| seen.push(format!("{}:{}", k, v))));

        for expected in ["1:first", "2:second", "3:third", "4:fourth", "5:fifth"] {
            assert!(seen.iter().any(|s| s == expected), "missing {}", expected);
        }
    }

    #[test]
    fn test_to_key_and_to_value_pick_one_side() {
        let mut keys_seen = Vec::new();
        let mut values_seen = Vec::new();

        sample().into_iter().for_each(to_key(|k| keys_seen.push(k)));
        sample().into_iter().for_each(to_value(|v| values_seen.push(v)));

        keys_seen.sort();
        assert_eq!(keys_seen, vec![1, 2, 3, 4, 5]);
        assert!(values_seen.contains(&"second"));
        assert_eq!(values_seen.len(), 5);
    }

    #[test]
    fn test_entries_combines_both_sides() {
        let mut joined: Vec<String> =
            sample().into_iter().map(entries(|k, v| format!("{}:{}", k, v))).collect();
        joined.sort();

        assert_eq!(joined[0], "1:first");
        assert_eq!(joined[4], "5:fifth");
    }

    #[test]
    fn test_keys_transforms_keys_preserving_values() {
        let doubled: HashMap<i32, &str> = sample().into_iter().map(keys(|k| k * 2)).collect();

        assert_eq!(doubled.get(&1), None);
        assert_eq!(doubled.get(&2), Some(&"first"));
        assert_eq!(doubled.get(&10), Some(&"fifth"));
    }

    #[test]
    fn test_values_transforms_values_preserving_keys() {
        let lengths: HashMap<i32, usize> =
            sample().into_iter().map(values(str::len)).collect();

        assert_eq!(lengths[&1], "first".len());
        assert_eq!(lengths[&2], "second".len());
        assert_eq!(lengths[&5], "fifth".len());
    }

    #[test]
    fn test_swap_flips_pairs() {
        let flipped: HashMap<&str, i32> = sample().into_iter().map(swap).collect();

        assert_eq!(flipped["first"], 1);
        assert_eq!(flipped["fifth"], 5);
    }

    #[test]
    fn test_is_entry_filters_on_both_sides() {
        let result: HashMap<i32, &str> = sample()
            .into_iter()
            .filter(is_entry(|k, v: &&str| *k < 4 && v.len() == 6))
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[&2], "second");
    }

    #[test]
    fn test_is_key_and_is_value_filter_one_side() {
        let even_keys: HashMap<i32, &str> =
            sample().into_iter().filter(is_key(|k| k % 2 == 0)).collect();
        assert_eq!(even_keys.len(), 2);
        assert!(even_keys.values().any(|v| *v == "second"));
        assert!(even_keys.values().any(|v| *v == "fourth"));

        let six_letters: HashMap<i32, &str> =
            sample().into_iter().filter(is_value(|v: &&str| v.len() == 6)).collect();
        assert_eq!(six_letters.len(), 2);
    }

    #[test]
    fn test_with_value_fans_out_keeping_key() {
        let result: Vec<(i32, char)> = vec![(1, "ab"), (2, "c")]
            .into_iter()
            .flat_map(with_value(|v: &str| v.chars().collect::<Vec<_>>()))
            .collect();

        assert_eq!(result, vec![(1, 'a'), (1, 'b'), (2, 'c')]);
    }

    #[test]
    fn test_with_key_fans_out_keeping_value() {
        let result: Vec<(i32, &str)> = vec![(2, "pair")]
            .into_iter()
            .flat_map(with_key(|k| vec![k, k * 10]))
            .collect();

        assert_eq!(result, vec![(2, "pair"), (20, "pair")]);
    }

    #[test]
    fn test_pair_constructors_fix_one_side() {
        let keyed = pair_with_key("env");
        assert_eq!(keyed("prod"), ("env", "prod"));
        assert_eq!(keyed("dev"), ("env", "dev"));

        let valued = pair_with_value(0);
        assert_eq!(valued("retries"), ("retries", 0));
    }

    #[test]
    fn test_by_key_sorts_pairs() {
        let mut entries: Vec<(i32, &str)> = sample().into_iter().collect();
        entries.sort_by(by_key(|a: &i32, b| b.cmp(a)));

        let ordered: Vec<&str> = entries.into_iter().map(|(_, v)| v).collect();
        assert_eq!(ordered, vec!["fifth", "fourth", "third", "second", "first"]);
    }

    #[test]
    fn test_by_value_sorts_pairs() {
        let mut entries: Vec<(i32, &str)> = sample().into_iter().collect();
        entries.sort_by(by_value(|a: &&str, b: &&str| a.len().cmp(&b.len())));

        let ordered: Vec<i32> = entries.into_iter().map(|(k, _)| k).collect();
        // five-letter names (1, 3, 5) sort before six-letter names (2, 4);
        // order within a tie group is unspecified
        assert!(ordered[..3].iter().all(|k| [1, 3, 5].contains(k)));
        assert!(ordered[3..].iter().all(|k| [2, 4].contains(k)));
    }

    #[test]
    fn test_cloned_bridges_borrowed_entries() {
        let map = sample();
        let owned: HashMap<i32, &str> = map.iter().map(cloned).collect();

        assert_eq!(owned, map);
    }
}
