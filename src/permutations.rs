use crate::pairs::Pairs;
use crate::results::{snapshot, Results, Snapshot};

use std::hash::Hash;
use std::rc::Rc;

/// Every reordering of the input pairs.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Permutations;

pub fn permutations() -> Permutations {
    tracing::debug!("configured permutations");
    Permutations
}

impl Permutations {
    /// Results are ordered by which input pair is placed first, then recursively by
    /// the rest. An empty input yields a single empty permutation.
    pub fn apply<'a, K, V, I>(&self, input: I) -> Results<'a, K, V>
    where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone + 'a, V: Clone + 'a
    {
        let items = snapshot("permutations", input);
        let remaining = (0..items.len()).collect();
        permute(items, remaining)
    }
}

fn permute<'a, K, V>(items: Snapshot<K, V>, remaining: Vec<usize>) -> Results<'a, K, V>
where K: Clone + 'a, V: Clone + 'a
{
    if remaining.is_empty() {
        return Results::once(Pairs::new());
    }
    Results::new((0..remaining.len()).flat_map(move |pos| {
        let mut rest = remaining.clone();
        let head = items[rest.remove(pos)].clone();
        permute(Rc::clone(&items), rest).map(move |tail| tail.prepended(head.clone()))
    }))
}

#[cfg(test)]
mod test {
    use crate::permutations::*;
    use crate::pairs;

    use rand::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_empty_input() {
        let result: Vec<Pairs<&str, i32>> = permutations().apply(Vec::new()).collect();
        assert_eq!(result, vec![Pairs::new()]);
    }

    #[test]
    fn test_single_item() {
        let result: Vec<_> = permutations().apply(pairs!{"x" => 1}).collect();
        assert_eq!(result, vec![pairs!{"x" => 1}]);
    }

    #[test]
    fn test_two_items_order() {
        let result: Vec<_> = permutations().apply(pairs!{"a" => 1, "b" => 2}).collect();
        assert_eq!(result, vec![
            pairs!{"a" => 1, "b" => 2},
            pairs!{"b" => 2, "a" => 1},
        ]);
    }

    #[test]
    fn test_three_items_order() {
        let result: Vec<String> = permutations()
            .apply(vec![('a', 1), ('b', 2), ('c', 3)])
            .map(|p| p.keys().collect())
            .collect();
        assert_eq!(result, vec!["abc", "acb", "bac", "bca", "cab", "cba"]);
    }

    #[test]
    fn test_one_shot_input() {
        let input = (1..=2).map(|i| (format!("k{}", i), i * 10));
        let result: Vec<_> = permutations().apply(input).collect();
        assert_eq!(result, vec![
            pairs!{"k1".to_string() => 10, "k2".to_string() => 20},
            pairs!{"k2".to_string() => 20, "k1".to_string() => 10},
        ]);
    }

    #[test]
    fn test_counts() {
        let mut rng = rand::thread_rng();
        for _ in 0..10 {
            let len: usize = rng.gen_range(0..6);
            let mut keys: Vec<u32> = (0..len as u32).collect();
            keys.shuffle(&mut rng);
            let input: Vec<(u32, u32)> = keys.iter().map(|&k| (k, k * 7)).collect();
            let expected: HashSet<(u32, u32)> = input.iter().copied().collect();

            let results: Vec<_> = permutations().apply(input).collect();
            let factorial: usize = (1..=len).product();
            assert_eq!(results.len(), factorial);
            for result in &results {
                assert_eq!(result.len(), len);
                assert_eq!(result.iter().copied().collect::<HashSet<_>>(), expected);
            }
            let distinct: HashSet<_> = results.into_iter().collect();
            assert_eq!(distinct.len(), factorial);
        }
    }

    #[test]
    fn test_results_outlive_iteration() {
        let mut results = permutations().apply(vec![("a", vec![1]), ("b", vec![2])]);
        let first = results.next().unwrap();
        let second = results.next().unwrap();
        drop(results);
        assert_eq!(first.into_vec(), vec![("a", vec![1]), ("b", vec![2])]);
        assert_eq!(second.into_vec(), vec![("b", vec![2]), ("a", vec![1])]);
    }

    #[test]
    fn test_pulls_lazily() {
        let input: Vec<(u32, u32)> = (0..12).map(|k| (k, k * 2)).collect();
        let mut results = permutations().apply(input.clone());
        assert_eq!(results.next().unwrap().into_vec(), input);
        let second = results.next().unwrap();
        assert_eq!(second.keys().copied().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 10]);
        let big: Vec<(u32, ())> = (0..100).map(|k| (k, ())).collect();
        assert_eq!(permutations().apply(big).next().map(|p| p.len()), Some(100));
    }
}
