use crate::pairs::Pairs;
use crate::results::{snapshot, Results, Snapshot};

use std::hash::Hash;
use std::rc::Rc;

/// Every sub-sequence of the input, of every size.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Powerset;

pub fn powerset() -> Powerset {
    tracing::debug!("configured powerset");
    Powerset
}

impl Powerset {
    /// For `{a, b}` the order is `{}`, `{a}`, `{b}`, `{a, b}`.
    pub fn apply<'a, K, V, I>(&self, input: I) -> Results<'a, K, V>
    where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone + 'a, V: Clone + 'a
    {
        subsets(snapshot("powerset", input), 0)
    }
}

fn subsets<'a, K, V>(items: Snapshot<K, V>, start: usize) -> Results<'a, K, V>
where K: Clone + 'a, V: Clone + 'a
{
    if start == items.len() {
        return Results::once(Pairs::new());
    }
    let head = items[start].clone();
    Results::new(subsets(Rc::clone(&items), start + 1).flat_map(move |subset| {
        let with = subset.clone().prepended(head.clone());
        [subset, with]
    }))
}
