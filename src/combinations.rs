use crate::error::{non_negative, CombinatoricsError};
use crate::pairs::Pairs;
use crate::results::{snapshot, Results, Snapshot};

use std::hash::Hash;
use std::rc::Rc;

/// Every size-`n` sub-sequence of the input, in input order.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Combinations {
    n: u64
}

pub fn combinations(n: i64) -> Result<Combinations, CombinatoricsError> {
    let n = non_negative("combinations", "n", n)?;
    tracing::debug!(n, "configured combinations");
    Ok(Combinations { n })
}

impl Combinations {
    pub fn n(&self) -> u64 {
        self.n
    }

    pub fn apply<'a, K, V, I>(&self, input: I) -> Results<'a, K, V>
    where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone + 'a, V: Clone + 'a
    {
        choose(snapshot("combinations", input), 0, self.n)
    }
}

// Combinations without items[start] come first, then the ones with it.
fn choose<'a, K, V>(items: Snapshot<K, V>, start: usize, n: u64) -> Results<'a, K, V>
where K: Clone + 'a, V: Clone + 'a
{
    if n == 0 {
        return Results::once(Pairs::new());
    }
    let left = (items.len() - start) as u64;
    if left == 0 || n > left {
        return Results::empty();
    }
    let head = items[start].clone();
    let without = {
        let items = Rc::clone(&items);
        Results::deferred(move || choose(items, start + 1, n))
    };
    let with = Results::deferred(move || {
        Results::new(choose(items, start + 1, n - 1).map(move |tail| tail.prepended(head.clone())))
    });
    Results::new(without.chain(with))
}
