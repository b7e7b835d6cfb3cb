use crate::error::{non_negative, CombinatoricsError};
use crate::pairs::Pairs;
use crate::results::{snapshot, Results};

use std::hash::Hash;
use std::rc::Rc;

/// Every way to split `total` into non-negative amounts, one per input key.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Allocations {
    total: u64
}

pub fn allocations(total: i64) -> Result<Allocations, CombinatoricsError> {
    let total = non_negative("allocations", "total", total)?;
    tracing::debug!(total, "configured allocations");
    Ok(Allocations { total })
}

impl Allocations {
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Input values are ignored; only the keys, in order, are used as slots.
    pub fn apply<'a, K, V, I>(&self, input: I) -> Results<'a, K, u64>
    where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone + 'a
    {
        let keys: Rc<[K]> = snapshot("allocations", input).iter().map(|(key, _)| key.clone()).collect();
        distribute(keys, 0, self.total)
    }
}

fn distribute<'a, K>(keys: Rc<[K]>, start: usize, remaining: u64) -> Results<'a, K, u64>
where K: Clone + 'a
{
    let key = match keys.get(start) {
        Some(key) => key.clone(),
        None => {
            return if remaining == 0 {
                Results::once(Pairs::new())
            } else {
                Results::empty()
            };
        }
    };
    if start + 1 == keys.len() {
        return Results::once(Pairs::from_unique(vec![(key, remaining)]));
    }
    Results::new((0..=remaining).flat_map(move |amount| {
        let key = key.clone();
        distribute(Rc::clone(&keys), start + 1, remaining - amount)
            .map(move |rest| rest.prepended((key.clone(), amount)))
    }))
}
