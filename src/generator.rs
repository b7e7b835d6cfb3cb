use crate::allocations::Allocations;
use crate::combinations::Combinations;
use crate::pairs::Pairs;
use crate::permutations::Permutations;
use crate::powerset::Powerset;
use crate::results::Results;

use std::hash::Hash;

/// A generator picked at runtime, e.g. from a config file or the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Generator {
    Allocations(Allocations),
    Permutations(Permutations),
    Combinations(Combinations),
    Powerset(Powerset),
}

impl Generator {
    pub fn name(&self) -> &'static str {
        match self {
            Generator::Allocations(_) => "allocations",
            Generator::Permutations(_) => "permutations",
            Generator::Combinations(_) => "combinations",
            Generator::Powerset(_) => "powerset",
        }
    }

    /// Allocation amounts are converted into `V`; the other generators pass values through.
    pub fn apply<'a, K, V, I>(&self, input: I) -> Results<'a, K, V>
    where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone + 'a, V: Clone + From<u64> + 'a
    {
        match self {
            Generator::Allocations(g) => Results::new(g.apply(input).map(|result| {
                Pairs::from_unique(result.into_iter().map(|(key, amount)| (key, V::from(amount))).collect())
            })),
            Generator::Permutations(g) => g.apply(input),
            Generator::Combinations(g) => g.apply(input),
            Generator::Powerset(g) => g.apply(input),
        }
    }
}

impl From<Allocations> for Generator {
    fn from(g: Allocations) -> Generator {
        Generator::Allocations(g)
    }
}

impl From<Permutations> for Generator {
    fn from(g: Permutations) -> Generator {
        Generator::Permutations(g)
    }
}

impl From<Combinations> for Generator {
    fn from(g: Combinations) -> Generator {
        Generator::Combinations(g)
    }
}

impl From<Powerset> for Generator {
    fn from(g: Powerset) -> Generator {
        Generator::Powerset(g)
    }
}
