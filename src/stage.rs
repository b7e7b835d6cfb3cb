use crate::allocations::Allocations;
use crate::combinations::Combinations;
use crate::permutations::Permutations;
use crate::powerset::Powerset;
use crate::results::Results;

use std::hash::Hash;

/// A configured generator waiting for its input.
pub trait Stage<'a, K: 'a, V: 'a> {
    /// Value type of the yielded pairs.
    type Value: 'a;

    fn apply<I>(&self, input: I) -> Results<'a, K, Self::Value>
        where I: IntoIterator<Item = (K, V)>;
}

/// Two stages run back to back: every result of the first is the input of the second.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Then<A, B> {
    first: A,
    second: B
}

pub fn pipe<A, B>(first: A, second: B) -> Then<A, B> {
    Then { first, second }
}

impl<A, B> Then<A, B> {
    pub fn then<C>(self, next: C) -> Then<Then<A, B>, C> {
        pipe(self, next)
    }
}

impl Allocations {
    pub fn then<C>(self, next: C) -> Then<Allocations, C> {
        pipe(self, next)
    }
}

impl Permutations {
    pub fn then<C>(self, next: C) -> Then<Permutations, C> {
        pipe(self, next)
    }
}

impl Combinations {
    /// `combinations(2)?.then(permutations())` yields every ordered pair of entries.
    pub fn then<C>(self, next: C) -> Then<Combinations, C> {
        pipe(self, next)
    }
}

impl Powerset {
    pub fn then<C>(self, next: C) -> Then<Powerset, C> {
        pipe(self, next)
    }
}

impl<'a, K, V, A, B> Stage<'a, K, V> for Then<A, B>
where
    K: 'a,
    V: 'a,
    A: Stage<'a, K, V>,
    B: Stage<'a, K, A::Value> + Clone + 'a,
{
    type Value = B::Value;

    fn apply<I>(&self, input: I) -> Results<'a, K, Self::Value>
        where I: IntoIterator<Item = (K, V)>
    {
        let second = self.second.clone();
        Results::new(self.first.apply(input).flat_map(move |result| second.apply(result)))
    }
}

impl<'a, K, V> Stage<'a, K, V> for Allocations
where K: Eq + Hash + Clone + 'a, V: 'a
{
    type Value = u64;

    fn apply<I>(&self, input: I) -> Results<'a, K, u64>
        where I: IntoIterator<Item = (K, V)>
    {
        Allocations::apply(self, input)
    }
}

impl<'a, K, V> Stage<'a, K, V> for Permutations
where K: Eq + Hash + Clone + 'a, V: Clone + 'a
{
    type Value = V;

    fn apply<I>(&self, input: I) -> Results<'a, K, V>
        where I: IntoIterator<Item = (K, V)>
    {
        Permutations::apply(self, input)
    }
}

impl<'a, K, V> Stage<'a, K, V> for Combinations
where K: Eq + Hash + Clone + 'a, V: Clone + 'a
{
    type Value = V;

    fn apply<I>(&self, input: I) -> Results<'a, K, V>
        where I: IntoIterator<Item = (K, V)>
    {
        Combinations::apply(self, input)
    }
}

impl<'a, K, V> Stage<'a, K, V> for Powerset
where K: Eq + Hash + Clone + 'a, V: Clone + 'a
{
    type Value = V;

    fn apply<I>(&self, input: I) -> Results<'a, K, V>
        where I: IntoIterator<Item = (K, V)>
    {
        Powerset::apply(self, input)
    }
}
