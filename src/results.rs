use crate::pairs::Pairs;

use std::fmt;
use std::hash::Hash;
use std::iter;
use std::rc::Rc;

/// Immutable input shared by every frame of a running enumeration.
pub(crate) type Snapshot<K, V> = Rc<[(K, V)]>;

/// Reads the caller's input exactly once.
pub(crate) fn snapshot<K, V, I>(generator: &'static str, input: I) -> Snapshot<K, V>
where I: IntoIterator<Item = (K, V)>, K: Eq + Hash + Clone
{
    let pairs: Pairs<K, V> = input.into_iter().collect();
    tracing::debug!(generator, len = pairs.len(), "materialized input");
    pairs.into_vec().into()
}

/// A lazy, one-shot sequence of results.
///
/// Nothing is enumerated until [`Iterator::next`] is called, and each call does only
/// the work needed for one more result. Every yielded [`Pairs`] is freshly built and
/// owned by the caller.
pub struct Results<'a, K, V> {
    inner: Box<dyn Iterator<Item = Pairs<K, V>> + 'a>
}

impl<'a, K: 'a, V: 'a> Results<'a, K, V> {
    pub(crate) fn new<I>(iter: I) -> Results<'a, K, V>
        where I: Iterator<Item = Pairs<K, V>> + 'a
    {
        Results {
            inner: Box::new(iter)
        }
    }

    pub(crate) fn empty() -> Results<'a, K, V> {
        Results::new(iter::empty())
    }

    pub(crate) fn once(result: Pairs<K, V>) -> Results<'a, K, V> {
        Results::new(iter::once(result))
    }

    /// Postpones building `f`'s results until the first pull.
    pub(crate) fn deferred<F>(f: F) -> Results<'a, K, V>
        where F: FnOnce() -> Results<'a, K, V> + 'a
    {
        Results::new(iter::once_with(f).flatten())
    }
}

impl<'a, K, V> Iterator for Results<'a, K, V> {
    type Item = Pairs<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> fmt::Debug for Results<'a, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Results").finish_non_exhaustive()
    }
}
