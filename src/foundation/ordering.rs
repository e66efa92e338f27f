use std::{cmp::Ordering, collections::HashMap, fmt, hash::Hash};

use crate::foundation::error::{ShotcodeError, ShotcodeResult};

/// An externally supplied order of keys that other collections are sorted into.
///
/// Used to lay out a scene's shots by its explicit shot-order list, and to show
/// statuses in their canonical order. Every key compared must be present in the
/// reference order: a missing key means the two have drifted apart upstream and
/// is reported as [`ShotcodeError::Ordering`] instead of being guessed at.
#[derive(Clone, Debug)]
pub struct ReferenceOrder<K> {
    keys: Vec<K>,
    index: HashMap<K, usize>,
}

impl<K> ReferenceOrder<K>
where
    K: Clone + Eq + Hash + fmt::Debug,
{
    /// Build from keys listed in the desired order. A repeated key takes its last position.
    pub fn new(order: impl IntoIterator<Item = K>) -> Self {
        let keys: Vec<K> = order.into_iter().collect();
        let index = keys
            .iter()
            .enumerate()
            .map(|(i, k)| (k.clone(), i))
            .collect();
        Self { keys, index }
    }

    /// Keys in reference order.
    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Position of `key` in the reference order.
    pub fn position(&self, key: &K) -> ShotcodeResult<usize> {
        self.index.get(key).copied().ok_or_else(|| {
            ShotcodeError::ordering(format!(
                "value {key:?} not present in {:?}",
                self.keys
            ))
        })
    }

    /// Compare two keys by their reference positions.
    pub fn compare(&self, a: &K, b: &K) -> ShotcodeResult<Ordering> {
        Ok(self.position(a)?.cmp(&self.position(b)?))
    }

    /// Comparator over items, keyed through `key_of`.
    pub fn comparator<'a, T, F>(
        &'a self,
        key_of: F,
    ) -> impl Fn(&T, &T) -> ShotcodeResult<Ordering> + 'a
    where
        T: 'a,
        F: Fn(&T) -> K + 'a,
    {
        move |a: &T, b: &T| self.compare(&key_of(a), &key_of(b))
    }

    /// Stable-sort `items` into reference order by the key `key_of` extracts.
    ///
    /// Every key is checked before the slice is touched, so on error `items`
    /// is left as it was.
    pub fn sort_by_order<T, F>(&self, items: &mut [T], key_of: F) -> ShotcodeResult<()>
    where
        F: Fn(&T) -> K,
    {
        for item in items.iter() {
            self.position(&key_of(item))?;
        }
        items.sort_by_key(|item| self.index.get(&key_of(item)).copied().unwrap_or(usize::MAX));
        Ok(())
    }

    /// Stable-sort keys into reference order.
    pub fn sort(&self, items: &mut [K]) -> ShotcodeResult<()> {
        self.sort_by_order(items, K::clone)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/ordering.rs"]
mod tests;
