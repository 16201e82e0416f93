//! Utilities such as [`RequestSet`], a set of process indices with a canonical ordering.
//!
//! The backing [`HashSet`] uses a randomly seeded hasher, so its iteration order differs between
//! two sets holding the same elements and between two runs of the same program. Anything that is
//! rendered or compared must therefore go through [`RequestSet::sorted`]:
//!
//! ```rust
//! use ccsgen::util::RequestSet;
//!
//! let forward: RequestSet = [0, 1, 2].into_iter().collect();
//! let backward: RequestSet = [2, 1, 0].into_iter().collect();
//! assert_eq!(forward, backward);
//! assert_eq!(forward.sorted(), vec![0, 1, 2]);
//! ```

use std::collections::HashSet;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

/// A set of pending process indices.
///
/// Equality is set equality and [`Hash`] feeds the elements in ascending order, so two sets built
/// through different insertion sequences are interchangeable as map keys.
#[derive(Clone, Default)]
pub struct RequestSet(HashSet<usize, ahash::RandomState>);

impl RequestSet {
    #[inline]
    pub fn new() -> RequestSet {
        Default::default()
    }

    /// Adds an index, returning whether it was absent.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        self.0.insert(index)
    }

    /// Removes an index, returning whether it was present.
    #[inline]
    pub fn remove(&mut self, index: usize) -> bool {
        self.0.remove(&index)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical view of the set: every member in ascending order.
    pub fn sorted(&self) -> Vec<usize> {
        let mut members: Vec<usize> = self.0.iter().copied().collect();
        members.sort_unstable();
        members
    }

    /// A copy of this set that also contains `index`.
    pub fn with(&self, index: usize) -> RequestSet {
        let mut next = self.clone();
        next.insert(index);
        next
    }

    /// A copy of this set that no longer contains `index`.
    pub fn without(&self, index: usize) -> RequestSet {
        let mut next = self.clone();
        next.remove(index);
        next
    }
}

impl Debug for RequestSet {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_set().entries(self.sorted()).finish()
    }
}

impl PartialEq for RequestSet {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for RequestSet {}

impl Hash for RequestSet {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        self.sorted().hash(hasher);
    }
}

impl FromIterator<usize> for RequestSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        RequestSet(HashSet::from_iter(iter))
    }
}

impl Extend<usize> for RequestSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}
