use crate::error::{DisjointSetError, InvalidLength};
use log::trace;
use rustc_hash::FxHashMap;

/// The largest number of elements a [`DisjointSet`] can hold, so that every ID fits into the
/// non-negative half of an `i32`.
pub const MAX_LEN: u32 = 1 << 31;

pub(crate) fn checked_len(len: u64) -> Result<u32, InvalidLength> {
    if len > u64::from(MAX_LEN) {
        Err(InvalidLength::TooLarge(len))
    } else {
        Ok(len as u32)
    }
}

/// A partition of the elements `0..len` into disjoint sets.
///
/// Sets are merged by rank, and lookups compress the traversed path, so both operations take
/// amortized `O(α(n))` time. Lookups are iterative, so even degenerate forests can't overflow the
/// stack.
///
/// The structure is not synchronized: `find` writes to the forest, so sharing one instance between
/// threads requires an external lock.
#[derive(Clone, Debug)]
pub struct DisjointSet {
    // If `x >= 0`, it's the parent ID. If `x < 0`, the element is a root of rank `-x - 1`.
    parents_or_ranks: Vec<i32>,
    n_sets: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets `{0}, {1}, ..., {len - 1}`.
    pub fn new(len: u32) -> Result<Self, DisjointSetError> {
        checked_len(len.into())?;
        Ok(Self {
            parents_or_ranks: vec![-1; len as usize],
            n_sets: len as usize,
        })
    }

    pub fn len(&self) -> u32 {
        self.parents_or_ranks.len() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.parents_or_ranks.is_empty()
    }

    /// The number of disjoint sets. Never increases except through [`DisjointSet::push`].
    pub fn count_sets(&self) -> usize {
        self.n_sets
    }

    /// Adds a new singleton set and returns the ID of its only element.
    pub fn push(&mut self) -> Result<u32, DisjointSetError> {
        let id = self.len();
        checked_len(u64::from(id) + 1)?;
        self.parents_or_ranks.push(-1);
        self.n_sets += 1;
        Ok(id)
    }

    /// Returns the representative of the set containing `index`.
    ///
    /// Every element visited on the way is repointed directly to the representative. This never
    /// changes which set an element belongs to.
    pub fn find(&mut self, index: u32) -> Result<u32, DisjointSetError> {
        self.check(index)?;
        Ok(self.resolve(index))
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// The root of lower rank is attached below the root of higher rank. On a tie, `b`'s root is
    /// attached below `a`'s root, and the rank of the latter grows by one. Does nothing if `a` and
    /// `b` are already in the same set.
    pub fn union(&mut self, a: u32, b: u32) -> Result<(), DisjointSetError> {
        self.check(a)?;
        self.check(b)?;
        self.merge(a, b);
        Ok(())
    }

    pub fn connected(&mut self, a: u32, b: u32) -> Result<bool, DisjointSetError> {
        self.check(a)?;
        self.check(b)?;
        Ok(self.resolve(a) == self.resolve(b))
    }

    /// Whether `index` is the only element of its set.
    pub fn is_singleton(&self, index: u32) -> Result<bool, DisjointSetError> {
        self.check(index)?;
        // A root of rank 0 has never had anything attached to it.
        Ok(self.parents_or_ranks[index as usize] == -1)
    }

    /// Lists all sets. Elements within a set are sorted, and sets are ordered by their smallest
    /// element.
    pub fn sets(&mut self) -> Vec<Vec<u32>> {
        let mut group_by_root: FxHashMap<u32, usize> = FxHashMap::default();
        let mut groups: Vec<Vec<u32>> = Vec::with_capacity(self.n_sets);
        for index in 0..self.len() {
            let root = self.resolve(index);
            let group = *group_by_root.entry(root).or_insert_with(|| {
                groups.push(Vec::new());
                groups.len() - 1
            });
            groups[group].push(index);
        }
        groups
    }

    fn check(&self, index: u32) -> Result<(), DisjointSetError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(DisjointSetError::OutOfRange {
                element: index,
                len: self.len(),
            })
        }
    }

    // Returns whether two distinct sets were merged. Indices must be in range.
    pub(crate) fn merge(&mut self, a: u32, b: u32) -> bool {
        let mut a = self.resolve(a);
        let mut b = self.resolve(b);
        if a == b {
            return false;
        }

        let rank_a = self.parents_or_ranks[a as usize];
        let rank_b = self.parents_or_ranks[b as usize];
        if rank_a > rank_b {
            core::mem::swap(&mut a, &mut b);
        } else if rank_a == rank_b {
            self.parents_or_ranks[a as usize] -= 1;
        }
        self.parents_or_ranks[b as usize] = a as i32;
        self.n_sets -= 1;

        trace!("attached set {b} below {a}, {} sets left", self.n_sets);
        true
    }

    // Index must be in range.
    fn resolve(&mut self, mut index: u32) -> u32 {
        let mut leader = index;
        while self.parents_or_ranks[leader as usize] >= 0 {
            leader = self.parents_or_ranks[leader as usize] as u32;
        }
        while index != leader {
            index = core::mem::replace(&mut self.parents_or_ranks[index as usize], leader as i32)
                as u32;
        }
        leader
    }
}

impl TryFrom<i64> for DisjointSet {
    type Error = DisjointSetError;

    fn try_from(len: i64) -> Result<Self, Self::Error> {
        if len < 0 {
            return Err(InvalidLength::Negative(len).into());
        }
        Self::new(checked_len(len as u64)?)
    }
}
