//! Persistent index sequences for the chosen-index table.
//!
//! Most DP cells hold exactly the sequence of a neighbouring cell, and the
//! rest hold a neighbour's sequence plus one index. An [`IndexChain`] is a
//! reference-counted singly linked list that grows at the tail, so copying a
//! cell is a pointer clone and extending it allocates one link.

use std::sync::Arc;

struct Link {
    index: u32,
    len: usize,
    prev: Option<Arc<Link>>,
}

/// Immutable sequence of indices, shared structurally between clones.
#[derive(Clone, Default)]
pub struct IndexChain {
    head: Option<Arc<Link>>,
}

impl IndexChain {
    /// The empty sequence.
    pub fn new() -> Self {
        Self { head: None }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.head.as_ref().map_or(0, |l| l.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Last index of the sequence.
    pub fn last(&self) -> Option<u32> {
        self.head.as_ref().map(|l| l.index)
    }

    /// A new sequence equal to `self` followed by `index`; `self` is untouched.
    pub fn pushed(&self, index: u32) -> Self {
        Self {
            head: Some(Arc::new(Link {
                index,
                len: self.len() + 1,
                prev: self.head.clone(),
            })),
        }
    }

    /// Iterate from the last index back to the first.
    pub fn iter_rev(&self) -> impl Iterator<Item = u32> + '_ {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let link = cursor?;
            cursor = link.prev.as_deref();
            Some(link.index)
        })
    }

    /// Materialize in insertion order.
    pub fn to_vec(&self) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::with_capacity(self.len());
        out.extend(self.iter_rev());
        out.reverse();
        out
    }

    /// True if both chains share the same head link (or are both empty).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.head, &other.head) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

// Unlink iteratively: the default recursive drop overflows the stack on
// chains as long as the weight set.
impl Drop for IndexChain {
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(link) = next {
            match Arc::try_unwrap(link) {
                Ok(mut owned) => next = owned.prev.take(),
                Err(_) => break,
            }
        }
    }
}

impl std::fmt::Debug for IndexChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.to_vec()).finish()
    }
}

impl PartialEq for IndexChain {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter_rev().eq(other.iter_rev())
    }
}

impl Eq for IndexChain {}

impl FromIterator<u32> for IndexChain {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        iter.into_iter()
            .fold(IndexChain::new(), |chain, index| chain.pushed(index))
    }
}
