//! # Words
//! Copy-on-write storage for the magnitude of a [`BigInt`](crate::BigInt).
//!
//! Small magnitudes (up to [`INLINE_CAPACITY`] words) live inline and are copied by value.
//! Larger ones live in a reference counted heap block which is shared by every clone until one
//! of them asks for mutable access; at that point the writer gets a private copy of the block.
//!
//! Words are stored least-significant first. Once a buffer has moved to the heap it stays
//! there while it shrinks; only freshly constructed buffers pick the inline form by length.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use log::trace;

use crate::big_num_constants::INLINE_CAPACITY;

#[derive(Clone)]
enum Repr {
    Inline([u32; INLINE_CAPACITY]),
    Shared(Arc<Vec<u32>>),
}

#[derive(Clone)]
pub(crate) struct Words {
    len: usize,
    repr: Repr,
}

/// Gives mutable access to a heap block, cloning it first when another owner can observe it.
fn make_unique(shared: &mut Arc<Vec<u32>>) -> &mut Vec<u32> {
    if Arc::get_mut(shared).is_none() {
        trace!(target: "big_integer::words", "unsharing a block of {} words", shared.len());
    }
    Arc::make_mut(shared)
}

// 构造
impl Words {
    pub(crate) const fn single(word: u32) -> Words {
        let mut inline = [0u32; INLINE_CAPACITY];
        inline[0] = word;
        Words { len: 1, repr: Repr::Inline(inline) }
    }

    pub(crate) fn from_vec(vec: Vec<u32>) -> Words {
        let len = vec.len();
        if len <= INLINE_CAPACITY {
            let mut inline = [0u32; INLINE_CAPACITY];
            inline[..len].copy_from_slice(&vec);
            Words { len, repr: Repr::Inline(inline) }
        } else {
            Words { len, repr: Repr::Shared(Arc::new(vec)) }
        }
    }

    /// Copies the words into storage that shares nothing with `self`.
    pub(crate) fn deep_clone(&self) -> Words {
        match &self.repr {
            Repr::Inline(_) => self.clone(),
            Repr::Shared(shared) => Words {
                len: self.len,
                repr: Repr::Shared(Arc::new(shared.as_ref().clone())),
            },
        }
    }
}

// 读取
impl Words {
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[u32] {
        match &self.repr {
            Repr::Inline(inline) => &inline[..self.len],
            Repr::Shared(shared) => shared.as_slice(),
        }
    }

    #[inline]
    pub(crate) fn get(&self, index: usize) -> u32 {
        self.as_slice()[index]
    }

    #[inline]
    pub(crate) fn last(&self) -> Option<u32> {
        self.as_slice().last().copied()
    }

    pub(crate) fn is_inline(&self) -> bool {
        matches!(self.repr, Repr::Inline(_))
    }

    /// `true` when the heap block is currently visible to another owner.
    #[cfg(test)]
    pub(crate) fn is_shared(&self) -> bool {
        match &self.repr {
            Repr::Inline(_) => false,
            Repr::Shared(shared) => Arc::strong_count(shared) > 1,
        }
    }

    #[cfg(test)]
    pub(crate) fn same_block(&self, other: &Words) -> bool {
        match (&self.repr, &other.repr) {
            (Repr::Shared(a), Repr::Shared(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

// 修改
impl Words {
    pub(crate) fn as_mut_slice(&mut self) -> &mut [u32] {
        let len = self.len;
        match &mut self.repr {
            Repr::Inline(inline) => &mut inline[..len],
            Repr::Shared(shared) => make_unique(shared).as_mut_slice(),
        }
    }

    pub(crate) fn push(&mut self, word: u32) {
        let len = self.len;
        match &mut self.repr {
            Repr::Inline(inline) if len < INLINE_CAPACITY => inline[len] = word,
            Repr::Inline(inline) => {
                let mut vec = Vec::with_capacity(len * 2);
                vec.extend_from_slice(&inline[..len]);
                vec.push(word);
                trace!(target: "big_integer::words", "moving {} words to the heap", vec.len());
                self.repr = Repr::Shared(Arc::new(vec));
            }
            Repr::Shared(shared) => make_unique(shared).push(word),
        }
        self.len += 1;
    }

    pub(crate) fn pop(&mut self) -> Option<u32> {
        if self.len == 0 {
            return None;
        }
        let len = self.len;
        let word = match &mut self.repr {
            Repr::Inline(inline) => std::mem::take(&mut inline[len - 1]),
            Repr::Shared(shared) => make_unique(shared).pop()?,
        };
        self.len -= 1;
        Some(word)
    }

    pub(crate) fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let len = self.len;
        match &mut self.repr {
            Repr::Inline(inline) => inline[new_len..len].fill(0),
            Repr::Shared(shared) => make_unique(shared).truncate(new_len),
        }
        self.len = new_len;
    }

    pub(crate) fn resize(&mut self, new_len: usize, fill: u32) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        let len = self.len;
        match &mut self.repr {
            Repr::Inline(inline) if new_len <= INLINE_CAPACITY => inline[len..new_len].fill(fill),
            Repr::Inline(inline) => {
                let mut vec = Vec::with_capacity(new_len);
                vec.extend_from_slice(&inline[..len]);
                vec.resize(new_len, fill);
                trace!(target: "big_integer::words", "moving {} words to the heap", new_len);
                self.repr = Repr::Shared(Arc::new(vec));
            }
            Repr::Shared(shared) => make_unique(shared).resize(new_len, fill),
        }
        self.len = new_len;
    }

    /// Inserts `count` zero words below the least significant word.
    pub(crate) fn insert_zeros_low(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        let len = self.len;
        let new_len = len + count;
        match &mut self.repr {
            Repr::Inline(inline) if new_len <= INLINE_CAPACITY => {
                inline.copy_within(..len, count);
                inline[..count].fill(0);
            }
            Repr::Inline(inline) => {
                let mut vec = Vec::with_capacity(new_len);
                vec.resize(count, 0);
                vec.extend_from_slice(&inline[..len]);
                trace!(target: "big_integer::words", "moving {} words to the heap", new_len);
                self.repr = Repr::Shared(Arc::new(vec));
            }
            Repr::Shared(shared) => {
                make_unique(shared).splice(..0, std::iter::repeat(0).take(count));
            }
        }
        self.len = new_len;
    }

    /// Drops the `count` least significant words.
    pub(crate) fn remove_low(&mut self, count: usize) {
        let count = count.min(self.len);
        if count == 0 {
            return;
        }
        let len = self.len;
        match &mut self.repr {
            Repr::Inline(inline) => {
                inline.copy_within(count..len, 0);
                inline[len - count..len].fill(0);
            }
            Repr::Shared(shared) => {
                make_unique(shared).drain(..count);
            }
        }
        self.len = len - count;
    }
}

impl PartialEq for Words {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Words {}

impl Hash for Words {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Words {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Words")
            .field("words", &self.as_slice())
            .field("inline", &self.is_inline())
            .finish()
    }
}
