//! Traversal-strength tags.
//!
//! Every cursor names a tag type through [`Cursor::Tag`](crate::Cursor::Tag).
//! Tags are zero-sized markers, so generic code can dispatch on them at the
//! type level, and each one carries the matching [`Category`] as an associated
//! constant for code that would rather branch on a value.
//!
//! | Tag | Promise |
//! |-----|---------|
//! | [`Bidirectional`] | step forward and back one element at a time |
//! | [`RandomAccess`] | O(1) jumps and distances |
//! | [`Contiguous`] | random access, and consecutive positions are consecutive addresses |
//!
//! Reversing a cursor keeps its strength but gives up contiguity: walking a
//! reversed range visits memory backwards, so [`Demoted`] maps [`Contiguous`]
//! to [`RandomAccess`] and leaves the other tags alone.

use core::fmt::Debug;

/// Value-level mirror of the tag types, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Bidirectional,
    RandomAccess,
    Contiguous,
}

impl Category {
    /// O(1) jumps are available.
    pub const fn is_random_access(self) -> bool {
        matches!(self, Category::RandomAccess | Category::Contiguous)
    }

    /// Elements are laid out in memory in traversal order.
    pub const fn is_contiguous(self) -> bool {
        matches!(self, Category::Contiguous)
    }
}

mod private {
    pub trait Sealed {}
}

/// A traversal-strength tag.
///
/// This is a sealed trait - it cannot be implemented outside this crate.
pub trait Traversal: private::Sealed + Debug + Default + Copy + 'static {
    const CATEGORY: Category;

    /// The tag a reversed cursor advertises.
    type Demoted: Traversal;
}

/// Tag for cursors that only step by one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bidirectional;

/// Tag for cursors with O(1) jumps and distances.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RandomAccess;

/// Tag for random-access cursors over memory laid out in traversal order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Contiguous;

impl private::Sealed for Bidirectional {}
impl private::Sealed for RandomAccess {}
impl private::Sealed for Contiguous {}

impl Traversal for Bidirectional {
    const CATEGORY: Category = Category::Bidirectional;
    type Demoted = Bidirectional;
}

impl Traversal for RandomAccess {
    const CATEGORY: Category = Category::RandomAccess;
    type Demoted = RandomAccess;
}

impl Traversal for Contiguous {
    const CATEGORY: Category = Category::Contiguous;
    type Demoted = RandomAccess;
}

/// The tag a reversed view of a `T`-tagged cursor advertises.
pub type Demoted<T> = <T as Traversal>::Demoted;
