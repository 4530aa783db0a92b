//! A double-ended queue over a single growable ring buffer.
//!
//! [`RingDeque`] keeps its elements in one power-of-two allocation addressed with a
//! bitmask, reserving a single slot so its two cursors can tell an empty deque from a
//! full one. Pushes and pops at both ends are amortized O(1), indexing is O(1), and
//! the buffer halves itself once occupancy falls to a quarter, so memory tracks the
//! live length in both directions.
//!
//! On top of the container sit [`Cursor`]/[`CursorMut`] random-access cursors with
//! wrap-aware ordering, arithmetic, and circular distance; double-ended iterators; and
//! in-place range algorithms: [`sort_range`](RingDeque::sort_range),
//! [`reverse_range`](RingDeque::reverse_range),
//! [`shuffle_range`](RingDeque::shuffle_range), and subrange iteration/equality via
//! [`iter_range`](RingDeque::iter_range). All of them operate on arbitrary logical
//! subranges regardless of where the span currently sits in the buffer.
//!
//! # Examples
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::new();
//! deque.push_back(2);
//! deque.push_back(3);
//! deque.push_front(1);
//! assert_eq!(deque, [1, 2, 3]);
//!
//! deque.reverse_range(..);
//! assert_eq!(deque.pop_front(), Some(3));
//! assert_eq!(deque.pop_back(), Some(1));
//! ```
//!
//! Iterators and cursors borrow the deque, so the classic ring-buffer hazard of
//! holding an iterator across a resize is a compile error here rather than a latent
//! bug. Enable the `serde` feature for `Serialize`/`Deserialize` on `RingDeque<T>`.

mod cursor;
mod deque;
mod iter;
mod range;

pub use cursor::{Cursor, CursorMut};
pub use deque::RingDeque;
pub use iter::{IntoIter, Iter, IterMut};


/// Creates a [`RingDeque`] with `vec!`-style syntax.
///
/// # Examples
/// ```
/// use ringdeque::ringdeque;
/// let deque = ringdeque![1, 2, 3];
/// assert_eq!(deque, [1, 2, 3]);
/// let fives = ringdeque![5; 4];
/// assert_eq!(fives, [5, 5, 5, 5]);
/// let empty: ringdeque::RingDeque<u8> = ringdeque![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! ringdeque {
    () => {
        $crate::RingDeque::new()
    };
    ($elem:expr; $n:expr) => {
        <$crate::RingDeque<_> as ::core::iter::FromIterator<_>>::from_iter(
            ::core::iter::repeat($elem).take($n),
        )
    };
    ($($x:expr),+ $(,)?) => {
        $crate::RingDeque::from([$($x),+])
    };
}
