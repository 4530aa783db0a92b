//! Random-access cursors over a [`RingDeque`].
//!
//! A cursor is a physical buffer index paired with a borrow of its deque, the ring
//! analogue of a random-access iterator: it supports arithmetic, wrap-aware ordering,
//! and circular distance, and stays coherent with the container because the borrow
//! makes it impossible to hold one across a mutation (and therefore across a resize).

use std::cmp::Ordering;
use std::fmt;

use crate::deque::RingDeque;

/// A read-only random-access cursor. Obtained from [`RingDeque::cursor`]; the position
/// `len()` is the end sentinel, which is a valid place to stand but not to read.
///
/// # Examples
/// ```
/// use ringdeque::RingDeque;
/// let deque = RingDeque::from([10, 20, 30]);
/// let begin = deque.cursor(0);
/// let end = deque.cursor(deque.len());
/// assert_eq!(begin.get(), Some(&10));
/// assert_eq!((begin + 2).get(), Some(&30));
/// assert_eq!(end.get(), None);
/// assert_eq!(end - begin, 3);
/// assert!(begin < begin + 1 && begin + 1 < end);
/// ```
pub struct Cursor<'a, T> {
    pub(crate) deque: &'a RingDeque<T>,
    /// Physical buffer index, somewhere in `[head, tail]` circularly.
    pub(crate) index: usize,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<'_, T> {}

impl<'a, T> Cursor<'a, T> {
    /// Logical position of the cursor, `0..=len()`.
    pub fn position(&self) -> usize {
        self.deque.logical_of(self.index)
    }

    /// Returns the element under the cursor, or `None` at the end sentinel.
    pub fn get(self) -> Option<&'a T> {
        if self.position() < self.deque.len() {
            Some(unsafe { &*self.deque.slot(self.index) })
        } else {
            None
        }
    }

    /// Moves by a signed offset, wrapping through the physical end of the buffer in
    /// either direction.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let deque = RingDeque::from([1, 2, 3]);
    /// let c = deque.cursor(2);
    /// assert_eq!(c.offset_by(-2).get(), Some(&1));
    /// assert_eq!(c.offset_by(1).get(), None);
    /// ```
    pub fn offset_by(self, delta: isize) -> Self {
        if delta >= 0 {
            self + delta as usize
        } else {
            self - delta.unsigned_abs()
        }
    }
}

impl<T> fmt::Debug for Cursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("position", &self.position())
            .finish()
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        debug_assert!(
            std::ptr::eq(self.deque, other.deque),
            "cursors into different deques"
        );
        self.index == other.index
    }
}

impl<T> Eq for Cursor<'_, T> {}

impl<T> PartialOrd for Cursor<'_, T> {
    /// Ordering follows logical position, not the raw index: when the live span wraps,
    /// an index at the physical end of the buffer still orders before one at the
    /// physical start. `begin <= c <= end` therefore holds for every valid cursor.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        debug_assert!(
            std::ptr::eq(self.deque, other.deque),
            "cursors into different deques"
        );
        Some(self.position().cmp(&other.position()))
    }
}

impl<'a, T> std::ops::Add<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn add(self, n: usize) -> Self {
        let index = self.deque.wrap_add(self.index, n);
        debug_assert!(self.deque.in_span(index), "cursor moved out of bounds");
        Cursor {
            deque: self.deque,
            index,
        }
    }
}

impl<'a, T> std::ops::Sub<usize> for Cursor<'a, T> {
    type Output = Cursor<'a, T>;

    fn sub(self, n: usize) -> Self {
        let index = self.deque.wrap_sub(self.index, n);
        debug_assert!(self.deque.in_span(index), "cursor moved out of bounds");
        Cursor {
            deque: self.deque,
            index,
        }
    }
}

impl<T> std::ops::AddAssign<usize> for Cursor<'_, T> {
    fn add_assign(&mut self, n: usize) {
        *self = *self + n;
    }
}

impl<T> std::ops::SubAssign<usize> for Cursor<'_, T> {
    fn sub_assign(&mut self, n: usize) {
        *self = *self - n;
    }
}

impl<'a, T> std::ops::Sub for Cursor<'a, T> {
    type Output = usize;

    /// Circular forward distance from `other` to `self`; `end - begin` is `len()`.
    fn sub(self, other: Self) -> usize {
        debug_assert!(
            std::ptr::eq(self.deque, other.deque),
            "cursors into different deques"
        );
        self.index.wrapping_sub(other.index) & self.deque.mask()
    }
}

/// A mutating random-access cursor, obtained from [`RingDeque::cursor_mut`].
/// Navigation mirrors [`Cursor`]; on top of that it hands out mutable access to the
/// element it stands on. Holding it borrows the deque exclusively.
///
/// # Examples
/// ```
/// use ringdeque::RingDeque;
/// let mut deque = RingDeque::from([1, 2, 3]);
/// let mut cursor = deque.cursor_mut(0);
/// cursor.move_by(2);
/// *cursor.get_mut().unwrap() = 30;
/// cursor.move_prev();
/// *cursor.get_mut().unwrap() = 20;
/// assert_eq!(deque, [1, 20, 30]);
/// ```
pub struct CursorMut<'a, T> {
    pub(crate) deque: &'a mut RingDeque<T>,
    pub(crate) index: usize,
}

impl<T> CursorMut<'_, T> {
    /// Logical position of the cursor, `0..=len()`.
    pub fn position(&self) -> usize {
        self.deque.logical_of(self.index)
    }

    /// Returns the element under the cursor, or `None` at the end sentinel.
    pub fn get(&self) -> Option<&T> {
        if self.position() < self.deque.len() {
            Some(unsafe { &*self.deque.slot(self.index) })
        } else {
            None
        }
    }

    /// Returns the element under the cursor mutably, or `None` at the end sentinel.
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.position() < self.deque.len() {
            Some(unsafe { &mut *self.deque.slot(self.index) })
        } else {
            None
        }
    }

    /// Steps one position toward the back.
    pub fn move_next(&mut self) {
        let index = self.deque.wrap_add(self.index, 1);
        debug_assert!(self.deque.in_span(index), "cursor moved out of bounds");
        self.index = index;
    }

    /// Steps one position toward the front.
    pub fn move_prev(&mut self) {
        let index = self.deque.wrap_sub(self.index, 1);
        debug_assert!(self.deque.in_span(index), "cursor moved out of bounds");
        self.index = index;
    }

    /// Moves by a signed offset, wrapping in either direction.
    pub fn move_by(&mut self, delta: isize) {
        let index = if delta >= 0 {
            self.deque.wrap_add(self.index, delta as usize)
        } else {
            self.deque.wrap_sub(self.index, delta.unsigned_abs())
        };
        debug_assert!(self.deque.in_span(index), "cursor moved out of bounds");
        self.index = index;
    }

    /// A read-only view of this cursor, for comparison and arithmetic.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            deque: &*self.deque,
            index: self.index,
        }
    }
}

impl<T> fmt::Debug for CursorMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position())
            .finish()
    }
}

#[cfg(test)]
mod cursor_tests {
    use crate::RingDeque;

    /// Deque whose live span wraps the physical end of the buffer.
    fn wrapped() -> RingDeque<i32> {
        let mut deque = RingDeque::with_capacity(7);
        for i in 0..5 {
            deque.push_back(i);
        }
        for _ in 0..3 {
            deque.pop_front();
        }
        for i in 5..9 {
            deque.push_back(i);
        }
        deque
    }

    #[test]
    fn ordering_is_total_across_the_wrap() {
        let deque = wrapped();
        let begin = deque.cursor(0);
        let end = deque.cursor(deque.len());
        let mut previous = begin;
        for i in 1..=deque.len() {
            let current = deque.cursor(i);
            assert!(previous < current);
            assert!(current > previous);
            assert!(begin <= current && current <= end);
            previous = current;
        }
        assert!(begin < end);
    }

    #[test]
    fn distance_matches_logical_positions() {
        let deque = wrapped();
        let begin = deque.cursor(0);
        let end = deque.cursor(deque.len());
        assert_eq!(end - begin, deque.len());
        for i in 0..=deque.len() {
            for j in 0..=i {
                assert_eq!(deque.cursor(i) - deque.cursor(j), i - j);
            }
        }
    }

    #[test]
    fn arithmetic_walk() {
        let deque = wrapped();
        let mut cursor = deque.cursor(0);
        for expected in [3, 4, 5, 6, 7, 8] {
            assert_eq!(cursor.get(), Some(&expected));
            cursor += 1;
        }
        assert_eq!(cursor.get(), None);
        cursor -= deque.len();
        assert_eq!(cursor, deque.cursor(0));
        assert_eq!((cursor + 4).offset_by(-4), cursor);
    }

    #[test]
    fn end_is_not_dereferenceable() {
        let deque = RingDeque::from([1, 2, 3]);
        assert_eq!(deque.cursor(3).get(), None);
        assert_eq!(deque.cursor(0).get(), Some(&1));
    }

    #[test]
    #[should_panic(expected = "cursor index out of bounds")]
    fn cursor_past_end_panics() {
        let deque = RingDeque::from([1, 2, 3]);
        let _ = deque.cursor(4);
    }

    #[test]
    fn empty_deque_cursor() {
        let deque: RingDeque<i32> = RingDeque::new();
        let only = deque.cursor(0);
        assert_eq!(only.get(), None);
        assert_eq!(only - only, 0);
        assert_eq!(only, deque.cursor(0));
    }

    #[test]
    fn cursor_mut_navigation() {
        let mut deque = wrapped();
        let mut cursor = deque.cursor_mut(0);
        assert_eq!(cursor.position(), 0);
        cursor.move_by(5);
        assert_eq!(cursor.get(), Some(&8));
        *cursor.get_mut().unwrap() = 80;
        cursor.move_next();
        assert_eq!(cursor.get(), None);
        cursor.move_by(-6);
        assert_eq!(cursor.as_cursor().position(), 0);
        *cursor.get_mut().unwrap() = 30;
        assert_eq!(deque, [30, 4, 5, 6, 7, 80]);
    }
}
