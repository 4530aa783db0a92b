//! Range algorithms over logical subranges of a [`RingDeque`].
//!
//! The classic iterator-pair algorithms (sort, reverse, shuffle, equality over a
//! subrange) cannot run through two aliasing mutable iterators in safe Rust, so they
//! live on the container instead and drive the same masked index arithmetic every
//! other operation uses. Any `RangeBounds<usize>` over logical positions is accepted,
//! so `deque.sort_range(2..=5)` and `deque.reverse_range(..)` both read naturally.

use std::cmp::Ordering;
use std::ops::{Bound, Range, RangeBounds};

use rand::Rng;

use crate::deque::RingDeque;
use crate::iter::{Iter, IterMut};

impl<T> RingDeque<T> {
    pub(crate) fn resolve_range<R>(&self, range: R) -> Range<usize>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len(),
        };
        assert!(start <= end, "range start must be less than or equal to end");
        assert!(
            end <= self.len(),
            "range end must be less than or equal to the length of the deque"
        );
        start..end
    }

    /// Iterates over the logical subrange `range`. Combined with [`Iterator::eq`]
    /// this is the subrange equality check:
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let a = RingDeque::from([9, 1, 2, 3]);
    /// let b = RingDeque::from([1, 2, 3, 7]);
    /// assert!(a.iter_range(1..4).eq(b.iter_range(0..3)));
    /// ```
    ///
    /// # Panics
    /// Panics if the range is invalid or reaches past `len()`.
    pub fn iter_range<R>(&self, range: R) -> Iter<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve_range(range);
        Iter {
            deque: self,
            front: self.physical(start),
            len: end - start,
        }
    }

    /// Mutable variant of [`iter_range`](RingDeque::iter_range).
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([1, 2, 3, 4]);
    /// for x in deque.iter_range_mut(1..3) {
    ///     *x = -*x;
    /// }
    /// assert_eq!(deque, [1, -2, -3, 4]);
    /// ```
    pub fn iter_range_mut<R>(&mut self, range: R) -> IterMut<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve_range(range);
        let front = self.physical(start);
        IterMut::over(self, front, end - start)
    }

    /// Reverses the subrange in place.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([0, 1, 2, 3, 4, 5]);
    /// deque.reverse_range(1..=4);
    /// assert_eq!(deque, [0, 4, 3, 2, 1, 5]);
    /// ```
    ///
    /// # Panics
    /// Panics if the range is invalid or reaches past `len()`.
    pub fn reverse_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.resolve_range(range);
        let (mut lo, mut hi) = (start, end);
        while hi - lo > 1 {
            hi -= 1;
            self.swap(lo, hi);
            lo += 1;
        }
    }

    /// Sorts the subrange in place in ascending order. The sort is not stable.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([5, 4, 3, 2, 1]);
    /// deque.sort_range(1..4);
    /// assert_eq!(deque, [5, 2, 3, 4, 1]);
    /// deque.sort_range(..);
    /// assert_eq!(deque, [1, 2, 3, 4, 5]);
    /// ```
    ///
    /// # Panics
    /// Panics if the range is invalid or reaches past `len()`.
    pub fn sort_range<R>(&mut self, range: R)
    where
        R: RangeBounds<usize>,
        T: Ord,
    {
        self.sort_range_by(range, T::cmp);
    }

    /// Sorts the subrange in place with a comparator. The sort is not stable; it runs
    /// in O(k log k) worst case and allocates nothing (insertion sort for short
    /// ranges, heapsort over the logical positions otherwise).
    ///
    /// A descending sort is the inverted comparator:
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// let mut deque = RingDeque::from([2, 4, 1, 3]);
    /// deque.sort_range_by(.., |a, b| b.cmp(a));
    /// assert_eq!(deque, [4, 3, 2, 1]);
    /// ```
    ///
    /// # Panics
    /// Panics if the range is invalid or reaches past `len()`.
    pub fn sort_range_by<R, F>(&mut self, range: R, mut compare: F)
    where
        R: RangeBounds<usize>,
        F: FnMut(&T, &T) -> Ordering,
    {
        const INSERTION_CUTOFF: usize = 16;

        let Range { start, end } = self.resolve_range(range);
        let len = end - start;
        if len < 2 {
            return;
        }
        if len <= INSERTION_CUTOFF {
            for i in 1..len {
                let mut j = i;
                while j > 0
                    && compare(&self[start + j - 1], &self[start + j]) == Ordering::Greater
                {
                    self.swap(start + j - 1, start + j);
                    j -= 1;
                }
            }
            return;
        }
        for node in (0..len / 2).rev() {
            self.sift_down(start, node, len, &mut compare);
        }
        for heap in (1..len).rev() {
            self.swap(start, start + heap);
            self.sift_down(start, 0, heap, &mut compare);
        }
    }

    /// Restores the max-heap property below `node` within the first `len` logical
    /// positions after `base`.
    fn sift_down<F>(&mut self, base: usize, mut node: usize, len: usize, compare: &mut F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        loop {
            let mut child = 2 * node + 1;
            if child >= len {
                break;
            }
            if child + 1 < len
                && compare(&self[base + child], &self[base + child + 1]) == Ordering::Less
            {
                child += 1;
            }
            if compare(&self[base + node], &self[base + child]) != Ordering::Less {
                break;
            }
            self.swap(base + node, base + child);
            node = child;
        }
    }

    /// Shuffles the subrange in place (Fisher–Yates) using the supplied random source.
    ///
    /// # Examples
    /// ```
    /// # use ringdeque::RingDeque;
    /// use rand::{rngs::StdRng, SeedableRng};
    /// let mut deque: RingDeque<i32> = (0..20).collect();
    /// let mut rng = StdRng::seed_from_u64(7);
    /// deque.shuffle_range(5..15, &mut rng);
    /// // still the same twenty elements
    /// deque.sort_range(..);
    /// assert!(deque.iter().copied().eq(0..20));
    /// ```
    ///
    /// # Panics
    /// Panics if the range is invalid or reaches past `len()`.
    pub fn shuffle_range<R, G>(&mut self, range: R, rng: &mut G)
    where
        R: RangeBounds<usize>,
        G: Rng + ?Sized,
    {
        let Range { start, end } = self.resolve_range(range);
        let len = end - start;
        for i in (1..len).rev() {
            let j = rng.gen_range(0..=i);
            self.swap(start + i, start + j);
        }
    }
}
