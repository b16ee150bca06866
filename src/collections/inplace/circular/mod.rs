pub mod cursor;
pub mod into_iter;
pub mod iter;
pub mod iter_mut;

mod ring;

use core::{
    cmp::Ordering,
    fmt, hash, hint,
    ops::{self, Range},
};

use cursor::{Cursor, CursorMut};
use into_iter::IntoIter;
use iter::Iter;
use iter_mut::IterMut;

/// Returned by the checked pushes when the deque is full. Holds the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("CircularDeque is full")]
pub struct CapacityError<T>(pub T);

impl<T> CapacityError<T> {
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

/// A double-ended queue over a fixed ring of `N` inline slots.
///
/// The back cursor is the next slot `push_back` writes and advances toward
/// increasing indices. The front cursor is the next slot `push_front` writes
/// and advances toward decreasing indices. Both start in the middle of the
/// ring, so either end can take about `N / 2` pushes before the cursors
/// meet and the ring wraps.
///
/// The occupied slots, in logical order, are the circular range from
/// `front + 1` up to (not including) `back`.
///
/// `N` must be at least 2. Smaller capacities fail to compile at the first
/// use of a constructor:
///
/// ```compile_fail
/// let _ = circular_deque::CircularDeque::<u8, 1>::new();
/// ```
pub struct CircularDeque<T, const N: usize> {
    buf: [Option<T>; N],
    front: usize,
    back: usize,
    len: usize,
}

impl<T, const N: usize> CircularDeque<T, N> {
    pub const CAPACITY: usize = N;

    const VALID_CAPACITY: () = assert!(N >= 2, "CircularDeque requires a capacity of at least 2");

    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID_CAPACITY;
        Self {
            buf: [const { None }; N],
            front: ring::initial_front::<N>(),
            back: ring::initial_back::<N>(),
            len: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// The raw ring in physical order. Use [`iter`](Self::iter) for logical order.
    #[inline]
    pub fn data(&self) -> &[Option<T>; N] {
        &self.buf
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.begin_index()].as_ref()
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let index = self.begin_index();
        self.buf[index].as_mut()
    }

    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buf[self.last_index()].as_ref()
    }

    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }
        let index = self.last_index();
        self.buf[index].as_mut()
    }

    /// # Safety
    ///
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn front_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "front_unchecked on an empty CircularDeque");
        unsafe {
            let slot = self.buf.get_unchecked(self.begin_index());
            slot.as_ref().unwrap_unchecked()
        }
    }

    /// # Safety
    ///
    /// The deque must not be empty.
    #[inline]
    pub unsafe fn back_unchecked(&self) -> &T {
        debug_assert!(!self.is_empty(), "back_unchecked on an empty CircularDeque");
        unsafe {
            let slot = self.buf.get_unchecked(self.last_index());
            slot.as_ref().unwrap_unchecked()
        }
    }

    /// `index` counts from the front.
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.buf[self.to_physical_index(index)].as_ref()
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        let index = self.to_physical_index(index);
        self.buf[index].as_mut()
    }

    pub fn push_back(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        unsafe { self.push_back_unchecked(value) };
        Ok(())
    }

    pub fn push_front(&mut self, value: T) -> Result<(), CapacityError<T>> {
        if self.is_full() {
            return Err(CapacityError(value));
        }
        unsafe { self.push_front_unchecked(value) };
        Ok(())
    }

    /// # Safety
    ///
    /// The deque must not be full.
    pub unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_back_unchecked on a full CircularDeque");
        unsafe {
            hint::assert_unchecked(self.len < N);
            *self.buf.get_unchecked_mut(self.back) = Some(value);
        }
        self.back = ring::step_increasing::<N>(self.back);
        self.len += 1;
        self.debug_check_cursors();
    }

    /// # Safety
    ///
    /// The deque must not be full.
    pub unsafe fn push_front_unchecked(&mut self, value: T) {
        debug_assert!(!self.is_full(), "push_front_unchecked on a full CircularDeque");
        unsafe {
            hint::assert_unchecked(self.len < N);
            *self.buf.get_unchecked_mut(self.front) = Some(value);
        }
        self.front = ring::step_decreasing::<N>(self.front);
        self.len += 1;
        self.debug_check_cursors();
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { self.pop_back_unchecked() })
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        Some(unsafe { self.pop_front_unchecked() })
    }

    /// # Safety
    ///
    /// The deque must not be empty.
    pub unsafe fn pop_back_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_back_unchecked on an empty CircularDeque");
        unsafe { hint::assert_unchecked(self.len > 0) };
        self.back = ring::step_decreasing::<N>(self.back);
        self.len -= 1;
        self.debug_check_cursors();
        unsafe { self.buf.get_unchecked_mut(self.back).take().unwrap_unchecked() }
    }

    /// # Safety
    ///
    /// The deque must not be empty.
    pub unsafe fn pop_front_unchecked(&mut self) -> T {
        debug_assert!(!self.is_empty(), "pop_front_unchecked on an empty CircularDeque");
        unsafe { hint::assert_unchecked(self.len > 0) };
        self.front = ring::step_increasing::<N>(self.front);
        self.len -= 1;
        self.debug_check_cursors();
        unsafe { self.buf.get_unchecked_mut(self.front).take().unwrap_unchecked() }
    }

    pub fn pop_front_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Option<T> {
        let first = self.front_mut()?;
        if predicate(first) {
            self.pop_front()
        } else {
            None
        }
    }

    pub fn pop_back_if(&mut self, predicate: impl FnOnce(&mut T) -> bool) -> Option<T> {
        let last = self.back_mut()?;
        if predicate(last) {
            self.pop_back()
        } else {
            None
        }
    }

    /// Drops every element and moves both cursors back to the middle of the ring.
    pub fn clear(&mut self) {
        let (a, b) = self.occupied_runs();
        // Cursors are reset before any element drops.
        self.len = 0;
        self.front = ring::initial_front::<N>();
        self.back = ring::initial_back::<N>();
        self.buf[a].fill_with(|| None);
        self.buf[b].fill_with(|| None);
    }

    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        let (a, b) = self.occupied_runs();
        self.buf[a]
            .iter()
            .chain(&self.buf[b])
            .flatten()
            .any(|value| value == x)
    }

    /// Cursor at the front element.
    #[inline]
    pub fn begin(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.begin_index())
    }

    /// Cursor one past the back element.
    ///
    /// In a full deque this is the same physical slot as [`begin`](Self::begin).
    #[inline]
    pub fn end(&self) -> Cursor<'_, T, N> {
        Cursor::new(self, self.back)
    }

    /// Writable cursor at the front element.
    #[inline]
    pub fn begin_mut(&mut self) -> CursorMut<'_, T, N> {
        let index = self.begin_index();
        CursorMut::new(self, index)
    }

    #[inline]
    pub fn end_mut(&mut self) -> CursorMut<'_, T, N> {
        let index = self.back;
        CursorMut::new(self, index)
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T, N> {
        Iter::new(&self.buf, self.begin_index(), self.back, self.len)
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (a, b) = self.occupied_runs();
        // `b` always ends at or before `a` starts.
        let (low, high) = self.buf.split_at_mut(a.start);
        IterMut::new(high[..a.len()].iter_mut(), low[b].iter_mut(), self.len)
    }
}

impl<T, const N: usize> CircularDeque<T, N> {
    #[inline]
    fn begin_index(&self) -> usize {
        ring::step_increasing::<N>(self.front)
    }

    #[inline]
    fn last_index(&self) -> usize {
        ring::step_decreasing::<N>(self.back)
    }

    #[inline]
    fn to_physical_index(&self, index: usize) -> usize {
        ring::offset_increasing::<N>(self.begin_index(), index)
    }

    /// Physical ranges holding the elements, front part first. The second
    /// range is empty unless the occupied region wraps past `N - 1`.
    fn occupied_runs(&self) -> (Range<usize>, Range<usize>) {
        if self.len == 0 {
            return (0..0, 0..0);
        }
        let head = self.begin_index();
        let head_len = N - head;
        if self.len <= head_len {
            (head..head + self.len, 0..0)
        } else {
            (head..N, 0..self.len - head_len)
        }
    }

    #[inline]
    fn debug_check_cursors(&self) {
        debug_assert!(self.len <= N);
        debug_assert_eq!(
            ring::offset_increasing::<N>(self.begin_index(), self.len),
            self.back,
            "cursors out of step: front={} back={} len={}",
            self.front,
            self.back,
            self.len
        );
    }
}

impl<T, const N: usize> Default for CircularDeque<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for CircularDeque<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<T: PartialEq, const N: usize> PartialEq for CircularDeque<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for CircularDeque<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && self.iter().zip(other).all(|(a, b)| a == b)
    }
}

impl<T, U, const N: usize> PartialEq<&[U]> for CircularDeque<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        PartialEq::eq(self, *other)
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<[U; M]> for CircularDeque<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T, U, const N: usize, const M: usize> PartialEq<&[U; M]> for CircularDeque<T, N>
where
    T: PartialEq<U>,
{
    #[inline]
    fn eq(&self, other: &&[U; M]) -> bool {
        PartialEq::eq(self, other.as_slice())
    }
}

impl<T: Eq, const N: usize> Eq for CircularDeque<T, N> {}

impl<T: PartialOrd, const N: usize> PartialOrd for CircularDeque<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord, const N: usize> Ord for CircularDeque<T, N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: hash::Hash, const N: usize> hash::Hash for CircularDeque<T, N> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        self.iter().for_each(|x| x.hash(state));
    }
}

impl<T, const N: usize> ops::Index<usize> for CircularDeque<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index).expect("Out of bounds access")
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for CircularDeque<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index).expect("Out of bounds access")
    }
}

/// Pushes at most `N` items to the back. Anything past that is not taken from the source.
impl<T, const N: usize> FromIterator<T> for CircularDeque<T, N> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut q = Self::new();
        iter.into_iter()
            .take(N)
            .for_each(|x| unsafe { q.push_back_unchecked(x) });
        q
    }
}

impl<T, const N: usize, const M: usize> TryFrom<[T; M]> for CircularDeque<T, N> {
    type Error = CapacityError<[T; M]>;

    fn try_from(value: [T; M]) -> Result<Self, Self::Error> {
        if M > N {
            return Err(CapacityError(value));
        }
        Ok(Self::from_iter(value))
    }
}

impl<T, const N: usize> IntoIterator for CircularDeque<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a CircularDeque<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut CircularDeque<T, N> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for CircularDeque<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


#[cfg(test)]
mod proptests {
    use std::collections::VecDeque;

    use proptest::prelude::*;

    use super::*;

    const CAP: usize = 7;

    #[derive(Debug, Clone)]
    enum Op {
        PushBack(u8),
        PushFront(u8),
        PopBack,
        PopFront,
        Clear,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => any::<u8>().prop_map(Op::PushBack),
            4 => any::<u8>().prop_map(Op::PushFront),
            3 => Just(Op::PopBack),
            3 => Just(Op::PopFront),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        /// Property: every operation sequence matches `VecDeque` bounded at `CAP`.
        #[test]
        fn matches_bounded_model(ops in prop::collection::vec(op(), 0..64), probe in any::<u8>()) {
            let mut q = CircularDeque::<u8, CAP>::new();
            let mut model = VecDeque::new();

            for op in ops {
                match op {
                    Op::PushBack(v) => {
                        let result = q.push_back(v);
                        if model.len() == CAP {
                            prop_assert_eq!(result, Err(CapacityError(v)));
                        } else {
                            prop_assert_eq!(result, Ok(()));
                            model.push_back(v);
                        }
                    }
                    Op::PushFront(v) => {
                        let result = q.push_front(v);
                        if model.len() == CAP {
                            prop_assert_eq!(result, Err(CapacityError(v)));
                        } else {
                            prop_assert_eq!(result, Ok(()));
                            model.push_front(v);
                        }
                    }
                    Op::PopBack => {
                        prop_assert_eq!(q.pop_back(), model.pop_back());
                    }
                    Op::PopFront => {
                        prop_assert_eq!(q.pop_front(), model.pop_front());
                    }
                    Op::Clear => {
                        q.clear();
                        model.clear();
                        prop_assert!(q.begin() == q.end());
                    }
                }

                prop_assert_eq!(q.len(), model.len());
                prop_assert_eq!(q.is_empty(), model.is_empty());
                prop_assert_eq!(q.is_full(), model.len() == CAP);
                prop_assert_eq!(q.front(), model.front());
                prop_assert_eq!(q.back(), model.back());
                prop_assert!(q.iter().eq(model.iter()));
                prop_assert!(q.iter().rev().eq(model.iter().rev()));
                prop_assert_eq!(q.contains(&probe), model.contains(&probe));
                prop_assert_eq!(q.data().iter().filter(|slot| slot.is_some()).count(), q.len());
            }
        }

        /// Property: `push_front` then `pop_front` leaves the ring unchanged.
        #[test]
        fn push_pop_front_is_identity(prefix in prop::collection::vec(any::<u8>(), 0..CAP), v in any::<u8>()) {
            let mut q = CircularDeque::<u8, CAP>::from_iter(prefix);
            let before = (*q.data(), q.front, q.back, q.len());
            prop_assert_eq!(q.push_front(v), Ok(()));
            prop_assert_eq!(q.pop_front(), Some(v));
            prop_assert_eq!((*q.data(), q.front, q.back, q.len()), before);
        }
    }
}
