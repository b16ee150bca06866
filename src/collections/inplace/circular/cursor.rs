use core::{fmt, ptr};

use super::{CircularDeque, ring};

/// A bidirectional position inside one [`CircularDeque`].
///
/// Moving a cursor walks physical slots with the same step the back cursor
/// uses, which is logical front-to-back order between
/// [`begin`](CircularDeque::begin) and [`end`](CircularDeque::end). A cursor
/// never changes the deque's own cursors, and any number of them can coexist.
///
/// `begin() == end()` holds for an empty deque and also for a full one, since
/// both anchors land on the same slot. Use [`iter`](CircularDeque::iter) to
/// walk every element.
pub struct Cursor<'a, T, const N: usize> {
    deque: Option<&'a CircularDeque<T, N>>,
    index: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    #[inline]
    pub(super) fn new(deque: &'a CircularDeque<T, N>, index: usize) -> Self {
        Self {
            deque: Some(deque),
            index,
        }
    }

    /// Physical slot index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.deque.is_some()
    }

    /// The element in the current slot. `None` for an unbound cursor or a
    /// vacant slot, such as `end()` of a deque that is not full.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        self.deque?.buf[self.index].as_ref()
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.index = ring::step_increasing::<N>(self.index);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.index = ring::step_decreasing::<N>(self.index);
    }
}

impl<T, const N: usize> Default for Cursor<'_, T, N> {
    #[inline]
    fn default() -> Self {
        Self {
            deque: None,
            index: 0,
        }
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

/// Same deque instance and same slot.
impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        let same_deque = match (self.deque, other.deque) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        };
        same_deque && self.index == other.index
    }
}

impl<T, const N: usize> Eq for Cursor<'_, T, N> {}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("bound", &self.is_bound())
            .field("index", &self.index)
            .finish()
    }
}

/// Like [`Cursor`], but holds the deque mutably and can write the element
/// under it. Created by [`begin_mut`](CircularDeque::begin_mut) and
/// [`end_mut`](CircularDeque::end_mut).
pub struct CursorMut<'a, T, const N: usize> {
    deque: &'a mut CircularDeque<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> CursorMut<'a, T, N> {
    #[inline]
    pub(super) fn new(deque: &'a mut CircularDeque<T, N>, index: usize) -> Self {
        Self { deque, index }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.deque.buf[self.index].as_ref()
    }

    /// `None` on a vacant slot. Never turns a vacant slot into an occupied one.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.deque.buf[self.index].as_mut()
    }

    #[inline]
    pub fn move_next(&mut self) {
        self.index = ring::step_increasing::<N>(self.index);
    }

    #[inline]
    pub fn move_prev(&mut self) {
        self.index = ring::step_decreasing::<N>(self.index);
    }

    /// A read-only cursor at the same slot, comparable with [`Cursor`]s.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor::new(self.deque, self.index)
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut").field("index", &self.index).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_walk_forward_and_back() {
        let mut q = CircularDeque::<i32, 4>::new();
        assert_eq!(q.push_back(1), Ok(()));
        assert_eq!(q.push_back(2), Ok(()));
        assert_eq!(q.push_back(3), Ok(()));

        let mut cursor = q.begin();
        let end = q.end();
        let mut seen = Vec::new();
        while cursor != end {
            seen.extend(cursor.get().copied());
            cursor.move_next();
        }
        assert_eq!(seen, [1, 2, 3]);
        assert_eq!(cursor.get(), None);

        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&3));
        let mut begin = q.begin();
        begin.move_prev();
        begin.move_next();
        assert_eq!(begin, q.begin());
    }

    #[test]
    fn t_begin_is_end_when_empty_or_full() {
        let mut q = CircularDeque::<i32, 2>::new();
        assert_eq!(q.begin(), q.end());
        assert_eq!(q.push_back(1), Ok(()));
        assert_ne!(q.begin(), q.end());
        assert_eq!(q.push_front(0), Ok(()));
        assert_eq!(q.begin(), q.end());
        assert_eq!(q.begin().get(), Some(&0));
    }

    #[test]
    fn t_equality_needs_same_deque() {
        let a = CircularDeque::<i32, 4>::new();
        let b = CircularDeque::<i32, 4>::new();
        assert_eq!(a.begin().index(), b.begin().index());
        assert_ne!(a.begin(), b.begin());
        assert_eq!(a.end(), a.end());
    }

    #[test]
    fn t_unbound() {
        let mut cursor = Cursor::<i32, 3>::default();
        assert!(!cursor.is_bound());
        assert_eq!(cursor.get(), None);
        assert_eq!(cursor, Cursor::default());
        cursor.move_prev();
        assert_eq!(cursor.index(), 2);
        assert_ne!(cursor, Cursor::default());

        let q = CircularDeque::<i32, 3>::new();
        assert_ne!(Cursor::default(), q.begin());
    }

    #[test]
    fn t_cursor_mut_writes_in_logical_order() {
        let mut q = CircularDeque::<i32, 4>::new();
        for i in 1..=3 {
            assert_eq!(q.push_back(i), Ok(()));
        }
        assert_eq!(q.push_front(0), Ok(()));

        let len = q.len();
        let back = q.end().index();
        let mut cursor = q.begin_mut();
        for step in 0..len {
            if let Some(x) = cursor.get_mut() {
                *x += 10 * step as i32;
            }
            cursor.move_next();
        }
        assert_eq!(cursor.index(), back);
        assert_eq!(q, [0, 11, 22, 33]);
    }

    #[test]
    fn t_cursor_mut_end_is_vacant() {
        let mut q = CircularDeque::<i32, 3>::new();
        assert_eq!(q.push_back(5), Ok(()));
        let mut cursor = q.end_mut();
        assert_eq!(cursor.get_mut(), None);
        cursor.move_prev();
        assert_eq!(cursor.get(), Some(&5));
        if let Some(x) = cursor.get_mut() {
            *x = 6;
        }
        assert_eq!(cursor.as_cursor().index(), cursor.index());
        assert_eq!(q.back(), Some(&6));
    }
}
