use core::{fmt, iter::FusedIterator, slice};

/// Mutable front-to-back iterator over the two physical runs of the ring.
pub struct IterMut<'a, T> {
    a: slice::IterMut<'a, Option<T>>,
    b: slice::IterMut<'a, Option<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    /// Every slot in `a` and `b` must be occupied and `remaining` must be
    /// their combined length.
    #[inline]
    pub(super) fn new(
        a: slice::IterMut<'a, Option<T>>,
        b: slice::IterMut<'a, Option<T>>,
        remaining: usize,
    ) -> Self {
        debug_assert_eq!(a.len() + b.len(), remaining);
        Self { a, b, remaining }
    }
}

impl<T: fmt::Debug> fmt::Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.a.as_slice())
            .field(&self.b.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        let slot = match self.a.next() {
            Some(slot) => slot,
            None => self.b.next()?,
        };
        self.remaining -= 1;
        slot.as_mut()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        let slot = match self.b.next_back() {
            Some(slot) => slot,
            None => self.a.next_back()?,
        };
        self.remaining -= 1;
        slot.as_mut()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}
