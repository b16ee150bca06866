use core::{fmt, iter::FusedIterator};

use super::CircularDeque;

/// Owning iterator that pops from the front, or from the back when reversed.
/// Elements not yet yielded are dropped with it.
pub struct IntoIter<T, const N: usize> {
    deque: CircularDeque<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    #[inline]
    pub(super) fn new(deque: CircularDeque<T, N>) -> Self {
        Self { deque }
    }

    /// The elements not yet yielded.
    #[inline]
    pub fn as_deque(&self) -> &CircularDeque<T, N> {
        &self.deque
    }

    #[inline]
    pub fn into_deque(self) -> CircularDeque<T, N> {
        self.deque
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self::new(self.deque.clone())
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.deque.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len, Some(self.deque.len))
    }

    #[inline]
    fn last(mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.deque.len
    }
}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
