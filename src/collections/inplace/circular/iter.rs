use core::{fmt, iter::FusedIterator};

use super::ring;

/// Borrowed front-to-back iterator. `rev()` walks back-to-front.
pub struct Iter<'a, T, const N: usize> {
    buf: &'a [Option<T>; N],
    head: usize,
    tail: usize,
    remaining: usize,
}

impl<'a, T, const N: usize> Iter<'a, T, N> {
    /// `head` is the slot of the next front element, `tail` is one past the
    /// next back element. Both meet after `remaining` steps.
    #[inline]
    pub(super) fn new(buf: &'a [Option<T>; N], head: usize, tail: usize, remaining: usize) -> Self {
        Self {
            buf,
            head,
            tail,
            remaining,
        }
    }
}

impl<T, const N: usize> Clone for Iter<'_, T, N> {
    #[inline]
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Iter<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.clone().collect::<Vec<_>>()).finish()
    }
}

impl<'a, T, const N: usize> Iterator for Iter<'a, T, N> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.buf[self.head];
        self.head = ring::step_increasing::<N>(self.head);
        self.remaining -= 1;
        slot.as_ref()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    #[inline]
    fn count(self) -> usize {
        self.remaining
    }
}

impl<'a, T, const N: usize> DoubleEndedIterator for Iter<'a, T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        self.tail = ring::step_decreasing::<N>(self.tail);
        self.remaining -= 1;
        self.buf[self.tail].as_ref()
    }
}

impl<T, const N: usize> ExactSizeIterator for Iter<'_, T, N> {
    #[inline]
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<T, const N: usize> FusedIterator for Iter<'_, T, N> {}
