//! Index arithmetic over a ring of `N` physical slots.
//!
//! The back cursor grows toward increasing indices and the front cursor grows
//! toward decreasing indices, so every cursor move is one of the two steps
//! below.

/// Physical index of the back cursor in a freshly created or cleared ring.
#[inline(always)]
pub(crate) const fn initial_back<const N: usize>() -> usize {
    N / 2
}

/// Physical index of the front cursor in a freshly created or cleared ring.
///
/// Sits one step below [`initial_back`] so both ends start with about `N / 2`
/// free slots.
#[inline(always)]
pub(crate) const fn initial_front<const N: usize>() -> usize {
    N / 2 - 1
}

/// `index + 1`, wrapping from `N - 1` to `0`.
#[inline(always)]
pub(crate) const fn step_increasing<const N: usize>(index: usize) -> usize {
    debug_assert!(index < N);
    if index < N - 1 { index + 1 } else { 0 }
}

/// `index - 1`, wrapping from `0` to `N - 1`.
#[inline(always)]
pub(crate) const fn step_decreasing<const N: usize>(index: usize) -> usize {
    debug_assert!(index < N);
    if index > 0 { index - 1 } else { N - 1 }
}

/// `index + offset` around the ring. `offset` must be `<= N`.
#[inline]
pub(crate) const fn offset_increasing<const N: usize>(index: usize, offset: usize) -> usize {
    debug_assert!(index < N && offset <= N);
    let head_room = N - index;
    if offset < head_room {
        index + offset
    } else {
        offset - head_room
    }
}
