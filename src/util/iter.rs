//! Utility iterators.

/// A forward-only cursor over a slice that maps every element on the fly.
///
/// The cursor holds the slice it was created from and the position of the
/// next element. It yields each element once, in order, and is exhausted
/// when the position reaches the end of the slice.
///
/// ```
/// use devhelper::util::iter::Mapped;
///
/// let words = ["a", "bb", "ccc"];
/// let mut iter = Mapped::new(&words, |s| s.len());
///
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), Some(3));
/// assert_eq!(iter.next(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Mapped<'a, T, U> {
    target: &'a [T],
    mapper: fn(&'a T) -> U,
    index: usize,
}

impl<'a, T, U> Mapped<'a, T, U> {
    /// Create a cursor positioned before the first element of `target`.
    pub fn new(target: &'a [T], mapper: fn(&'a T) -> U) -> Self {
        Self {
            target,
            mapper,
            index: 0,
        }
    }
}

impl<'a, T, U> Iterator for Mapped<'a, T, U> {
    type Item = U;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.target.get(self.index)?;
        self.index += 1;
        Some((self.mapper)(item))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.target.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<T, U> ExactSizeIterator for Mapped<'_, T, U> {}

impl<T, U> std::iter::FusedIterator for Mapped<'_, T, U> {}
