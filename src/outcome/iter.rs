use std::iter::FusedIterator;

/// An owned iterator over the value of an ok outcome: exactly one element when ok,
/// none when failed. Returned by the [`IntoIterator`] impls of
/// [`Outcome`](super::Outcome) and [`TypedOutcome`](super::TypedOutcome).
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    pub(crate) item: Option<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        match self.item {
            Some(_) => 1,
            None => 0,
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

/// A borrowed counterpart to [`IntoIter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    pub(crate) item: Option<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.item.take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.item.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        match self.item {
            Some(_) => 1,
            None => 0,
        }
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
