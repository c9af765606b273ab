use core::iter::FusedIterator;
use core::slice;

use crate::deque::RingDeque;

/// Iterator over the elements of a `RingDeque`, front to back
///
/// Walks the two physical runs of the ring in turn. Double-ended, so `.rev()`
/// gives the reverse variant; see also [`RingDequeRevIter`].
pub struct RingDequeIter<'a, T> {
    first: slice::Iter<'a, Option<T>>,
    second: slice::Iter<'a, Option<T>>,
}

impl<'a, T> RingDequeIter<'a, T> {
    pub(crate) fn new(first: &'a [Option<T>], second: &'a [Option<T>]) -> Self {
        Self {
            first: first.iter(),
            second: second.iter(),
        }
    }
}

impl<T> Clone for RingDequeIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<'a, T> Iterator for RingDequeIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.first
            .next()
            .or_else(|| self.second.next())
            .and_then(Option::as_ref)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.first.len() + self.second.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RingDequeIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.second
            .next_back()
            .or_else(|| self.first.next_back())
            .and_then(Option::as_ref)
    }
}

impl<T> ExactSizeIterator for RingDequeIter<'_, T> {}

impl<T> FusedIterator for RingDequeIter<'_, T> {}

/// Iterator over the elements of a `RingDeque`, back to front
pub struct RingDequeRevIter<'a, T> {
    inner: RingDequeIter<'a, T>,
}

impl<'a, T> RingDequeRevIter<'a, T> {
    pub(crate) fn new(inner: RingDequeIter<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Clone for RingDequeRevIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for RingDequeRevIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for RingDequeRevIter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl<T> ExactSizeIterator for RingDequeRevIter<'_, T> {}

impl<T> FusedIterator for RingDequeRevIter<'_, T> {}

/// Iterator over mutable references to the elements of a `RingDeque`
pub struct RingDequeIterMut<'a, T> {
    first: slice::IterMut<'a, Option<T>>,
    second: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> RingDequeIterMut<'a, T> {
    pub(crate) fn new(first: &'a mut [Option<T>], second: &'a mut [Option<T>]) -> Self {
        Self {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for RingDequeIterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.first
            .next()
            .or_else(|| self.second.next())
            .and_then(Option::as_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.first.len() + self.second.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RingDequeIterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.second
            .next_back()
            .or_else(|| self.first.next_back())
            .and_then(Option::as_mut)
    }
}

impl<T> ExactSizeIterator for RingDequeIterMut<'_, T> {}

impl<T> FusedIterator for RingDequeIterMut<'_, T> {}

/// Owning iterator that drains a `RingDeque` from either end
pub struct RingDequeIntoIter<T> {
    deque: RingDeque<T>,
}

impl<T> Iterator for RingDequeIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.try_pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.deque.len();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for RingDequeIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.try_pop_back().ok()
    }
}

impl<T> ExactSizeIterator for RingDequeIntoIter<T> {}

impl<T> FusedIterator for RingDequeIntoIter<T> {}

impl<T> IntoIterator for RingDeque<T> {
    type Item = T;
    type IntoIter = RingDequeIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RingDequeIntoIter { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a RingDeque<T> {
    type Item = &'a T;
    type IntoIter = RingDequeIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingDeque<T> {
    type Item = &'a mut T;
    type IntoIter = RingDequeIterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
