use crate::test::Test;
use std::{iter::FusedIterator, slice};

/// The ordered collection of registered test cases.
///
/// Test cases are only ever appended, so the enumeration order is
/// always the order in which they were registered.
#[derive(Debug, Default)]
pub struct Registry<'a> {
    tests: Vec<&'a Test>,
}

impl<'a> Registry<'a> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { tests: Vec::new() }
    }

    /// Append a test case to the tail of the registry.
    pub fn register(&mut self, test: &'a Test) {
        log::trace!(
            "register test #{}: {} at {}",
            self.tests.len() + 1,
            test.desc.display_name(),
            test.desc.location
        );
        self.tests.push(test);
    }

    /// Return the first registered test case.
    #[inline]
    pub fn head(&self) -> Option<&'a Test> {
        self.tests.first().copied()
    }

    /// Enumerate the registered test cases in registration order.
    #[inline]
    pub fn iter(&self) -> Iter<'a, '_> {
        Iter {
            inner: self.tests.iter(),
        }
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    #[allow(missing_docs)]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Find the first test case with the exact given name.
    ///
    /// Anonymous test cases never match.
    pub fn find(&self, name: &str) -> Option<&'a Test> {
        let found = self.iter().find(|test| test.desc.name() == Some(name));
        log::debug!("lookup test {:?}: found = {}", name, found.is_some());
        found
    }
}

impl<'a> Extend<&'a Test> for Registry<'a> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = &'a Test>,
    {
        for test in iter {
            self.register(test);
        }
    }
}

impl<'a, 'r> IntoIterator for &'r Registry<'a> {
    type Item = &'a Test;
    type IntoIter = Iter<'a, 'r>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the registered test cases, created by [`Registry::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, 'r> {
    inner: slice::Iter<'r, &'a Test>,
}

impl<'a> Iterator for Iter<'a, '_> {
    type Item = &'a Test;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl FusedIterator for Iter<'_, '_> {}
