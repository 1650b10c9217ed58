use crate::util::normalize_lower;
use indexmap::IndexMap;
use indexmap::map::Iter;

/// Multi-valued header storage keyed by lower-cased header name.
///
/// Entries keep their insertion order, which is the order they are written to
/// the wire. Every lookup lower-cases the requested name first, so callers may
/// use the canonical spelling from [`crate::constants::header`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    entries: IndexMap<String, Vec<String>>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Returns every value recorded for `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.entries
            .get(normalize_lower(name).as_ref())
            .map(Vec::as_slice)
    }

    /// Returns the first value recorded for `name`.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(normalize_lower(name).as_ref())
    }

    /// Replaces all values of `name`, keeping the original position when the
    /// header already exists.
    pub fn insert<I, S>(&mut self, name: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.entries
            .insert(normalize_lower(name).into_owned(), values);
    }

    pub fn append<S: Into<String>>(&mut self, name: &str, value: S) {
        self.entries
            .entry(normalize_lower(name).into_owned())
            .or_default()
            .push(value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        self.entries.shift_remove(normalize_lower(name).as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, String, Vec<String>> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<N, V> FromIterator<(N, V)> for HeaderMap
where
    N: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = HeaderMap::new();
        for (name, value) in iter {
            headers.append(name.as_ref(), value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
