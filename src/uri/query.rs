//! The query component of a URI.
//!
//! A query is an ordered list of [`QueryParameter`]s. Names may repeat and
//! order is significant, so lookups by name scan the list.
//!
//! Both parameters and the name/value pair inside a parameter are delimited
//! by `&`. A parameter serialized with a value therefore reads back as two
//! name-only parameters.

use serde::Serialize;

use crate::{
    error::{Error, Result},
    util::{
        iter::Mapped,
        percent::{decode, encode},
    },
};

/// A query parameter: a name with an optional value.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
pub struct QueryParameter {
    name: String,
    value: Option<String>,
}

impl QueryParameter {
    /// Create a query parameter.
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Parse a single percent-encoded `name[&value]` segment.
    ///
    /// Without `&`, the whole segment is the name and the value is absent.
    /// Otherwise the name is the text before the first `&` and the value is
    /// the text after it, possibly empty.
    pub fn parse(segment: &str) -> Self {
        match segment.split_once('&') {
            Some((name, value)) => Self::new(decode(name), Some(decode(value))),
            None => Self::new(decode(segment), None),
        }
    }

    /// Return the name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Return the value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Set or clear the value.
    pub fn set_value(&mut self, value: Option<String>) {
        self.value = value;
    }
}

impl std::fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&encode(&self.name))?;
        // A present value always emits the delimiter, even when empty.
        if let Some(value) = &self.value {
            write!(f, "&{}", encode(value))?;
        }
        Ok(())
    }
}

/// Iterator over `(name, value)` pairs of [`QueryParameters`].
pub type Entries<'a> = Mapped<'a, QueryParameter, (&'a str, Option<&'a str>)>;

/// Iterator over the names of [`QueryParameters`].
pub type Keys<'a> = Mapped<'a, QueryParameter, &'a str>;

/// Iterator over the values of [`QueryParameters`].
pub type Values<'a> = Mapped<'a, QueryParameter, Option<&'a str>>;

/// An ordered list of query parameters, possibly with duplicate names.
#[derive(Clone, Debug, Default, Hash, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameters(Vec<QueryParameter>);

impl QueryParameters {
    /// Create an empty list.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a query string.
    ///
    /// Returns [`None`] when there is no query at all, an empty list for an
    /// empty query, and otherwise one parameter per `&`-separated segment.
    pub fn parse(value: Option<&str>) -> Option<Self> {
        let value = value?;
        if value.is_empty() {
            return Some(Self::new());
        }
        Some(value.split('&').map(QueryParameter::parse).collect())
    }

    /// Return the number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Return the parameters as a slice.
    pub fn as_slice(&self) -> &[QueryParameter] {
        &self.0
    }

    /// Remove all parameters.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Return the value of the first parameter with given name.
    ///
    /// Returns [`None`] both when there is no such parameter and when it has
    /// no value; use [`QueryParameters::has`] to tell them apart.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.0
            .iter()
            .find(|item| item.name == name)
            .and_then(|item| item.value())
    }

    /// Return the parameter at given index, if any.
    pub fn get_item(&self, index: usize) -> Option<&QueryParameter> {
        self.0.get(index)
    }

    /// Return a mutable reference to the parameter at given index, if any.
    pub fn get_item_mut(&mut self, index: usize) -> Option<&mut QueryParameter> {
        self.0.get_mut(index)
    }

    /// Check if a parameter with given name exists.
    pub fn has(&self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        self.0.iter().any(|item| item.name == name)
    }

    /// Set the value of the first parameter with given name, and remove all
    /// later parameters with the same name.
    ///
    /// Nothing is inserted when no parameter has this name.
    pub fn set(&mut self, name: impl AsRef<str>, value: Option<String>) -> &mut Self {
        let name = name.as_ref();
        let Some(first) = self.0.iter().position(|item| item.name == name) else {
            return self;
        };
        self.0[first].value = value;
        let mut index = 0;
        self.0.retain(|item| {
            let keep = index <= first || item.name != name;
            index += 1;
            keep
        });
        self
    }

    /// Replace the parameter at given index and return the previous one.
    pub fn set_item(&mut self, index: usize, item: QueryParameter) -> Result<QueryParameter> {
        let len = self.0.len();
        let slot = self
            .0
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, item))
    }

    /// Remove every parameter with given name.
    ///
    /// Returns `true` if any parameter was removed.
    pub fn delete(&mut self, name: impl AsRef<str>) -> bool {
        let name = name.as_ref();
        let len = self.0.len();
        self.0.retain(|item| item.name != name);
        self.0.len() < len
    }

    /// Remove the parameter at given index.
    ///
    /// Returns `false` if the index is out of range.
    pub fn delete_at(&mut self, index: usize) -> bool {
        if index < self.0.len() {
            self.0.remove(index);
            true
        } else {
            false
        }
    }

    /// Remove `count` parameters starting at `index`, or every parameter from
    /// `index` on when `count` is [`None`].
    ///
    /// Does nothing if `index` is out of range.
    pub fn delete_from(&mut self, index: usize, count: Option<usize>) {
        if index >= self.0.len() {
            return;
        }
        match count {
            Some(count) => {
                let end = index.saturating_add(count).min(self.0.len());
                self.0.drain(index..end);
            },
            None => self.0.truncate(index),
        }
    }

    /// Append a parameter and return the new length.
    pub fn push(&mut self, item: QueryParameter) -> usize {
        self.0.push(item);
        self.0.len()
    }

    /// Remove and return the last parameter, if any.
    pub fn pop(&mut self) -> Option<QueryParameter> {
        self.0.pop()
    }

    /// Remove and return the first parameter, if any.
    pub fn shift(&mut self) -> Option<QueryParameter> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.remove(0))
        }
    }

    /// Insert a parameter at the start and return the new length.
    pub fn unshift(&mut self, item: QueryParameter) -> usize {
        self.0.insert(0, item);
        self.0.len()
    }

    /// Return the index of `item`, searching forward from `from` (or the
    /// start).
    ///
    /// Items are compared by identity: `item` must be a reference into this
    /// list, so an equal parameter stored elsewhere is never found.
    pub fn index_of(&self, item: &QueryParameter, from: Option<usize>) -> Option<usize> {
        let from = from.unwrap_or(0);
        self.0
            .iter()
            .enumerate()
            .skip(from)
            .find_map(|(i, it)| std::ptr::eq(it, item).then_some(i))
    }

    /// Return the index of `item`, searching backward from `from` (or the
    /// end).
    ///
    /// Items are compared by identity, as in [`QueryParameters::index_of`].
    pub fn last_index_of(&self, item: &QueryParameter, from: Option<usize>) -> Option<usize> {
        let end = from.map_or(self.0.len(), |from| from.saturating_add(1).min(self.0.len()));
        self.0[..end].iter().rposition(|it| std::ptr::eq(it, item))
    }

    /// Check if all parameters satisfy the predicate.
    pub fn every<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&QueryParameter, usize, &[QueryParameter]) -> bool,
    {
        self.0
            .iter()
            .enumerate()
            .all(|(i, item)| predicate(item, i, &self.0))
    }

    /// Check if any parameter satisfies the predicate.
    pub fn some<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(&QueryParameter, usize, &[QueryParameter]) -> bool,
    {
        self.0
            .iter()
            .enumerate()
            .any(|(i, item)| predicate(item, i, &self.0))
    }

    /// Call `f` with the value and the name of every parameter.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Option<&str>, &str),
    {
        self.0.iter().for_each(|item| f(item.value(), item.name()));
    }

    /// Call `f` with every parameter and its index.
    pub fn for_each_item<F>(&self, mut f: F)
    where
        F: FnMut(&QueryParameter, usize, &[QueryParameter]),
    {
        self.0
            .iter()
            .enumerate()
            .for_each(|(i, item)| f(item, i, &self.0));
    }

    /// Collect the results of `f` applied to every parameter.
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&QueryParameter, usize, &[QueryParameter]) -> U,
    {
        self.0
            .iter()
            .enumerate()
            .map(|(i, item)| f(item, i, &self.0))
            .collect()
    }

    /// Collect the parameters that satisfy the predicate.
    pub fn filter<P>(&self, mut predicate: P) -> Vec<&QueryParameter>
    where
        P: FnMut(&QueryParameter, usize, &[QueryParameter]) -> bool,
    {
        self.0
            .iter()
            .enumerate()
            .filter(|(i, item)| predicate(*item, *i, &self.0))
            .map(|(_, item)| item)
            .collect()
    }

    /// Fold the parameters from first to last.
    pub fn reduce<U, F>(&self, init: U, mut f: F) -> U
    where
        F: FnMut(U, &QueryParameter, usize, &[QueryParameter]) -> U,
    {
        self.0
            .iter()
            .enumerate()
            .fold(init, |acc, (i, item)| f(acc, item, i, &self.0))
    }

    /// Fold the parameters from last to first.
    pub fn reduce_right<U, F>(&self, init: U, mut f: F) -> U
    where
        F: FnMut(U, &QueryParameter, usize, &[QueryParameter]) -> U,
    {
        self.0
            .iter()
            .enumerate()
            .rev()
            .fold(init, |acc, (i, item)| f(acc, item, i, &self.0))
    }

    /// Return an iterator over the parameters.
    pub fn iter(&self) -> std::slice::Iter<'_, QueryParameter> {
        self.0.iter()
    }

    /// Return an iterator over `(name, value)` pairs.
    pub fn entries(&self) -> Entries<'_> {
        Mapped::new(&self.0, |item| (item.name(), item.value()))
    }

    /// Return an iterator over the names.
    pub fn keys(&self) -> Keys<'_> {
        Mapped::new(&self.0, |item| item.name())
    }

    /// Return an iterator over the values.
    pub fn values(&self) -> Values<'_> {
        Mapped::new(&self.0, |item| item.value())
    }
}

impl std::fmt::Display for QueryParameters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

impl From<Vec<QueryParameter>> for QueryParameters {
    fn from(value: Vec<QueryParameter>) -> Self {
        Self(value)
    }
}

impl FromIterator<QueryParameter> for QueryParameters {
    fn from_iter<I: IntoIterator<Item = QueryParameter>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<QueryParameter> for QueryParameters {
    fn extend<I: IntoIterator<Item = QueryParameter>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a QueryParameters {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}
