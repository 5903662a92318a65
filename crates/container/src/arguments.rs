use std::fmt;

use indexmap::IndexMap;

use crate::Value;


/// Key of one entry in an argument list.
///
/// Positions sort before names, so a sorted argument list puts every
/// positional argument first in ascending order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ArgKey {
	/// Zero-based position.
	Index(usize),
	/// String key exactly as written, e.g. `$sender`.
	Name(String),
}

/// Interpretation of an [`ArgKey`] for named-argument resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
	/// Already positional.
	Position(usize),
	/// `$name` reference; holds the name without the sigil.
	Parameter(&'a str),
	/// Any other string key.
	Malformed(&'a str),
}

impl ArgKey {
	/// Creates a named key, prefixing the `$` sigil.
	pub fn named(parameter: &str) -> Self {
		Self::Name(format!("${parameter}"))
	}

	/// Parses a key as written in configuration.
	///
	/// Canonical decimal integers (`"0"`, `"12"`, not `"01"`) become positions,
	/// everything else is kept as a string key.
	pub fn parse(raw: &str) -> Self {
		let canonical = raw == "0" || (raw.starts_with(|c: char| matches!(c, '1'..='9')) && raw.bytes().all(|b| b.is_ascii_digit()));
		match raw.parse::<usize>() {
			Ok(index) if canonical => Self::Index(index),
			_ => Self::Name(raw.to_string()),
		}
	}

	pub fn is_index(&self) -> bool {
		matches!(self, Self::Index(_))
	}

	pub fn kind(&self) -> KeyKind<'_> {
		match self {
			Self::Index(index) => KeyKind::Position(*index),
			Self::Name(raw) => match raw.strip_prefix('$') {
				Some(name) if !name.is_empty() => KeyKind::Parameter(name),
				_ => KeyKind::Malformed(raw),
			},
		}
	}
}

impl fmt::Display for ArgKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Index(index) => write!(f, "{index}"),
			Self::Name(raw) => f.write_str(raw),
		}
	}
}

impl From<usize> for ArgKey {
	fn from(index: usize) -> Self {
		Self::Index(index)
	}
}

impl From<&str> for ArgKey {
	fn from(raw: &str) -> Self {
		Self::parse(raw)
	}
}

/// Insertion-ordered argument list of a constructor or method call.
///
/// Equality is order-sensitive: the same entries in a different order
/// compare unequal.
#[derive(Debug, Clone, Default)]
pub struct Arguments {
	entries: IndexMap<ArgKey, Value>,
}

impl Arguments {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a purely positional list.
	pub fn from_positional<I, V>(values: I) -> Self
	where
		I: IntoIterator<Item = V>,
		V: Into<Value>,
	{
		values.into_iter().enumerate().map(|(i, v)| (ArgKey::Index(i), v.into())).collect()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Inserts or replaces an entry. A replaced entry keeps its position.
	pub fn insert(&mut self, key: impl Into<ArgKey>, value: impl Into<Value>) -> Option<Value> {
		self.entries.insert(key.into(), value.into())
	}

	/// Appends a value after the highest existing position.
	pub fn push(&mut self, value: impl Into<Value>) {
		let next = self.entries.keys().filter_map(|k| match k {
			ArgKey::Index(i) => Some(i + 1),
			ArgKey::Name(_) => None,
		});
		let next = next.max().unwrap_or(0);
		self.entries.insert(ArgKey::Index(next), value.into());
	}

	pub fn get(&self, key: &ArgKey) -> Option<&Value> {
		self.entries.get(key)
	}

	pub fn contains_key(&self, key: &ArgKey) -> bool {
		self.entries.contains_key(key)
	}

	/// Removes an entry, preserving the order of the remaining ones.
	pub fn remove(&mut self, key: &ArgKey) -> Option<Value> {
		self.entries.shift_remove(key)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ArgKey, &Value)> {
		self.entries.iter()
	}

	pub fn keys(&self) -> impl Iterator<Item = &ArgKey> {
		self.entries.keys()
	}

	pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
		self.entries.values_mut()
	}

	/// Returns true if any key is a string key.
	pub fn has_named_keys(&self) -> bool {
		self.entries.keys().any(|k| !k.is_index())
	}

	/// Returns true if every key is a position.
	pub fn is_positional(&self) -> bool {
		!self.has_named_keys()
	}

	/// Sorts entries by key.
	pub fn sort_by_key(&mut self) {
		self.entries.sort_keys();
	}
}

impl PartialEq for Arguments {
	fn eq(&self, other: &Self) -> bool {
		self.entries.len() == other.entries.len() && self.entries.iter().eq(other.entries.iter())
	}
}

impl<K: Into<ArgKey>> FromIterator<(K, Value)> for Arguments {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self {
			entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Arguments {
	type Item = (&'a ArgKey, &'a Value);
	type IntoIter = indexmap::map::Iter<'a, ArgKey, Value>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.iter()
	}
}
