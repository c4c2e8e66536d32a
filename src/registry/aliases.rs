use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Mapping from alternate sequence names to reference names.
///
/// Insertion order is preserved so that reverse lookups, which may find
/// several aliases for one reference name, are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AliasTable {
    aliases: IndexMap<String, String>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference name for an alias, if the alias is known. O(1).
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.aliases.get(alias).map(String::as_str)
    }

    /// Reference name for `name`, or `name` itself when it is not an alias
    pub fn alias_to_reference<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).unwrap_or(name)
    }

    /// First alias (in insertion order) mapping to `name`, or `name` itself.
    /// Linear in the size of the table.
    pub fn reference_to_alias<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases
            .iter()
            .find(|(_, reference)| reference.as_str() == name)
            .map_or(name, |(alias, _)| alias.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.aliases.iter().map(|(a, r)| (a.as_str(), r.as_str()))
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

impl<A, R> FromIterator<(A, R)> for AliasTable
where
    A: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (A, R)>>(iter: I) -> Self {
        Self {
            aliases: iter
                .into_iter()
                .map(|(alias, reference)| (alias.into(), reference.into()))
                .collect(),
        }
    }
}

impl From<IndexMap<String, String>> for AliasTable {
    fn from(aliases: IndexMap<String, String>) -> Self {
        Self { aliases }
    }
}
