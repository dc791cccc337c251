//! Country-name aliasing between advisory and boundary-geometry naming.

use indexmap::IndexMap;

/// Ordered mapping from advisory country names to the names used by the
/// boundary-geometry dataset.
///
/// Applied as a pure name rewrite before the map join; names without an
/// alias pass through unchanged. [`CountryAliases::default`] carries the
/// known gov.uk to world-countries mismatches; tests substitute their
/// own pairs via [`CountryAliases::from_pairs`].
#[derive(Debug, Clone)]
pub struct CountryAliases {
    aliases: IndexMap<String, String>,
}

impl Default for CountryAliases {
    fn default() -> Self {
        Self::from_pairs([
            ("Côte d'Ivoire", "Ivory Coast"),
            ("Tanzania", "United Republic of Tanzania"),
            ("USA", "United States of America"),
            ("Serbia", "Republic of Serbia"),
            ("North Macedonia", "Macedonia"),
            ("Myanmar (Burma)", "Myanmar"),
            ("The Gambia", "Gambia"),
            ("Guinea-Bissau", "Guinea Bissau"),
            (
                "Democratic Republic of the Congo",
                "Democratic Republic of the Congo",
            ),
        ])
    }
}

impl CountryAliases {
    /// Build an alias table from (source name, canonical name) pairs.
    pub fn from_pairs<I, S, C>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, C)>,
        S: Into<String>,
        C: Into<String>,
    {
        Self {
            aliases: pairs
                .into_iter()
                .map(|(source, canonical)| (source.into(), canonical.into()))
                .collect(),
        }
    }

    /// An empty table: every name passes through unchanged.
    pub fn empty() -> Self {
        Self {
            aliases: IndexMap::new(),
        }
    }

    /// Rewrite an advisory name to its boundary-geometry form.
    pub fn resolve(&self, name: &str) -> String {
        self.aliases
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    }

    /// Number of alias pairs in the table.
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Whether the table has no pairs.
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}
