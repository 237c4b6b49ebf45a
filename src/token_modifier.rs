//! Module with the token modifier types.
//! Modifiers qualify the category of a token, e.g. a type name is qualified as `declaration`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Result, SemtokError, SemtokErrorKind};

/// A modifier that refines the category of a token.
/// The variants are declared in legend order.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenModifier {
    /// The token declares something.
    Declaration,
    /// The token documents something.
    Documentation,
    /// The token is read-only.
    Readonly,
    /// The token is static, e.g. a literal.
    Static,
    /// The token is abstract.
    Abstract,
    /// The token is deprecated.
    Deprecated,
    /// The token modifies control flow or structure, e.g. a reserved word.
    Modification,
    /// The token is asynchronous.
    Async,
}

impl TokenModifier {
    /// All modifiers in legend order.
    pub const ALL: [TokenModifier; 8] = [
        TokenModifier::Declaration,
        TokenModifier::Documentation,
        TokenModifier::Readonly,
        TokenModifier::Static,
        TokenModifier::Abstract,
        TokenModifier::Deprecated,
        TokenModifier::Modification,
        TokenModifier::Async,
    ];

    /// Returns the label of the modifier.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenModifier::Declaration => "declaration",
            TokenModifier::Documentation => "documentation",
            TokenModifier::Readonly => "readonly",
            TokenModifier::Static => "static",
            TokenModifier::Abstract => "abstract",
            TokenModifier::Deprecated => "deprecated",
            TokenModifier::Modification => "modification",
            TokenModifier::Async => "async",
        }
    }

    #[inline]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for TokenModifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenModifier {
    type Err = SemtokError;

    fn from_str(s: &str) -> Result<Self> {
        TokenModifier::ALL
            .iter()
            .copied()
            .find(|modifier| modifier.as_str() == s)
            .ok_or_else(|| SemtokError::new(SemtokErrorKind::UnknownModifier(s.to_string())))
    }
}

/// An ordered set of modifiers without duplicates.
///
/// The set is stored inline as bits, so attaching modifiers to a token doesn't allocate.
/// Iteration always yields the modifiers in legend order, independent of insertion order.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<TokenModifier>", into = "Vec<TokenModifier>")]
pub struct TokenModifiers(u8);

impl TokenModifiers {
    /// Create an empty modifier set.
    #[inline]
    pub const fn new() -> Self {
        TokenModifiers(0)
    }

    /// Returns the set extended by the given modifier.
    #[inline]
    pub fn with(mut self, modifier: TokenModifier) -> Self {
        self.insert(modifier);
        self
    }

    /// Adds a modifier. Returns false if it was already present.
    pub fn insert(&mut self, modifier: TokenModifier) -> bool {
        let present = self.contains(modifier);
        self.0 |= modifier.bit();
        !present
    }

    /// Removes a modifier. Returns true if it was present.
    pub fn remove(&mut self, modifier: TokenModifier) -> bool {
        let present = self.contains(modifier);
        self.0 &= !modifier.bit();
        present
    }

    /// Check if the modifier is part of the set.
    #[inline]
    pub fn contains(&self, modifier: TokenModifier) -> bool {
        self.0 & modifier.bit() != 0
    }

    /// Get the number of modifiers in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the modifiers in legend order.
    pub fn iter(&self) -> impl Iterator<Item = TokenModifier> + '_ {
        TokenModifier::ALL
            .into_iter()
            .filter(move |modifier| self.contains(*modifier))
    }
}

impl From<TokenModifier> for TokenModifiers {
    fn from(modifier: TokenModifier) -> Self {
        TokenModifiers::new().with(modifier)
    }
}

impl FromIterator<TokenModifier> for TokenModifiers {
    fn from_iter<T: IntoIterator<Item = TokenModifier>>(iter: T) -> Self {
        iter.into_iter()
            .fold(TokenModifiers::new(), TokenModifiers::with)
    }
}

impl From<Vec<TokenModifier>> for TokenModifiers {
    fn from(modifiers: Vec<TokenModifier>) -> Self {
        modifiers.into_iter().collect()
    }
}

impl From<TokenModifiers> for Vec<TokenModifier> {
    fn from(modifiers: TokenModifiers) -> Self {
        modifiers.iter().collect()
    }
}

impl fmt::Debug for TokenModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for TokenModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, modifier) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", modifier)?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut modifiers = TokenModifiers::new();
        assert!(modifiers.is_empty());
        assert!(modifiers.insert(TokenModifier::Static));
        assert!(!modifiers.insert(TokenModifier::Static));
        assert_eq!(modifiers.len(), 1);
        assert!(modifiers.remove(TokenModifier::Static));
        assert!(!modifiers.remove(TokenModifier::Static));
        assert!(modifiers.is_empty());
    }

    #[test]
    fn test_iteration_follows_legend_order() {
        let modifiers: TokenModifiers = [
            TokenModifier::Async,
            TokenModifier::Declaration,
            TokenModifier::Static,
        ]
        .into_iter()
        .collect();
        assert_eq!(
            modifiers.iter().collect::<Vec<_>>(),
            vec![
                TokenModifier::Declaration,
                TokenModifier::Static,
                TokenModifier::Async
            ]
        );
        assert_eq!(modifiers.to_string(), "[declaration, static, async]");
    }

    #[test]
    fn test_serialized_as_label_list() {
        let modifiers = TokenModifiers::from(TokenModifier::Documentation);
        let json = serde_json::to_string(&modifiers).unwrap();
        assert_eq!(json, r#"["documentation"]"#);
        let parsed: TokenModifiers = serde_json::from_str(r#"["static","static"]"#).unwrap();
        assert_eq!(parsed, TokenModifiers::from(TokenModifier::Static));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "modification".parse::<TokenModifier>().unwrap(),
            TokenModifier::Modification
        );
        assert!("notInLegend".parse::<TokenModifier>().is_err());
    }
}
