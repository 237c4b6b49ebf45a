//! Module with the token category type.
//! A category is the semantic kind a host highlighter assigns to a token.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Result, SemtokError, SemtokErrorKind};

/// The semantic category of a token.
///
/// The variants mirror the category legend of the host highlighter in legend order. The scanner
/// itself only emits [TokenCategory::Comment], [TokenCategory::Number], [TokenCategory::Keyword],
/// [TokenCategory::Type] and [TokenCategory::Identifier]. The remaining categories are held in
/// reserve for rule sets that classify more constructs.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TokenCategory {
    /// A line comment.
    Comment,
    /// A string literal.
    String,
    /// A reserved word.
    Keyword,
    /// A numeric literal.
    Number,
    /// A regular expression literal.
    Regexp,
    /// An operator.
    Operator,
    /// A namespace or module name.
    Namespace,
    /// A type or constructor name.
    Type,
    /// A struct name.
    Struct,
    /// A class name.
    Class,
    /// An interface name.
    Interface,
    /// An enum name.
    Enum,
    /// A type parameter.
    TypeParameter,
    /// A function name.
    Function,
    /// A method name.
    Method,
    /// A decorator.
    Decorator,
    /// A macro.
    Macro,
    /// A variable.
    Variable,
    /// A parameter.
    Parameter,
    /// A property.
    Property,
    /// A label.
    Label,
    /// A word that is neither reserved nor capitalized.
    /// Hosts with the reference legend know this category as `parameter`.
    Identifier,
}

impl TokenCategory {
    /// All categories in legend order.
    pub const ALL: [TokenCategory; 22] = [
        TokenCategory::Comment,
        TokenCategory::String,
        TokenCategory::Keyword,
        TokenCategory::Number,
        TokenCategory::Regexp,
        TokenCategory::Operator,
        TokenCategory::Namespace,
        TokenCategory::Type,
        TokenCategory::Struct,
        TokenCategory::Class,
        TokenCategory::Interface,
        TokenCategory::Enum,
        TokenCategory::TypeParameter,
        TokenCategory::Function,
        TokenCategory::Method,
        TokenCategory::Decorator,
        TokenCategory::Macro,
        TokenCategory::Variable,
        TokenCategory::Parameter,
        TokenCategory::Property,
        TokenCategory::Label,
        TokenCategory::Identifier,
    ];

    /// Returns the label of the category.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Comment => "comment",
            TokenCategory::String => "string",
            TokenCategory::Keyword => "keyword",
            TokenCategory::Number => "number",
            TokenCategory::Regexp => "regexp",
            TokenCategory::Operator => "operator",
            TokenCategory::Namespace => "namespace",
            TokenCategory::Type => "type",
            TokenCategory::Struct => "struct",
            TokenCategory::Class => "class",
            TokenCategory::Interface => "interface",
            TokenCategory::Enum => "enum",
            TokenCategory::TypeParameter => "typeParameter",
            TokenCategory::Function => "function",
            TokenCategory::Method => "method",
            TokenCategory::Decorator => "decorator",
            TokenCategory::Macro => "macro",
            TokenCategory::Variable => "variable",
            TokenCategory::Parameter => "parameter",
            TokenCategory::Property => "property",
            TokenCategory::Label => "label",
            TokenCategory::Identifier => "identifier",
        }
    }

    /// Returns the label the host legend uses for this category.
    /// See [crate::legend::TOKEN_CATEGORIES].
    pub fn legend_label(self) -> &'static str {
        match self {
            TokenCategory::Identifier => TokenCategory::Parameter.as_str(),
            _ => self.as_str(),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = SemtokError;

    fn from_str(s: &str) -> Result<Self> {
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| SemtokError::new(SemtokErrorKind::UnknownCategory(s.to_string())))
    }
}
