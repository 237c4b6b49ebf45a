//! The legend shared with a host highlighter.
//!
//! A host encodes tokens into its transport format by looking up the position of a label in these
//! lists. The scanner only ever produces labels, building the numeric mapping is left to the host.
//!
//! Note that the host legend doesn't know the `identifier` category. Use
//! [crate::TokenCategory::legend_label] to get the label a host with this legend expects.

use crate::{TokenCategory, TokenModifier};

/// The ordered category labels of the host legend.
pub const TOKEN_CATEGORIES: &[&str] = &[
    "comment",
    "string",
    "keyword",
    "number",
    "regexp",
    "operator",
    "namespace",
    "type",
    "struct",
    "class",
    "interface",
    "enum",
    "typeParameter",
    "function",
    "method",
    "decorator",
    "macro",
    "variable",
    "parameter",
    "property",
    "label",
];

/// The ordered modifier labels of the host legend.
pub const TOKEN_MODIFIERS: &[&str] = &[
    "declaration",
    "documentation",
    "readonly",
    "static",
    "abstract",
    "deprecated",
    "modification",
    "async",
];

/// Check if the legend contains the label the host uses for the given category.
pub fn contains_category(category: TokenCategory) -> bool {
    TOKEN_CATEGORIES.contains(&category.legend_label())
}

/// Check if the legend contains the given modifier.
pub fn contains_modifier(modifier: TokenModifier) -> bool {
    TOKEN_MODIFIERS.contains(&modifier.as_str())
}
