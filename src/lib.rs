#![forbid(missing_docs)]
//! # `semtok`
//! The `semtok` crate is a library that classifies the tokens of a source text for semantic
//! highlighting, e.g. in a language server or an editor extension.
//! It scans the text line by line in a single pass and produces a sequence of tokens, each with a
//! line, a start column, a length, a category and a set of modifiers.
//!
//! The scanner is deliberately simple. It knows line comments, words and numbers and classifies
//! words only by their surface: reserved words are keywords, capitalized words are types and all
//! other words are identifiers. It never fails, any character it doesn't recognize is skipped.
//! There are no multi-line constructs.
//!
//! # Example
//! ```rust
//! use semtok::{tokenize, TokenCategory};
//!
//! const INPUT: &str = "module Main where\n-- entry point\nmain = print 42";
//!
//! let tokens = tokenize(INPUT);
//! for token in &tokens {
//!     println!("{}", token);
//! }
//! assert_eq!(tokens.len(), 7);
//! assert_eq!(tokens[1].category(), TokenCategory::Type);
//! assert_eq!(tokens[3].category(), TokenCategory::Comment);
//! assert_eq!(tokens[6].category(), TokenCategory::Number);
//! ```
//! The output of the example is:
//! ```text
//! 0:0..6 keyword [modification]
//! 0:7..11 type [declaration]
//! 0:12..17 keyword [modification]
//! 1:0..14 comment [documentation]
//! 2:0..4 identifier [declaration]
//! 2:7..12 identifier [declaration]
//! 2:13..15 number [static]
//! ```
//!
//! # Rules
//! The default rules are those of Haskell: the reserved words listed in
//! [DEFAULT_RESERVED_WORDS] and the line comment marker `--`. Other rule sets can be built with
//! the [TokenizerBuilder] or loaded from JSON with [LexicalRules::from_json_str].
//!
//! # Legend
//! A host highlighter encodes categories and modifiers by their position in its legend. The
//! [legend] module provides the label lists of the legend the categories and modifiers of this
//! crate are designed for.

/// Module with error definitions
mod errors;
pub use errors::{Result, SemtokError, SemtokErrorKind};

/// The module with internal implementation details.
mod internal;

/// Module with the label lists of the host legend
pub mod legend;

/// Module that provides the rule set of a tokenizer
mod lexical_rules;
pub use lexical_rules::{
    LexicalRules, DEFAULT_LINE_COMMENT, DEFAULT_RESERVED_WORDS, DEFAULT_WHITESPACE,
};

/// Module that provides a position type
mod position;
pub use position::Position;

/// Module that provides a Token type
mod token;
pub use token::Token;

/// Module that provides the token category type
mod token_category;
pub use token_category::TokenCategory;

/// Module that provides the token modifier types
mod token_modifier;
pub use token_modifier::{TokenModifier, TokenModifiers};

/// The module with the tokenizer.
mod tokenizer;
pub use tokenizer::{tokenize, Tokenizer};

/// The module with the tokenizer builder.
mod tokenizer_builder;
pub use tokenizer_builder::TokenizerBuilder;

/// Module that provides a Tokens iterator
mod tokens;
pub use tokens::Tokens;
