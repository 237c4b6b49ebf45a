/// Module with the character classes the scanner recognizes.
mod char_class;
pub(crate) use char_class::{digits_len, identifier_len, is_identifier, is_line_break};

/// Module with the compiled form of a rule set.
mod compiled_rules;
pub(crate) use compiled_rules::CompiledRules;

/// Module with the scanner for a single line.
mod line_scanner;
pub(crate) use line_scanner::LineScanner;

/// Module that splits a text into lines.
mod lines;
pub(crate) use lines::Lines;
