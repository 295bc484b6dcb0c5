//! Line-oriented scanning and lexical classification for s-Java source.
//!
//! The tokenizer turns visible source lines into a stream of string tokens;
//! `classify` holds the pure predicates consumers use to decide what a token
//! is. Tokens carry no stored classification.

pub mod classify;
pub mod tokenizer;

pub use tokenizer::Tokenizer;
