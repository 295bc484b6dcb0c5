// Shared language tables for the s-Java subset

/// A line is a comment iff it begins with this prefix (no leading whitespace).
pub const COMMENT_PREFIX: &str = "//";

/// The five declarable type keywords, case-sensitive.
pub const TYPE_KEYWORDS: &[&str] = &["int", "double", "char", "boolean", "String"];

/// Words usable only in their syntactic role, never as identifiers.
pub const RESERVED_WORDS: &[&str] = &[
    "String", "int", "double", "char", "boolean", "if", "while", "return",
    "true", "false", "void", "final",
];

pub const VOID: &str = "void";
pub const FINAL: &str = "final";
pub const RETURN: &str = "return";
pub const IF: &str = "if";
pub const WHILE: &str = "while";

/// Scope depth of the global scope; a method body sits directly above it.
pub const GLOBAL_DEPTH: usize = 1;
pub const METHOD_BODY_DEPTH: usize = GLOBAL_DEPTH + 1;
