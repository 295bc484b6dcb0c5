//! Pure classification predicates over raw tokens and raw lines.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::consts::{RESERVED_WORDS, TYPE_KEYWORDS};
use crate::symbols::VarType;

static VAR_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(_+\w+|[a-zA-Z]+\w*)$").unwrap());
static METHOD_NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+\w*$").unwrap());
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d+$").unwrap());
static DOUBLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?\d*\.*\d+$").unwrap());
static CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^'.'$").unwrap());
static STRING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^".*"$"#).unwrap());

// A legal line ends with exactly one of ; { } after optional trailing
// whitespace, and carries at most one statement terminator overall.
static LINE_END_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[{};]\s*$").unwrap());
static TERMINATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^;]*;|[^{]*\{|[^}]*\}").unwrap());

pub fn is_reserved(word: &str) -> bool {
    RESERVED_WORDS.contains(&word)
}

/// Variable names: underscores followed by word characters, or a
/// letter-initial word; never a reserved word.
pub fn is_legal_var_name(name: &str) -> bool {
    VAR_NAME_RE.is_match(name) && !is_reserved(name)
}

/// Method names: letter-initial words only; never a reserved word.
pub fn is_legal_method_name(name: &str) -> bool {
    METHOD_NAME_RE.is_match(name) && !is_reserved(name)
}

/// Map a declarable type keyword to its type, if it is one.
pub fn type_from_keyword(keyword: &str) -> Option<VarType> {
    match keyword {
        "int" => Some(VarType::Int),
        "double" => Some(VarType::Double),
        "String" => Some(VarType::String),
        "char" => Some(VarType::Char),
        "boolean" => Some(VarType::Boolean),
        _ => None,
    }
}

pub fn is_type_keyword(word: &str) -> bool {
    TYPE_KEYWORDS.contains(&word)
}

/// Does a literal token satisfy a requirement of type `ty`?
///
/// Boolean requirements accept `true`/`false` and any numeric literal;
/// double requirements accept int literals; everything else is exact.
pub fn literal_matches(ty: VarType, value: &str) -> bool {
    match ty {
        VarType::String => STRING_RE.is_match(value),
        VarType::Char => CHAR_RE.is_match(value),
        VarType::Int => INT_RE.is_match(value),
        VarType::Double => DOUBLE_RE.is_match(value) || INT_RE.is_match(value),
        VarType::Boolean => {
            value == "true"
                || value == "false"
                || DOUBLE_RE.is_match(value)
                || INT_RE.is_match(value)
        }
    }
}

/// The single-terminator-per-line rule.
pub fn is_legal_line(line: &str) -> bool {
    LINE_END_RE.is_match(line) && TERMINATOR_RE.find_iter(line).count() <= 1
}
