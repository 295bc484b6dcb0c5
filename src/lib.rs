//! sjavac — a static verifier for the s-Java teaching subset of Java.
//!
//! s-Java has typed variable declarations, `if`/`while` blocks, void
//! methods, flat boolean conditions and `return`; sjavac accepts or rejects
//! a source text without executing it.
//!
//! ## Architecture
//!
//! - **parser**: line-oriented tokenizer plus the pure lexical/type
//!   predicates
//! - **symbols**: scope stack and the flat method table
//! - **check**: the two-pass analyzer — declaration harvest, then full
//!   statement/expression validation
//! - **bin**: command-line driver printing the verdict protocol
//!
//! ## Verification flow
//!
//! ```text
//! source ── Tokenizer ──► pass 1 (harvest)  ── methods + globals ──┐
//!                                                                  ▼
//! source ── Tokenizer ──► pass 2 (validate) ◄── shared symbol tables
//!                                  │
//!                                  ▼
//!                       verdict (ok / first error)
//! ```
//!
//! The two passes run strictly in sequence over two independent readings of
//! the same text; only the global scope and the method table survive from
//! pass 1 into pass 2.

pub mod check;
pub mod consts;
pub mod error;
pub mod parser;
pub mod symbols;

pub use check::{CheckError, ErrorKind};
pub use error::{Error, Result};
pub use symbols::VarType;

/// Verify s-Java source text: run the harvest pass, then the validation
/// pass, and report the first failure.
pub fn verify(source: &str) -> Result<()> {
    check::run(source)
}

/// Verify an s-Java source file. A file that cannot be read reports
/// `Error::Io`, distinct from every validation failure.
pub fn verify_file<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    let source = std::fs::read_to_string(path)?;
    verify(&source)
}
