//! Two-pass semantic validation.
//!
//! Pass 1 (`harvest`) registers every method signature and every global
//! binding while structurally skipping method bodies; pass 2 (`validate`)
//! re-scans the source from the start and checks every statement against the
//! tables pass 1 built. Both passes share one `Checker` that owns the symbol
//! tables and a token cursor; the cursor is rebound to a fresh reading of the
//! source between the passes.

mod harvest;
mod statements;

use thiserror::Error;

use crate::consts;
use crate::error::Error as TopError;
use crate::parser::{classify, Tokenizer};
use crate::symbols::{SymbolTables, VarType};

pub type CheckResult<T> = Result<T, CheckError>;

/// One concrete validation failure. Every variant maps onto a taxonomy
/// [`ErrorKind`]; the first failure aborts the whole run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("expected '{expected}', got '{found}'")]
    Expected { expected: String, found: String },
    #[error("expected a type keyword, got '{0}'")]
    ExpectedType(String),
    #[error("illegal variable name '{0}'")]
    IllegalVarName(String),
    #[error("illegal method name '{0}'")]
    IllegalMethodName(String),
    #[error("'{0}' is already declared in this scope")]
    DuplicateBinding(String),
    #[error("duplicate parameter name '{0}'")]
    DuplicateParameter(String),
    #[error("method '{0}' is already defined")]
    DuplicateMethod(String),
    #[error("use of undeclared variable '{0}'")]
    UndeclaredVariable(String),
    #[error("call to undeclared method '{0}'")]
    UndeclaredMethod(String),
    #[error("variable '{0}' might not have been initialized")]
    UninitializedUse(String),
    #[error("cannot assign to final variable '{0}'")]
    AssignToFinal(String),
    #[error("value '{value}' is not assignable to type {expected}")]
    IncompatibleValue { expected: VarType, value: String },
    #[error("call to '{name}' does not match its {expected}-parameter signature")]
    ArityMismatch { name: String, expected: usize },
    #[error("argument {position} of call to '{name}' does not match the declared signature")]
    ArgumentType { name: String, position: usize },
    #[error("'{0}' is not a boolean term")]
    NotABooleanTerm(String),
    #[error("line must end with exactly one of ';', '{{' or '}}'")]
    MalformedLine,
    #[error("unexpected token '{0}'")]
    UnexpectedToken(String),
    #[error("method declarations are only allowed at the top level")]
    NestedMethod,
    #[error("illegal top-level declaration")]
    IllegalTopLevel,
}

/// The error taxonomy. `SourceUnreadable` is not here: unreadable input is
/// reported through the top-level `Error::Io` channel, never as a
/// validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    SyntaxMismatch,
    IllegalIdentifier,
    UndeclaredReference,
    UninitializedUse,
    FinalViolation,
    TypeMismatch,
    SignatureMismatch,
    MalformedLine,
    UnexpectedStatement,
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        use CheckError::*;
        match self {
            Expected { .. } | ExpectedType(_) => ErrorKind::SyntaxMismatch,
            IllegalVarName(_) | IllegalMethodName(_) | DuplicateBinding(_)
            | DuplicateParameter(_) | DuplicateMethod(_) => ErrorKind::IllegalIdentifier,
            UndeclaredVariable(_) | UndeclaredMethod(_) => ErrorKind::UndeclaredReference,
            UninitializedUse(_) => ErrorKind::UninitializedUse,
            AssignToFinal(_) => ErrorKind::FinalViolation,
            IncompatibleValue { .. } => ErrorKind::TypeMismatch,
            ArityMismatch { .. } | ArgumentType { .. } => ErrorKind::SignatureMismatch,
            MalformedLine => ErrorKind::MalformedLine,
            NotABooleanTerm(_) | UnexpectedToken(_) | NestedMethod | IllegalTopLevel => {
                ErrorKind::UnexpectedStatement
            }
        }
    }
}

/// Run both passes over `source` and report the first failure, located at
/// the line the checker stopped on.
pub fn run(source: &str) -> crate::error::Result<()> {
    let mut checker = Checker::new(source);

    log::debug!("pass 1: harvesting method signatures and globals");
    if let Err(e) = checker.harvest() {
        return Err(TopError::validation(checker.line_number(), e));
    }

    checker.rewind(source);
    log::debug!("pass 2: validating statements");
    if let Err(e) = checker.validate() {
        return Err(TopError::validation(checker.line_number(), e));
    }

    log::debug!("verification finished: no errors");
    Ok(())
}

/// Token cursor plus the symbol model, shared by both passes.
pub(crate) struct Checker<'src> {
    tok: Tokenizer<'src>,
    current: &'src str,
    tables: SymbolTables,
}

impl<'src> Checker<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        let mut tok = Tokenizer::new(source);
        let current = tok.next_token().unwrap_or("");
        Self {
            tok,
            current,
            tables: SymbolTables::new(),
        }
    }

    /// Rebind the cursor to a fresh, independent reading of the source,
    /// keeping the tables. Pass 2 starts here.
    pub(crate) fn rewind(&mut self, source: &'src str) {
        self.tok = Tokenizer::new(source);
        self.current = self.tok.next_token().unwrap_or("");
    }

    pub(crate) fn line_number(&self) -> usize {
        self.tok.line_number()
    }

    fn at_end(&self) -> bool {
        self.tok.current_line().is_none()
    }

    fn advance(&mut self) {
        self.current = self.tok.next_token().unwrap_or("");
    }

    fn expect(&mut self, token: &str) -> CheckResult<()> {
        if self.current == token {
            self.advance();
            Ok(())
        } else {
            Err(CheckError::Expected {
                expected: token.to_string(),
                found: self.current.to_string(),
            })
        }
    }

    /// Consume a declarable type keyword.
    fn expect_type(&mut self) -> CheckResult<VarType> {
        match classify::type_from_keyword(self.current) {
            Some(ty) => {
                self.advance();
                Ok(ty)
            }
            None => Err(CheckError::ExpectedType(self.current.to_string())),
        }
    }

    /// Skip past the current statement's terminating ';'.
    fn skip_line(&mut self) {
        while self.current != ";" && !self.at_end() {
            self.advance();
        }
        self.advance();
    }

    /// Declaration: optional single `final`, a type keyword, one or more
    /// comma-separated bindings, ';'. Used verbatim by both passes (globals
    /// in pass 1, block-locals in pass 2).
    fn declaration(&mut self) -> CheckResult<()> {
        let is_final = if self.current == consts::FINAL {
            self.advance();
            true
        } else {
            false
        };
        let ty = self.expect_type()?;

        let mut first = true;
        while self.current != ";" {
            if !first {
                self.expect(",")?;
            }
            first = false;

            let name = self.current;
            self.declare_binding(name, ty, is_final, false)?;

            // final bindings require an initializer, others may omit one
            if is_final {
                self.expect("=")?;
                self.assign_value(name)?;
            } else if self.current == "=" {
                self.advance();
                self.assign_value(name)?;
            }
        }
        self.expect(";")?;
        Ok(())
    }

    /// Vet a fresh binding's name and add it to the innermost scope.
    fn declare_binding(
        &mut self,
        name: &str,
        ty: VarType,
        is_final: bool,
        initialized: bool,
    ) -> CheckResult<()> {
        if !classify::is_legal_var_name(name) {
            return Err(CheckError::IllegalVarName(name.to_string()));
        }
        if !self.tables.add_binding(name, ty, is_final) {
            return Err(CheckError::DuplicateBinding(name.to_string()));
        }
        if initialized {
            self.tables.mark_initialized(name);
        }
        self.advance();
        Ok(())
    }

    /// Check the current token as a value for `name` and consume it. An
    /// identifier value must resolve to an initialized, type-compatible
    /// binding; anything else must be a literal of the target type. On
    /// success the resolved target binding becomes initialized.
    fn assign_value(&mut self, name: &str) -> CheckResult<()> {
        let target = match self.tables.lookup(name) {
            Some(binding) => binding.ty,
            None => return Err(CheckError::UndeclaredVariable(name.to_string())),
        };

        let value = self.current;
        let compatible = if classify::is_legal_var_name(value) {
            match self.tables.lookup(value) {
                None => return Err(CheckError::UndeclaredVariable(value.to_string())),
                Some(binding) if !binding.initialized => {
                    return Err(CheckError::UninitializedUse(value.to_string()))
                }
                Some(binding) => target.accepts(binding.ty),
            }
        } else {
            classify::literal_matches(target, value)
        };

        if !compatible {
            return Err(CheckError::IncompatibleValue {
                expected: target,
                value: value.to_string(),
            });
        }
        self.tables.mark_initialized(name);
        self.advance();
        Ok(())
    }

    /// Reassignment chain: `name = value (, name = value)* ;`. The target
    /// must resolve and must not be final. Marking the resolved binding
    /// initialized is what lets an unshadowed uninitialized global become
    /// usable after its first assignment inside a nested scope.
    fn assignment(&mut self, name: &'src str) -> CheckResult<()> {
        let mut name = name;
        let mut first = true;
        while self.current != ";" {
            if !first {
                self.expect(",")?;
                name = self.current;
                self.advance();
            }
            first = false;

            match self.tables.lookup(name) {
                None => return Err(CheckError::UndeclaredVariable(name.to_string())),
                Some(binding) if binding.is_final => {
                    return Err(CheckError::AssignToFinal(name.to_string()))
                }
                Some(_) => {}
            }
            self.expect("=")?;
            self.assign_value(name)?;
        }
        self.expect(";")?;
        Ok(())
    }
}
