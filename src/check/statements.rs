//! Pass 2: full statement and expression validation.
//!
//! Re-scans the source with the tables pass 1 built. Every logical line must
//! satisfy the single-terminator rule before its statement is dispatched;
//! statements already validated by pass 1 (global declarations and
//! reassignments) are skipped here, everything else is checked in full.

use crate::consts::{self, GLOBAL_DEPTH, METHOD_BODY_DEPTH};
use crate::parser::classify;
use crate::symbols::VarType;

use super::{CheckError, CheckResult, Checker};

/// Outcome of one validated statement.
///
/// `EndOfBlockEarly` is the explicit signal for `return;` directly inside a
/// method body with the block's closer up next; it is how a method-body scan
/// ends without treating the '}' as a statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    EndOfBlockEarly,
}

impl<'src> Checker<'src> {
    pub(crate) fn validate(&mut self) -> CheckResult<()> {
        while !self.at_end() {
            self.statement()?;
        }
        Ok(())
    }

    fn statement(&mut self) -> CheckResult<Flow> {
        let line = self.tok.current_line().unwrap_or("");
        if !classify::is_legal_line(line) {
            return Err(CheckError::MalformedLine);
        }

        let token = self.current;
        if classify::is_type_keyword(token) || token == consts::FINAL {
            if self.tables.depth() == GLOBAL_DEPTH {
                // global declarations were fully validated by pass 1
                self.skip_line();
            } else {
                self.declaration()?;
            }
        } else if token == consts::IF || token == consts::WHILE {
            self.conditional_block()?;
        } else if token == consts::VOID {
            if self.tables.depth() == GLOBAL_DEPTH {
                self.method()?;
            } else {
                return Err(CheckError::NestedMethod);
            }
        } else if (classify::is_legal_var_name(token) || classify::is_legal_method_name(token))
            && token != consts::RETURN
        {
            return self.assignment_or_call();
        } else if token == consts::RETURN && self.tables.depth() == METHOD_BODY_DEPTH {
            self.expect(consts::RETURN)?;
            self.expect(";")?;
            if self.current == "}" {
                return Ok(Flow::EndOfBlockEarly);
            }
        } else if token == consts::RETURN {
            self.expect(consts::RETURN)?;
            self.expect(";")?;
        } else {
            return Err(CheckError::UnexpectedToken(token.to_string()));
        }
        Ok(Flow::Continue)
    }

    fn assignment_or_call(&mut self) -> CheckResult<Flow> {
        let name = self.current;
        self.advance();
        if self.current == "=" {
            if self.tables.depth() == GLOBAL_DEPTH {
                // global reassignments were fully validated by pass 1
                self.skip_line();
            } else {
                self.assignment(name)?;
            }
        } else {
            self.call(name)?;
        }
        Ok(Flow::Continue)
    }

    /// `if`/`while`: a fresh scope, a parenthesized boolean expression and a
    /// braced body of inner statements.
    fn conditional_block(&mut self) -> CheckResult<()> {
        self.tables.open_scope();
        self.advance();

        self.expect("(")?;
        self.boolean_expr()?;
        self.expect(")")?;

        self.expect("{")?;
        while self.current != "}" {
            if self.at_end() {
                return Err(CheckError::Expected {
                    expected: "}".to_string(),
                    found: self.current.to_string(),
                });
            }
            self.statement()?;
        }
        self.expect("}")?;

        self.tables.close_scope();
        Ok(())
    }

    /// Method validation: the one place a method body's contents are
    /// checked. The parameter scope is seeded by re-reading the parameter
    /// list, every parameter pre-initialized; the body must end in `return;`
    /// or its closing '}' trips the statement dispatch.
    fn method(&mut self) -> CheckResult<()> {
        self.tables.open_scope();
        self.expect(consts::VOID)?;
        self.advance(); // the name was vetted by the harvest pass

        self.expect("(")?;
        let mut first = true;
        while self.current != ")" {
            if self.at_end() {
                return Err(CheckError::Expected {
                    expected: ")".to_string(),
                    found: self.current.to_string(),
                });
            }
            if !first {
                self.expect(",")?;
            }
            first = false;

            let is_final = if self.current == consts::FINAL {
                self.advance();
                true
            } else {
                false
            };
            let ty = self.expect_type()?;
            let param = self.current;
            self.declare_binding(param, ty, is_final, true)?;
        }
        self.expect(")")?;

        self.expect("{")?;
        self.method_body()?;
        self.expect("}")?;

        self.tables.close_scope();
        Ok(())
    }

    fn method_body(&mut self) -> CheckResult<()> {
        loop {
            if self.at_end() {
                // the caller reports the missing '}'
                return Ok(());
            }
            if let Flow::EndOfBlockEarly = self.statement()? {
                return Ok(());
            }
        }
    }

    /// Call site: the callee must exist in the method table; arguments are
    /// checked positionally against the recorded signature.
    fn call(&mut self, name: &str) -> CheckResult<()> {
        let signature: Vec<VarType> = match self.tables.method_signature(name) {
            Some(signature) => signature.to_vec(),
            None => return Err(CheckError::UndeclaredMethod(name.to_string())),
        };

        self.expect("(")?;
        let mut count = 0usize;
        let mut first = true;
        while self.current != ")" {
            if self.at_end() {
                return Err(CheckError::Expected {
                    expected: ")".to_string(),
                    found: self.current.to_string(),
                });
            }
            if count >= signature.len() {
                return Err(CheckError::ArityMismatch {
                    name: name.to_string(),
                    expected: signature.len(),
                });
            }
            if !first {
                self.expect(",")?;
            }
            first = false;
            self.argument(name, signature[count], count)?;
            count += 1;
        }
        if count < signature.len() {
            return Err(CheckError::ArityMismatch {
                name: name.to_string(),
                expected: signature.len(),
            });
        }
        self.expect(")")?;
        self.expect(";")?;
        Ok(())
    }

    /// One argument: an identifier resolving to an initialized binding whose
    /// type satisfies the parameter under widening, or a literal of the
    /// parameter type.
    fn argument(&mut self, method: &str, expected: VarType, position: usize) -> CheckResult<()> {
        let value = self.current;
        if let Some(binding) = self.tables.lookup(value) {
            if !expected.accepts(binding.ty) {
                return Err(CheckError::ArgumentType {
                    name: method.to_string(),
                    position: position + 1,
                });
            }
            if !binding.initialized {
                return Err(CheckError::UninitializedUse(value.to_string()));
            }
        } else if !classify::literal_matches(expected, value) {
            return Err(CheckError::ArgumentType {
                name: method.to_string(),
                position: position + 1,
            });
        }
        self.advance();
        Ok(())
    }

    /// Flat boolean chain: `term (('||' | '&&') term)*`, both operators
    /// uniform, no precedence.
    fn boolean_expr(&mut self) -> CheckResult<()> {
        self.boolean_term()?;
        while self.current == "||" || self.current == "&&" {
            self.advance();
            self.boolean_term()?;
        }
        Ok(())
    }

    /// A term is an initialized boolean/int/double binding or a literal the
    /// boolean rule accepts. An undeclared identifier here is a non-boolean
    /// term, not an undeclared reference.
    fn boolean_term(&mut self) -> CheckResult<()> {
        let term = self.current;
        if let Some(binding) = self.tables.lookup(term) {
            if !binding.initialized {
                return Err(CheckError::UninitializedUse(term.to_string()));
            }
            if !matches!(
                binding.ty,
                VarType::Boolean | VarType::Int | VarType::Double
            ) {
                return Err(CheckError::NotABooleanTerm(term.to_string()));
            }
            self.advance();
            Ok(())
        } else if classify::literal_matches(VarType::Boolean, term) {
            self.advance();
            Ok(())
        } else {
            Err(CheckError::NotABooleanTerm(term.to_string()))
        }
    }
}
