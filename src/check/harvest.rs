//! Pass 1: declaration harvesting.
//!
//! One scan over the whole source that registers every method signature and
//! validates every global declaration and reassignment. Method bodies and
//! top-level conditional blocks are skipped structurally (brace counting on
//! tokens, not lines) and left for pass 2, as are top-level calls, which can
//! only be checked once the method table is complete.

use std::collections::HashSet;

use crate::consts;
use crate::parser::classify;
use crate::symbols::VarType;

use super::{CheckError, CheckResult, Checker};

impl<'src> Checker<'src> {
    pub(crate) fn harvest(&mut self) -> CheckResult<()> {
        self.tables.open_scope();
        while self.tok.current_line().is_some() {
            let token = self.current;
            if token == consts::VOID {
                self.method_declaration()?;
            } else if token == consts::FINAL || classify::is_type_keyword(token) {
                self.declaration()?;
            } else if token == consts::IF || token == consts::WHILE {
                self.skip_conditional_block()?;
            } else if classify::is_legal_var_name(token) {
                self.advance();
                if self.current == "=" {
                    self.assignment(token)?;
                } else {
                    // a call; validated with the complete method table in pass 2
                    self.skip_line();
                }
            } else {
                return Err(CheckError::IllegalTopLevel);
            }
        }
        Ok(())
    }

    fn method_declaration(&mut self) -> CheckResult<()> {
        self.expect(consts::VOID)?;
        let name = self.current;
        if !classify::is_legal_method_name(name) {
            return Err(CheckError::IllegalMethodName(name.to_string()));
        }
        if !self.tables.add_method(name) {
            return Err(CheckError::DuplicateMethod(name.to_string()));
        }
        self.advance();

        self.expect("(")?;
        let signature = self.parameter_list()?;
        log::debug!("registered method '{}' ({} parameter(s))", name, signature.len());
        self.tables.set_signature(name, signature);
        self.expect(")")?;

        self.expect("{")?;
        self.skip_body();
        self.expect("}")?;
        Ok(())
    }

    /// Parameter list: per parameter an optional single `final`, a type
    /// keyword (collected into the signature) and a fresh legal name. No
    /// bindings are created here; pass 2 seeds the parameter scope itself.
    fn parameter_list(&mut self) -> CheckResult<Vec<VarType>> {
        let mut signature = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
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

            if self.current == consts::FINAL {
                self.advance();
            }
            signature.push(self.expect_type()?);

            let param = self.current;
            if !classify::is_legal_var_name(param) {
                return Err(CheckError::IllegalVarName(param.to_string()));
            }
            if !seen.insert(param) {
                return Err(CheckError::DuplicateParameter(param.to_string()));
            }
            self.advance();
        }
        Ok(signature)
    }

    /// Structural body skip: counts '{'/'}' tokens until balance returns to
    /// zero without inspecting contents. Leaves the closing '}' as the
    /// current token; a missing closer surfaces at the caller's expect.
    fn skip_body(&mut self) {
        let mut depth = 1usize;
        while !self.at_end() {
            match self.current {
                "}" => {
                    depth -= 1;
                    if depth == 0 {
                        return;
                    }
                }
                "{" => depth += 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// A top-level `if`/`while` block is invisible to this pass; its header
    /// and contents are validated by pass 2.
    fn skip_conditional_block(&mut self) -> CheckResult<()> {
        while self.current != "{" {
            if self.at_end() {
                return Err(CheckError::Expected {
                    expected: "{".to_string(),
                    found: self.current.to_string(),
                });
            }
            self.advance();
        }
        self.advance();
        self.skip_body();
        self.expect("}")?;
        Ok(())
    }
}
