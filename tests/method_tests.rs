mod common;

use common::{assert_fails_with, assert_valid};
use sjavac::ErrorKind;

#[test]
fn declare_and_call_a_method() {
    assert_valid("void f(int x){\n return;\n}\nf(5);\n");
}

#[test]
fn parameter_is_an_initialized_boolean_term() {
    assert_valid(
        "void f(int b){\n\
         \x20while(b){\n\
         \x20}\n\
         \x20return;\n\
         }\n\
         f(1);\n",
    );
}

#[test]
fn call_may_precede_the_declaration() {
    assert_valid(
        "void caller(){\n\
         \x20callee(5);\n\
         \x20return;\n\
         }\n\
         void callee(int x){\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn top_level_call_may_precede_the_declaration() {
    assert_valid("f(5);\nvoid f(int x){\n return;\n}\n");
}

#[test]
fn too_few_arguments() {
    assert_fails_with(
        "void f(int x){\n return;\n}\nf();\n",
        ErrorKind::SignatureMismatch,
    );
}

#[test]
fn too_many_arguments() {
    assert_fails_with(
        "void f(int x){\n return;\n}\nf(1, 2);\n",
        ErrorKind::SignatureMismatch,
    );
}

#[test]
fn argument_literal_must_match_the_parameter_type() {
    assert_fails_with(
        "void f(String s){\n return;\n}\nf(5);\n",
        ErrorKind::SignatureMismatch,
    );
}

#[test]
fn argument_widening_follows_the_parameter_requirement() {
    assert_valid(
        "int a = 1;\n\
         void f(double x){\n\
         \x20return;\n\
         }\n\
         f(a);\n",
    );
    assert_fails_with(
        "double d = 1.5;\n\
         void f(int x){\n\
         \x20return;\n\
         }\n\
         f(d);\n",
        ErrorKind::SignatureMismatch,
    );
}

#[test]
fn uninitialized_argument_fails() {
    assert_fails_with(
        "int a;\nvoid f(int x){\n return;\n}\nf(a);\n",
        ErrorKind::UninitializedUse,
    );
}

#[test]
fn call_to_unknown_method_fails() {
    assert_fails_with("g(1);\n", ErrorKind::UndeclaredReference);
}

#[test]
fn duplicate_method_name_fails() {
    assert_fails_with(
        "void f(){\n return;\n}\nvoid f(int x){\n return;\n}\n",
        ErrorKind::IllegalIdentifier,
    );
}

#[test]
fn duplicate_parameter_names_fail() {
    assert_fails_with(
        "void f(int x, double x){\n return;\n}\n",
        ErrorKind::IllegalIdentifier,
    );
}

#[test]
fn final_parameter_cannot_be_reassigned() {
    assert_fails_with(
        "void f(final int x){\n x = 3;\n return;\n}\n",
        ErrorKind::FinalViolation,
    );
}

#[test]
fn non_final_parameter_can_be_reassigned() {
    assert_valid("void f(int x){\n x = 3;\n return;\n}\n");
}

#[test]
fn method_name_must_start_with_a_letter() {
    assert_fails_with("void _f(int x){\n return;\n}\n", ErrorKind::IllegalIdentifier);
}

#[test]
fn nested_method_declarations_are_rejected() {
    assert_fails_with(
        "void f(){\n\
         \x20void g(){\n\
         \x20return;\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::UnexpectedStatement,
    );
}

#[test]
fn method_body_must_end_with_return() {
    assert_fails_with(
        "void f(){\n int x = 1;\n}\n",
        ErrorKind::UnexpectedStatement,
    );
}

#[test]
fn return_at_top_level_is_rejected() {
    assert_fails_with("return;\n", ErrorKind::UnexpectedStatement);
}

#[test]
fn parameters_shadow_globals() {
    assert_valid(
        "int a = 1;\n\
         void f(String a){\n\
         \x20String s = a;\n\
         \x20return;\n\
         }\n\
         f(\"hi\");\n",
    );
}

#[test]
fn unterminated_method_body_is_a_syntax_error() {
    assert_fails_with(
        "void f(){\n if(1){\n return;\n",
        ErrorKind::SyntaxMismatch,
    );
}
