mod common;

use common::{assert_fails_with, assert_valid};
use sjavac::ErrorKind;

#[test]
fn condition_read_before_initialization() {
    assert_fails_with(
        "int a;\n\
         if(a){\n\
         \x20a = 1;\n\
         }\n\
         int b = a;\n",
        ErrorKind::UninitializedUse,
    );
}

#[test]
fn boolean_int_and_double_bindings_are_boolean_terms() {
    assert_valid(
        "boolean flag = true;\n\
         int n = 3;\n\
         double d = 0.5;\n\
         void f(){\n\
         \x20if(flag){\n\
         \x20}\n\
         \x20while(n){\n\
         \x20}\n\
         \x20if(d){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn literal_boolean_terms() {
    assert_valid(
        "void f(){\n\
         \x20if(true){\n\
         \x20}\n\
         \x20while(-3.5){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn flat_operator_chain() {
    assert_valid(
        "boolean a = true;\n\
         int b = 1;\n\
         void f(){\n\
         \x20if(a || b && true || 0.5){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn string_binding_is_not_a_boolean_term() {
    assert_fails_with(
        "String s = \"x\";\n\
         void f(){\n\
         \x20if(s){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::UnexpectedStatement,
    );
}

#[test]
fn char_literal_is_not_a_boolean_term() {
    assert_fails_with(
        "void f(){\n\
         \x20if('c'){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::UnexpectedStatement,
    );
}

#[test]
fn undeclared_identifier_in_a_condition_is_not_a_boolean_term() {
    assert_fails_with(
        "void f(){\n\
         \x20if(ghost){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::UnexpectedStatement,
    );
}

#[test]
fn uninitialized_identifier_in_a_condition() {
    assert_fails_with(
        "void f(){\n\
         \x20int a;\n\
         \x20if(a){\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::UninitializedUse,
    );
}

#[test]
fn deeply_nested_blocks_with_inner_return() {
    assert_valid(
        "void f(int n){\n\
         \x20if(n){\n\
         \x20\x20while(n){\n\
         \x20\x20\x20return;\n\
         \x20\x20}\n\
         \x20}\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn block_locals_are_dropped_at_the_closing_brace() {
    assert_fails_with(
        "void f(){\n\
         \x20if(1){\n\
         \x20\x20int x = 1;\n\
         \x20}\n\
         \x20x = 2;\n\
         \x20return;\n\
         }\n",
        ErrorKind::UndeclaredReference,
    );
}

#[test]
fn block_local_may_shadow_a_method_local() {
    assert_valid(
        "void f(){\n\
         \x20int x = 1;\n\
         \x20if(x){\n\
         \x20\x20double x = 2.5;\n\
         \x20\x20boolean y = x;\n\
         \x20}\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn global_assigned_in_a_nested_block_is_usable_after_it() {
    assert_valid(
        "int g;\n\
         void f(){\n\
         \x20if(1){\n\
         \x20\x20g = 1;\n\
         \x20}\n\
         \x20int y = g;\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn global_initialized_in_one_method_is_initialized_for_later_ones() {
    assert_valid(
        "int g;\n\
         void f(){\n\
         \x20g = 1;\n\
         \x20return;\n\
         }\n\
         void h(){\n\
         \x20int y = g;\n\
         \x20return;\n\
         }\n",
    );
}

#[test]
fn shadowed_global_is_not_initialized_by_the_local_assignment() {
    assert_fails_with(
        "int g;\n\
         void f(){\n\
         \x20int g = 1;\n\
         \x20g = 2;\n\
         \x20return;\n\
         }\n\
         void h(){\n\
         \x20int y = g;\n\
         \x20return;\n\
         }\n",
        ErrorKind::UninitializedUse,
    );
}

#[test]
fn malformed_line_inside_a_body() {
    assert_fails_with(
        "void f(){\n int x = 1\n return;\n}\n",
        ErrorKind::MalformedLine,
    );
}

#[test]
fn two_statements_on_one_line_inside_a_body() {
    assert_fails_with(
        "int a, b;\n\
         void f(){\n\
         \x20a = 1; b = 2;\n\
         \x20return;\n\
         }\n",
        ErrorKind::MalformedLine,
    );
}

#[test]
fn single_line_block_is_malformed() {
    assert_fails_with(
        "void f(){\n if(1){ return; }\n return;\n}\n",
        ErrorKind::MalformedLine,
    );
}

#[test]
fn condition_missing_closing_parenthesis() {
    assert_fails_with(
        "void f(){\n\
         \x20if(1{\n\
         \x20}\n\
         \x20return;\n\
         }\n",
        ErrorKind::SyntaxMismatch,
    );
}
