//! # evalix
//!
//! evalix is a small arithmetic expression engine written in Rust.
//! It tokenizes and evaluates infix expressions with parentheses, unary
//! signs, named constants, single- and multi-argument functions, and a
//! left-to-right pipe operator for function application.
//!
//! Evaluation is a pure function of the input and the caller-supplied
//! [`EvaluationContext`]; nothing is cached and no state survives a call.
//! Recursion depth follows the nesting of the input, with no explicit limit.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for tokenization and interpretation.
///
/// This module defines all errors that can be raised while lexing or
/// evaluating an expression. Errors are plain data: callers can match them
/// exhaustively, and every failure short-circuits to the top-level caller
/// unchanged.
///
/// # Responsibilities
/// - Defines error enums for both phases (tokenizer, evaluator).
/// - Carries the offending character, token or identifier for diagnostics.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates tokenization and evaluation of expressions.
///
/// This module ties together the lexer, the token marker, the evaluation
/// context and the evaluator to provide a complete engine for arithmetic
/// expressions. It exposes the public API for tokenizing and interpreting
/// input.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, marker, context, evaluator.
/// - Provides entry points for tokenizing and evaluating expressions.
/// - Manages the flow of data and errors between the two phases.
pub mod interpreter;

pub use crate::{
    error::{InterpretError, TokenizeError},
    interpreter::{
        context::{Arity, EvaluationContext, Function},
        evaluator::core::interpret,
        lexer::{Token, tokenize},
        marker::TokenMarker,
    },
};

/// Evaluates a source expression against the provided context.
///
/// This convenience entry point chains [`tokenize`] and [`interpret`]. Both
/// phases are pure: the same input and context always produce the same value
/// or the same error.
///
/// # Errors
/// Returns the boxed [`TokenizeError`] or [`InterpretError`] of the failing
/// phase.
///
/// # Examples
/// ```
/// use evalix::{EvaluationContext, evaluate};
///
/// let context = EvaluationContext::with_builtins();
///
/// assert_eq!(evaluate("2 + 3 * 4", &context).unwrap(), 14.0);
/// assert_eq!(evaluate("16 |> sqrt |> sqrt", &context).unwrap(), 2.0);
///
/// // Unknown names are reported as errors.
/// let result = evaluate("2 + nope", &context);
/// assert!(result.is_err());
/// ```
pub fn evaluate(source: &str,
                context: &EvaluationContext)
                -> Result<f64, Box<dyn std::error::Error>> {
    let tokens = tokenize(source)?;
    let value = interpret(&tokens, context)?;

    Ok(value)
}
