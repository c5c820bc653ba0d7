/// The lexer module tokenizes expression text for evaluation.
///
/// The lexer (tokenizer) reads the raw source text and produces a sequence of
/// tokens, each corresponding to a meaningful element such as a number,
/// operator, delimiter or identifier. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into typed tokens.
/// - Parses numeric literals and lowercases identifiers at token creation.
/// - Reports the first unrecognized character as a lexical error.
pub mod lexer;

/// The marker module provides the cursor threaded through evaluation.
///
/// A marker is an immutable (token slice, position) pair. Parse steps take a
/// marker and return an advanced copy, so the evaluator has no shared mutable
/// parse state and remains trivially re-entrant.
///
/// # Responsibilities
/// - Exposes lookahead at the current token.
/// - Advances by value, never in place.
/// - Turns exhausted reads into end-of-input errors.
pub mod marker;

/// The context module defines the caller-supplied evaluation bindings.
///
/// The evaluation context maps lowercased names to numeric constants and to
/// functions with declared arities. It is injected into every evaluation call
/// rather than looked up from global state, which keeps evaluations isolated
/// and easy to test with custom tables.
///
/// # Responsibilities
/// - Stores constant and function tables behind a read-only lookup API.
/// - Provides the builtin reference bindings (`pi`, `e`, `sin`, `min`, ...).
/// - Declares function arities for explicit argument-count validation.
pub mod context;

/// The evaluator module parses and evaluates the token sequence in one pass.
///
/// The evaluator consumes tokens by recursive descent and computes the
/// numeric result as it goes; there is no intermediate syntax tree. Each
/// grammar level consumes tokens through the marker and returns the evaluated
/// value together with the advanced marker.
///
/// # Responsibilities
/// - Implements the precedence levels from pipe up to primaries.
/// - Resolves identifiers against the injected context at evaluation time.
/// - Reports semantic errors such as division by zero or unknown names.
pub mod evaluator;
