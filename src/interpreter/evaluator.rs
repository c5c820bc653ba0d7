/// Core evaluation logic.
///
/// Contains the `interpret` entry point with its trailing-token check, the
/// expression level of the grammar with the left-to-right pipe fold, and
/// function resolution for pipe right-hand sides.
pub mod core;

/// Binary operator levels.
///
/// Implements the left-folding additive, multiplicative and exponent levels
/// of the grammar, the mapping from operator tokens to the closed operator
/// type, and operator application with the explicit division-by-zero check.
pub mod binary;

/// Signed units and primaries.
///
/// Handles unary signs, identifier resolution (constants, parenthesized
/// function calls, prefix-call sugar), argument lists, grouping, and the
/// arity-checked function application shared by all call forms.
pub mod unary;
