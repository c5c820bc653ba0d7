use crate::{
    error::InterpretError,
    interpreter::{
        context::EvaluationContext,
        evaluator::{
            core::{InterpretResult, Step},
            unary::interpret_signed,
        },
        lexer::Token,
        marker::TokenMarker,
    },
};

/// A binary arithmetic operator, grouped out of the operator tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `%`
    Mod,
    /// `^`
    Pow,
}

/// Interprets addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`. The fold is
/// iterative, so `a - b - c` evaluates as `(a - b) - c`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `marker`: Position in the token sequence.
/// - `context`: Read-only constant and function bindings.
///
/// # Returns
/// The folded value and the marker past the expression.
pub fn interpret_additive<'a>(marker: TokenMarker<'a>,
                              context: &EvaluationContext)
                              -> InterpretResult<Step<'a>> {
    let (mut left, mut marker) = interpret_multiplicative(marker, context)?;
    loop {
        if let Some(token) = marker.current()
           && let Some(op) = token_to_operator(token)
           && matches!(op, Operator::Add | Operator::Sub)
        {
            let (right, next) = interpret_multiplicative(marker.advance(), context)?;
            left = apply_operator(op, left, right)?;
            marker = next;
            continue;
        }
        break;
    }
    Ok((left, marker))
}

/// Interprets multiplication-level expressions.
///
/// Handles the left-associative operators `*`, `/` and `%`.
///
/// The rule is: `multiplicative := exponent (("*" | "/" | "%") exponent)*`
///
/// # Parameters
/// - `marker`: Position in the token sequence.
/// - `context`: Read-only constant and function bindings.
///
/// # Returns
/// The folded value and the marker past the expression.
pub fn interpret_multiplicative<'a>(marker: TokenMarker<'a>,
                                    context: &EvaluationContext)
                                    -> InterpretResult<Step<'a>> {
    let (mut left, mut marker) = interpret_exponent(marker, context)?;
    loop {
        if let Some(token) = marker.current()
           && let Some(op) = token_to_operator(token)
           && matches!(op, Operator::Mul | Operator::Div | Operator::Mod)
        {
            let (right, next) = interpret_exponent(marker.advance(), context)?;
            left = apply_operator(op, left, right)?;
            marker = next;
            continue;
        }
        break;
    }
    Ok((left, marker))
}

/// Interprets exponentiation expressions.
///
/// `^` folds left like the other binary levels, so `a ^ b ^ c` evaluates as
/// `(a ^ b) ^ c`. Both operands are signed units, which is why a unary sign
/// binds tighter than the exponent: `-2 ^ 2` is `(-2) ^ 2 = 4`.
///
/// The rule is: `exponent := signed ("^" signed)*`
///
/// # Parameters
/// - `marker`: Position in the token sequence.
/// - `context`: Read-only constant and function bindings.
///
/// # Returns
/// The folded value and the marker past the expression.
pub fn interpret_exponent<'a>(marker: TokenMarker<'a>,
                              context: &EvaluationContext)
                              -> InterpretResult<Step<'a>> {
    let (mut left, mut marker) = interpret_signed(marker, context)?;
    loop {
        if let Some(token) = marker.current()
           && let Some(op) = token_to_operator(token)
           && matches!(op, Operator::Pow)
        {
            let (right, next) = interpret_signed(marker.advance(), context)?;
            left = apply_operator(op, left, right)?;
            marker = next;
            continue;
        }
        break;
    }
    Ok((left, marker))
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all non-operator tokens.
///
/// # Example
/// ```
/// use evalix::{Token,
///              interpreter::evaluator::binary::{Operator, token_to_operator}};
///
/// assert_eq!(token_to_operator(&Token::Plus), Some(Operator::Add));
/// assert_eq!(token_to_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Plus => Some(Operator::Add),
        Token::Minus => Some(Operator::Sub),
        Token::Star => Some(Operator::Mul),
        Token::Slash => Some(Operator::Div),
        Token::Percent => Some(Operator::Mod),
        Token::Caret => Some(Operator::Pow),
        _ => None,
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Division and modulo check the right operand for exact zero before the
/// operation is applied; the failure is an explicit error, not a propagated
/// infinity or NaN.
///
/// # Errors
/// Returns [`InterpretError::DivisionByZero`] when the right operand of `/`
/// or `%` is zero.
pub fn apply_operator(op: Operator, left: f64, right: f64) -> InterpretResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div if right == 0.0 => Err(InterpretError::DivisionByZero),
        Operator::Div => Ok(left / right),
        Operator::Mod if right == 0.0 => Err(InterpretError::DivisionByZero),
        Operator::Mod => Ok(left % right),
        Operator::Pow => Ok(left.powf(right)),
    }
}
