use crate::{
    error::InterpretError,
    interpreter::{
        context::{EvaluationContext, Function},
        evaluator::core::{InterpretResult, Step, interpret_expression},
        lexer::Token,
        marker::TokenMarker,
    },
};

/// Interprets a signed unit.
///
/// At most one leading `-` or `+` is consumed; the sign is not recursive, so
/// `--1` is a parse error. The sign applies to a whole primary, which
/// includes function applications: `-sin 1` is `-(sin 1)`.
///
/// Grammar: `signed := ("-" | "+")? primary`
///
/// # Parameters
/// - `marker`: Position in the token sequence.
/// - `context`: Read-only constant and function bindings.
///
/// # Returns
/// The evaluated value and the marker past the unit.
pub(crate) fn interpret_signed<'a>(marker: TokenMarker<'a>,
                                   context: &EvaluationContext)
                                   -> InterpretResult<Step<'a>> {
    match marker.current() {
        Some(Token::Minus) => {
            let (value, next) = interpret_primary(marker.advance(), context)?;
            Ok((-value, next))
        },
        Some(Token::Plus) => interpret_primary(marker.advance(), context),
        _ => interpret_primary(marker, context),
    }
}

/// Interprets a primary expression.
///
/// An identifier in primary position is resolved against the context at
/// evaluation time; everything else is a plain unit (number or parenthesized
/// expression).
///
/// Grammar:
/// ```text
///     primary := identifier ("(" arguments ")" | signed)?
///              | unit
/// ```
fn interpret_primary<'a>(marker: TokenMarker<'a>,
                         context: &EvaluationContext)
                         -> InterpretResult<Step<'a>> {
    match marker.current() {
        Some(Token::Identifier(name)) => interpret_identifier(name, marker.advance(), context),
        _ => interpret_unit(marker, context),
    }
}

/// Resolves an identifier and interprets the call syntax that follows it.
///
/// The function table is consulted first. A bound function followed by `(`
/// takes a comma-separated argument list; without parentheses it consumes
/// exactly one signed unit as prefix-call sugar, so `sin x` is `sin(x)` and
/// `sin cos 1` is `sin(cos(1))`. An identifier bound only as a constant
/// evaluates to its value directly.
///
/// # Parameters
/// - `name`: The already-consumed identifier, lowercased by the lexer.
/// - `marker`: Position after the identifier token.
/// - `context`: Read-only constant and function bindings.
///
/// # Errors
/// Returns [`InterpretError::UnknownIdentifier`] when the name is bound to
/// neither a function nor a constant.
fn interpret_identifier<'a>(name: &str,
                            marker: TokenMarker<'a>,
                            context: &EvaluationContext)
                            -> InterpretResult<Step<'a>> {
    if let Some(function) = context.function(name) {
        if let Some(Token::LParen) = marker.current() {
            let (arguments, next) = interpret_arguments(marker.advance(), context)?;
            Ok((apply_function(name, function, &arguments)?, next))
        } else {
            let (argument, next) = interpret_signed(marker, context)?;
            Ok((apply_function(name, function, &[argument])?, next))
        }
    } else if let Some(value) = context.constant(name) {
        Ok((value, marker))
    } else {
        Err(InterpretError::UnknownIdentifier { identifier: name.to_string() })
    }
}

/// Interprets a plain unit: a number literal or a parenthesized expression.
///
/// Grouping recurses into the full expression grammar and requires a closing
/// `)`.
///
/// Grammar: `unit := NUMBER | "(" expression ")"`
fn interpret_unit<'a>(marker: TokenMarker<'a>,
                      context: &EvaluationContext)
                      -> InterpretResult<Step<'a>> {
    let (token, next) = marker.read()?;

    match token {
        Token::Number(value) => Ok((*value, next)),
        Token::LParen => {
            let (value, next) = interpret_expression(next, context)?;
            let next = read_closing_paren(next)?;
            Ok((value, next))
        },
        _ => Err(InterpretError::UnexpectedToken { token: token.clone() }),
    }
}

/// Interprets a parenthesized argument list, starting past the `(`.
///
/// At least one argument is required and a trailing comma is not permitted;
/// each argument is a full expression, so pipes and nested calls are legal
/// inside the list.
///
/// Grammar: `arguments := expression ("," expression)* ")"`
fn interpret_arguments<'a>(marker: TokenMarker<'a>,
                           context: &EvaluationContext)
                           -> InterpretResult<(Vec<f64>, TokenMarker<'a>)> {
    let (first, mut marker) = interpret_expression(marker, context)?;
    let mut arguments = vec![first];

    while let Some(Token::Comma) = marker.current() {
        let (value, next) = interpret_expression(marker.advance(), context)?;
        arguments.push(value);
        marker = next;
    }

    let marker = read_closing_paren(marker)?;
    Ok((arguments, marker))
}

/// Requires a `)` at the current position.
fn read_closing_paren(marker: TokenMarker<'_>) -> InterpretResult<TokenMarker<'_>> {
    let (token, next) = marker.read()?;

    match token {
        Token::RParen => Ok(next),
        _ => Err(InterpretError::UnexpectedToken { token: token.clone() }),
    }
}

/// Validates the argument count against the function's arity and applies the
/// function.
///
/// Every application path goes through this check, including prefix-call
/// sugar and pipe applications, so a binary function invoked with one
/// argument fails loudly instead of being silently truncated.
///
/// # Errors
/// Returns [`InterpretError::ArgumentCountMismatch`] when the argument count
/// does not satisfy the declared arity.
pub(crate) fn apply_function(name: &str,
                             function: &Function,
                             arguments: &[f64])
                             -> InterpretResult<f64> {
    if !function.arity().accepts(arguments.len()) {
        return Err(InterpretError::ArgumentCountMismatch { function: name.to_string(),
                                                           expected: function.arity(),
                                                           found:    arguments.len(), });
    }

    Ok(function.call(arguments))
}
