use crate::{
    error::InterpretError,
    interpreter::{
        context::{EvaluationContext, Function},
        evaluator::{binary::interpret_additive, unary::apply_function},
        lexer::Token,
        marker::TokenMarker,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`InterpretError`] describing the failure.
pub type InterpretResult<T> = Result<T, InterpretError>;

/// A successfully evaluated prefix of the token sequence: the numeric value
/// together with the marker advanced past the consumed tokens.
pub type Step<'a> = (f64, TokenMarker<'a>);

/// Interprets a full token sequence against an evaluation context.
///
/// This is the main entry point of the evaluator. Parsing and evaluation are
/// fused: the token sequence is consumed by recursive descent and the numeric
/// result is computed along the way, with no intermediate tree. After the
/// top-level expression has been parsed, any unconsumed token fails the whole
/// interpretation; trailing garbage is never silently ignored.
///
/// # Parameters
/// - `tokens`: Token sequence produced by [`tokenize`](crate::tokenize).
/// - `context`: Read-only constant and function bindings.
///
/// # Errors
/// Returns the first [`InterpretError`] encountered; evaluation
/// short-circuits and never produces a partial result.
///
/// # Examples
/// ```
/// use evalix::{EvaluationContext, interpret, tokenize};
///
/// let context = EvaluationContext::with_builtins();
/// let tokens = tokenize("2 + 3 * 4").unwrap();
/// assert_eq!(interpret(&tokens, &context).unwrap(), 14.0);
/// ```
pub fn interpret(tokens: &[Token], context: &EvaluationContext) -> InterpretResult<f64> {
    let (value, marker) = interpret_expression(TokenMarker::new(tokens), context)?;

    match marker.current() {
        Some(token) => Err(InterpretError::UnexpectedToken { token: token.clone() }),
        None => Ok(value),
    }
}

/// Interprets a full expression.
///
/// This is the lowest-precedence level of the grammar. It evaluates one
/// additive expression and then folds any number of pipe applications over
/// it, left to right: `x |> f |> g` is `g(f(x))`.
///
/// Grammar: `expression := additive ("|>" function additive?)*`
///
/// # Parameters
/// - `marker`: Position in the token sequence.
/// - `context`: Read-only constant and function bindings.
///
/// # Returns
/// The evaluated value and the marker past the expression.
pub fn interpret_expression<'a>(marker: TokenMarker<'a>,
                                context: &EvaluationContext)
                                -> InterpretResult<Step<'a>> {
    let (mut value, mut marker) = interpret_additive(marker, context)?;

    while let Some(Token::Pipe) = marker.current() {
        let (piped, next) = interpret_pipe(value, marker.advance(), context)?;
        value = piped;
        marker = next;
    }

    Ok((value, marker))
}

/// Interprets one pipe application with `value` as the piped operand.
///
/// The right-hand side must resolve to a bound function. When the token after
/// the function name begins another operand, one additive expression is
/// parsed and the piped value is appended as the last argument, so
/// `x |> max 0` applies `max` to `(0, x)`. End of input, `|>`, `)` and `,`
/// are exactly the tokens that may legally follow a completed expression;
/// any of them means the piped value is the sole argument, as in `x |> sin`.
fn interpret_pipe<'a>(value: f64,
                      marker: TokenMarker<'a>,
                      context: &EvaluationContext)
                      -> InterpretResult<Step<'a>> {
    let (name, function, marker) = read_function(marker, context)?;

    match marker.current() {
        None | Some(Token::Pipe | Token::RParen | Token::Comma) => {
            Ok((apply_function(name, function, &[value])?, marker))
        },
        Some(_) => {
            let (operand, next) = interpret_additive(marker, context)?;
            Ok((apply_function(name, function, &[operand, value])?, next))
        },
    }
}

/// Reads an identifier bound to a function in the context.
///
/// # Errors
/// - [`InterpretError::UnknownIdentifier`] for an identifier with no function
///   binding (a constant-only binding does not qualify).
/// - [`InterpretError::UnexpectedToken`] for any non-identifier token.
/// - [`InterpretError::UnexpectedEndOfInput`] when the sequence is exhausted.
fn read_function<'a, 'ctx>(marker: TokenMarker<'a>,
                           context: &'ctx EvaluationContext)
                           -> InterpretResult<(&'a str, &'ctx Function, TokenMarker<'a>)> {
    let (token, next) = marker.read()?;

    match token {
        Token::Identifier(name) => match context.function(name) {
            Some(function) => Ok((name.as_str(), function, next)),
            None => Err(InterpretError::UnknownIdentifier { identifier: name.clone() }),
        },
        _ => Err(InterpretError::UnexpectedToken { token: token.clone() }),
    }
}
