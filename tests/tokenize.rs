use evalix::{Token, TokenizeError, tokenize};
use proptest::prelude::*;

fn assert_tokens(input: &str, expected: &[Token]) {
    match tokenize(input) {
        Ok(tokens) => assert_eq!(tokens, expected, "for input '{input}'"),
        Err(e) => panic!("Tokenizing '{input}' failed: {e}"),
    }
}

fn identifier(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

#[test]
fn number_literals() {
    assert_tokens("3.14", &[Token::Number(3.14)]);
    assert_tokens("42", &[Token::Number(42.0)]);
    assert_tokens(".5", &[Token::Number(0.5)]);
    assert_tokens("1.5e10", &[Token::Number(1.5e10)]);
    assert_tokens("2E-3", &[Token::Number(2e-3)]);
    assert_tokens("7e+2", &[Token::Number(700.0)]);
}

#[test]
fn sign_is_not_part_of_a_number() {
    assert_tokens("-3", &[Token::Minus, Token::Number(3.0)]);
    assert_tokens("+.5", &[Token::Plus, Token::Number(0.5)]);
}

#[test]
fn exponent_suffix_requires_a_leading_digit() {
    assert_tokens("e5", &[identifier("e5")]);
    assert_tokens("2e5", &[Token::Number(2e5)]);
    assert_tokens("e 5", &[identifier("e"), Token::Number(5.0)]);
}

#[test]
fn parentheses() {
    assert_tokens("(", &[Token::LParen]);
    assert_tokens(")", &[Token::RParen]);
}

#[test]
fn operators() {
    assert_tokens("1 + 2 - 3 * 4 / 5 ^ 6 % 7",
                  &[Token::Number(1.0),
                    Token::Plus,
                    Token::Number(2.0),
                    Token::Minus,
                    Token::Number(3.0),
                    Token::Star,
                    Token::Number(4.0),
                    Token::Slash,
                    Token::Number(5.0),
                    Token::Caret,
                    Token::Number(6.0),
                    Token::Percent,
                    Token::Number(7.0)]);
}

#[test]
fn identifiers_are_lowercased() {
    assert_tokens("PI", &[identifier("pi")]);
    assert_tokens("Sin", &[identifier("sin")]);
    assert_tokens("$Rate", &[identifier("$rate")]);
}

#[test]
fn pipe_is_a_single_token() {
    assert_tokens("1 |> sin",
                  &[Token::Number(1.0), Token::Pipe, identifier("sin")]);
    assert_tokens("1|>sin",
                  &[Token::Number(1.0), Token::Pipe, identifier("sin")]);
}

#[test]
fn function_call_tokens() {
    assert_tokens("min(1, 2)",
                  &[identifier("min"),
                    Token::LParen,
                    Token::Number(1.0),
                    Token::Comma,
                    Token::Number(2.0),
                    Token::RParen]);
}

#[test]
fn whitespace_is_skipped() {
    assert_tokens("  1\t+\n2  ",
                  &[Token::Number(1.0), Token::Plus, Token::Number(2.0)]);
    assert_tokens("", &[]);
}

#[test]
fn unrecognized_characters_fail_fast() {
    assert_eq!(tokenize("2 @ 3"),
               Err(TokenizeError::UnrecognizedCharacter { character: '@',
                                                          position:  2, }));
    assert_eq!(tokenize("1."),
               Err(TokenizeError::UnrecognizedCharacter { character: '.',
                                                          position:  1, }));
    // A lone `|` does not complete a pipe token.
    assert_eq!(tokenize("1 | 2"),
               Err(TokenizeError::UnrecognizedCharacter { character: '|',
                                                          position:  2, }));
}

fn number_string() -> impl Strategy<Value = String> {
    ("[0-9]{0,8}",
     proptest::option::of("[0-9]{1,8}"),
     proptest::option::of(("[+-]?", "[0-9]{1,2}")))
        .prop_map(|(integer, fraction, exponent)| {
            if integer.is_empty() && fraction.is_none() {
                return "0".to_string();
            }

            let mut out = integer;
            if let Some(fraction) = fraction {
                out.push('.');
                out.push_str(&fraction);
            }
            if let Some((sign, digits)) = exponent {
                out.push('e');
                out.push_str(&sign);
                out.push_str(&digits);
            }
            out
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn number_strings_lex_to_their_native_parse(input in number_string()) {
        let expected: f64 = input.parse().unwrap();
        prop_assert_eq!(tokenize(&input).unwrap(), vec![Token::Number(expected)]);
    }

    #[test]
    fn tokenizing_arbitrary_input_never_panics(input in ".{0,40}") {
        let _ = tokenize(&input);
    }
}
