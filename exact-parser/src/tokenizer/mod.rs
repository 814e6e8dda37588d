pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<'_, TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer.
///
/// Input that the lexer cannot recognize is kept as [`TokenKind::Symbol`] tokens, so that the
/// parser can point at it when reporting an error.
pub fn tokenize_complete(input: &str) -> Box<[Token<'_>]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: result.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Int, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Int, "2"),
            ],
        );
    }

    #[test]
    fn alternate_brackets_and_exponent() {
        compare_tokens(
            "[x]**{2}",
            [
                (TokenKind::OpenParen, "["),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, "]"),
                (TokenKind::Exp, "**"),
                (TokenKind::OpenParen, "{"),
                (TokenKind::Int, "2"),
                (TokenKind::CloseParen, "}"),
            ],
        );
    }

    #[test]
    fn function_with_base() {
        compare_tokens(
            "log<7>(x) $",
            [
                (TokenKind::Name, "log"),
                (TokenKind::Less, "<"),
                (TokenKind::Int, "7"),
                (TokenKind::Greater, ">"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }

    #[test]
    fn complete_keeps_spans() {
        let tokens = tokenize_complete("12x");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].span, 0..2);
        assert_eq!(tokens[1].lexeme, "x");
    }
}
