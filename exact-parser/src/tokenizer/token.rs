use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    #[token("**")]
    Exp,

    #[token("<")]
    Less,

    #[token(">")]
    Greater,

    #[token("(")]
    #[token("[")]
    #[token("{")]
    OpenParen,

    #[token(")")]
    #[token("]")]
    #[token("}")]
    CloseParen,

    #[regex(r"[0-9]+")]
    Int,

    #[regex(r"[a-zA-Z_]+")]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
