use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// Payload variants keep the exact source lexeme: identifiers and integer
/// literals carry their spelling (integer conversion happens in the parser so
/// that overflow can be reported as a parse error), string literals carry the
/// characters between the quotes, and illegal tokens carry the offending
/// character.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
    /// `fn`
    #[token("fn")]
    Function,
    /// `let`
    #[token("let")]
    Let,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,

    /// Identifier tokens; binding or function names such as `x` or `add`.
    /// Identifiers are runs of letters and underscores; digits are not
    /// identifier characters.
    #[regex(r"[A-Za-z_]+", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens such as `42`, kept as their decimal spelling.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens. There are no escape sequences; a string runs
    /// from `"` to the next `"`. An unterminated string yields everything up
    /// to the end of the input.
    #[regex(r#""[^"]*"?"#, read_string)]
    Str(String),

    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Lt,
    /// `>`
    #[token(">")]
    Gt,
    /// `==`
    #[token("==")]
    Eq,
    /// `!=`
    #[token("!=")]
    NotEq,

    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,

    /// Any character no other rule matches. Illegal tokens flow into the
    /// parser, which rejects them like any other token that cannot begin an
    /// expression.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),
}

/// Extracts the contents of a string literal from the current token slice.
///
/// The slice includes the opening quote and, when the literal is terminated,
/// the closing quote; both are stripped.
fn read_string(lex: &mut logos::Lexer<Token>) -> String {
    let body = &lex.slice()[1..];
    body.strip_suffix('"').unwrap_or(body).to_string()
}

impl Token {
    /// Returns the display name of this token's kind, as used in parser
    /// error messages: word-like kinds print as uppercase names (`IDENT`,
    /// `INT`, `FUNCTION`, ...), operators and delimiters print as
    /// themselves.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Let => "LET",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::If => "IF",
            Self::Else => "ELSE",
            Self::Return => "RETURN",
            Self::Ident(_) => "IDENT",
            Self::Int(_) => "INT",
            Self::Str(_) => "STRING",
            Self::Assign => "=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Bang => "!",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Comma => ",",
            Self::Semicolon => ";",
            Self::Colon => ":",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Illegal(_) => "ILLEGAL",
        }
    }
}

/// The lexer: turns source text into a stream of [`Token`]s, one at a time.
///
/// Tokenization is lazy and single-pass. The lexer never fails: characters
/// it does not recognize come back as [`Token::Illegal`], and the end of the
/// input is signalled by `None` (repeatedly, if polled again).
///
/// # Example
/// ```
/// use simia::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("let five = 5;");
///
/// assert_eq!(lexer.next_token(), Some(Token::Let));
/// assert_eq!(lexer.next_token(), Some(Token::Ident("five".to_string())));
/// assert_eq!(lexer.next_token(), Some(Token::Assign));
/// assert_eq!(lexer.next_token(), Some(Token::Int("5".to_string())));
/// assert_eq!(lexer.next_token(), Some(Token::Semicolon));
/// assert_eq!(lexer.next_token(), None);
/// assert_eq!(lexer.next_token(), None);
/// ```
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer over the given source text.
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            inner: Token::lexer(source),
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        match self.inner.next() {
            Some(Ok(token)) => Some(token),
            Some(Err(())) => Some(Token::Illegal(self.inner.slice().to_string())),
            None => None,
        }
    }
}
