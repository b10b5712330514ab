//! Token model shared by the lexer and the parser
//!
//! A [`Token`] is produced once by the [`Lexer`](super::lexer::Lexer) and never
//! mutated afterwards. Its [`TokenKind`] is a closed enumeration so every match
//! over token kinds is checked for exhaustiveness by the compiler.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::OnceLock;

/// All token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character punctuation
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,
    Question, // ?
    Colon,    // :

    // One or two character operators
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    String,
    Number,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    Eof,
}

impl TokenKind {
    /// Every reserved word paired with the kind it scans to.
    pub const KEYWORDS: [(&'static str, TokenKind); 16] = [
        ("and", TokenKind::And),
        ("class", TokenKind::Class),
        ("else", TokenKind::Else),
        ("false", TokenKind::False),
        ("for", TokenKind::For),
        ("fun", TokenKind::Fun),
        ("if", TokenKind::If),
        ("nil", TokenKind::Nil),
        ("or", TokenKind::Or),
        ("print", TokenKind::Print),
        ("return", TokenKind::Return),
        ("super", TokenKind::Super),
        ("this", TokenKind::This),
        ("true", TokenKind::True),
        ("var", TokenKind::Var),
        ("while", TokenKind::While),
    ];

    /// Look up a reserved word. Returns `None` for ordinary identifiers.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        static TABLE: OnceLock<FxHashMap<&'static str, TokenKind>> = OnceLock::new();
        TABLE
            .get_or_init(|| TokenKind::KEYWORDS.iter().copied().collect())
            .get(text)
            .copied()
    }

    pub fn is_keyword(self) -> bool {
        TokenKind::KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Keywords that begin a statement. The parser resynchronizes in front of these.
    pub fn starts_statement(self) -> bool {
        matches!(
            self,
            TokenKind::Class
                | TokenKind::Fun
                | TokenKind::Var
                | TokenKind::For
                | TokenKind::If
                | TokenKind::While
                | TokenKind::Print
                | TokenKind::Return
        )
    }
}

/// Decoded value carried by `String` and `Number` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Number(f64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Str(s) => write!(f, "{}", s),
            Literal::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A single scanned token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text the token was scanned from
    pub lexeme: String,
    pub literal: Option<Literal>,
    /// 1-based line of the token's first character
    pub line: usize,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        lexeme: impl Into<String>,
        literal: Option<Literal>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            literal,
            line,
        }
    }

    /// The end-of-input marker placed at `line`.
    pub fn eof(line: usize) -> Self {
        Self::new(TokenKind::Eof, "", None, line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// `<Kind> <lexeme> <literal>`, the format of the token dump. Both separators
/// are always written, so a token without a literal ends in a space.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} {} ", self.kind, self.lexeme)?;
        if let Some(literal) = &self.literal {
            write!(f, "{}", literal)?;
        }
        Ok(())
    }
}
