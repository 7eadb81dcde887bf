use crate::types::Offset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenType {
    // symbols
    LParen,          // (
    RParen,          // )
    Comma,           // ,
    Dot,             // .
    Semicolon,       // ;
    Operator(char),  // - + * / | & ! < = >
    Other(char),     // anything the validator ignores

    // literals
    Identifier(String),
    QuotedIdentifier(String), // `name`
    NumberLiteral(String),
    StringLiteral(String),

    // verbs
    Select, Insert, Update, Delete, Show, Alter, Source, Explain,

    // clause keywords
    From, Where, Group, Having, Order, By, Limit, Offset, Procedure,
    Into, Ignore, Create, Table, As, On,

    // join keywords
    Join, StraightJoin, Left, Right, Inner, Outer, Cross,

    // special
    Eof,
}

impl TokenType {
    /// Map an upper-cased word to its keyword, if it is one the parser cares about.
    pub fn keyword(upper: &str) -> Option<TokenType> {
        let token_type = match upper {
            "SELECT" => TokenType::Select,
            "INSERT" => TokenType::Insert,
            "UPDATE" => TokenType::Update,
            "DELETE" => TokenType::Delete,
            "SHOW" => TokenType::Show,
            "ALTER" => TokenType::Alter,
            "SOURCE" => TokenType::Source,
            "EXPLAIN" => TokenType::Explain,
            "FROM" => TokenType::From,
            "WHERE" => TokenType::Where,
            "GROUP" => TokenType::Group,
            "HAVING" => TokenType::Having,
            "ORDER" => TokenType::Order,
            "BY" => TokenType::By,
            "LIMIT" => TokenType::Limit,
            "OFFSET" => TokenType::Offset,
            "PROCEDURE" => TokenType::Procedure,
            "INTO" => TokenType::Into,
            "IGNORE" => TokenType::Ignore,
            "CREATE" => TokenType::Create,
            "TABLE" => TokenType::Table,
            "AS" => TokenType::As,
            "ON" => TokenType::On,
            "JOIN" => TokenType::Join,
            "STRAIGHT_JOIN" => TokenType::StraightJoin,
            "LEFT" => TokenType::Left,
            "RIGHT" => TokenType::Right,
            "INNER" => TokenType::Inner,
            "OUTER" => TokenType::Outer,
            "CROSS" => TokenType::Cross,
            _ => return None,
        };
        Some(token_type)
    }

    pub fn is_keyword(&self) -> bool {
        !matches!(
            self,
            TokenType::LParen
                | TokenType::RParen
                | TokenType::Comma
                | TokenType::Dot
                | TokenType::Semicolon
                | TokenType::Operator(_)
                | TokenType::Other(_)
                | TokenType::Identifier(_)
                | TokenType::QuotedIdentifier(_)
                | TokenType::NumberLiteral(_)
                | TokenType::StringLiteral(_)
                | TokenType::Eof
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub token_type: TokenType,
    pub lexeme: String,
    pub line: usize,      // line number for error handling
    pub offset: Offset,   // byte offset of the lexeme in the source
}

impl Token {
    /// Byte offset just past the end of the lexeme.
    pub fn end(&self) -> Offset {
        self.offset + self.lexeme.len()
    }

    /// Name carried by a word-like token: identifiers, back-quoted names and keywords.
    pub fn word(&self) -> Option<&str> {
        match &self.token_type {
            TokenType::Identifier(name) | TokenType::QuotedIdentifier(name) => Some(name.as_str()),
            t if t.is_keyword() => Some(self.lexeme.as_str()),
            _ => None,
        }
    }
}
