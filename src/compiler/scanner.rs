use crate::compiler::token::{Token, TokenType};
use crate::types::{DbError, DbResult, Offset};

pub struct Scanner {
    source: String,
    chars: Vec<(Offset, char)>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {

    pub fn new(source: &str) -> Self {
        Self {
            source: source.to_string(),
            chars: source.char_indices().collect(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Scan the whole source, ending with an Eof token
    pub fn tokenize(&mut self) -> DbResult<Vec<Token>> {
        let mut tokens = vec![];
        loop {
            let token = self.next_token()?;
            let done = token.token_type == TokenType::Eof;
            tokens.push(token);
            if done {
                break;
            }
        }
        Ok(tokens)
    }

    /// Checking reaching end of input
    fn is_at_end(&self) -> bool {
        self.current >= self.chars.len()
    }

    /// Return and consume current character
    fn advance(&mut self) -> char {
        let c = self.chars[self.current].1;
        self.current += 1;
        c
    }

    /// Return current character, not consume
    fn peek(&self) -> char {
        if self.is_at_end() { '\0' } else { self.chars[self.current].1 }
    }

    /// Return next character, not consume
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.chars.len() { '\0' } else { self.chars[self.current + 1].1 }
    }

    fn byte_offset(&self, index: usize) -> Offset {
        self.chars.get(index).map(|(offset, _)| *offset).unwrap_or(self.source.len())
    }

    /// Create token of given type
    fn add_token(&self, token_type: TokenType) -> Token {
        let offset = self.byte_offset(self.start);
        let lexeme = self.source[offset..self.byte_offset(self.current)].to_string();

        Token {
            token_type,
            lexeme,
            line: self.line,
            offset,
        }
    }

    /// Skip whitespace and comment
    fn skip_whitespace(&mut self) {
        while !self.is_at_end() {
            match self.peek() {
                ' ' | '\r' | '\t' => { self.advance(); },
                '\n' => {
                    // enter new line
                    self.line += 1;
                    self.advance();
                }
                '-' if self.peek_next() == '-' && self.comment_follows() => {
                    // SQL comment: -- until end of line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    // MySQL only treats "--" as a comment when followed by whitespace
    fn comment_follows(&self) -> bool {
        match self.chars.get(self.current + 2) {
            None => true,
            Some((_, c)) => c.is_whitespace(),
        }
    }

    /// Scan keyword and identifier
    fn identifier(&mut self) -> Token {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.chars[self.start..self.current].iter().map(|(_, c)| c).collect();
        let token_type = TokenType::keyword(&text.to_uppercase())
            .unwrap_or(TokenType::Identifier(text));

        self.add_token(token_type)
    }

    /// Scan integer or decimal number
    fn number(&mut self) -> Token {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance();
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let value: String = self.chars[self.start..self.current].iter().map(|(_, c)| c).collect();
        self.add_token(TokenType::NumberLiteral(value))
    }

    /// Scan string; a backslash escapes the next character and a doubled quote continues the string
    fn string(&mut self, quote: char) -> DbResult<Token> {
        let mut value = String::new();
        let line = self.line;
        loop {
            if self.is_at_end() {
                return Err(DbError::Syntax(format!(
                    "Unterminated string literal at offset {} on line {}. ",
                    self.byte_offset(self.start),
                    line
                )));
            }

            let c = self.advance();
            match c {
                '\\' if !self.is_at_end() => {
                    value.push(c);
                    value.push(self.advance());
                }
                c if c == quote => {
                    if self.peek() == quote {
                        value.push(self.advance());
                    } else {
                        break;
                    }
                }
                '\n' => {
                    self.line += 1;
                    value.push(c);
                }
                _ => value.push(c),
            }
        }

        Ok(self.add_token(TokenType::StringLiteral(value)))
    }

    /// Scan `quoted` name
    fn quoted_identifier(&mut self) -> DbResult<Token> {
        while self.peek() != '`' && !self.is_at_end() {
            self.advance();
        }

        if self.is_at_end() {
            return Err(DbError::Syntax(format!(
                "Unterminated quoted name at offset {} on line {}. ",
                self.byte_offset(self.start),
                self.line
            )));
        }

        // closing quote
        self.advance();

        let name: String = self.chars[self.start + 1..self.current - 1].iter().map(|(_, c)| c).collect();
        Ok(self.add_token(TokenType::QuotedIdentifier(name)))
    }

    /// Scan tokens from text
    pub fn next_token(&mut self) -> DbResult<Token> {
        self.skip_whitespace();
        self.start = self.current;

        if self.is_at_end() {
            return Ok(self.add_token(TokenType::Eof));
        }

        let c = self.advance();
        let token = match c {
            '(' => self.add_token(TokenType::LParen),
            ')' => self.add_token(TokenType::RParen),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            ';' => self.add_token(TokenType::Semicolon),
            '-' | '+' | '*' | '/' | '|' | '&' | '!' | '<' | '=' | '>' => {
                self.add_token(TokenType::Operator(c))
            }
            '"' | '\'' => self.string(c)?,
            '`' => self.quoted_identifier()?,
            '0'..='9' => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier(),
            _ => self.add_token(TokenType::Other(c)),
        };
        Ok(token)
    }
}
