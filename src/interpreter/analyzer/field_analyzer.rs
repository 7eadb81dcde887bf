use crate::compiler::reserved::is_reserved_word;
use crate::compiler::scanner::Scanner;
use crate::compiler::token::{Token, TokenType};
use crate::interpreter::analyzer::Analyzer;
use crate::interpreter::soundex::PHPSOUNDEX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Field,
    Table,
    Reserved,
    Constant,
    Operator,
    CloseParen,
    PhpSoundex,
}

impl Analyzer {
    /// Check every name in a clause against the known tables and fields,
    /// returning the accumulated error text (empty when the clause is clean).
    pub fn validate_field_names(&mut self, clause: &str) -> String {
        self.note(format!("validateFieldNames('{}')", clause));

        let mut scanner = Scanner::new(clause);
        let tokens = match scanner.tokenize() {
            Ok(tokens) => tokens,
            Err(err) => return err.to_string(),
        };

        let mut errors = String::new();
        let mut depth: i32 = 0;
        let mut add_next_field = false;
        let mut scope: Option<String> = None;
        let mut last: Option<TokenClass> = None;

        for token in &tokens {
            let Some(class) = self.classify(token) else { continue };
            let offset = token.offset;

            match class {
                TokenClass::Field => {
                    let name = token.word().unwrap_or_default().to_string();
                    if add_next_field {
                        self.add_primary_field(&name);
                        add_next_field = false;
                    }

                    if let Some(table) = scope.take() {
                        if self.has_field(&table, &name) {
                            self.note(format!("'{}' at {} is a field name in {}", name, offset, table));
                        } else {
                            errors.push_str(&format!("`{}` is not a field name in `{}`. ", name, table));
                            self.mark_bad(&table);
                        }
                    } else if self.has_field(self.primary(), &name) {
                        self.note(format!("'{}' at {} is a field name", name, offset));
                    } else {
                        let primary = self.primary().to_string();
                        self.note(format!("`{}` is not a field name in `{}`. ", name, primary));
                        errors.push_str(&format!("`{}` is not a field name in `{}`. ", name, primary));
                        self.mark_bad(&primary);
                    }
                }
                TokenClass::Table => {
                    let name = token.word().unwrap_or_default().to_string();
                    if add_next_field {
                        errors.push_str(&format!("Cannot define table name `{}` as a fieldname using AS. ", name));
                        add_next_field = false;
                    } else {
                        self.note(format!("'{}' at {} is a table name", name, offset));
                        scope = Some(name);
                    }
                }
                TokenClass::Reserved => {
                    self.note(format!("'{}' at {} is a reserved word", token.lexeme, offset));
                    if token.token_type == TokenType::As
                        && matches!(last, Some(TokenClass::Field) | Some(TokenClass::CloseParen))
                    {
                        add_next_field = true;
                    }
                }
                TokenClass::Constant => {
                    self.note(format!("{} at {} is a constant", token.lexeme, offset));
                }
                TokenClass::Operator => {
                    self.note(format!("{} at {} is an operator", token.lexeme, offset));
                    if token.token_type == TokenType::LParen {
                        depth += 1;
                    }
                }
                TokenClass::CloseParen => {
                    self.note(format!("{} at {} is an operator", token.lexeme, offset));
                    depth -= 1;
                    if depth < 0 {
                        errors.push_str(&format!("Mis-matched parentheses at {}. ", offset));
                    }
                }
                TokenClass::PhpSoundex => {
                    self.note(format!("'{}' at {} is the soundex marker", token.lexeme, offset));
                }
            }
            last = Some(class);
        }

        if depth > 0 {
            errors.push_str("Mis-matched parentheses at end. ");
        }
        errors
    }

    /// Tokens the validator does not care about yield `None`
    fn classify(&self, token: &Token) -> Option<TokenClass> {
        let class = match &token.token_type {
            TokenType::StringLiteral(_) | TokenType::NumberLiteral(_) => TokenClass::Constant,
            TokenType::RParen => TokenClass::CloseParen,
            TokenType::LParen | TokenType::Comma | TokenType::Dot | TokenType::Operator(_) => {
                TokenClass::Operator
            }
            TokenType::Semicolon | TokenType::Other(_) | TokenType::Eof => return None,
            TokenType::Identifier(word) if word.eq_ignore_ascii_case(PHPSOUNDEX) => {
                TokenClass::PhpSoundex
            }
            TokenType::QuotedIdentifier(word) | TokenType::Identifier(word) => self.classify_word(word),
            _ => self.classify_word(&token.lexeme),
        };
        Some(class)
    }

    fn classify_word(&self, word: &str) -> TokenClass {
        if is_reserved_word(word) {
            TokenClass::Reserved
        } else if self.is_table(word) {
            TokenClass::Table
        } else {
            TokenClass::Field
        }
    }
}
