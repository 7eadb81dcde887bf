use crate::compiler::reserved::is_reserved_word;
use crate::compiler::scanner::Scanner;
use crate::compiler::token::{Token, TokenType};
use crate::interpreter::analyzer::Analyzer;

fn is_join_start(token_type: &TokenType) -> bool {
    matches!(
        token_type,
        TokenType::Left
            | TokenType::Right
            | TokenType::Inner
            | TokenType::Outer
            | TokenType::Cross
            | TokenType::Join
            | TokenType::StraightJoin
    )
}

/// Plain word usable as an alias; reserved words such as ON or USING never are
fn alias_word(token: &Token) -> Option<&str> {
    match &token.token_type {
        TokenType::Identifier(name) if !is_reserved_word(name) => Some(name.as_str()),
        TokenType::QuotedIdentifier(name) => Some(name.as_str()),
        _ => None,
    }
}

impl Analyzer {
    /**
    join := [[AS] alias] (join_group)*
    join_group := [LEFT|RIGHT] [INNER|OUTER|CROSS] (JOIN|STRAIGHT_JOIN) table [AS] alias rest
     */
    pub fn parse_join(&mut self, join: &str) -> String {
        let mut messages = String::new();
        if join.trim().is_empty() {
            return messages;
        }
        self.note(format!("parseJoin('{}')", join));

        let mut scanner = Scanner::new(join);
        let tokens = match scanner.tokenize() {
            Ok(tokens) => tokens,
            Err(err) => return err.to_string(),
        };

        // alias of the primary table: FROM t [AS] x JOIN ...
        let mut index = 0;
        if tokens[index].token_type == TokenType::As {
            index += 1;
        }
        if let Some(alias) = alias_word(&tokens[index]) {
            let primary = self.primary().to_string();
            self.register_alias(alias, &primary);
        }

        let mut next = next_join_group(&tokens, index);
        while let Some(start) = next {
            let mut index = start;
            if matches!(tokens[index].token_type, TokenType::Left | TokenType::Right) {
                index += 1;
            }
            if matches!(tokens[index].token_type, TokenType::Inner | TokenType::Outer | TokenType::Cross) {
                index += 1;
            }
            if !matches!(tokens[index].token_type, TokenType::Join | TokenType::StraightJoin) {
                next = next_join_group(&tokens, index + 1);
                continue;
            }
            index += 1;

            let Some(table) = tokens[index].word().map(str::to_string) else {
                break;
            };
            index += 1;
            if !self.is_table(&table) {
                messages.push_str(&format!("Table name `{}` in JOIN is invalid. ", table));
            }

            if tokens[index].token_type == TokenType::As {
                index += 1;
            }
            if let Some(alias) = alias_word(&tokens[index]) {
                let alias = alias.to_string();
                self.register_alias(&alias, &table);
                index += 1;
            }

            next = next_join_group(&tokens, index);
        }

        messages
    }
}

/// Start of the next top-level join group at or after `from`
fn next_join_group(tokens: &[Token], from: usize) -> Option<usize> {
    let mut depth: i32 = 0;
    for (index, token) in tokens.iter().enumerate().skip(from) {
        match token.token_type {
            TokenType::LParen => depth += 1,
            TokenType::RParen => depth -= 1,
            ref t if depth == 0 && is_join_start(t) => return Some(index),
            _ => {}
        }
    }
    None
}
