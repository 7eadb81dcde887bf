use log::debug;

use crate::compiler::ast::*;
use crate::compiler::scanner::Scanner;
use crate::compiler::token::{Token, TokenType};
use crate::types::{DbError, DbResult, DUAL_TABLE};

type ParseResult<T> = DbResult<T>;

/// Clauses following the primary table of a SELECT, in the order they must appear
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Clause {
    Join,
    Where,
    GroupBy,
    Having,
    OrderBy,
    Limit,
    Procedure,
}

impl Clause {
    fn keyword(&self) -> &'static str {
        match self {
            Clause::Join => "FROM",
            Clause::Where => "WHERE",
            Clause::GroupBy => "GROUP BY",
            Clause::Having => "HAVING",
            Clause::OrderBy => "ORDER BY",
            Clause::Limit => "LIMIT",
            Clause::Procedure => "PROCEDURE",
        }
    }
}

pub struct Parser {
    source: String,
    tokens: Vec<Token>,
    current: usize,
    messages: Vec<String>,
}

impl Parser {

    /// Creating parser from scanner result
    pub fn new(scanner: &mut Scanner) -> ParseResult<Self> {
        let mut tokens = scanner.tokenize()?;

        // interactive commands may carry one trailing semicolon
        if tokens.len() >= 2 && tokens[tokens.len() - 2].token_type == TokenType::Semicolon {
            tokens.remove(tokens.len() - 2);
        }

        Ok(Parser {
            source: scanner.source().to_string(),
            tokens,
            current: 0,
            messages: vec![],
        })
    }

    /// Non-fatal problems found while splitting clauses, such as a malformed LIMIT
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Main parser method
    pub fn parse(&mut self) -> ParseResult<Statement> {
        if self.is_at_end() {
            return Err(DbError::Syntax("No command was given. ".to_string()));
        }

        let explain = self.match_token(TokenType::Explain);
        let verb_token = self.advance();

        let verb = match verb_token.token_type {
            TokenType::Select => Some(Verb::Select),
            TokenType::Insert => Some(Verb::Insert),
            TokenType::Update => Some(Verb::Update),
            TokenType::Delete => Some(Verb::Delete),
            TokenType::Show => Some(Verb::Show),
            TokenType::Alter => Some(Verb::Alter),
            TokenType::Source => Some(Verb::Source),
            _ => None,
        };

        let verb = match verb {
            Some(verb) if !self.is_at_end() => verb,
            _ => {
                return Err(DbError::Syntax(format!(
                    "'{}' is not a valid command verb. ",
                    verb_token.lexeme.to_uppercase()
                )))
            }
        };

        // one statement per command
        if self.tokens.iter().any(|t| t.token_type == TokenType::Semicolon) {
            return Err(DbError::Syntax(format!("Unsupported syntax for {} command. ", verb)));
        }

        let mut statement = match verb {
            Verb::Select => self.parse_select()?,
            Verb::Insert => self.parse_insert()?,
            Verb::Update => self.parse_update()?,
            Verb::Delete => self.parse_delete()?,
            Verb::Show => self.parse_show()?,
            Verb::Alter => self.parse_alter()?,
            Verb::Source => self.parse_source()?,
        };
        statement.explain = explain;

        debug!("classified {} on table {:?}", statement.verb, statement.table);
        Ok(statement)
    }

    /**
    select_stmt := SELECT operand (, operand)* [FROM table [join] [WHERE expr]
        [GROUP BY expr] [HAVING expr] [ORDER BY expr] [LIMIT limit] [PROCEDURE text]]
     */
    fn parse_select(&mut self) -> ParseResult<Statement> {
        let mut statement = Statement::new(Verb::Select);

        let start = self.current;
        let from = self.find_top_level(start, |t| *t == TokenType::From);
        let end = from.unwrap_or(self.eof_index());

        statement.operands = self.span(start, end);
        statement.operand_list = self.split_top_level_commas(start, end);

        let Some(from) = from else {
            statement.table = Some(DUAL_TABLE.to_string());
            return Ok(statement);
        };

        self.current = from + 1;
        let table = self.consume_name()
            .ok_or_else(|| DbError::Syntax("Unsupported syntax for SELECT command. ".to_string()))?;
        statement.table = Some(table);

        self.parse_select_clauses(&mut statement);
        Ok(statement)
    }

    /// Carve the text after the primary table at top-level clause keywords
    fn parse_select_clauses(&mut self, statement: &mut Statement) {
        let mut clause = Clause::Join;
        let mut clause_start = self.current;
        let mut depth: i32 = 0;
        let mut limit_text = None;
        let mut index = self.current;

        while index < self.eof_index() {
            let token_type = &self.tokens[index].token_type;
            match token_type {
                TokenType::LParen => depth += 1,
                TokenType::RParen => depth -= 1,
                _ => {}
            }

            let boundary = if depth == 0 { self.clause_boundary(index) } else { None };
            match boundary {
                Some((next, width)) if next > clause => {
                    let text = self.span(clause_start, index);
                    self.store_clause(statement, clause, text, &mut limit_text);
                    clause = next;
                    index += width;
                    clause_start = index;
                    continue;
                }
                Some((next, _)) => {
                    self.messages.push(format!(
                        "Unexpected keyword {} after {}. ",
                        next.keyword(),
                        clause.keyword()
                    ));
                }
                None if depth == 0
                    && clause != Clause::Join
                    && self.tokens[index].token_type == TokenType::From =>
                {
                    self.messages.push(format!("Unexpected keyword FROM after {}. ", clause.keyword()));
                }
                None => {}
            }
            index += 1;
        }

        let text = self.span(clause_start, self.eof_index());
        self.store_clause(statement, clause, text, &mut limit_text);
        self.current = self.eof_index();

        if let Some(text) = limit_text {
            statement.limit = self.parse_limit(&text);
        }
    }

    fn store_clause(
        &self,
        statement: &mut Statement,
        clause: Clause,
        text: String,
        limit_text: &mut Option<String>,
    ) {
        match clause {
            Clause::Join => statement.join = text,
            Clause::Where => statement.where_clause = Some(text),
            Clause::GroupBy => statement.group_by = Some(text),
            Clause::Having => statement.having = Some(text),
            Clause::OrderBy => statement.order_by = Some(text),
            Clause::Limit => *limit_text = Some(text),
            Clause::Procedure => statement.procedure = Some(text),
        }
    }

    /// Clause keyword starting at index, with the number of tokens it spans
    fn clause_boundary(&self, index: usize) -> Option<(Clause, usize)> {
        let next_is_by = self.tokens.get(index + 1).map(|t| &t.token_type) == Some(&TokenType::By);
        match self.tokens[index].token_type {
            TokenType::Where => Some((Clause::Where, 1)),
            TokenType::Group if next_is_by => Some((Clause::GroupBy, 2)),
            TokenType::Having => Some((Clause::Having, 1)),
            TokenType::Order if next_is_by => Some((Clause::OrderBy, 2)),
            TokenType::Limit => Some((Clause::Limit, 1)),
            TokenType::Procedure => Some((Clause::Procedure, 1)),
            _ => None,
        }
    }

    /**
    limit := count | offset , count | count OFFSET offset
     */
    fn parse_limit(&mut self, text: &str) -> Option<Limit> {
        let mut scanner = Scanner::new(text);
        let kinds: Vec<TokenType> = match scanner.tokenize() {
            Ok(tokens) => tokens.into_iter()
                .map(|t| t.token_type)
                .filter(|t| *t != TokenType::Eof)
                .collect(),
            Err(_) => vec![],
        };

        let number = |t: &TokenType| match t {
            TokenType::NumberLiteral(v) => v.parse::<u64>().ok(),
            _ => None,
        };

        let limit = match kinds.as_slice() {
            [count] => number(count).map(|count| Limit { count, offset: None }),
            [offset, TokenType::Comma, count] => match (number(offset), number(count)) {
                (Some(offset), Some(count)) => Some(Limit { count, offset: Some(offset) }),
                _ => None,
            },
            [count, TokenType::Offset, offset] => match (number(count), number(offset)) {
                (Some(count), Some(offset)) => Some(Limit { count, offset: Some(offset) }),
                _ => None,
            },
            _ => None,
        };

        if limit.is_none() {
            self.messages.push(format!("Unexpected value 'LIMIT {}'. ", text));
        }
        limit
    }

    /**
    insert_stmt := INSERT [IGNORE] INTO table rest
     */
    fn parse_insert(&mut self) -> ParseResult<Statement> {
        let unsupported = || DbError::Syntax("Unsupported syntax for INSERT command. ".to_string());
        let mut statement = Statement::new(Verb::Insert);

        statement.ignore = self.match_token(TokenType::Ignore);
        if !self.match_token(TokenType::Into) {
            return Err(unsupported());
        }
        statement.table = Some(self.consume_name().ok_or_else(unsupported)?);

        statement.operands = self.span(self.current, self.eof_index());
        if statement.operands.is_empty() {
            return Err(unsupported());
        }
        self.current = self.eof_index();
        Ok(statement)
    }

    /**
    update_stmt := UPDATE table assignments WHERE expr
     */
    fn parse_update(&mut self) -> ParseResult<Statement> {
        let unsupported = || DbError::Syntax("Unsupported syntax for UPDATE command. ".to_string());
        let mut statement = Statement::new(Verb::Update);

        statement.table = Some(self.consume_name().ok_or_else(unsupported)?);

        let start = self.current;
        let where_index = self.find_last_top_level(start, |t| *t == TokenType::Where)
            .ok_or_else(unsupported)?;
        statement.operands = self.span(start, where_index);
        if statement.operands.is_empty() {
            return Err(unsupported());
        }
        statement.where_clause = Some(self.span(where_index + 1, self.eof_index()));
        self.current = self.eof_index();
        Ok(statement)
    }

    /**
    delete_stmt := DELETE [modifier] FROM table [join] WHERE expr
     */
    fn parse_delete(&mut self) -> ParseResult<Statement> {
        let unsupported = || DbError::Syntax("Unsupported syntax for DELETE command. ".to_string());
        let mut statement = Statement::new(Verb::Delete);

        let start = self.current;
        let from = self.find_top_level(start, |t| *t == TokenType::From).ok_or_else(unsupported)?;
        statement.modifier = self.span(start, from);

        self.current = from + 1;
        statement.table = Some(self.consume_name().ok_or_else(unsupported)?);

        let rest = self.current;
        let where_index = self.find_last_top_level(rest, |t| *t == TokenType::Where)
            .ok_or_else(unsupported)?;
        statement.join = self.span(rest, where_index);
        statement.where_clause = Some(self.span(where_index + 1, self.eof_index()));
        self.current = self.eof_index();
        Ok(statement)
    }

    /**
    show_stmt := SHOW CREATE TABLE table [rest]
     */
    fn parse_show(&mut self) -> ParseResult<Statement> {
        let unsupported = || DbError::Syntax("Unsupported syntax for SHOW command. ".to_string());
        let mut statement = Statement::new(Verb::Show);

        if !(self.match_token(TokenType::Create) && self.match_token(TokenType::Table)) {
            return Err(unsupported());
        }
        statement.table = Some(self.consume_name().ok_or_else(unsupported)?);
        statement.rest = self.span(self.current, self.eof_index());
        self.current = self.eof_index();
        Ok(statement)
    }

    /**
    alter_stmt := ALTER TABLE table rest
     */
    fn parse_alter(&mut self) -> ParseResult<Statement> {
        let unsupported = || DbError::Syntax("Unsupported syntax for ALTER command. ".to_string());
        let mut statement = Statement::new(Verb::Alter);

        if !self.match_token(TokenType::Table) {
            return Err(unsupported());
        }
        statement.table = Some(self.consume_name().ok_or_else(unsupported)?);
        statement.rest = self.span(self.current, self.eof_index());
        self.current = self.eof_index();
        Ok(statement)
    }

    /**
    source_stmt := SOURCE path
     */
    fn parse_source(&mut self) -> ParseResult<Statement> {
        let mut statement = Statement::new(Verb::Source);

        let path = match &self.peek().token_type {
            TokenType::StringLiteral(path) if self.current + 1 == self.eof_index() => path.clone(),
            _ => self.span(self.current, self.eof_index()),
        };
        if path.is_empty() {
            return Err(DbError::Syntax("Unsupported syntax for SOURCE command. ".to_string()));
        }
        statement.path = Some(path);
        self.current = self.eof_index();
        Ok(statement)
    }

    // helper functions
    fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        if !self.is_at_end() { self.current += 1; }
        self.tokens[self.current - 1].clone()
    }

    fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    fn eof_index(&self) -> usize {
        self.tokens.len() - 1
    }

    fn match_token(&mut self, token: TokenType) -> bool {
        if self.peek().token_type == token {
            self.advance();
            true
        } else {
            false
        }
    }

    /// table name: bare word, keyword used as a name, or back-quoted name
    fn consume_name(&mut self) -> Option<String> {
        let name = self.peek().word().map(str::to_string)?;
        self.advance();
        Some(name)
    }

    /// Source text covered by tokens[start..end]
    fn span(&self, start: usize, end: usize) -> String {
        if start >= end {
            return String::new();
        }
        self.source[self.tokens[start].offset..self.tokens[end - 1].end()].trim().to_string()
    }

    /// First token at parenthesis depth zero satisfying the predicate
    fn find_top_level(&self, start: usize, predicate: impl Fn(&TokenType) -> bool) -> Option<usize> {
        let mut depth: i32 = 0;
        for index in start..self.eof_index() {
            let token_type = &self.tokens[index].token_type;
            match token_type {
                TokenType::LParen => depth += 1,
                TokenType::RParen => depth -= 1,
                t if depth == 0 && predicate(t) => return Some(index),
                _ => {}
            }
        }
        None
    }

    /// Last token at parenthesis depth zero satisfying the predicate
    fn find_last_top_level(&self, start: usize, predicate: impl Fn(&TokenType) -> bool) -> Option<usize> {
        let mut depth: i32 = 0;
        let mut found = None;
        for index in start..self.eof_index() {
            let token_type = &self.tokens[index].token_type;
            match token_type {
                TokenType::LParen => depth += 1,
                TokenType::RParen => depth -= 1,
                t if depth == 0 && predicate(t) => found = Some(index),
                _ => {}
            }
        }
        found
    }

    fn split_top_level_commas(&self, start: usize, end: usize) -> Vec<String> {
        let mut operands = vec![];
        let mut depth: i32 = 0;
        let mut operand_start = start;

        for index in start..end {
            match self.tokens[index].token_type {
                TokenType::LParen => depth += 1,
                TokenType::RParen => depth -= 1,
                TokenType::Comma if depth == 0 => {
                    operands.push(self.span(operand_start, index));
                    operand_start = index + 1;
                }
                _ => {}
            }
        }

        if operand_start < end {
            operands.push(self.span(operand_start, end));
        }
        operands
    }
}

/// Classify one command, returning the statement together with non-fatal messages
pub fn parse_command(sql: &str) -> ParseResult<(Statement, Vec<String>)> {
    let mut scanner = Scanner::new(sql.trim());
    let mut parser = Parser::new(&mut scanner)?;
    let statement = parser.parse()?;
    Ok((statement, parser.messages().to_vec()))
}
