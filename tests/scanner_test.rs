use census_sqlcmd::compiler::scanner::Scanner;
use census_sqlcmd::compiler::token::TokenType;
use census_sqlcmd::types::DbError;

fn collect_tokens(sql: &str) -> Vec<TokenType> {
    let mut scanner = Scanner::new(sql);
    let mut tokens = vec![];

    loop {
        let tok = scanner.next_token().unwrap();
        tokens.push(tok.token_type.clone());
        if tok.token_type == TokenType::Eof {
            break;
        }
    }
    tokens
}

#[test]
fn test_select_statement() {
    let tokens = collect_tokens("SELECT d_name FROM Districts WHERE id = 3;");

    assert_eq!(
        tokens,
        vec![
            TokenType::Select,
            TokenType::Identifier("d_name".to_string()),
            TokenType::From,
            TokenType::Identifier("Districts".to_string()),
            TokenType::Where,
            TokenType::Identifier("id".to_string()),
            TokenType::Operator('='),
            TokenType::NumberLiteral("3".to_string()),
            TokenType::Semicolon,
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_keywords_are_case_insensitive() {
    let tokens = collect_tokens("select * from t order by a");

    assert_eq!(
        tokens,
        vec![
            TokenType::Select,
            TokenType::Operator('*'),
            TokenType::From,
            TokenType::Identifier("t".to_string()),
            TokenType::Order,
            TokenType::By,
            TokenType::Identifier("a".to_string()),
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_string_literals() {
    let tokens = collect_tokens(r#"'it\'s' "say ""hi""" 'ORDER BY x'"#);

    assert_eq!(
        tokens,
        vec![
            TokenType::StringLiteral(r"it\'s".to_string()),
            TokenType::StringLiteral(r#"say "hi""#.to_string()),
            TokenType::StringLiteral("ORDER BY x".to_string()),
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_quoted_identifier_and_decimal() {
    let tokens = collect_tokens("`order`.x >= 12.50");

    assert_eq!(
        tokens,
        vec![
            TokenType::QuotedIdentifier("order".to_string()),
            TokenType::Dot,
            TokenType::Identifier("x".to_string()),
            TokenType::Operator('>'),
            TokenType::Operator('='),
            TokenType::NumberLiteral("12.50".to_string()),
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_comment_needs_whitespace() {
    let tokens = collect_tokens("a -- trailing comment\n--b");

    assert_eq!(
        tokens,
        vec![
            TokenType::Identifier("a".to_string()),
            TokenType::Operator('-'),
            TokenType::Operator('-'),
            TokenType::Identifier("b".to_string()),
            TokenType::Eof,
        ]
    );
}

#[test]
fn test_offsets_and_lines() {
    let mut scanner = Scanner::new("SELECT\n  name");
    let tokens = scanner.tokenize().unwrap();

    assert_eq!(tokens[1].lexeme, "name");
    assert_eq!(tokens[1].offset, 9);
    assert_eq!(tokens[1].line, 2);
    assert_eq!(tokens[1].end(), 13);
}

#[test]
fn test_unterminated_string() {
    let mut scanner = Scanner::new("SELECT 'abc");
    let result = scanner.tokenize();

    match result {
        Err(DbError::Syntax(msg)) => assert!(msg.contains("Unterminated string literal at offset 7")),
        _ => panic!("Expected syntax error"),
    }
}

#[test]
fn test_unterminated_string_reports_starting_line() {
    let mut scanner = Scanner::new("SELECT d_name\nFROM Districts\nWHERE d_name = 'Kent\nAND");

    match scanner.tokenize() {
        Err(DbError::Syntax(msg)) => {
            assert_eq!(msg, "Unterminated string literal at offset 44 on line 3. ")
        }
        _ => panic!("Expected syntax error"),
    }
}

#[test]
fn test_unterminated_quoted_name() {
    let mut scanner = Scanner::new("SELECT a\nFROM `abc");

    match scanner.tokenize() {
        Err(DbError::Syntax(msg)) => {
            assert_eq!(msg, "Unterminated quoted name at offset 14 on line 2. ")
        }
        _ => panic!("Expected syntax error"),
    }
}
