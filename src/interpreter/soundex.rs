use crate::compiler::scanner::Scanner;
use crate::compiler::token::TokenType;

pub const PHPSOUNDEX: &str = "PHPSOUNDEX";

// A B C D E F G H I J K L M N O P Q R S T U V W X Y Z
const CODES: [u8; 26] = [
    0, b'1', b'2', b'3', 0, b'1', b'2', 0, 0, b'2', b'2', b'4', b'5',
    b'5', 0, b'1', b'2', b'6', b'2', b'3', 0, b'1', 0, b'2', 0, b'2',
];

/// Four character soundex code; vowels and `H`/`W` separate repeated codes.
/// Input without any letter yields an empty string.
pub fn soundex(text: &str) -> String {
    let mut code = String::with_capacity(4);
    let mut last = 0u8;

    for c in text.chars().filter(char::is_ascii_alphabetic) {
        if code.len() == 4 {
            break;
        }
        let upper = c.to_ascii_uppercase();
        let digit = CODES[(upper as u8 - b'A') as usize];

        if code.is_empty() {
            code.push(upper);
            last = digit;
        } else if digit != last {
            if digit != 0 {
                code.push(digit as char);
            }
            last = digit;
        }
    }

    if !code.is_empty() {
        while code.len() < 4 {
            code.push('0');
        }
    }
    code
}

/// Replace every `PHPSOUNDEX(field)` with the bare field, returning the rewritten
/// command and the fields whose soundex column must be appended to each row.
pub fn rewrite_phpsoundex(sql: &str) -> (String, Vec<String>) {
    let mut scanner = Scanner::new(sql);
    let Ok(tokens) = scanner.tokenize() else {
        return (sql.to_string(), vec![]);
    };

    let mut rewritten = String::with_capacity(sql.len());
    let mut fields = vec![];
    let mut copied = 0;

    for window in tokens.windows(4) {
        let [marker, open, name, close] = window else { continue };
        let is_marker = matches!(&marker.token_type,
            TokenType::Identifier(word) if word.eq_ignore_ascii_case(PHPSOUNDEX));
        let field = match &name.token_type {
            TokenType::Identifier(field) | TokenType::QuotedIdentifier(field) => field,
            _ => continue,
        };

        if is_marker
            && open.token_type == TokenType::LParen
            && close.token_type == TokenType::RParen
            && marker.offset >= copied
        {
            rewritten.push_str(&sql[copied..marker.offset]);
            rewritten.push_str(&name.lexeme);
            copied = close.end();
            fields.push(field.clone());
        }
    }

    rewritten.push_str(&sql[copied..]);
    (rewritten, fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soundex_codes() {
        assert_eq!(soundex("Robert"), "R163");
        assert_eq!(soundex("Rupert"), "R163");
        assert_eq!(soundex("Tymczak"), "T522");
        assert_eq!(soundex("Pfister"), "P236");
        assert_eq!(soundex("Lee"), "L000");
        assert_eq!(soundex(""), "");
    }

    #[test]
    fn test_rewrite_two_fields() {
        let (sql, fields) = rewrite_phpsoundex(
            "SELECT PHPSOUNDEX(Surname), phpsoundex(GivenName) FROM tblIR",
        );
        assert_eq!(sql, "SELECT Surname, GivenName FROM tblIR");
        assert_eq!(fields, vec!["Surname".to_string(), "GivenName".to_string()]);
    }

    #[test]
    fn test_rewrite_ignores_string_literal() {
        let (sql, fields) = rewrite_phpsoundex("SELECT 'PHPSOUNDEX(x)' FROM t");
        assert_eq!(sql, "SELECT 'PHPSOUNDEX(x)' FROM t");
        assert!(fields.is_empty());
    }
}
