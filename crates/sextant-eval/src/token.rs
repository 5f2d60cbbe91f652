//! Lexical analysis.
//!
//! Turns the canonical expression text into a flat token stream. Numeric
//! literals are parsed eagerly into exact `DBig` values; precision is only
//! applied later, at evaluation time.

use dashu::float::DBig;

use crate::error::InvalidExpression;

/// A single lexical token.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal, parsed exactly.
    Number(DBig),
    /// A named constant or function.
    Ident(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `^`
    Caret,
    /// Postfix `!`
    Bang,
    /// Infix `mod`
    Mod,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `,`
    Comma,
}

/// Tokenizes an expression string.
///
/// # Errors
///
/// Returns [`InvalidExpression`] on any character that cannot start a token
/// or on a malformed numeric literal.
pub fn tokenize(input: &str) -> Result<Vec<Token>, InvalidExpression> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        match c {
            ' ' | '\t' | '\n' | '\r' => {
                chars.next();
            }
            '+' => {
                chars.next();
                tokens.push(Token::Plus);
            }
            '-' => {
                chars.next();
                tokens.push(Token::Minus);
            }
            '*' => {
                chars.next();
                tokens.push(Token::Star);
            }
            '/' => {
                chars.next();
                tokens.push(Token::Slash);
            }
            '^' => {
                chars.next();
                tokens.push(Token::Caret);
            }
            '!' => {
                chars.next();
                tokens.push(Token::Bang);
            }
            '(' => {
                chars.next();
                tokens.push(Token::LParen);
            }
            ')' => {
                chars.next();
                tokens.push(Token::RParen);
            }
            ',' => {
                chars.next();
                tokens.push(Token::Comma);
            }
            '0'..='9' | '.' => {
                let end = scan_number(input, start)?;
                let literal = &input[start..end];
                let value = literal.parse::<DBig>().map_err(|_| InvalidExpression)?;
                tokens.push(Token::Number(value));
                while chars.next_if(|&(i, _)| i < end).is_some() {}
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut end = start;
                while let Some(&(i, c)) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        end = i + c.len_utf8();
                        chars.next();
                    } else {
                        break;
                    }
                }
                let ident = &input[start..end];
                if ident == "mod" {
                    tokens.push(Token::Mod);
                } else {
                    tokens.push(Token::Ident(ident.to_string()));
                }
            }
            _ => return Err(InvalidExpression),
        }
    }

    Ok(tokens)
}

/// Scans a numeric literal starting at `start`, returning its end offset.
///
/// Accepts `123`, `1.5`, `.5`, and an optional exponent part (`2e3`,
/// `1.5E-4`). The `e` is only consumed when actually followed by digits, so
/// `2e` lexes as the literal `2` followed by the identifier `e`.
fn scan_number(input: &str, start: usize) -> Result<usize, InvalidExpression> {
    let bytes = input.as_bytes();
    let mut pos = start;
    let mut digits = 0usize;
    let mut seen_point = false;

    while pos < input.len() {
        match bytes[pos] {
            b'0'..=b'9' => {
                digits += 1;
                pos += 1;
            }
            b'.' if !seen_point => {
                seen_point = true;
                pos += 1;
            }
            _ => break,
        }
    }
    if digits == 0 {
        // A bare `.` is not a number.
        return Err(InvalidExpression);
    }

    // Optional exponent part.
    if pos < input.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut exp_pos = pos + 1;
        if exp_pos < input.len() && (bytes[exp_pos] == b'+' || bytes[exp_pos] == b'-') {
            exp_pos += 1;
        }
        if exp_pos < input.len() && bytes[exp_pos].is_ascii_digit() {
            pos = exp_pos;
            while pos < input.len() && bytes[pos].is_ascii_digit() {
                pos += 1;
            }
        }
    }

    Ok(pos)
}
