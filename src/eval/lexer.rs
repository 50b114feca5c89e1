use std::fmt;

use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Ident(String),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

impl Token {
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            Token::Plus | Token::Minus | Token::Star | Token::Slash | Token::Percent | Token::Caret
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Token::Number(num) => write!(f, "number {num}"),
            Token::Ident(name) => write!(f, "name '{name}'"),
            Token::Plus => write!(f, "'+'"),
            Token::Minus => write!(f, "'-'"),
            Token::Star => write!(f, "'*'"),
            Token::Slash => write!(f, "'/'"),
            Token::Percent => write!(f, "'%'"),
            Token::Caret => write!(f, "'^'"),
            Token::LParen => write!(f, "'('"),
            Token::RParen => write!(f, "')'"),
        }
    }
}

fn is_allowed(ch: char) -> bool {
    ch.is_ascii_alphanumeric()
        || ch.is_whitespace()
        || matches!(ch, '.' | '_' | '(' | ')' | '+' | '-' | '*' | '/' | '^' | '%')
}

/// Split an expression into tokens paired with their byte offsets
///
/// Fails on the first character outside the permitted set, before any
/// tokenizing happens.
pub fn tokenize(input: &str) -> Result<Vec<(usize, Token)>, EvalError> {
    if let Some(bad) = input.chars().find(|ch| !is_allowed(*ch)) {
        return Err(EvalError::InvalidCharacter(bad));
    }

    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let ch = bytes[i] as char;
        let start = i;

        if ch.is_ascii_whitespace() {
            i += 1;
            continue;
        }
        // Remaining non-ASCII characters passed the whitelist, so they are whitespace
        if !ch.is_ascii() {
            i += input[i..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        let token = match ch {
            '0'..='9' | '.' => {
                while i < bytes.len() && (bytes[i].is_ascii_digit() || bytes[i] == b'.') {
                    i += 1;
                }
                let text = &input[start..i];
                let value = text
                    .parse::<f64>()
                    .map_err(|_| EvalError::InvalidNumber(text.to_string()))?;
                tokens.push((start, Token::Number(value)));
                continue;
            }
            'a'..='z' | 'A'..='Z' | '_' => {
                while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                    i += 1;
                }
                tokens.push((start, Token::Ident(input[start..i].to_string())));
                continue;
            }
            '*' if bytes.get(i + 1) == Some(&b'*') => {
                i += 1;
                Token::Caret
            }
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => Token::Star,
            '/' => Token::Slash,
            '%' => Token::Percent,
            '^' => Token::Caret,
            '(' => Token::LParen,
            ')' => Token::RParen,
            other => return Err(EvalError::InvalidCharacter(other)),
        };

        tokens.push((start, token));
        i += 1;
    }

    Ok(tokens)
}

/// Reject two operators in a row, power included
///
/// A leading minus or one directly after `(` is a unary minus and is left
/// for the parser; a minus after another operator is not.
pub fn check_operator_sequence(tokens: &[(usize, Token)]) -> Result<(), EvalError> {
    for pair in tokens.windows(2) {
        let (_, first) = &pair[0];
        let (pos, second) = &pair[1];
        if first.is_operator() && second.is_operator() {
            return Err(EvalError::ConsecutiveOperators(*pos));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod lexer_tests;
