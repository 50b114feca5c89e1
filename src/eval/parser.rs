use super::lexer::Token;
use crate::error::EvalError;

/// Deepest nesting of groups, calls and exponents accepted
pub const MAX_DEPTH: usize = 256;

/// Recursive-descent evaluator over a token stream
///
/// Grammar, lowest precedence first:
///
/// ```text
/// expression := term (('+' | '-') term)*
/// term       := power (('*' | '/' | '%') power)*
/// power      := unary ('^' power)?
/// unary      := '-' unary | primary
/// primary    := number | '(' expression ')' | name '(' expression ')'
/// ```
pub struct Parser<'a> {
    tokens: &'a [(usize, Token)],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [(usize, Token)]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Evaluate the whole token stream
    pub fn parse(mut self) -> Result<f64, EvalError> {
        let value = self.expression()?;
        match self.peek() {
            None => Ok(value),
            Some(Token::RParen) => Err(EvalError::UnbalancedParentheses),
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
        }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos).map(|(_, token)| token)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Run `f` one nesting level deeper, failing past [`MAX_DEPTH`]
    fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, EvalError>,
    ) -> Result<T, EvalError> {
        if self.depth >= MAX_DEPTH {
            return Err(EvalError::TooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn expect_close(&mut self) -> Result<(), EvalError> {
        match self.advance() {
            Some(Token::RParen) => Ok(()),
            None => Err(EvalError::UnbalancedParentheses),
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
        }
    }

    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some(Token::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(Token::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.power()?;
        loop {
            match self.peek() {
                Some(Token::Star) => {
                    self.advance();
                    value *= self.power()?;
                }
                Some(Token::Slash) => {
                    self.advance();
                    value /= self.power()?;
                }
                Some(Token::Percent) => {
                    self.advance();
                    value %= self.power()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.unary()?;
        if let Some(Token::Caret) = self.peek() {
            self.advance();
            // Right-associative: 2^3^2 == 2^9
            let exponent = self.nested(Self::power)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        if let Some(Token::Minus) = self.peek() {
            self.advance();
            return Ok(-self.unary()?);
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        match self.advance() {
            Some(Token::Number(value)) => Ok(*value),
            Some(Token::LParen) => {
                let value = self.nested(Self::expression)?;
                self.expect_close()?;
                Ok(value)
            }
            Some(Token::Ident(name)) => self.call(name),
            Some(Token::RParen) => Err(EvalError::UnbalancedParentheses),
            Some(token) => Err(EvalError::UnexpectedToken(token.to_string())),
            None => Err(EvalError::UnexpectedToken("end of expression".to_string())),
        }
    }

    fn call(&mut self, name: &str) -> Result<f64, EvalError> {
        let function: fn(f64) -> f64 = match name {
            "sqrt" => f64::sqrt,
            "sqr" => |x| x * x,
            _ => return Err(EvalError::UnknownFunction(name.to_string())),
        };

        match self.advance() {
            Some(Token::LParen) => {}
            Some(token) => return Err(EvalError::UnexpectedToken(token.to_string())),
            None => return Err(EvalError::UnexpectedToken("end of expression".to_string())),
        }

        let argument = self.nested(Self::expression)?;
        self.expect_close()?;
        Ok(function(argument))
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod parser_tests;
