use thiserror::Error;

/// Why the restricted evaluator refused or failed an expression
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("empty expression")]
    Empty,

    #[error("invalid character '{0}'")]
    InvalidCharacter(char),

    #[error("malformed number '{0}'")]
    InvalidNumber(String),

    #[error("consecutive operators at position {0}")]
    ConsecutiveOperators(usize),

    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("unknown function '{0}'")]
    UnknownFunction(String),

    #[error("unexpected {0}")]
    UnexpectedToken(String),

    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),

    #[error("result is not a finite number")]
    NonFinite,
}

/// Custom error types for calcterm
#[derive(Debug, Error)]
pub enum CalcError {
    #[error("Invalid config file {path}: {message}")]
    InvalidConfig { path: String, message: String },

    #[error("Evaluation failed: {0}")]
    Eval(#[from] EvalError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
