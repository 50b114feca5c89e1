use std::fmt;

/// A digit key or the decimal point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Digit {
    Num(u8),
    Point,
}

impl Digit {
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Digit::Point),
            '0'..='9' => ch.to_digit(10).map(|d| Digit::Num(d as u8)),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Digit::Num(d) => char::from(b'0' + d),
            Digit::Point => '.',
        }
    }
}

/// Binary operators the calculator can insert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl Operator {
    pub const ALL: [Operator; 5] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
        Operator::Power,
    ];

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '^' => Some(Operator::Power),
            _ => None,
        }
    }

    /// Spelling used in the expression prefix
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
            Operator::Power => '^',
        }
    }

    pub fn is_operator_char(ch: char) -> bool {
        Self::from_char(ch).is_some()
    }
}

/// One user input event; each maps to exactly one calculator operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Digit(Digit),
    Operator(Operator),
    OpenParen,
    CloseParen,
    SquareRoot,
    Square,
    ToggleSign,
    Percent,
    Backspace,
    Clear,
    Compute,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Digit(digit) => write!(f, "{}", digit.as_char()),
            Action::Operator(op) => write!(f, "{}", op.symbol()),
            Action::OpenParen => write!(f, "("),
            Action::CloseParen => write!(f, ")"),
            Action::SquareRoot => write!(f, "sqrt"),
            Action::Square => write!(f, "square"),
            Action::ToggleSign => write!(f, "negate"),
            Action::Percent => write!(f, "%"),
            Action::Backspace => write!(f, "backspace"),
            Action::Clear => write!(f, "clear"),
            Action::Compute => write!(f, "="),
        }
    }
}
