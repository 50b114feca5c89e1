use super::action::Action;
use super::calculator_state::Calculator;

/// What the two display slots show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Display<'a> {
    pub expression: &'a str,
    pub entry: &'a str,
}

/// Receives the display after every state change
pub trait RenderSink {
    fn render(&mut self, display: &Display<'_>);
}

/// Owned copy of the last rendered display
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayBuffer {
    pub expression: String,
    pub entry: String,
    pub renders: usize,
}

impl RenderSink for DisplayBuffer {
    fn render(&mut self, display: &Display<'_>) {
        self.expression.clear();
        self.expression.push_str(display.expression);
        self.entry.clear();
        self.entry.push_str(display.entry);
        self.renders += 1;
    }
}

/// A calculator bound to the sink that shows it
pub struct Session<S> {
    calculator: Calculator,
    sink: S,
}

impl<S: RenderSink> Session<S> {
    /// Start a session and render the initial state
    pub fn new(sink: S) -> Self {
        let mut session = Self {
            calculator: Calculator::new(),
            sink,
        };
        session.sink.render(&session.calculator.display());
        session
    }

    /// Apply one input event and render the result
    pub fn dispatch(&mut self, action: Action) {
        self.calculator.apply(action);
        self.sink.render(&self.calculator.display());
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
