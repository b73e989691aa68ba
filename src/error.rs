use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LexicalError {
    pub line: u32,
    pub message: String,
}

impl LexicalError {
    pub fn new(line: u32, message: &str) -> LexicalError {
        LexicalError {
            line,
            message: message.to_string(),
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.message)
    }
}

// Receives every error found during a scan.  The scanner calls report once
// per illegal lexeme and keeps scanning afterwards.
pub trait Reporter {
    fn report(&self, error: LexicalError);
}

// Prints each error to stderr and remembers that at least one occurred.
pub struct DefaultReporter {
    had_error: Cell<bool>,
}

impl DefaultReporter {
    pub fn new() -> Rc<DefaultReporter> {
        Rc::new(DefaultReporter {
            had_error: Cell::new(false),
        })
    }

    pub fn had_error(&self) -> bool {
        self.had_error.get()
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, error: LexicalError) {
        eprintln!("{}", error);
        self.had_error.set(true);
    }
}
