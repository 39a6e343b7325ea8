//! # quizdrill
//!
//! An interactive terminal quiz library over JSON question banks.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizdrill::{Quiz, QuizError};
//!
//! fn main() -> Result<(), QuizError> {
//!     // Load a question bank from a JSON file
//!     let quiz = Quiz::from_json("questions.json")?;
//!
//!     // Run the menu loop on stdin/stdout
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```

mod data;
mod engine;
mod models;
mod session;
mod ui;

use std::io::{self, BufRead, Write};
use std::path::Path;

pub use data::{LoadError, load_questions_from_json};
pub use engine::{Evaluation, QuizEngine};
pub use models::{Choice, Question, Token};
pub use session::{ANSWER_PAUSE, DEFAULT_BATCH_SIZE, Pacer, run_batch, run_practice};

/// Error type for quiz operations.
#[derive(Debug)]
pub enum QuizError {
    /// Error loading questions from file.
    Load(LoadError),
    /// IO error during quiz execution.
    Io(io::Error),
}

impl std::fmt::Display for QuizError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizError::Load(e) => write!(f, "Failed to load questions: {}", e),
            QuizError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::Load(e) => Some(e),
            QuizError::Io(e) => Some(e),
        }
    }
}

impl From<LoadError> for QuizError {
    fn from(err: LoadError) -> Self {
        QuizError::Load(err)
    }
}

impl From<io::Error> for QuizError {
    fn from(err: io::Error) -> Self {
        QuizError::Io(err)
    }
}

/// A quiz instance that can be run in the terminal.
///
/// One engine (and so one scorecard) lives for the whole run; scores
/// accumulate across sessions until the user exits the menu.
pub struct Quiz {
    engine: QuizEngine,
}

impl Quiz {
    /// Create a new quiz from a vector of questions. An empty vector is
    /// accepted; both modes then refuse to start and point at the data
    /// file.
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            engine: QuizEngine::new(questions),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use quizdrill::Quiz;
    ///
    /// let quiz = Quiz::from_json("questions.json").expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self, QuizError> {
        let questions = load_questions_from_json(path)?;
        Ok(Self::new(questions))
    }

    /// Run the menu loop on stdin/stdout until the user exits.
    pub fn run(mut self) -> Result<(), QuizError> {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut out = io::stdout();
        let pacer = Pacer::new(ANSWER_PAUSE);
        self.run_menu(&mut input, &mut out, &pacer)
    }

    /// Get a reference to the underlying engine for custom handling.
    pub fn engine(&self) -> &QuizEngine {
        &self.engine
    }

    /// Get a mutable reference to the underlying engine for custom handling.
    pub fn engine_mut(&mut self) -> &mut QuizEngine {
        &mut self.engine
    }

    fn run_menu<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        pacer: &Pacer,
    ) -> Result<(), QuizError> {
        loop {
            ui::render_menu(out)?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            match line.trim() {
                "1" => {
                    session::run_batch(&mut self.engine, input, out, DEFAULT_BATCH_SIZE, pacer)?
                }
                "2" => session::run_practice(&mut self.engine, input, out, pacer)?,
                "3" => {
                    writeln!(out, "Goodbye!")?;
                    break;
                }
                _ => writeln!(out, "Invalid choice, try again")?,
            }
        }

        Ok(())
    }
}
