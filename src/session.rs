use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use crate::engine::QuizEngine;
use crate::models::Token;
use crate::ui;

/// Questions drawn for one fixed-length session.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Pause after each scored answer, so the feedback can be read before the
/// next question scrolls in.
pub const ANSWER_PAUSE: Duration = Duration::from_secs(1);

/// Readability pacing between questions. Zero-delay pacers keep the
/// driver tests instant.
pub struct Pacer {
    delay: Duration,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn pause(&self) {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

/// Re-prompts until the input yields a valid token. End of input counts
/// as a quit, so a closed stdin cannot wedge the loop.
fn prompt_for_token<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Token> {
    loop {
        write!(out, "Your answer: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Token::Quit);
        }
        match Token::parse(&line) {
            Some(token) => return Ok(token),
            None => ui::render_token_hint(out)?,
        }
    }
}

/// Fixed-length session: draws the batch up front, walks it in draw
/// order, and prints a final summary only when the batch is exhausted.
/// Quitting mid-batch leaves the pending question unscored and skips the
/// summary.
pub fn run_batch<R: BufRead, W: Write>(
    engine: &mut QuizEngine,
    input: &mut R,
    out: &mut W,
    batch_size: usize,
    pacer: &Pacer,
) -> io::Result<()> {
    if engine.is_empty() {
        return ui::render_no_questions(out);
    }

    let batch = engine.draw_batch(batch_size);
    ui::render_batch_intro(out, batch.len())?;

    for (index, question) in batch.iter().enumerate() {
        writeln!(out, "\nQuestion {}/{}", index + 1, batch.len())?;
        ui::render_question(out, question)?;

        match prompt_for_token(input, out)? {
            Token::Quit => {
                writeln!(out, "Leaving the quiz")?;
                return Ok(());
            }
            Token::Answer(choice) => {
                let evaluation = engine.evaluate(question, choice);
                ui::render_feedback(out, &evaluation)?;
                pacer.pause();
            }
        }
    }

    ui::render_summary(out, engine.score(), engine.total_questions())
}

/// Open-ended session: keeps drawing single questions (with replacement)
/// until the user quits. Only the per-answer score lines are printed; no
/// parting summary.
pub fn run_practice<R: BufRead, W: Write>(
    engine: &mut QuizEngine,
    input: &mut R,
    out: &mut W,
    pacer: &Pacer,
) -> io::Result<()> {
    if engine.is_empty() {
        return ui::render_no_questions(out);
    }

    ui::render_practice_intro(out)?;

    let mut question_count = 0usize;
    loop {
        let question = match engine.draw_one() {
            Some(question) => question.clone(),
            None => return Ok(()),
        };
        question_count += 1;
        writeln!(out, "\nQuestion #{}", question_count)?;
        ui::render_question(out, &question)?;

        match prompt_for_token(input, out)? {
            Token::Quit => {
                writeln!(out, "Leaving practice mode")?;
                return Ok(());
            }
            Token::Answer(choice) => {
                let evaluation = engine.evaluate(&question, choice);
                ui::render_feedback(out, &evaluation)?;
                pacer.pause();
            }
        }
    }
}
