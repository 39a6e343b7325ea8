use std::io::{self, Write};

use crossterm::style::Stylize;

use crate::engine::Evaluation;

/// Prints the verdict for one answer and the running score line.
///
/// An incorrect answer discloses the correct letter; a correct one does
/// not repeat it.
pub fn render_feedback<W: Write>(out: &mut W, evaluation: &Evaluation) -> io::Result<()> {
    writeln!(out)?;
    if evaluation.correct {
        writeln!(out, "{}", "✓ Correct!".green())?;
    } else {
        writeln!(
            out,
            "{} The correct answer was: {}",
            "✗ Incorrect!".red(),
            evaluation.correct_label.letter()
        )?;
    }
    writeln!(
        out,
        "Score: {}/{} ({:.1}%)",
        evaluation.score,
        evaluation.total,
        evaluation.percentage()
    )
}

/// Final score line for a batch that ran to completion.
pub fn render_summary<W: Write>(out: &mut W, score: usize, total: usize) -> io::Result<()> {
    let percentage = if total > 0 {
        score as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    writeln!(
        out,
        "\nQuiz over! Final score: {}/{} ({:.1}%)",
        score, total, percentage
    )
}

/// Hint shown when a prompt read something other than a valid token.
pub fn render_token_hint<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Please enter a valid option: A, B, C, D or Q to quit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    #[test]
    fn test_correct_feedback_keeps_the_answer_hidden() {
        let evaluation = Evaluation {
            correct: true,
            correct_label: Choice::C,
            score: 1,
            total: 1,
        };
        let mut buf = Vec::new();
        render_feedback(&mut buf, &evaluation).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Correct!"));
        assert!(!text.contains("correct answer was"));
        assert!(text.contains("Score: 1/1 (100.0%)"));
    }

    #[test]
    fn test_incorrect_feedback_discloses_the_letter() {
        let evaluation = Evaluation {
            correct: false,
            correct_label: Choice::C,
            score: 0,
            total: 1,
        };
        let mut buf = Vec::new();
        render_feedback(&mut buf, &evaluation).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Incorrect!"));
        assert!(text.contains("The correct answer was: C"));
        assert!(text.contains("Score: 0/1 (0.0%)"));
    }

    #[test]
    fn test_percentage_is_rendered_to_one_decimal() {
        let evaluation = Evaluation {
            correct: true,
            correct_label: Choice::A,
            score: 1,
            total: 3,
        };
        let mut buf = Vec::new();
        render_feedback(&mut buf, &evaluation).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("1/3 (33.3%)"));
    }

    #[test]
    fn test_summary_line() {
        let mut buf = Vec::new();
        render_summary(&mut buf, 7, 10).unwrap();
        assert!(
            String::from_utf8(buf)
                .unwrap()
                .contains("Final score: 7/10 (70.0%)")
        );
    }
}
