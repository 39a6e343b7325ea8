use std::io::{self, Write};

use crate::models::{Choice, Question};
use crate::ui::RULE_WIDTH;

/// Prints the question text and its four lettered options between rule
/// lines. Pure presentation; calling it any number of times changes no
/// state anywhere.
pub fn render_question<W: Write>(out: &mut W, question: &Question) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(out, "Question: {}", question.question)?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for choice in Choice::ALL {
        writeln!(out, "{}. {}", choice.letter(), question.option(choice))?;
    }
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_text_and_all_options() {
        let question = Question {
            question: "Which planet is closest to the sun?".to_string(),
            option_a: "Venus".to_string(),
            option_b: "Mercury".to_string(),
            option_c: "Mars".to_string(),
            option_d: "Earth".to_string(),
            label: Choice::B,
        };

        let mut buf = Vec::new();
        render_question(&mut buf, &question).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("Question: Which planet is closest to the sun?"));
        assert!(text.contains("A. Venus"));
        assert!(text.contains("B. Mercury"));
        assert!(text.contains("C. Mars"));
        assert!(text.contains("D. Earth"));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let question = Question {
            question: "q".to_string(),
            option_a: "a".to_string(),
            option_b: "b".to_string(),
            option_c: "c".to_string(),
            option_d: "d".to_string(),
            label: Choice::A,
        };

        let mut first = Vec::new();
        let mut second = Vec::new();
        render_question(&mut first, &question).unwrap();
        render_question(&mut second, &question).unwrap();
        assert_eq!(first, second);
    }
}
