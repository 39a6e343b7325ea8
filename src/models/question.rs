use serde::Deserialize;

/// One of the four answer letters a question can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const ALL: [Choice; 4] = [Choice::A, Choice::B, Choice::C, Choice::D];

    pub fn letter(self) -> char {
        match self {
            Choice::A => 'A',
            Choice::B => 'B',
            Choice::C => 'C',
            Choice::D => 'D',
        }
    }

    /// Maps an uppercase letter to a choice.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            _ => None,
        }
    }
}

/// A single multiple-choice question as stored in the bank file.
///
/// The JSON shape is `{"question", "A", "B", "C", "D", "label"}` with
/// `label` naming the correct letter. A `label` outside `A`-`D` fails
/// deserialization, so a loaded question always has a valid answer key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Question {
    pub question: String,
    #[serde(rename = "A")]
    pub option_a: String,
    #[serde(rename = "B")]
    pub option_b: String,
    #[serde(rename = "C")]
    pub option_c: String,
    #[serde(rename = "D")]
    pub option_d: String,
    pub label: Choice,
}

impl Question {
    /// Option text for the given letter.
    pub fn option(&self, choice: Choice) -> &str {
        match choice {
            Choice::A => &self.option_a,
            Choice::B => &self.option_b,
            Choice::C => &self.option_c,
            Choice::D => &self.option_d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_deserializes_from_bank_json() {
        let json = r#"{
            "question": "Which keyword introduces a constant?",
            "A": "let",
            "B": "const",
            "C": "static",
            "D": "mut",
            "label": "B"
        }"#;
        let question: Question = serde_json::from_str(json).unwrap();
        assert_eq!(question.question, "Which keyword introduces a constant?");
        assert_eq!(question.label, Choice::B);
        assert_eq!(question.option(Choice::A), "let");
        assert_eq!(question.option(Choice::D), "mut");
    }

    #[test]
    fn test_bad_label_is_rejected() {
        let json = r#"{
            "question": "q",
            "A": "a",
            "B": "b",
            "C": "c",
            "D": "d",
            "label": "E"
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_choice_letters_round_trip() {
        for choice in Choice::ALL {
            assert_eq!(Choice::from_letter(choice.letter()), Some(choice));
        }
        assert_eq!(Choice::from_letter('E'), None);
        assert_eq!(Choice::from_letter('a'), None);
    }
}
