use std::path::PathBuf;

use clap::Parser;
use quizdrill::{Quiz, load_questions_from_json};

/// Tried first, relative to the working directory.
const PRIMARY_BANK_PATH: &str = "data/questions.json";
/// Fallback when the primary dataset is absent.
const FALLBACK_BANK_PATH: &str = "questions.json";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long)]
    questions: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    let path = args.questions.unwrap_or_else(resolve_bank_path);

    // A failed load leaves the bank empty; both modes report that at entry.
    let questions = match load_questions_from_json(&path) {
        Ok(questions) => {
            println!("Loaded {} questions from {}", questions.len(), path.display());
            questions
        }
        Err(e) => {
            eprintln!("Error loading questions: {}", e);
            Vec::new()
        }
    };

    let quiz = Quiz::new(questions);
    if let Err(e) = quiz.run() {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

fn resolve_bank_path() -> PathBuf {
    let primary = PathBuf::from(PRIMARY_BANK_PATH);
    if primary.exists() {
        primary
    } else {
        PathBuf::from(FALLBACK_BANK_PATH)
    }
}
