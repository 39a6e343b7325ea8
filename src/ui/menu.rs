use std::io::{self, Write};

/// Top-level menu, shown before each mode selection. Leaves the cursor on
/// the prompt line.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\nSelect a mode:")?;
    writeln!(out, "1. Quiz mode (10 questions)")?;
    writeln!(out, "2. Practice mode (unlimited)")?;
    writeln!(out, "3. Exit")?;
    write!(out, "Enter choice (1/2/3): ")?;
    out.flush()
}

/// Announces a fixed-length session and the input contract.
pub fn render_batch_intro<W: Write>(out: &mut W, drawn: usize) -> io::Result<()> {
    writeln!(out, "\n== Quiz ==")?;
    writeln!(out, "{} randomly drawn questions", drawn)?;
    writeln!(out, "Answer with A/B/C/D, or Q to quit")
}

/// Announces an open-ended practice session.
pub fn render_practice_intro<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n== Practice mode ==")?;
    writeln!(out, "Answer with A/B/C/D, or Q to quit")
}

/// Shown when a mode is entered with an empty bank.
pub fn render_no_questions<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "No questions available, check the data file")
}
