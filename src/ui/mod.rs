mod feedback;
mod menu;
mod question;

pub use feedback::{render_feedback, render_summary, render_token_hint};
pub use menu::{render_batch_intro, render_menu, render_no_questions, render_practice_intro};
pub use question::render_question;

/// Frame width for the `=`/`-` rule lines around a question.
pub(crate) const RULE_WIDTH: usize = 80;
