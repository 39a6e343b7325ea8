mod input;
mod question;

pub use input::Token;
pub use question::{Choice, Question};
