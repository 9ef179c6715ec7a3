//! Quiz session core: answers, scoring, navigation, and the lifecycle that ties them together.

mod answers;
mod lifecycle;
mod navigation;
mod scorer;

pub use answers::AnswerStore;
pub use lifecycle::{ActiveModule, Phase, Session, SessionState};
pub use navigation::Navigator;
pub use scorer::{Feedback, Grade, PASS_PERCENT, Score, feedback, grade, score};
