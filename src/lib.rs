pub mod cli;
pub mod config;
pub mod errors;
pub mod logging;
pub mod personality;


pub use config::AppConfig;
pub use errors::*;
pub use personality::describe;
pub use personality::dimension_for_question;
pub use personality::score_session;
pub use personality::score_single_answer;
pub use personality::AnswerScore;
pub use personality::Dimension;
pub use personality::Lexicon;
pub use personality::MbtiReport;
pub use personality::ScoringMode;
pub use personality::SessionScore;
pub use personality::TestSession;
pub use personality::TieBreak;
pub use personality::Trait;
pub use personality::TraitScorer;
