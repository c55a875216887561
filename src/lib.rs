pub mod app;
pub mod logger;
pub mod models;
pub mod service;
pub mod session;
pub mod ui;
pub mod utils;
pub mod worker;

// Re-exports for convenience
pub use app::{App, Focus, ResultsView};
pub use models::{
    GenReply, GenRequest, Mcq, QuizRequest, QuizSession, ScoreSummary, DIFFICULTY_LEVELS,
};
pub use service::{decode_response, GenerationClient, ServiceError, DEFAULT_SERVICE_URL};
pub use session::{build_session, grade, handle_quiz_input, option_letter, select_option};
pub use ui::draw_app;
pub use worker::spawn_generation_worker;
