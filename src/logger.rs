use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

pub const LOG_PATH_VAR: &str = "MCQ_QUIZ_LOG";
const DEFAULT_LOG_PATH: &str = "mcq_quiz.log";

lazy_static::lazy_static! {
    static ref LOGGER: Mutex<Option<File>> = Mutex::new(None);
}

/// Open the debug log, honoring `MCQ_QUIZ_LOG` when set. Logging stays a
/// silent no-op if the file cannot be opened.
pub fn init() {
    let path = std::env::var(LOG_PATH_VAR).unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    init_at(path);
}

pub fn init_at(path: impl AsRef<Path>) {
    let mut logger = LOGGER.lock().unwrap();
    if logger.is_none() {
        if let Ok(file) = OpenOptions::new().create(true).append(true).open(path) {
            *logger = Some(file);
        }
    }
}

pub fn log(message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_mut() {
        let timestamp = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs();
        let _ = writeln!(logger, "[{}] {}", timestamp, message);
    }
}
