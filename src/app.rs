use crate::logger;
use crate::models::{GenReply, GenRequest, QuizRequest, QuizSession, DIFFICULTY_LEVELS};
use crate::session;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::mpsc::Sender;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Topic,
    Difficulty,
    Count,
    Quiz,
}

/// What the results pane currently shows. A stalled request simply leaves
/// Loading on screen; there is no timeout.
#[derive(Debug)]
pub enum ResultsView {
    Idle,
    Loading,
    Failure(String),
    Quiz(QuizSession),
}

/// Top-level controller state: the form, the results pane, and the
/// request-generation counter that orders overlapping submissions.
pub struct App {
    pub topic: String,
    pub difficulty_index: usize,
    pub count: String,
    pub focus: Focus,
    pub results: ResultsView,
    pub request_seq: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            topic: String::new(),
            difficulty_index: 0,
            count: "5".to_string(),
            focus: Focus::Topic,
            results: ResultsView::Idle,
            request_seq: 0,
        }
    }

    pub fn difficulty(&self) -> &'static str {
        DIFFICULTY_LEVELS[self.difficulty_index]
    }

    /// Submit the form as-is. Prior results and score are cleared and the
    /// loading view takes their place; any session a previous run had
    /// disabled goes with them.
    pub fn submit(&mut self, request_tx: &Sender<GenRequest>) {
        self.request_seq += 1;
        self.results = ResultsView::Loading;
        let request = QuizRequest {
            keyword: self.topic.clone(),
            difficulty_level: self.difficulty().to_string(),
            num_mcqs: self.count.clone(),
        };
        logger::log(&format!(
            "Submitting generation request {} (topic: {:?})",
            self.request_seq, request.keyword
        ));
        let _ = request_tx.send(GenRequest::Generate {
            request_id: self.request_seq,
            request,
        });
    }

    /// Apply a worker reply. Replies from superseded submissions are
    /// dropped, so the last request issued owns the display.
    pub fn apply_reply(&mut self, reply: GenReply) {
        if reply.request_id() != self.request_seq {
            logger::log(&format!(
                "Discarding stale reply for request {}",
                reply.request_id()
            ));
            return;
        }
        match reply {
            GenReply::Questions { items, .. } => {
                let quiz = session::build_session(items);
                self.focus = Focus::Quiz;
                self.results = ResultsView::Quiz(quiz);
            }
            GenReply::Failure { message, .. } => {
                self.results = ResultsView::Failure(message);
            }
        }
    }

    /// Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent, request_tx: &Sender<GenRequest>) -> bool {
        if key.code == KeyCode::Esc {
            return true;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        match self.focus {
            Focus::Topic => match key.code {
                KeyCode::Tab => self.focus = Focus::Difficulty,
                KeyCode::Enter => self.submit(request_tx),
                KeyCode::Backspace => {
                    self.topic.pop();
                }
                KeyCode::Char(c) => self.topic.push(c),
                _ => {}
            },
            Focus::Difficulty => match key.code {
                KeyCode::Tab => self.focus = Focus::Count,
                KeyCode::Enter => self.submit(request_tx),
                KeyCode::Left | KeyCode::Up => {
                    self.difficulty_index = (self.difficulty_index + DIFFICULTY_LEVELS.len() - 1)
                        % DIFFICULTY_LEVELS.len();
                }
                KeyCode::Right | KeyCode::Down => {
                    self.difficulty_index = (self.difficulty_index + 1) % DIFFICULTY_LEVELS.len();
                }
                _ => {}
            },
            Focus::Count => match key.code {
                KeyCode::Tab => {
                    self.focus = if matches!(self.results, ResultsView::Quiz(_)) {
                        Focus::Quiz
                    } else {
                        Focus::Topic
                    };
                }
                KeyCode::Enter => self.submit(request_tx),
                KeyCode::Backspace => {
                    self.count.pop();
                }
                KeyCode::Char(c) => self.count.push(c),
                _ => {}
            },
            Focus::Quiz => match key.code {
                KeyCode::Tab => self.focus = Focus::Topic,
                code => {
                    if let ResultsView::Quiz(quiz) = &mut self.results {
                        session::handle_quiz_input(quiz, code);
                    }
                }
            },
        }

        false
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_submit_sends_form_values_verbatim() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new();
        app.topic = "rust".to_string();
        app.count = "abc".to_string();
        app.submit(&tx);

        let GenRequest::Generate {
            request_id,
            request,
        } = rx.try_recv().unwrap();
        assert_eq!(request_id, 1);
        assert_eq!(request.keyword, "rust");
        assert_eq!(request.difficulty_level, "easy");
        assert_eq!(request.num_mcqs, "abc");
        assert!(matches!(app.results, ResultsView::Loading));
    }

    #[test]
    fn test_submit_with_empty_form_still_sends() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new();
        app.count.clear();
        app.submit(&tx);

        let GenRequest::Generate { request, .. } = rx.try_recv().unwrap();
        assert_eq!(request.keyword, "");
        assert_eq!(request.num_mcqs, "");
    }

    #[test]
    fn test_submit_clears_previous_session() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.apply_reply(GenReply::Questions {
            request_id: 0,
            items: vec![json!({"question": "Q", "options": ["x"], "answer": "A"})],
        });
        assert!(matches!(app.results, ResultsView::Quiz(_)));

        app.submit(&tx);
        assert!(matches!(app.results, ResultsView::Loading));
    }

    #[test]
    fn test_apply_reply_success_builds_session_and_moves_focus() {
        let mut app = App::new();
        app.request_seq = 1;
        app.apply_reply(GenReply::Questions {
            request_id: 1,
            items: vec![
                json!({"question": "Q1", "options": ["x", "y"], "answer": "A"}),
                json!({"question": "Q2"}),
            ],
        });
        assert_eq!(app.focus, Focus::Quiz);
        match &app.results {
            ResultsView::Quiz(quiz) => {
                assert_eq!(quiz.questions.len(), 1);
                assert_eq!(quiz.correct_answers, vec!["A"]);
            }
            other => panic!("expected quiz view, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_reply_failure_shows_message_without_session() {
        let mut app = App::new();
        app.request_seq = 1;
        app.apply_reply(GenReply::Failure {
            request_id: 1,
            message: "limit exceeded".to_string(),
        });
        match &app.results {
            ResultsView::Failure(message) => assert_eq!(message, "limit exceeded"),
            other => panic!("expected failure view, got {:?}", other),
        }
        // No session means no grading control.
        assert_eq!(app.focus, Focus::Topic);
    }

    #[test]
    fn test_stale_reply_is_discarded() {
        let mut app = App::new();
        app.request_seq = 2;
        app.results = ResultsView::Loading;
        app.apply_reply(GenReply::Questions {
            request_id: 1,
            items: vec![json!({"question": "Q", "options": ["x"], "answer": "A"})],
        });
        assert!(matches!(app.results, ResultsView::Loading));

        app.apply_reply(GenReply::Failure {
            request_id: 2,
            message: "late but current".to_string(),
        });
        assert!(matches!(app.results, ResultsView::Failure(_)));
    }

    #[test]
    fn test_typing_edits_topic_and_count() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.handle_key(key(KeyCode::Char('a')), &tx);
        app.handle_key(key(KeyCode::Char('b')), &tx);
        app.handle_key(key(KeyCode::Backspace), &tx);
        assert_eq!(app.topic, "a");

        app.focus = Focus::Count;
        app.handle_key(key(KeyCode::Char('7')), &tx);
        assert_eq!(app.count, "57");
    }

    #[test]
    fn test_tab_cycles_form_fields() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.handle_key(key(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Difficulty);
        app.handle_key(key(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Count);
        // No session yet: wraps back to the topic field.
        app.handle_key(key(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Topic);
    }

    #[test]
    fn test_tab_reaches_quiz_pane_when_session_exists() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.apply_reply(GenReply::Questions {
            request_id: 0,
            items: vec![json!({"question": "Q", "options": ["x"], "answer": "A"})],
        });
        app.focus = Focus::Count;
        app.handle_key(key(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Quiz);
        app.handle_key(key(KeyCode::Tab), &tx);
        assert_eq!(app.focus, Focus::Topic);
    }

    #[test]
    fn test_difficulty_cycles_through_levels() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.focus = Focus::Difficulty;
        assert_eq!(app.difficulty(), "easy");
        app.handle_key(key(KeyCode::Right), &tx);
        assert_eq!(app.difficulty(), "moderate");
        app.handle_key(key(KeyCode::Left), &tx);
        app.handle_key(key(KeyCode::Left), &tx);
        assert_eq!(app.difficulty(), "hard");
    }

    #[test]
    fn test_enter_in_form_submits() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new();
        app.handle_key(key(KeyCode::Enter), &tx);
        assert!(rx.try_recv().is_ok());
        assert_eq!(app.request_seq, 1);
    }

    #[test]
    fn test_resubmission_bumps_request_seq() {
        let (tx, rx) = mpsc::channel();
        let mut app = App::new();
        app.submit(&tx);
        app.submit(&tx);
        assert_eq!(app.request_seq, 2);
        let GenRequest::Generate { request_id, .. } = rx.try_recv().unwrap();
        assert_eq!(request_id, 1);
        let GenRequest::Generate { request_id, .. } = rx.try_recv().unwrap();
        assert_eq!(request_id, 2);
    }

    #[test]
    fn test_quiz_keys_reach_session() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        app.apply_reply(GenReply::Questions {
            request_id: 0,
            items: vec![json!({"question": "Q", "options": ["x", "y"], "answer": "A"})],
        });
        app.handle_key(key(KeyCode::Char('b')), &tx);
        app.handle_key(key(KeyCode::Enter), &tx);
        match &app.results {
            ResultsView::Quiz(quiz) => {
                assert!(quiz.graded);
                assert_eq!(quiz.selections[0], Some(1));
                assert_eq!(quiz.score.unwrap().correct, 0);
            }
            other => panic!("expected quiz view, got {:?}", other),
        }
    }

    #[test]
    fn test_escape_exits() {
        let (tx, _rx) = mpsc::channel();
        let mut app = App::new();
        assert!(app.handle_key(key(KeyCode::Esc), &tx));
        assert!(app.handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &tx
        ));
    }
}
