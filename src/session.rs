use crate::logger;
use crate::models::{Mcq, QuizSession, ScoreSummary};
use crossterm::event::KeyCode;
use serde::Deserialize;
use serde_json::Value;

/// Positional option label: 0 -> 'A', 1 -> 'B', ... regardless of what the
/// option text contains.
pub fn option_letter(index: usize) -> char {
    char::from_u32('A' as u32 + index as u32).unwrap_or('?')
}

/// Build a session from the raw response sequence. Items missing a question,
/// options, or answer are dropped with a log line; the retained questions and
/// their answers are pushed in the same relative order so the two sequences
/// stay index-aligned.
pub fn build_session(items: Vec<Value>) -> QuizSession {
    let mut questions = Vec::new();
    let mut correct_answers = Vec::new();

    for item in items {
        match Mcq::deserialize(&item) {
            Ok(mcq) => {
                correct_answers.push(mcq.answer.clone());
                questions.push(mcq);
            }
            Err(e) => {
                logger::log(&format!("Incomplete MCQ data, skipping: {} ({})", item, e));
            }
        }
    }

    let count = questions.len();
    QuizSession {
        questions,
        correct_answers,
        selections: vec![None; count],
        focused: 0,
        graded: false,
        score: None,
        scroll_y: 0,
    }
}

/// Record a selection on the focused question. Ignored once graded (all
/// controls are locked) or when the option does not exist.
pub fn select_option(session: &mut QuizSession, option_index: usize) {
    if session.graded {
        return;
    }
    if let Some(mcq) = session.questions.get(session.focused) {
        if option_index < mcq.options.len() {
            session.selections[session.focused] = Some(option_index);
        }
    }
}

/// Grade the session once. The first call locks everything by setting the
/// graded flag; later calls are no-ops, so the displayed score can never
/// change again.
pub fn grade(session: &mut QuizSession) {
    if session.graded {
        return;
    }
    session.graded = true;

    let total = session.correct_answers.len();
    let mut correct = 0;
    for (index, answer) in session.correct_answers.iter().enumerate() {
        let selected = session.selections.get(index).copied().flatten();
        if let Some(option_index) = selected {
            if option_letter(option_index).to_string() == *answer {
                correct += 1;
            }
        }
    }

    session.score = Some(ScoreSummary { correct, total });
    logger::log(&format!("Graded session: {} / {}", correct, total));
}

/// Key handling for the quiz pane: arrows move between questions, letters
/// pick options, Enter is the grading control.
pub fn handle_quiz_input(session: &mut QuizSession, key: KeyCode) {
    match key {
        KeyCode::Up => {
            if session.focused > 0 {
                session.focused -= 1;
            }
        }
        KeyCode::Down => {
            if session.focused < session.questions.len().saturating_sub(1) {
                session.focused += 1;
            }
        }
        KeyCode::Enter => grade(session),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => {
            let option_index = (c.to_ascii_uppercase() as u8 - b'A') as usize;
            select_option(session, option_index);
        }
        _ => {}
    }
}
