use crate::app::ResultsView;
use crate::models::QuizSession;
use crate::session::option_letter;
use crate::utils::wrapped_line_count;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn option_line(quiz: &QuizSession, question_index: usize, option_index: usize) -> Line<'static> {
    let letter = option_letter(option_index);
    let selected = quiz.selections[question_index] == Some(option_index);
    let marker = if selected { "(x)" } else { "( )" };
    let label = format!(
        "  {} {}) {}",
        marker, letter, quiz.questions[question_index].options[option_index]
    );

    if quiz.graded {
        let is_correct = quiz.correct_answers[question_index] == letter.to_string();
        if is_correct {
            return Line::from(Span::styled(
                label,
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ));
        }
        if selected {
            return Line::from(Span::styled(
                label,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ));
        }
    }

    Line::from(label)
}

/// Render the whole question list as one text block. Options carry
/// positional letter labels; the correct-answer/explanation block of each
/// question only appears once the session has been graded.
pub fn build_quiz_text(quiz: &QuizSession) -> Text<'static> {
    let mut text = Text::default();

    for (question_index, mcq) in quiz.questions.iter().enumerate() {
        let focus_marker = if question_index == quiz.focused { ">" } else { " " };
        text.push_line(Line::from(Span::styled(
            format!("{} Question {}", focus_marker, question_index + 1),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(format!("  {}", mcq.question)));

        for option_index in 0..mcq.options.len() {
            text.push_line(option_line(quiz, question_index, option_index));
        }

        if quiz.graded {
            text.push_line(Line::from(Span::styled(
                format!("  Correct Answer: {}", quiz.correct_answers[question_index]),
                Style::default().fg(Color::DarkGray),
            )));
            if let Some(explanation) = &mcq.explanation {
                text.push_line(Line::from(Span::styled(
                    format!("  Explanation: {}", explanation),
                    Style::default().fg(Color::DarkGray),
                )));
            }
        }

        text.push_line(Line::from(""));
    }

    text
}

fn block_height(quiz: &QuizSession, question_index: usize, width: usize) -> usize {
    let mcq = &quiz.questions[question_index];
    let mut height = 1; // ordinal line
    height += wrapped_line_count(&format!("  {}", mcq.question), width);
    for option in &mcq.options {
        height += wrapped_line_count(&format!("  ( ) A) {}", option), width);
    }
    if quiz.graded {
        height += 1;
        if let Some(explanation) = &mcq.explanation {
            height += wrapped_line_count(&format!("  Explanation: {}", explanation), width);
        }
    }
    height + 1 // trailing blank separator
}

/// Keep the focused question in view and bound the scroll so it cannot
/// drift past the content.
fn adjust_scroll(quiz: &mut QuizSession, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let width = area.width.saturating_sub(2) as usize;
    if visible == 0 || quiz.questions.is_empty() {
        quiz.scroll_y = 0;
        return;
    }

    let heights: Vec<usize> = (0..quiz.questions.len())
        .map(|i| block_height(quiz, i, width))
        .collect();
    let start: usize = heights[..quiz.focused].iter().sum();
    let height = heights[quiz.focused];
    let total: usize = heights.iter().sum();

    let mut scroll = quiz.scroll_y as usize;
    if start < scroll {
        scroll = start;
    } else if start + height > scroll + visible {
        scroll = (start + height).saturating_sub(visible);
    }
    scroll = scroll.min(total.saturating_sub(visible));

    quiz.scroll_y = scroll as u16;
}

pub fn draw_results(f: &mut Frame, results: &mut ResultsView, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Questions");

    match results {
        ResultsView::Idle => {
            let hint = Paragraph::new("Fill in a topic and press Enter to generate questions.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(hint, area);
        }
        ResultsView::Loading => {
            let loading = Paragraph::new("Generating questions...")
                .style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(loading, area);
        }
        ResultsView::Failure(message) => {
            let failure = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
                .wrap(Wrap { trim: true })
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(failure, area);
        }
        ResultsView::Quiz(quiz) => {
            adjust_scroll(quiz, area);
            let paragraph = Paragraph::new(build_quiz_text(quiz))
                .wrap(Wrap { trim: true })
                .scroll((quiz.scroll_y, 0))
                .block(block);
            f.render_widget(paragraph, area);
        }
    }
}

pub fn draw_score(f: &mut Frame, results: &ResultsView, area: Rect) {
    let banner = match results {
        ResultsView::Quiz(quiz) => quiz.score.map(|score| match score.percentage() {
            Some(percentage) => format!(
                "Your Score: {} out of {} ({:.2}%)",
                score.correct, score.total, percentage
            ),
            None => format!("Your Score: {} out of {}", score.correct, score.total),
        }),
        _ => None,
    };

    let score = Paragraph::new(banner.unwrap_or_default())
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));
    f.render_widget(score, area);
}
