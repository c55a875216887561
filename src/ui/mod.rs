pub mod form;
pub mod layout;
pub mod quiz;

pub use form::draw_form;
pub use layout::{calculate_app_chunks, calculate_form_chunks};
pub use quiz::{draw_results, draw_score};

use crate::app::{App, Focus, ResultsView};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn key_span(label: &str) -> Span<'_> {
    Span::styled(
        label,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

fn help_line(app: &App) -> Line<'static> {
    let mut spans = Vec::new();

    if app.focus == Focus::Quiz {
        let graded = matches!(&app.results, ResultsView::Quiz(quiz) if quiz.graded);
        spans.extend([key_span("↑/↓"), Span::from(" Question  ")]);
        if !graded {
            spans.extend([
                key_span("A-Z"),
                Span::from(" Select  "),
                key_span("Enter"),
                Span::from(" Submit Answers  "),
            ]);
        }
        spans.extend([key_span("Tab"), Span::from(" Form  ")]);
    } else {
        spans.extend([
            key_span("Tab"),
            Span::from(" Next Field  "),
            key_span("Enter"),
            Span::from(" Generate  "),
        ]);
    }
    spans.extend([key_span("Esc"), Span::from(" Quit")]);

    Line::from(spans)
}

pub fn draw_app(f: &mut Frame, app: &mut App) {
    let chunks = calculate_app_chunks(f.area());

    let title = Paragraph::new("MCQ Quiz Generator")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks.header_area);

    draw_form(f, app, chunks.form_area);
    draw_results(f, &mut app.results, chunks.results_area);
    draw_score(f, &app.results, chunks.score_area);

    let help = Paragraph::new(vec![help_line(app)])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks.help_area);
}
