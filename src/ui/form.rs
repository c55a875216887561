use crate::app::{App, Focus};
use crate::ui::layout::calculate_form_chunks;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
}

fn draw_text_field(f: &mut Frame, title: &str, value: &str, focused: bool, area: Rect) {
    let field = Paragraph::new(value.to_string()).block(field_block(title, focused));
    f.render_widget(field, area);

    if focused {
        let cursor_x = area.x + 1 + value.width() as u16;
        f.set_cursor_position((cursor_x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

pub fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let chunks = calculate_form_chunks(area);

    draw_text_field(
        f,
        "Topic",
        &app.topic,
        app.focus == Focus::Topic,
        chunks.topic_area,
    );

    let difficulty = Paragraph::new(format!("< {} >", app.difficulty()))
        .block(field_block("Difficulty", app.focus == Focus::Difficulty));
    f.render_widget(difficulty, chunks.difficulty_area);

    draw_text_field(
        f,
        "Questions",
        &app.count,
        app.focus == Focus::Count,
        chunks.count_area,
    );
}
