use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header_area: Rect,
    pub form_area: Rect,
    pub results_area: Rect,
    pub score_area: Rect,
    pub help_area: Rect,
}

pub struct FormLayout {
    pub topic_area: Rect,
    pub difficulty_area: Rect,
    pub count_area: Rect,
}

pub fn calculate_app_chunks(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);

    AppLayout {
        header_area: chunks[0],
        form_area: chunks[1],
        results_area: chunks[2],
        score_area: chunks[3],
        help_area: chunks[4],
    }
}

pub fn calculate_form_chunks(area: Rect) -> FormLayout {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
        ])
        .split(area);

    FormLayout {
        topic_area: chunks[0],
        difficulty_area: chunks[1],
        count_area: chunks[2],
    }
}
