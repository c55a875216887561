use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use mcq_quiz::{logger, ui, worker, App};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

fn main() -> io::Result<()> {
    dotenv::dotenv().ok();
    logger::init();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (request_tx, request_rx) = mpsc::channel();
    let (reply_tx, reply_rx) = mpsc::channel();
    worker::spawn_generation_worker(reply_tx, request_rx);

    let mut app = App::new();

    loop {
        terminal.draw(|f| ui::draw_app(f, &mut app))?;

        // A reply may land while the user is idle; the controller drops the
        // ones a later submission has superseded.
        while let Ok(reply) = reply_rx.try_recv() {
            app.apply_reply(reply);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key, &request_tx) {
                    break;
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
