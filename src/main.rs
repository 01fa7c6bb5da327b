mod games;
mod input;
mod session;
mod time;
mod widgets;

use std::{cell::RefCell, io, rc::Rc};

use games::cookie::actions::RESTART;
use games::cookie::telemetry::ConsoleSink;
use games::cookie::CookieGame;
use games::Game;
use input::{centered_span_rect, pixel_x_to_col, pixel_y_to_row, ClickState, InputEvent};
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};
use session::Session;

fn new_game() -> Box<dyn Game> {
    Box::new(CookieGame::with_telemetry(Box::new(ConsoleSink)))
}

/// Milliseconds from `performance.now()`, falling back to the wall clock.
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Convert DOM pixel coordinates to a terminal cell using the grid container's rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let document = web_sys::window()?.document()?;

    // DomBackend renders its grid as a <div> directly inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_x_to_col(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_y_to_row(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let session = Rc::new(RefCell::new(Session::new(new_game())));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    terminal.on_mouse_event({
        let session = session.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let cs = click_state.borrow();
            if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                return;
            }
            let action = dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                .and_then(|(col, row)| cs.hit_test(col, row));
            drop(cs);

            let mut s = session.borrow_mut();
            match action {
                Some(RESTART) => {
                    s.request_restart(now_ms(), new_game);
                }
                Some(id) => {
                    s.game.handle_input(&InputEvent::Click(id));
                }
                None => {}
            }
        }
    });

    terminal.on_key_event({
        let session = session.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                session.borrow_mut().handle_key(c, now_ms(), new_game);
            }
        }
    });

    terminal.draw_web({
        let click_state = click_state.clone();
        move |f| {
            let mut s = session.borrow_mut();
            let now = now_ms();
            s.advance(now);

            let size = f.area();
            {
                let mut cs = click_state.borrow_mut();
                cs.terminal_cols = size.width;
                cs.terminal_rows = size.height;
                cs.clear_targets();
            }

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Min(10),
                    Constraint::Length(3),
                ])
                .split(size);

            render_title(f, chunks[0]);
            s.game.render(f, chunks[1], &click_state);
            render_help(f, chunks[2], s.restart_pending(now), &click_state);
        }
    });

    Ok(())
}

fn render_title(f: &mut ratzilla::ratatui::Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "승리의 쿠키 월드",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn render_help(
    f: &mut ratzilla::ratatui::Frame,
    area: Rect,
    restart_pending: bool,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let prefix = "[C] 클릭  [1-3] 구매  ";
    let (restart_label, restart_style) = if restart_pending {
        (
            "[R] 한 번 더 누르면 초기화",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[R] 다시 시작", Style::default().fg(Color::DarkGray))
    };
    let prefix_width = Line::from(prefix).width() as u16;
    let restart_width = Line::from(restart_label).width() as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    let help = Paragraph::new(Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::DarkGray)),
        Span::styled(restart_label, restart_style),
    ]))
    .block(block)
    .alignment(Alignment::Center);
    f.render_widget(help, area);

    // Only the [R] hint restarts, and only after a second tap.
    let rect = centered_span_rect(inner, prefix_width + restart_width, prefix_width, restart_width);
    click_state.borrow_mut().add_click_target(rect, RESTART);
}
