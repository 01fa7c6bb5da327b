//! Cookie World rendering: cookie panel, shop, and log.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableList;

use super::actions::{BUY_UPGRADE_BASE, CLICK_COOKIE};
use super::state::CookieState;
use super::view::{view, CookieView, ShopEntry};

const COOKIE_ART: &[&str] = &["╭━●━━●━╮", "┃ ●  ● ┃", "╰━━●━●━╯"];
const COOKIE_PRESSED_ART: &[&str] = &[" ╭●●●●╮ ", " ┃●  ●┃ ", " ╰●●●●╯ "];

/// Cookie panel: 2 border rows + count + rate + blank + 3 art rows + hint.
const COOKIE_PANEL_HEIGHT: u16 = 9;

pub fn render(state: &CookieState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let v = view(state);

    if is_narrow_layout(area.width) {
        let shop_height = v.shop.len() as u16 + 3;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(COOKIE_PANEL_HEIGHT),
                Constraint::Length(shop_height),
                Constraint::Min(3),
            ])
            .split(area);
        render_cookie_panel(state, &v, f, chunks[0], click_state);
        render_shop(state, &v, f, chunks[1], click_state);
        render_log(state, f, chunks[2]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(COOKIE_PANEL_HEIGHT), Constraint::Min(5)])
            .split(columns[0]);
        render_cookie_panel(state, &v, f, left[0], click_state);
        render_shop(state, &v, f, left[1], click_state);
        render_log(state, f, columns[1]);
    }
}

fn render_cookie_panel(
    state: &CookieState,
    v: &CookieView,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let flashing = state.click_flash > 0;
    let art = if flashing { COOKIE_PRESSED_ART } else { COOKIE_ART };
    let cookie_color = if flashing { Color::White } else { Color::Yellow };
    let border_color = if state.purchase_flash > 0 { Color::Green } else { Color::Yellow };

    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        format!("{} 쿠키", v.cookies),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    cl.push(Line::from(Span::styled(
        format!("현재 초당 생산량: {}", v.rate),
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::ITALIC),
    )));
    cl.push(Line::from(""));
    for row in art {
        cl.push(Line::from(Span::styled(*row, Style::default().fg(cookie_color))));
    }
    let hint_style = if flashing {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    cl.push_clickable(Line::from(Span::styled(" [C] 클릭! ", hint_style)), CLICK_COOKIE);

    let borders = if area.width >= 60 { Borders::ALL } else { Borders::TOP | Borders::BOTTOM };
    let block = Block::default()
        .borders(borders)
        .border_style(Style::default().fg(border_color))
        .title(" 🍪 쿠키 ");

    {
        let mut cs = click_state.borrow_mut();
        // The whole panel is the cookie.
        cs.add_click_target(area, CLICK_COOKIE);
        cl.register_targets(area, &mut cs, 1, 1, 0);
    }

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

fn shop_line(index: usize, entry: &ShopEntry) -> Line<'static> {
    let (key_style, name_style, cost_style) = if entry.affordable {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        let dim = Style::default().fg(Color::DarkGray);
        (dim, dim, dim)
    };

    let mut spans = vec![
        Span::styled(format!(" [{}] ", index + 1), key_style),
        Span::styled(entry.name, name_style),
        Span::styled(format!("  +{} CPS", entry.production), Style::default().fg(Color::Yellow)),
        Span::styled(format!("  {} 🍪", entry.cost), cost_style),
    ];
    if entry.owned > 0 {
        spans.push(Span::styled(
            format!("  x{}", entry.owned),
            Style::default().fg(Color::Green),
        ));
    }
    Line::from(spans)
}

fn render_shop(
    state: &CookieState,
    v: &CookieView,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    for (i, entry) in v.shop.iter().enumerate() {
        cl.push_clickable(shop_line(i, entry), BUY_UPGRADE_BASE + i as u16);
    }
    cl.push(Line::from(Span::styled(
        format!(" 클릭 {}회", v.total_clicks),
        Style::default().fg(Color::DarkGray),
    )));

    let border_color = if state.purchase_flash > 0 { Color::Green } else { Color::Magenta };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" 업그레이드 상점 ");
    let inner_width = block.inner(area).width;

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, inner_width);

    let widget = Paragraph::new(cl.into_lines())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

fn render_log(state: &CookieState, f: &mut Frame, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible);

    let lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(entry.text.as_str(), style))
        })
        .collect();

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Blue))
                .title(" 로그 "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
