//! All drawing / rendering functions.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::preview::embed_source;

use super::app::{App, NoticeKind};

pub fn draw(frame: &mut ratatui::Frame, app: &App) {
    draw_main(frame, app);
    if app.in_flight {
        draw_loading_overlay(frame);
    }
    draw_notices(frame, app);
}

fn draw_main(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    let outer = Block::default()
        .title(" vidgrab ")
        .title_alignment(Alignment::Left)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // URL input bar
            Constraint::Min(6),    // Preview pane
            Constraint::Length(3), // Download action
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Controls bar
        ])
        .split(inner);

    draw_url_input(frame, app, chunks[0]);
    draw_preview_pane(frame, app, chunks[1]);
    draw_action(frame, app, chunks[2]);

    let status_line =
        Paragraph::new(Line::from(build_status_line(app))).style(Style::default().fg(Color::White));
    frame.render_widget(status_line, chunks[3]);

    let controls = Paragraph::new("Enter:download  Esc:clear/quit  Ctrl+C:quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[4]);
}

fn draw_url_input(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let border_style = if app.in_flight {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let input = Paragraph::new(app.video_url())
        .block(
            Block::default()
                .title(" Paste the video URL here: ")
                .borders(Borders::ALL)
                .border_style(border_style),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(input, area);
}

fn draw_preview_pane(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let mut lines: Vec<Line> = Vec::new();
    let url = app.video_url();

    if url.is_empty() {
        lines.push(Line::from(Span::styled(
            "Paste a URL above to load a preview",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("src: {}", embed_source(url)),
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        if let Some(ref info) = app.preview {
            lines.push(Line::from(Span::styled(
                format!("\u{25b6} {}", info.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("   by {}", info.author),
                Style::default().fg(Color::Cyan),
            )));
        } else if let Some(ref error) = app.preview_error {
            lines.push(Line::from(Span::styled(
                format!("preview unavailable: {error}"),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(Span::styled(
                "Loading preview...",
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    let pane = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(pane, area);
}

fn draw_action(frame: &mut ratatui::Frame, app: &App, area: Rect) {
    let (label, style) = if app.in_flight {
        (
            "[ Downloading... ]",
            Style::default().fg(Color::Yellow),
        )
    } else if app.can_submit() {
        (
            "[ Download video ]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            "[ Download video ]",
            Style::default().fg(Color::DarkGray),
        )
    };

    let action = Paragraph::new(label)
        .block(Block::default().borders(Borders::ALL))
        .style(style)
        .alignment(Alignment::Center);
    frame.render_widget(action, area);
}

fn build_status_line(app: &App) -> Vec<Span<'_>> {
    let mut spans = Vec::new();

    if app.preview_loaded {
        spans.push(Span::styled(
            " Preview \u{2713}",
            Style::default().fg(Color::Green),
        ));
    } else if !app.video_url().is_empty() {
        spans.push(Span::styled(
            " Waiting for preview",
            Style::default().fg(Color::DarkGray),
        ));
    }

    if !app.status.is_empty() {
        if !spans.is_empty() {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            app.status.as_str(),
            Style::default().fg(Color::Cyan),
        ));
    }

    spans
}

fn draw_loading_overlay(frame: &mut ratatui::Frame) {
    let full = frame.area();
    // Dim the whole frame behind the modal.
    frame
        .buffer_mut()
        .set_style(full, Style::default().fg(Color::DarkGray));

    let area = centered_rect(30, 5, full);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = Paragraph::new("Downloading...")
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    frame.render_widget(message, inner);
}

fn draw_notices(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let width = 36.min(area.width.saturating_sub(2));
    if width == 0 {
        return;
    }
    let x = area.x + area.width.saturating_sub(width + 1);

    for (i, notice) in app.notices.iter().enumerate() {
        let y = area.y + 1 + u16::try_from(i).unwrap_or(u16::MAX).saturating_mul(3);
        if y + 3 > area.y + area.height {
            break;
        }
        let rect = Rect::new(x, y, width, 3);
        frame.render_widget(Clear, rect);

        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        let toast = Paragraph::new(notice.message.as_str())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            )
            .style(Style::default().fg(Color::White));
        frame.render_widget(toast, rect);
    }
}

/// Returns a centered rectangle of the given size within `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
