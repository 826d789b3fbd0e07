//! UI rendering.
//!
//! Composition root for the view: header, optional progress summary, the
//! scrolling phase card list, footer hints, and the help overlay. Rendering
//! also rebuilds the mouse hit zones for the card headers.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
    Frame,
};

use crate::app::App;
use crate::phases::{ProgressSummary, SUBTITLE, TITLE};
use crate::theme::{colors, styles};
use crate::timeline::{card_height, PhaseCardWidget};

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let bg = Block::default().style(Style::default().bg(colors::BG_DARK));
    frame.render_widget(bg, area);

    let mut constraints = vec![Constraint::Length(3)];
    if app.config.show_progress_summary {
        constraints.push(Constraint::Length(4));
    }
    constraints.push(Constraint::Min(3));
    constraints.push(Constraint::Length(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let mut next = 0;
    render_header(frame, chunks[next]);
    next += 1;

    if app.config.show_progress_summary {
        render_progress_summary(frame, app, chunks[next]);
        next += 1;
    }

    render_phase_list(frame, app, chunks[next]);
    render_footer(frame, chunks[next + 1]);

    if app.show_help {
        render_help_overlay(frame, area);
    }
}

/// Static title and subtitle
fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(TITLE, styles::title())),
        Line::from(Span::styled(SUBTITLE, styles::text_dim())),
    ]);
    frame.render_widget(header, area);
}

/// Counts by status plus a completion gauge, derived fresh every frame
fn render_progress_summary(frame: &mut Frame, app: &App, area: Rect) {
    let summary = ProgressSummary::from_phases(app.phases);

    let block = Block::default()
        .title(" Overall Progress ")
        .title_style(styles::title_accent())
        .borders(Borders::ALL)
        .border_style(styles::border())
        .style(Style::default().bg(colors::BG_MEDIUM));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    let counts = Line::from(vec![
        Span::styled(
            format!("{} Completed", summary.completed),
            Style::default().fg(colors::STATUS_COMPLETED),
        ),
        Span::styled("  ·  ", styles::text_hint()),
        Span::styled(
            format!("{} In Progress", summary.in_progress),
            Style::default().fg(colors::STATUS_IN_PROGRESS),
        ),
        Span::styled("  ·  ", styles::text_hint()),
        Span::styled(format!("{} Planned", summary.total - summary.completed - summary.in_progress), styles::text_dim()),
    ]);
    frame.render_widget(
        Paragraph::new(counts),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(1), 1),
    );

    let gauge = Gauge::default()
        .ratio(f64::from(summary.percent) / 100.0)
        .label(Span::styled(
            format!("{}% complete", summary.percent),
            Style::default()
                .fg(colors::FG_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .gauge_style(
            Style::default()
                .fg(colors::GREEN)
                .bg(colors::BG_HIGHLIGHT),
        );
    frame.render_widget(
        gauge,
        Rect::new(inner.x + 1, inner.y + 1, inner.width.saturating_sub(2), 1),
    );
}

/// The ordered card list. Scrolls by whole cards so the cursor stays
/// visible, reveals cards one by one on startup, and records the clickable
/// header region of every card drawn.
fn render_phase_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let expanded = app.timeline.expanded;
    let heights: Vec<u16> = app
        .phases
        .iter()
        .enumerate()
        .map(|(i, p)| card_height(p, expanded == Some(i)))
        .collect();

    app.timeline.ensure_visible(&heights, area.height);
    app.hit_zones.clear();

    let revealed = app.revealed();
    let mut y = area.y;

    for index in app.timeline.scroll..app.phases.len() {
        if index >= revealed {
            break;
        }
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }

        let height = heights[index].min(remaining);
        let card_area = Rect::new(area.x, y, area.width, height);
        let is_expanded = expanded == Some(index);

        let widget = PhaseCardWidget::new(
            &app.phases[index],
            is_expanded,
            app.timeline.cursor == index,
        );
        frame.render_widget(widget, card_area);

        // Collapsed cards toggle from anywhere; expanded cards only from
        // their header rows.
        let zone_height = if is_expanded { 2.min(height) } else { height };
        app.hit_zones.push((
            Rect::new(card_area.x, card_area.y, card_area.width, zone_height),
            index,
        ));

        y += height;
    }
}

/// Key binding hints
fn render_footer(frame: &mut Frame, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " j/k move · enter/click toggle · esc collapse · ? help · q quit",
        styles::text_hint(),
    )));
    frame.render_widget(hints, area);
}

/// Centered help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let width = 44.min(area.width);
    let height = 12.min(area.height);
    let popup = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(""),
        help_line("j / ↓", "next phase"),
        help_line("k / ↑", "previous phase"),
        help_line("g / G", "first / last phase"),
        help_line("enter / space", "expand or collapse"),
        help_line("click", "toggle the clicked phase"),
        help_line("esc", "collapse"),
        help_line("?", "toggle this help"),
        help_line("q", "quit"),
    ];

    let help = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .title(" Help ")
                .title_style(styles::title_accent())
                .borders(Borders::ALL)
                .border_style(styles::border_focused())
                .style(Style::default().bg(colors::BG_MEDIUM)),
        );
    frame.render_widget(help, popup);
}

fn help_line(keys: &str, action: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<14}", keys), styles::text()),
        Span::styled(action.to_string(), styles::text_dim()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::TimelineConfig;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut out = String::new();
        for y in 0..height {
            for x in 0..width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn settled(config: TimelineConfig) -> App {
        let mut app = App::new(config);
        for _ in 0..100 {
            app.tick(); // let the entrance animation finish
        }
        app
    }

    #[test]
    fn test_rich_variant_shows_summary() {
        let mut app = settled(TimelineConfig::default());
        let text = draw(&mut app, 100, 50);
        assert!(text.contains("Pneumonia Detector"));
        assert!(text.contains("Overall Progress"));
        assert!(text.contains("11% complete"));
        assert!(text.contains("1 Completed"));
        assert!(text.contains("7 Planned"));
    }

    #[test]
    fn test_classic_variant_hides_summary() {
        let mut app = settled(TimelineConfig::classic());
        let text = draw(&mut app, 100, 50);
        assert!(text.contains("Pneumonia Detector"));
        assert!(!text.contains("Overall Progress"));
    }

    #[test]
    fn test_hit_zones_cover_drawn_cards() {
        let mut app = settled(TimelineConfig::classic());
        draw(&mut app, 100, 50);
        // 50 rows: header 3 + list 45 + footer 1; 9 collapsed cards of 3
        // rows each fit with room to spare
        assert_eq!(app.hit_zones.len(), 9);
        assert_eq!(app.hit_zones[0].1, 0);
    }

    #[test]
    fn test_default_variant_pre_expands_first_card() {
        let mut app = settled(TimelineConfig::default());
        let text = draw(&mut app, 100, 50);
        // details of phase 0 visible, details of others are not
        assert!(text.contains("Dataset integration"));
        assert!(!text.contains("Quality control protocol implementation"));
    }
}
