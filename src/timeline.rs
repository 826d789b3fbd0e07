//! Expansion state and the phase card widget.
//!
//! At most one phase is expanded at a time. The toggle either collapses the
//! phase that is already open or replaces it with the requested one; the
//! state lives on the owning [`crate::app::App`], never in a static.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use crate::phases::Phase;
use crate::theme::{colors, styles};

/// Chevron indicators on the card header
const CHEVRON_EXPANDED: char = '▾';
const CHEVRON_COLLAPSED: char = '▸';

/// Section marker glyphs for the expanded detail lists
const SECTION_TASKS: char = '∿';
const SECTION_DELIVERABLES: char = '⎇';
const SECTION_METRICS: char = '✦';

/// View-local timeline state
#[derive(Debug, Clone, Default)]
pub struct TimelineState {
    /// Index of the single expanded phase, or none
    pub expanded: Option<usize>,
    /// Card under the keyboard cursor
    pub cursor: usize,
    /// First visible card (list scrolls by whole cards)
    pub scroll: usize,
    /// Frame counter for the entrance animation
    pub animation_frame: u64,
}

impl TimelineState {
    /// Toggle a phase: collapse it if it is the expanded one, otherwise
    /// expand it (replacing whatever was open).
    pub fn toggle(&mut self, requested: usize) {
        if self.expanded == Some(requested) {
            self.expanded = None;
        } else {
            self.expanded = Some(requested);
        }
    }

    /// Collapse whatever is expanded
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Move the cursor down, wrapping at the end
    pub fn select_next(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.cursor = if self.cursor + 1 < total {
            self.cursor + 1
        } else {
            0
        };
    }

    /// Move the cursor up, wrapping at the start
    pub fn select_previous(&mut self, total: usize) {
        if total == 0 {
            return;
        }
        self.cursor = self.cursor.checked_sub(1).unwrap_or(total - 1);
    }

    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    pub fn select_last(&mut self, total: usize) {
        self.cursor = total.saturating_sub(1);
    }

    /// Advance the animation frame
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Adjust the scroll so the cursor's card fits inside the viewport.
    /// `heights` holds the rendered height of every card.
    pub fn ensure_visible(&mut self, heights: &[u16], viewport: u16) {
        if heights.is_empty() {
            self.scroll = 0;
            return;
        }
        if self.scroll > self.cursor {
            self.scroll = self.cursor;
        }
        let visible = |from: usize, to: usize| -> u32 {
            heights[from..=to].iter().map(|&h| h as u32).sum()
        };
        while self.scroll < self.cursor && visible(self.scroll, self.cursor) > viewport as u32 {
            self.scroll += 1;
        }
    }
}

/// Rendered height of one card: borders plus header when collapsed, plus a
/// blank line, a section header, and the items of each non-empty list when
/// expanded.
pub fn card_height(phase: &Phase, expanded: bool) -> u16 {
    let mut height = 3u16;
    if expanded {
        height += 2 + phase.tasks.len() as u16;
        height += 2 + phase.deliverables.len() as u16;
        if phase.has_metrics() {
            height += 2 + phase.metrics.len() as u16;
        }
    }
    height
}

/// One phase card, collapsed or expanded
pub struct PhaseCardWidget<'a> {
    phase: &'a Phase,
    expanded: bool,
    selected: bool,
}

impl<'a> PhaseCardWidget<'a> {
    pub fn new(phase: &'a Phase, expanded: bool, selected: bool) -> Self {
        Self {
            phase,
            expanded,
            selected,
        }
    }

    /// Render the card header: icon, name, duration label, status badge,
    /// chevron.
    fn render_header(&self, inner: Rect, buf: &mut Buffer) {
        let chevron = if self.expanded {
            CHEVRON_EXPANDED
        } else {
            CHEVRON_COLLAPSED
        };
        let badge_text = format!(" {} ", self.phase.status.label());

        // Right-aligned part: duration, badge, chevron
        let right_width =
            self.phase.duration.chars().count() + 2 + badge_text.chars().count() + 2;
        let right_x = inner
            .right()
            .saturating_sub(right_width as u16)
            .max(inner.x);

        let mut x = right_x;
        buf.set_string(x, inner.y, self.phase.duration, styles::text_dim());
        x += self.phase.duration.chars().count() as u16 + 2;
        buf.set_string(
            x,
            inner.y,
            &badge_text,
            styles::badge(self.phase.status.color()),
        );
        x += badge_text.chars().count() as u16 + 1;
        buf.set_string(x, inner.y, chevron.to_string(), styles::text_dim());

        // Left part: icon and name, truncated to leave the right part intact
        let icon_style = Style::default().fg(if self.selected {
            colors::BLUE_LIGHT
        } else {
            colors::BLUE
        });
        buf.set_string(
            inner.x + 1,
            inner.y,
            self.phase.icon.glyph().to_string(),
            icon_style,
        );

        let name_budget = right_x.saturating_sub(inner.x + 4) as usize;
        let name: String = self.phase.name.chars().take(name_budget).collect();
        let name_style = Style::default()
            .fg(colors::FG_PRIMARY)
            .add_modifier(Modifier::BOLD);
        buf.set_string(inner.x + 3, inner.y, &name, name_style);
    }

    /// Render one labeled bullet list, advancing `y` past it
    fn render_section(
        &self,
        inner: Rect,
        buf: &mut Buffer,
        y: &mut u16,
        marker: char,
        label: &str,
        items: &[&str],
        bullet_color: ratatui::style::Color,
    ) {
        // blank line before each section
        *y += 1;
        if *y >= inner.bottom() {
            return;
        }
        buf.set_string(
            inner.x + 1,
            *y,
            format!("{} {}", marker, label),
            styles::title_accent(),
        );
        *y += 1;

        for item in items {
            if *y >= inner.bottom() {
                return;
            }
            buf.set_string(inner.x + 3, *y, "•", Style::default().fg(bullet_color));
            let budget = inner.width.saturating_sub(6) as usize;
            let text: String = item.chars().take(budget).collect();
            buf.set_string(inner.x + 5, *y, &text, styles::text());
            *y += 1;
        }
    }
}

impl Widget for PhaseCardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.selected {
            styles::border_focused()
        } else {
            styles::border()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(Style::default().bg(if self.expanded {
                colors::BG_HIGHLIGHT
            } else {
                colors::BG_MEDIUM
            }));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 20 || inner.height == 0 {
            return;
        }

        self.render_header(inner, buf);

        if !self.expanded {
            return;
        }

        let mut y = inner.y + 1;
        self.render_section(
            inner,
            buf,
            &mut y,
            SECTION_TASKS,
            "Key Tasks",
            self.phase.tasks,
            colors::BLUE,
        );
        self.render_section(
            inner,
            buf,
            &mut y,
            SECTION_DELIVERABLES,
            "Deliverables",
            self.phase.deliverables,
            colors::BLUE_LIGHT,
        );
        if self.phase.has_metrics() {
            self.render_section(
                inner,
                buf,
                &mut y,
                SECTION_METRICS,
                "Success Metrics",
                self.phase.metrics,
                colors::PURPLE,
            );
        }
    }
}
