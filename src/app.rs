//! Application state and event handling.
//!
//! A single `App` struct owns all view state, updated synchronously from
//! key and mouse events in the main loop. There is no background work: the
//! phase table is static and every derived value is recomputed per frame.

#![allow(dead_code)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};

use crate::phases::{Phase, PHASES};
use crate::timeline::TimelineState;

/// Frames between successive card reveals during the entrance animation.
/// At ~30 FPS the full list settles in about a second.
const REVEAL_FRAMES: u64 = 3;

/// Display options for the timeline view.
///
/// The default is the rich variant: progress summary shown and the first
/// phase pre-expanded. [`TimelineConfig::classic`] reproduces the plain
/// variant with neither.
#[derive(Debug, Clone, Copy)]
pub struct TimelineConfig {
    /// Render the progress summary bar above the phase list
    pub show_progress_summary: bool,
    /// Phase expanded before any user interaction
    pub initial_expanded: Option<usize>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            show_progress_summary: true,
            initial_expanded: Some(0),
        }
    }
}

impl TimelineConfig {
    /// The plain variant: no summary bar, everything collapsed
    pub fn classic() -> Self {
        Self {
            show_progress_summary: false,
            initial_expanded: None,
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,

    /// Display options
    pub config: TimelineConfig,

    /// The phase table (fixed for the life of the view)
    pub phases: &'static [Phase],

    /// Expansion, cursor, scroll, and animation state
    pub timeline: TimelineState,

    /// Clickable card header regions, rebuilt by the renderer each frame.
    /// Each entry maps a screen region to the phase index it toggles.
    pub hit_zones: Vec<(Rect, usize)>,

    /// Show the help overlay
    pub show_help: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new(TimelineConfig::default())
    }
}

impl App {
    /// Create the application with the given display options
    pub fn new(config: TimelineConfig) -> Self {
        let mut timeline = TimelineState {
            expanded: config.initial_expanded,
            ..Default::default()
        };
        if let Some(index) = config.initial_expanded {
            timeline.cursor = index;
        }

        Self {
            should_quit: false,
            config,
            phases: PHASES,
            timeline,
            hit_zones: Vec::new(),
            show_help: false,
        }
    }

    /// Advance the entrance animation
    pub fn tick(&mut self) {
        self.timeline.tick();
    }

    /// Number of cards revealed so far by the entrance animation
    pub fn revealed(&self) -> usize {
        let shown = self.timeline.animation_frame / REVEAL_FRAMES + 1;
        (shown as usize).min(self.phases.len())
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Down | KeyCode::Char('j') => self.timeline.select_next(self.phases.len()),
            KeyCode::Up | KeyCode::Char('k') => self.timeline.select_previous(self.phases.len()),
            KeyCode::Char('g') | KeyCode::Home => self.timeline.select_first(),
            KeyCode::Char('G') | KeyCode::End => self.timeline.select_last(self.phases.len()),
            KeyCode::Enter | KeyCode::Char(' ') => self.timeline.toggle(self.timeline.cursor),
            KeyCode::Esc => self.timeline.collapse(),
            _ => {}
        }
    }

    /// Handle a mouse event: left click on a card header toggles that phase,
    /// the wheel moves the cursor.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.show_help {
            return;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let position = Position::new(mouse.column, mouse.row);
                if let Some(&(_, index)) = self
                    .hit_zones
                    .iter()
                    .find(|(zone, _)| zone.contains(position))
                {
                    self.timeline.cursor = index;
                    self.timeline.toggle(index);
                }
            }
            MouseEventKind::ScrollDown => self.timeline.select_next(self.phases.len()),
            MouseEventKind::ScrollUp => self.timeline.select_previous(self.phases.len()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_default_config_pre_expands_first_phase() {
        let app = App::default();
        assert_eq!(app.timeline.expanded, Some(0));
        assert!(app.config.show_progress_summary);
    }

    #[test]
    fn test_classic_config_starts_collapsed() {
        let app = App::new(TimelineConfig::classic());
        assert_eq!(app.timeline.expanded, None);
        assert!(!app.config.show_progress_summary);
    }

    #[test]
    fn test_enter_toggles_cursor_phase() {
        let mut app = App::new(TimelineConfig::classic());
        app.handle_key(key(KeyCode::Down));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.timeline.expanded, Some(1));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.timeline.expanded, None);
    }

    #[test]
    fn test_esc_collapses() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.timeline.expanded, None);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_click_on_header_toggles() {
        let mut app = App::new(TimelineConfig::classic());
        app.hit_zones = vec![
            (Rect::new(0, 0, 80, 3), 0),
            (Rect::new(0, 3, 80, 3), 1),
        ];

        app.handle_mouse(click(10, 4));
        assert_eq!(app.timeline.expanded, Some(1));
        assert_eq!(app.timeline.cursor, 1);

        // clicking the expanded card's header collapses it
        app.handle_mouse(click(10, 4));
        assert_eq!(app.timeline.expanded, None);
    }

    #[test]
    fn test_click_outside_zones_is_ignored() {
        let mut app = App::new(TimelineConfig::classic());
        app.hit_zones = vec![(Rect::new(0, 0, 80, 3), 0)];
        app.handle_mouse(click(10, 20));
        assert_eq!(app.timeline.expanded, None);
    }

    #[test]
    fn test_reveal_progression() {
        let mut app = App::default();
        assert_eq!(app.revealed(), 1);
        for _ in 0..100 {
            app.tick();
        }
        assert_eq!(app.revealed(), app.phases.len());
    }

    #[test]
    fn test_help_overlay_swallows_navigation() {
        let mut app = App::default();
        app.handle_key(key(KeyCode::Char('?')));
        assert!(app.show_help);
        app.handle_key(key(KeyCode::Down));
        assert_eq!(app.timeline.cursor, 0);
        app.handle_key(key(KeyCode::Esc));
        assert!(!app.show_help);
    }
}
