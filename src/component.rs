//! Component trait - Interface for UI components
//!
//! Canvas, catalog modal and dialogs all follow the same cycle:
//! key event to Action, Action to state change, state to frame.

use crate::action::Action;
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Trait for UI components
///
/// 1. `handle_key_event` - Convert a key press into an Action
/// 2. `update` - Apply an Action, optionally returning a follow-up Action
/// 3. `draw` - Render into the given area
///
/// Components that need shared data to render (the catalog modal needs the
/// fetched lists) also expose a `draw_with_*` method and keep `draw` a no-op.
pub trait Component {
    /// Initialize the component
    ///
    /// Called once before the first frame.
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    /// Handle a key event, returning an optional Action
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let _ = key;
        Ok(None)
    }

    /// Update component state based on an Action
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    /// Draw the component to the frame
    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
