//! Canvas backdrop
//!
//! The pipeline editor screen the catalog modal opens on top of.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data the canvas shows in its status bar
pub struct CanvasRenderContext<'a> {
    pub catalog_source: &'a str,
}

/// Canvas backdrop component
#[derive(Default)]
pub struct CanvasComponent;

impl Component for CanvasComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ForceQuit)
            }
            KeyCode::Char('t') | KeyCode::Enter => Some(Action::OpenCatalog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::OpenQuitDialog),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs the status context, so we use draw_with_context
        Ok(())
    }
}

impl CanvasComponent {
    pub fn draw_with_context(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        ctx: &CanvasRenderContext,
    ) -> Result<()> {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(3),
            ])
            .split(area);

        let canvas = Paragraph::new(vec![
            Line::from(""),
            Line::from(""),
            Line::from(Span::styled(
                "No blocks on the canvas yet",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::raw("Press "),
                Span::styled(
                    "t",
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" to browse transformation blocks"),
            ]),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Pipeline Canvas ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(canvas, chunks[0]);

        let status = Line::from(vec![
            Span::styled(" Catalog: ", Style::default().fg(Color::DarkGray)),
            Span::styled(ctx.catalog_source.to_string(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(status), chunks[1]);

        let help = Paragraph::new(Line::from(vec![
            Span::styled("t", Style::default().fg(Color::Cyan)),
            Span::raw(" Catalog  "),
            Span::styled("?", Style::default().fg(Color::Cyan)),
            Span::raw(" Help  "),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::raw(" Quit"),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[2]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_keys() {
        let mut canvas = CanvasComponent;
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            canvas.handle_key_event(press(KeyCode::Char('t'))).unwrap(),
            Some(Action::OpenCatalog)
        );
        assert_eq!(
            canvas.handle_key_event(press(KeyCode::Char('q'))).unwrap(),
            Some(Action::OpenQuitDialog)
        );
        assert_eq!(
            canvas
                .handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::ForceQuit)
        );
    }
}
