//! Transformation catalog modal
//!
//! Category selector on the left, the items of the selected category and
//! the details of the selected item on the right, Back / Add to canvas in
//! the footer. Owns cursor, focus and scroll; the fetched data lives in
//! `CatalogState`.

use crate::action::Action;
use crate::component::Component;
use crate::components::example_table::ExampleTable;
use crate::components::layout::{calculate_catalog_layout, modal_area};
use crate::model::{CatalogItem, CatalogState, Example};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, List, ListItem, ListState, Paragraph, Scrollbar,
        ScrollbarOrientation, ScrollbarState,
    },
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub const PICK_CATEGORY_MESSAGE: [&str; 2] = [
    "To pick a transformation block,",
    "select a transformation category first",
];
pub const NO_OPTIONS_MESSAGE: &str = "No transformation options found.";
pub const PICK_OPTION_MESSAGE: [&str; 2] = [
    "To see the details of a transformation block,",
    "select one from the left",
];

const CATEGORY_COLOR: Color = Color::Red;
const OPTION_COLOR: Color = Color::Magenta;

/// Which list receives cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Categories,
    Options,
}

/// Catalog modal component
#[derive(Default)]
pub struct CatalogModal {
    pub focus: Focus,
    pub category_list: ListState,
    pub option_list: ListState,
    pub detail_scroll: usize,
}

impl Component for CatalogModal {
    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::ScrollUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(1);
            }
            Action::ScrollDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(1);
            }
            Action::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(10);
            }
            Action::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(10);
            }
            Action::SelectCategory(_) => {
                self.option_list.select(None);
                self.detail_scroll = 0;
                self.focus = Focus::Options;
            }
            Action::SelectOption(_) => {
                self.detail_scroll = 0;
            }
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, _frame: &mut Frame, _area: Rect) -> Result<()> {
        // Needs catalog state, so we use draw_with_state
        Ok(())
    }
}

impl CatalogModal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to a fresh modal, as on reopening
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Translate a key press into an action, moving cursors locally
    pub fn handle_key_with_state(
        &mut self,
        key: KeyEvent,
        state: &CatalogState,
    ) -> Result<Option<Action>> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let action = match key.code {
            KeyCode::Char('d') if ctrl => Some(Action::PageDown),
            KeyCode::Char('u') if ctrl => Some(Action::PageUp),
            KeyCode::Esc | KeyCode::Char('b') => Some(Action::CloseModal),
            KeyCode::Char('a') => Some(Action::AddToCanvas),
            KeyCode::Char('q') => Some(Action::OpenQuitDialog),
            KeyCode::Char('?') => Some(Action::OpenHelp),
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus(state);
                None
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.focus = Focus::Categories;
                None
            }
            KeyCode::Char('l') | KeyCode::Right => {
                if visible_options(state) > 0 {
                    self.focus = Focus::Options;
                }
                None
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_cursor(state, 1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_cursor(state, -1);
                None
            }
            KeyCode::Char('J') => Some(Action::ScrollDown),
            KeyCode::Char('K') => Some(Action::ScrollUp),
            KeyCode::PageDown => Some(Action::PageDown),
            KeyCode::PageUp => Some(Action::PageUp),
            KeyCode::Enter | KeyCode::Char(' ') => self.select_under_cursor(state),
            _ => None,
        };
        Ok(action)
    }

    fn toggle_focus(&mut self, state: &CatalogState) {
        self.focus = match self.focus {
            Focus::Categories if visible_options(state) > 0 => Focus::Options,
            _ => Focus::Categories,
        };
    }

    fn move_cursor(&mut self, state: &CatalogState, delta: isize) {
        let (list, len) = match self.focus {
            Focus::Categories => (&mut self.category_list, state.categories.len()),
            Focus::Options => (&mut self.option_list, visible_options(state)),
        };
        if len == 0 {
            list.select(None);
            return;
        }
        let next = match list.selected() {
            Some(i) => i.saturating_add_signed(delta).min(len - 1),
            None => 0,
        };
        list.select(Some(next));
    }

    fn select_under_cursor(&self, state: &CatalogState) -> Option<Action> {
        match self.focus {
            Focus::Categories => self.category_list.selected().map(Action::SelectCategory),
            Focus::Options if visible_options(state) == 0 => None,
            Focus::Options => self.option_list.selected().map(Action::SelectOption),
        }
    }

    /// Keep cursors inside the current lists
    fn clamp_cursors(&mut self, state: &CatalogState) {
        clamp_list(&mut self.category_list, state.categories.len());
        clamp_list(&mut self.option_list, visible_options(state));
        if state.options.is_empty() && !state.options_loading {
            self.focus = Focus::Categories;
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Rendering
    // ─────────────────────────────────────────────────────────────────────────

    pub fn draw_with_state(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &CatalogState,
    ) -> Result<()> {
        self.clamp_cursors(state);

        let popup = modal_area(area);
        frame.render_widget(Clear, popup);

        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} Transformation Blocks ", icon_glyph("shuffle")))
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
        let inner = outer.inner(popup);
        frame.render_widget(outer, popup);

        let layout = calculate_catalog_layout(inner, state.selected_category.is_some());

        self.draw_categories(frame, layout.categories, state);

        match (layout.options, layout.detail) {
            (Some(options_area), Some(detail_area)) if body_has_options(state) => {
                self.draw_options(frame, options_area, state);
                self.draw_detail(frame, detail_area, state);
            }
            _ => draw_body_message(frame, layout.body, state),
        }

        draw_footer(frame, layout.footer);
        Ok(())
    }

    fn draw_categories(&mut self, frame: &mut Frame, area: Rect, state: &CatalogState) {
        let focused = self.focus == Focus::Categories;
        let block = pane_block(" Categories ", focused, CATEGORY_COLOR);

        if state.categories_loading && state.categories.is_empty() {
            frame.render_widget(loading_paragraph().block(block), area);
            return;
        }

        let list = List::new(category_items(state))
            .block(block)
            .highlight_style(cursor_style(focused));
        frame.render_stateful_widget(list, area, &mut self.category_list);
    }

    fn draw_options(&mut self, frame: &mut Frame, area: Rect, state: &CatalogState) {
        let focused = self.focus == Focus::Options;
        let block = pane_block(" Blocks ", focused, OPTION_COLOR);

        let list = List::new(option_items(state))
            .block(block)
            .highlight_style(cursor_style(focused));
        frame.render_stateful_widget(list, area, &mut self.option_list);
    }

    fn draw_detail(&mut self, frame: &mut Frame, area: Rect, state: &CatalogState) {
        let content_width = area.width.saturating_sub(4) as usize;
        let lines = match state.selected_item() {
            Some(item) => detail_lines(item, content_width),
            None => alert_lines(&PICK_OPTION_MESSAGE, OPTION_COLOR),
        };

        let total = lines.len();
        let visible_height = area.height.saturating_sub(2) as usize;
        let max_scroll = total.saturating_sub(visible_height);
        if self.detail_scroll > max_scroll {
            self.detail_scroll = max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Details ")
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .scroll((self.detail_scroll as u16, 0));
        frame.render_widget(paragraph, area);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(max_scroll).position(self.detail_scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }
    }
}

fn clamp_list(list: &mut ListState, len: usize) {
    match list.selected() {
        Some(_) if len == 0 => list.select(None),
        Some(i) if i >= len => list.select(Some(len - 1)),
        None if len > 0 => list.select(Some(0)),
        _ => {}
    }
}

/// Number of items the user can act on; none while a new list is loading
fn visible_options(state: &CatalogState) -> usize {
    if state.options_loading {
        0
    } else {
        state.options.len()
    }
}

/// Whether the body shows the items list rather than a message
fn body_has_options(state: &CatalogState) -> bool {
    state.selected_category.is_some() && !state.options.is_empty() && !state.options_loading
}

/// Message shown in place of the items list, if any
pub fn body_message(state: &CatalogState) -> Option<Vec<Line<'static>>> {
    if state.selected_category.is_none() {
        Some(alert_lines(&PICK_CATEGORY_MESSAGE, CATEGORY_COLOR))
    } else if state.options_loading {
        Some(vec![Line::from(""), loading_line()])
    } else if state.options.is_empty() {
        Some(alert_lines(&[NO_OPTIONS_MESSAGE], OPTION_COLOR))
    } else {
        None
    }
}

fn draw_body_message(frame: &mut Frame, area: Rect, state: &CatalogState) {
    let lines = body_message(state).unwrap_or_default();
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(
            " Back ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Esc/b", Style::default().fg(Color::Cyan)),
        Span::raw("    "),
        Span::styled(
            " Add to canvas ",
            Style::default().fg(Color::DarkGray).bg(Color::Gray),
        ),
        Span::styled(" a", Style::default().fg(Color::Cyan)),
        Span::raw("    "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" Focus  "),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(" Move  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" Select  "),
        Span::styled("PgUp/PgDn", Style::default().fg(Color::Cyan)),
        Span::raw(" Scroll"),
    ]);
    frame.render_widget(Paragraph::new(footer).alignment(Alignment::Right), area);
}

fn pane_block(title: &'static str, focused: bool, accent: Color) -> Block<'static> {
    let border = if focused { accent } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border))
}

fn cursor_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::DarkGray)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

fn loading_line() -> Line<'static> {
    Line::from(Span::styled(
        "Loading...",
        Style::default().fg(Color::Yellow),
    ))
}

fn loading_paragraph() -> Paragraph<'static> {
    Paragraph::new(vec![loading_line()])
}

fn alert_lines(text: &[&str], accent: Color) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from("")];
    lines.extend(text.iter().map(|t| {
        Line::from(Span::styled(t.to_string(), Style::default().fg(accent)))
    }));
    lines
}

/// One list entry per category, the selected one marked
pub fn category_items(state: &CatalogState) -> Vec<ListItem<'static>> {
    state
        .categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            selectable_item(
                &category.icon,
                &category.name,
                state.selected_category == Some(i),
                CATEGORY_COLOR,
            )
        })
        .collect()
}

/// One list entry per catalog item, the selected one marked
pub fn option_items(state: &CatalogState) -> Vec<ListItem<'static>> {
    state
        .options
        .iter()
        .enumerate()
        .map(|(i, item)| {
            selectable_item(
                &item.icon,
                &item.name,
                state.selected_option == Some(i),
                OPTION_COLOR,
            )
        })
        .collect()
}

fn selectable_item(icon: &str, name: &str, selected: bool, accent: Color) -> ListItem<'static> {
    let marker = if selected { "●" } else { " " };
    let style = if selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    ListItem::new(Line::from(vec![
        Span::styled(format!("{} ", marker), Style::default().fg(accent)),
        Span::styled(format!("{} ", icon_glyph(icon)), Style::default().fg(accent)),
        Span::styled(name.to_string(), style),
    ]))
}

/// Detail panel content for one catalog item
pub fn detail_lines(item: &CatalogItem, width: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!(" {}  ", icon_glyph(&item.icon)),
            Style::default().fg(OPTION_COLOR),
        ),
        Span::styled(
            item.name.clone(),
            Style::default()
                .fg(OPTION_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ])];

    lines.push(Line::from(""));
    for text in wrap_text(&item.description, width.max(20)) {
        lines.push(Line::from(format!(" {}", text)));
    }

    if !item.required_column_types.is_empty() || !item.optional_column_types.is_empty() {
        lines.push(Line::from(""));
    }
    if !item.required_column_types.is_empty() {
        lines.push(badge_line("Required column types:", &item.required_column_types));
    }
    if !item.optional_column_types.is_empty() {
        lines.push(badge_line("Optional column types:", &item.optional_column_types));
    }

    lines.push(Line::from(""));
    lines.push(section_heading("Parameters"));
    if item.macro_parameters.is_empty() {
        lines.push(Line::from(Span::styled(
            "   (none)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for param in &item.macro_parameters {
        lines.push(Line::from(format!("   • {}", param.name)));
    }

    push_examples(&mut lines, "Before", &item.examples_before);
    push_examples(&mut lines, "After", &item.examples_after);

    lines
}

fn push_examples(lines: &mut Vec<Line<'static>>, label: &str, examples: &[Example]) {
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(Color::Black)
            .bg(OPTION_COLOR)
            .add_modifier(Modifier::BOLD),
    )));
    for example in examples {
        lines.push(Line::from(""));
        lines.extend(ExampleTable::new(example).render_lines());
    }
}

fn section_heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!(" {}", text),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ))
}

fn badge_line(label: &str, badges: &[String]) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", label),
        Style::default().fg(Color::Gray),
    )];
    for badge in badges {
        spans.push(Span::styled(
            format!(" {} ", badge),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// Greedy word wrap by display width
fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.width() + 1 + word.width() > width {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    lines
}

/// Terminal glyph for a catalog icon name
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon.trim_start_matches("fa-") {
        "shuffle" | "random" => "⇄",
        "filter" => "⧩",
        "layer-group" | "object-group" => "≣",
        "calculator" | "plus" | "sigma" => "∑",
        "table" | "table-columns" => "▦",
        "calendar" | "clock" => "◷",
        "font" | "text" | "spell-check" => "A",
        "code-merge" | "link" => "⋈",
        "sort" | "arrow-down-wide-short" => "⇅",
        "broom" | "eraser" => "✧",
        _ => "■",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::{ApiResponse, Category};
    use ratatui::{backend::TestBackend, Terminal};

    fn category(id: &str, name: &str) -> Category {
        Category {
            id: id.to_string(),
            name: name.to_string(),
            icon: "filter".to_string(),
        }
    }

    fn sample_item() -> CatalogItem {
        serde_json::from_value(serde_json::json!({
            "name": "Filter by value",
            "icon": "filter",
            "description": "Keeps only the rows whose column matches the value",
            "required_column_types": ["text"],
            "optional_column_types": [],
            "macro_parameters": [{"name": "column"}, {"name": "value"}],
            "examples_before": [{"columns": ["city"], "rows": [["Berlin"], ["Paris"]]}],
            "examples_after": [{"columns": ["city"], "rows": [{"city": "Berlin"}]}]
        }))
        .unwrap()
    }

    fn state_with_categories(n: usize) -> CatalogState {
        let mut state = CatalogState::new();
        state.apply_categories(Ok(ApiResponse::ok(
            (0..n)
                .map(|i| category(&i.to_string(), &format!("Category {}", i)))
                .collect(),
        )));
        state
    }

    fn render(modal: &mut CatalogModal, state: &CatalogState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                modal.draw_with_state(frame, area, state).unwrap();
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_selector_renders_one_entry_per_category() {
        let state = state_with_categories(4);
        assert_eq!(category_items(&state).len(), 4);

        let screen = render(&mut CatalogModal::new(), &state);
        for i in 0..4 {
            assert!(screen.contains(&format!("Category {}", i)));
        }
    }

    #[test]
    fn test_body_prompts_for_category_first() {
        let state = state_with_categories(2);
        let screen = render(&mut CatalogModal::new(), &state);
        assert!(screen.contains(PICK_CATEGORY_MESSAGE[1]));
    }

    #[test]
    fn test_non_200_items_shows_no_options_message() {
        let mut state = state_with_categories(2);
        state.select_category(0);
        state.apply_items(Ok(ApiResponse {
            status: 500,
            data: Vec::new(),
        }));

        assert!(state.options.is_empty());
        let screen = render(&mut CatalogModal::new(), &state);
        assert!(screen.contains(NO_OPTIONS_MESSAGE));
    }

    #[test]
    fn test_items_without_selection_prompt_for_item() {
        let mut state = state_with_categories(1);
        state.select_category(0);
        state.apply_items(Ok(ApiResponse::ok(vec![sample_item()])));

        let screen = render(&mut CatalogModal::new(), &state);
        assert!(screen.contains("Filter by value"));
        assert!(screen.contains(PICK_OPTION_MESSAGE[1]));
    }

    #[test]
    fn test_selected_item_renders_details_and_both_examples() {
        let mut state = state_with_categories(1);
        state.select_category(0);
        state.apply_items(Ok(ApiResponse::ok(vec![sample_item()])));
        assert!(state.select_option(0));

        let screen = render(&mut CatalogModal::new(), &state);

        assert!(screen.contains("Filter by value"));
        assert!(screen.contains("Keeps only the rows"));
        assert!(screen.contains("Required column types:"));
        assert!(!screen.contains("Optional column types:"));
        assert!(screen.contains("column"));
        assert!(screen.contains(" Before "));
        assert!(screen.contains(" After "));
        assert!(screen.contains("Paris"));
    }

    #[test]
    fn test_detail_lines_include_every_example_row() {
        let item = sample_item();
        let text: Vec<String> = detail_lines(&item, 80)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(text.iter().any(|l| l.contains("Berlin")));
        assert!(text.iter().any(|l| l.contains("Paris")));
        assert!(text.iter().any(|l| l.contains("• value")));
    }

    #[test]
    fn test_enter_on_category_emits_selection() {
        let state = state_with_categories(3);
        let mut modal = CatalogModal::new();

        modal.handle_key_with_state(key(KeyCode::Down), &state).unwrap();
        modal.handle_key_with_state(key(KeyCode::Down), &state).unwrap();
        let action = modal.handle_key_with_state(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(action, Some(Action::SelectCategory(1)));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let state = state_with_categories(2);
        let mut modal = CatalogModal::new();

        for _ in 0..5 {
            modal.handle_key_with_state(key(KeyCode::Down), &state).unwrap();
        }
        assert_eq!(modal.category_list.selected(), Some(1));

        for _ in 0..5 {
            modal.handle_key_with_state(key(KeyCode::Up), &state).unwrap();
        }
        assert_eq!(modal.category_list.selected(), Some(0));
    }

    #[test]
    fn test_focus_stays_on_categories_without_options() {
        let state = state_with_categories(2);
        let mut modal = CatalogModal::new();
        modal.handle_key_with_state(key(KeyCode::Tab), &state).unwrap();
        assert_eq!(modal.focus, Focus::Categories);
    }

    #[test]
    fn test_back_and_add_to_canvas_keys() {
        let state = CatalogState::new();
        let mut modal = CatalogModal::new();
        assert_eq!(
            modal.handle_key_with_state(key(KeyCode::Esc), &state).unwrap(),
            Some(Action::CloseModal)
        );
        assert_eq!(
            modal.handle_key_with_state(key(KeyCode::Char('a')), &state).unwrap(),
            Some(Action::AddToCanvas)
        );
    }

    #[test]
    fn test_category_selection_moves_focus_and_clears_option_cursor() {
        let mut modal = CatalogModal::new();
        modal.option_list.select(Some(2));
        modal.detail_scroll = 7;

        modal.update(Action::SelectCategory(0)).unwrap();

        assert_eq!(modal.focus, Focus::Options);
        assert_eq!(modal.option_list.selected(), None);
        assert_eq!(modal.detail_scroll, 0);
    }

    #[test]
    fn test_enter_while_items_load_selects_nothing() {
        let mut state = state_with_categories(2);
        state.select_category(0);
        state.apply_items(Ok(ApiResponse::ok(vec![sample_item()])));
        let mut modal = CatalogModal::new();
        modal.update(Action::SelectCategory(0)).unwrap();

        state.select_category(1);
        modal.update(Action::SelectCategory(1)).unwrap();
        render(&mut modal, &state);

        modal.handle_key_with_state(key(KeyCode::Down), &state).unwrap();
        let action = modal.handle_key_with_state(key(KeyCode::Enter), &state).unwrap();

        assert_eq!(action, None);
        assert_eq!(modal.option_list.selected(), None);
        assert_eq!(modal.focus, Focus::Options);
    }

    #[test]
    fn test_wrap_text_respects_width() {
        let lines = wrap_text("one two three four five", 9);
        assert!(lines.iter().all(|l| l.width() <= 9));
        assert_eq!(lines.join(" "), "one two three four five");
    }

    #[test]
    fn test_icon_glyph_fallback() {
        assert_eq!(icon_glyph("fa-filter"), "⧩");
        assert_eq!(icon_glyph("unknown-icon"), "■");
    }
}
