//! Layout calculations for the UI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Catalog modal layout areas
pub struct CatalogLayout {
    pub categories: Rect,
    pub body: Rect,
    pub options: Option<Rect>,
    pub detail: Option<Rect>,
    pub footer: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let popup_x = area.x + (area.width.saturating_sub(width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(
        popup_x,
        popup_y,
        width.min(area.width),
        height.min(area.height),
    )
}

/// Area taken by the catalog modal: most of the screen, leaving a margin
pub fn modal_area(area: Rect) -> Rect {
    let margin_x = (area.width / 20).max(1);
    let margin_y = (area.height / 20).max(1);
    Rect::new(
        area.x + margin_x,
        area.y + margin_y,
        area.width.saturating_sub(margin_x * 2),
        area.height.saturating_sub(margin_y * 2),
    )
}

/// Split the inside of the catalog modal
///
/// Selector on the left, body on the right, footer row at the bottom. Once
/// a category is selected the body splits into the item list and details.
pub fn calculate_catalog_layout(area: Rect, has_category: bool) -> CatalogLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(24), Constraint::Percentage(76)])
        .split(main_chunks[0]);

    let body = horizontal_chunks[1];

    let (options, detail) = if has_category {
        let body_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
            .split(body);
        (Some(body_chunks[0]), Some(body_chunks[1]))
    } else {
        (None, None)
    };

    CatalogLayout {
        categories: horizontal_chunks[0],
        body,
        options,
        detail,
        footer: main_chunks[1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_popup_is_centered() {
        let popup = centered_popup(Rect::new(0, 0, 100, 40), 40, 10);
        assert_eq!(popup, Rect::new(30, 15, 40, 10));
    }

    #[test]
    fn test_centered_popup_clamps_to_area() {
        let popup = centered_popup(Rect::new(0, 0, 20, 5), 40, 10);
        assert_eq!(popup.width, 20);
        assert_eq!(popup.height, 5);
    }

    #[test]
    fn test_catalog_layout_splits_body_after_selection() {
        let area = Rect::new(0, 0, 120, 40);

        let closed = calculate_catalog_layout(area, false);
        assert!(closed.options.is_none());
        assert_eq!(closed.footer.height, 1);

        let open = calculate_catalog_layout(area, true);
        let options = open.options.unwrap();
        let detail = open.detail.unwrap();
        assert_eq!(options.width + detail.width, open.body.width);
        assert!(open.categories.right() <= open.body.left());
    }
}
