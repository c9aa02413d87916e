//! Root application component
//!
//! The App struct implements the Component trait, acting as the root component
//! that delegates event handling and rendering to child components.
//! It owns the catalog state and the fetch runner; components only see them
//! through the `*_with_*` methods.

use crate::action::Action;
use crate::component::Component;
use crate::components::{
    CanvasComponent, CanvasRenderContext, CatalogModal, HelpDialog, QuitDialog,
};
use crate::model::modal::{Modal, ModalStack};
use crate::model::CatalogState;
use crate::services::{CatalogApi, FetchRunner};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

// ═══════════════════════════════════════════════════════════════════════════════
// App Struct
// ═══════════════════════════════════════════════════════════════════════════════

/// Main application state - coordinates between components
pub struct App {
    /// Modal overlay stack
    pub modals: ModalStack,

    /// Fetched categories/items and the current selection
    pub catalog: CatalogState,

    /// Background catalog requests
    pub fetch_runner: FetchRunner,

    /// Flag to indicate the app should quit
    pub should_quit: bool,

    /// Human-readable catalog source for the status bar
    catalog_source: String,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub canvas: CanvasComponent,
    pub catalog_modal: CatalogModal,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
}

// ═══════════════════════════════════════════════════════════════════════════════
// App Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl App {
    /// Create a new App reading from the given catalog
    pub fn new(client: Arc<dyn CatalogApi>) -> App {
        let fetch_runner = FetchRunner::new(client);
        App {
            modals: ModalStack::new(),
            catalog: CatalogState::new(),
            catalog_source: fetch_runner.source(),
            fetch_runner,
            should_quit: false,
            canvas: CanvasComponent,
            catalog_modal: CatalogModal::new(),
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
        }
    }

    /// Open the catalog modal with fresh state and request the categories
    fn open_catalog(&mut self) {
        if self.modals.contains(&Modal::Catalog) {
            return;
        }

        tracing::info!("Opening transformation catalog");
        self.catalog.reset();
        self.catalog_modal.reset();
        self.catalog.categories_loading = true;
        self.fetch_runner.spawn_categories();
        self.modals.push(Modal::Catalog);
    }

    /// Back: close the catalog and drop its state
    fn close_catalog(&mut self) {
        tracing::info!("Closing transformation catalog");
        if self.fetch_runner.is_busy() {
            tracing::debug!("Dropping pending catalog requests");
        }
        self.fetch_runner.clear();
        self.catalog.reset();
        self.catalog_modal.reset();
        self.modals.pop();
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn init(&mut self) -> Result<()> {
        // The editor opens straight into the catalog
        self.open_catalog();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Ok(Some(Action::ForceQuit));
        }

        match self.modals.top() {
            Some(Modal::Catalog) => self
                .catalog_modal
                .handle_key_with_state(key, &self.catalog),
            Some(Modal::QuitConfirm) => self.quit_dialog.handle_key_event(key),
            Some(Modal::Help) => self.help_dialog.handle_key_event(key),
            None => self.canvas.handle_key_event(key),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            // ─────────────────────────────────────────────────────────────────
            // App Lifecycle
            // ─────────────────────────────────────────────────────────────────
            Action::Tick => {
                self.fetch_runner.poll(&mut self.catalog);
            }
            Action::Resize(_, _) => {}
            Action::ForceQuit => {
                self.should_quit = true;
            }

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenCatalog => self.open_catalog(),
            Action::OpenQuitDialog => {
                self.modals.push(Modal::QuitConfirm);
            }
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::CloseModal => match self.modals.top() {
                Some(Modal::Catalog) => self.close_catalog(),
                Some(_) => {
                    self.modals.pop();
                }
                None => {}
            },
            Action::ConfirmModal => {
                if self.modals.top() == Some(&Modal::QuitConfirm) {
                    self.should_quit = true;
                }
            }

            // ─────────────────────────────────────────────────────────────────
            // Catalog
            // ─────────────────────────────────────────────────────────────────
            Action::SelectCategory(index) => {
                if let Some(category_id) = self.catalog.select_category(index) {
                    tracing::debug!(index, category_id = %category_id, "Category selected");
                    self.catalog_modal.update(Action::SelectCategory(index))?;
                    return Ok(Some(Action::FetchCategoryItems(category_id)));
                }
            }
            Action::SelectOption(index) => {
                if self.catalog.select_option(index) {
                    self.catalog_modal.update(Action::SelectOption(index))?;
                }
            }
            Action::FetchCategoryItems(category_id) => {
                self.fetch_runner.spawn_items(category_id);
            }
            Action::AddToCanvas => {
                tracing::debug!("Add to canvas pressed; no handler is wired");
            }

            // ─────────────────────────────────────────────────────────────────
            // Scrolling (delegate to the top modal)
            // ─────────────────────────────────────────────────────────────────
            Action::ScrollUp | Action::ScrollDown | Action::PageUp | Action::PageDown => {
                match self.modals.top() {
                    Some(Modal::Catalog) => {
                        self.catalog_modal.update(action)?;
                    }
                    Some(Modal::Help) => {
                        self.help_dialog.update(action)?;
                    }
                    _ => {}
                }
            }
        }

        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = CanvasRenderContext {
            catalog_source: &self.catalog_source,
        };
        self.canvas.draw_with_context(frame, area, &ctx)?;

        let modals: Vec<Modal> = self.modals.iter().cloned().collect();
        for modal in modals {
            match modal {
                Modal::Catalog => {
                    self.catalog_modal
                        .draw_with_state(frame, area, &self.catalog)?;
                }
                Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
                Modal::Help => self.help_dialog.draw(frame, area)?,
            }
        }
        Ok(())
    }
}
