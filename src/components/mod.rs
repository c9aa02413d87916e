//! UI Components
//!
//! Each component encapsulates its own state, event handling, and rendering logic.
//! Components communicate through Actions rather than direct state mutation.

pub mod canvas;
pub mod catalog_modal;
pub mod example_table;
pub mod help_dialog;
pub mod layout;
pub mod quit_dialog;

pub use canvas::{CanvasComponent, CanvasRenderContext};
pub use catalog_modal::CatalogModal;
pub use help_dialog::HelpDialog;
pub use layout::centered_popup;
pub use quit_dialog::QuitDialog;
