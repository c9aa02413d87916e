//! Model layer - centralized state management
//!
//! This module contains all state-related types:
//! - `catalog` - Wire types for categories, items and examples
//! - `CatalogState` - Selection and fetched lists behind the catalog modal
//! - `data_dictionary` - Render-ready example rows
//! - `ModalStack` - Modal overlay management

pub mod catalog;
pub mod catalog_state;
pub mod data_dictionary;
pub mod modal;

// Re-export commonly used types
pub use catalog::{CatalogItem, Example};
pub use catalog_state::CatalogState;
pub use data_dictionary::{get_data_dictionary, DataRow};
