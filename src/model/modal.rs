//! Modal stack for managing overlays
//!
//! Only the top modal receives input; modals are drawn bottom to top.

/// Represents a modal overlay that can be displayed on top of the canvas
#[derive(Debug, Clone, PartialEq)]
pub enum Modal {
    /// Transformation catalog browser
    Catalog,
    /// Quit confirmation dialog
    QuitConfirm,
    /// Help dialog showing all keyboard shortcuts
    Help,
}

/// A stack of modal overlays
#[derive(Debug, Default)]
pub struct ModalStack {
    stack: Vec<Modal>,
}

impl ModalStack {
    /// Create a new empty modal stack
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Push a modal onto the stack
    pub fn push(&mut self, modal: Modal) {
        self.stack.push(modal);
    }

    /// Pop the top modal from the stack
    pub fn pop(&mut self) -> Option<Modal> {
        self.stack.pop()
    }

    /// Get a reference to the top modal without removing it
    pub fn top(&self) -> Option<&Modal> {
        self.stack.last()
    }

    /// Whether the given modal is anywhere on the stack
    pub fn contains(&self, modal: &Modal) -> bool {
        self.stack.contains(modal)
    }

    /// Iterate from bottom to top
    pub fn iter(&self) -> impl Iterator<Item = &Modal> {
        self.stack.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_stack_push_pop() {
        let mut stack = ModalStack::new();
        assert!(stack.top().is_none());

        stack.push(Modal::Catalog);
        stack.push(Modal::QuitConfirm);

        assert_eq!(stack.pop(), Some(Modal::QuitConfirm));
        assert_eq!(stack.pop(), Some(Modal::Catalog));
        assert!(stack.top().is_none());
    }

    #[test]
    fn test_modal_stack_contains() {
        let mut stack = ModalStack::new();
        stack.push(Modal::Catalog);
        stack.push(Modal::Help);

        assert!(stack.contains(&Modal::Catalog));
        assert!(!stack.contains(&Modal::QuitConfirm));
        assert_eq!(stack.iter().count(), 2);
    }
}
