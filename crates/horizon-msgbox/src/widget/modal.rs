//! Modal dialog bookkeeping.
//!
//! Tracks the stack of open modal dialogs so the host can decide where
//! input may go. The most recently opened modal is on top and is the only
//! window that can receive input while the stack is non-empty.

use std::sync::Mutex;

use horizon_msgbox_core::ObjectId;

/// Global stack of open application-modal dialogs.
static MODAL_STACK: Mutex<Vec<ObjectId>> = Mutex::new(Vec::new());

/// Manages modal dialog state and input blocking.
///
/// All methods use a global lock and are safe to call from any thread.
pub struct ModalManager;

impl ModalManager {
    /// Push a modal dialog onto the stack when it opens.
    ///
    /// Duplicate pushes of the same dialog are ignored.
    pub fn push_modal(dialog_id: ObjectId) {
        let mut stack = MODAL_STACK.lock().unwrap();
        if !stack.contains(&dialog_id) {
            stack.push(dialog_id);
        }
    }

    /// Remove a modal dialog from the stack when it closes.
    ///
    /// Returns `true` if the dialog was found and removed.
    pub fn pop_modal(dialog_id: ObjectId) -> bool {
        let mut stack = MODAL_STACK.lock().unwrap();
        if let Some(pos) = stack.iter().position(|&id| id == dialog_id) {
            stack.remove(pos);
            true
        } else {
            false
        }
    }

    /// Check if any modal dialog is open.
    pub fn has_modal() -> bool {
        !MODAL_STACK.lock().unwrap().is_empty()
    }

    /// The topmost open modal dialog, if any.
    pub fn active_modal() -> Option<ObjectId> {
        MODAL_STACK.lock().unwrap().last().copied()
    }

    /// Check if input to `window_id` should be blocked.
    ///
    /// A window is blocked while any modal other than itself is on top.
    pub fn is_blocked(window_id: ObjectId) -> bool {
        match Self::active_modal() {
            Some(top) => top != window_id,
            None => false,
        }
    }

    /// Number of open modal dialogs.
    pub fn modal_count() -> usize {
        MODAL_STACK.lock().unwrap().len()
    }

    /// Drop all modal state. Intended for tests.
    pub fn clear() {
        MODAL_STACK.lock().unwrap().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horizon_msgbox_core::{init_global_registry, global_registry};

    fn fresh_id() -> ObjectId {
        init_global_registry();
        global_registry().unwrap().register::<()>()
    }

    #[test]
    fn test_modal_stack_ordering() {
        ModalManager::clear();
        let first = fresh_id();
        let second = fresh_id();

        ModalManager::push_modal(first);
        ModalManager::push_modal(second);
        // Duplicate push is ignored.
        ModalManager::push_modal(second);

        assert_eq!(ModalManager::modal_count(), 2);
        assert_eq!(ModalManager::active_modal(), Some(second));
        assert!(ModalManager::is_blocked(first));
        assert!(!ModalManager::is_blocked(second));

        assert!(ModalManager::pop_modal(second));
        assert_eq!(ModalManager::active_modal(), Some(first));
        assert!(!ModalManager::is_blocked(first));

        assert!(ModalManager::pop_modal(first));
        assert!(!ModalManager::pop_modal(first));
        assert!(!ModalManager::has_modal());
    }
}
