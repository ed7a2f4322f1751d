//! Pointer capture for drag gestures.
//!
//! While a widget is being dragged, every pointer move and release goes to
//! the drag no matter where the pointer is, including outside the canvas.
//! The capture is held by a [`CaptureGuard`]; dropping the guard releases
//! it, so a drag that ends, is replaced, or whose owner is torn down can
//! never leave the capture behind.

use std::cell::Cell;
use std::rc::Rc;

use crate::widget::WidgetId;

#[derive(Debug, Default)]
struct CaptureSlot {
    /// Generation and owner of the current holder.
    holder: Cell<Option<(u64, WidgetId)>>,
    next_generation: Cell<u64>,
}

/// Shared capture state for one canvas.
#[derive(Debug, Clone, Default)]
pub struct PointerCapture {
    slot: Rc<CaptureSlot>,
}

impl PointerCapture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the capture for a drag on `owner`.
    ///
    /// Any previous holder is superseded; its guard becomes inert.
    pub fn acquire(&self, owner: WidgetId) -> CaptureGuard {
        let generation = self.slot.next_generation.get();
        self.slot.next_generation.set(generation + 1);
        if let Some((_, previous)) = self.slot.holder.replace(Some((generation, owner))) {
            log::warn!("Pointer capture taken over from {} by {}", previous, owner);
        }
        log::debug!("Pointer capture acquired for {}", owner);
        CaptureGuard {
            slot: Rc::clone(&self.slot),
            generation,
        }
    }

    /// Whether a drag currently holds the capture.
    pub fn is_captured(&self) -> bool {
        self.slot.holder.get().is_some()
    }

    /// The widget whose drag holds the capture.
    pub fn owner(&self) -> Option<WidgetId> {
        self.slot.holder.get().map(|(_, owner)| owner)
    }
}

/// Scoped ownership of the pointer capture. Releases on drop.
#[derive(Debug)]
pub struct CaptureGuard {
    slot: Rc<CaptureSlot>,
    generation: u64,
}

impl CaptureGuard {
    /// Whether this guard still holds the capture.
    pub fn is_held(&self) -> bool {
        matches!(self.slot.holder.get(), Some((g, _)) if g == self.generation)
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        if self.is_held() {
            self.slot.holder.set(None);
            log::debug!("Pointer capture released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release_on_drop() {
        let capture = PointerCapture::new();
        let owner = WidgetId::new();
        {
            let guard = capture.acquire(owner);
            assert!(guard.is_held());
            assert!(capture.is_captured());
            assert_eq!(capture.owner(), Some(owner));
        }
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_superseded_guard_does_not_release_new_holder() {
        let capture = PointerCapture::new();
        let owner = WidgetId::new();
        let first = capture.acquire(owner);
        let second = capture.acquire(owner);

        assert!(!first.is_held());
        drop(first);
        assert!(capture.is_captured());
        assert!(second.is_held());
        drop(second);
        assert!(!capture.is_captured());
    }

    #[test]
    fn test_clones_share_state() {
        let capture = PointerCapture::new();
        let view = capture.clone();
        let _guard = capture.acquire(WidgetId::new());
        assert!(view.is_captured());
    }
}
