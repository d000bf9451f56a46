//! Viewport size providers.
//!
//! The widget never reads window dimensions from ambient globals; it is
//! constructed with a [`ViewportProvider`] so tests can run against a
//! fixed surface and hosts can hand in a live window handle.

use crate::geometry::Size;
use std::sync::{Arc, Mutex};

/// Source of the current viewport dimensions.
pub trait ViewportProvider {
    /// Current viewport size, read on demand.
    fn size(&self) -> Size;
}

/// A viewport with fixed dimensions. Useful in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedViewport(pub Size);

impl FixedViewport {
    /// Create a fixed viewport of the given dimensions.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self(Size::new(width, height))
    }
}

impl ViewportProvider for FixedViewport {
    fn size(&self) -> Size {
        self.0
    }
}

/// A viewport handle that a host can update from resize callbacks.
///
/// Clones share the same underlying size.
#[derive(Debug, Clone)]
pub struct SharedViewport {
    size: Arc<Mutex<Size>>,
}

impl SharedViewport {
    /// Create a shared viewport with an initial size.
    #[must_use]
    pub fn new(initial: Size) -> Self {
        Self {
            size: Arc::new(Mutex::new(initial)),
        }
    }

    /// Replace the stored size.
    pub fn set(&self, size: Size) {
        if let Ok(mut guard) = self.size.lock() {
            *guard = size;
        }
    }
}

impl ViewportProvider for SharedViewport {
    fn size(&self) -> Size {
        self.size.lock().map_or(Size::ZERO, |guard| *guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_viewport() {
        let vp = FixedViewport::new(1920.0, 1080.0);
        assert_eq!(vp.size(), Size::new(1920.0, 1080.0));
    }

    #[test]
    fn test_shared_viewport_set() {
        let vp = SharedViewport::new(Size::new(800.0, 600.0));
        let clone = vp.clone();
        clone.set(Size::new(1024.0, 768.0));
        assert_eq!(vp.size(), Size::new(1024.0, 768.0));
    }
}
