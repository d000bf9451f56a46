//! Drag session tracking.
//!
//! Converts a raw pointer-down/move/up sequence into clamped position
//! updates for whichever subject (trigger button or chat panel) is being
//! dragged, and classifies the gesture as a click or a drag by a
//! displacement threshold on release.
//!
//! At most one session is open at a time; a `begin_drag` while a session
//! is active is ignored. Moves and releases without an open session are
//! no-ops, never panics. Every position the tracker emits is already
//! clamped into the viewport for the subject's size, so intermediate drag
//! frames can be rendered directly.

use crate::geometry::{Point, Size};

/// Which element a drag session is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSubject {
    /// The trigger button (the widget anchor).
    Button,
    /// The open chat panel.
    Panel,
}

/// Drag behavior configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragConfig {
    /// Maximum per-axis displacement (in pixels) for a release to count
    /// as a click rather than a drag.
    pub click_threshold: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            click_threshold: 5.0,
        }
    }
}

/// Listener lifecycle hooks for a drag session.
///
/// Pointer-move/up handlers only need to exist while a session is open.
/// `attach` fires when a session opens; `detach` fires exactly once when
/// it closes, through the same exit path for a normal release and a
/// forced cancellation.
pub trait SessionHooks: Send {
    /// A session opened; register global pointer handlers.
    fn attach(&mut self) {}
    /// The session closed; remove the handlers.
    fn detach(&mut self) {}
}

/// The transient record spanning pointer-down to pointer-up.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    subject: DragSubject,
    subject_size: Size,
    start_pointer: Point,
    start_position: Point,
}

/// How a completed session is classified.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOutcome {
    /// Displacement stayed below the threshold on both axes: the gesture
    /// is a click. The caller restores the subject to `start_position`
    /// and toggles the widget instead.
    Click {
        /// Subject of the finished session.
        subject: DragSubject,
        /// Position the subject held when the session began.
        start_position: Point,
    },
    /// The subject was genuinely dragged; it stays at its last clamped
    /// position.
    Drag {
        /// Subject of the finished session.
        subject: DragSubject,
    },
}

/// Tracks the single active drag session.
pub struct DragTracker {
    config: DragConfig,
    session: Option<DragSession>,
    hooks: Option<Box<dyn SessionHooks>>,
}

impl std::fmt::Debug for DragTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DragTracker")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl DragTracker {
    /// Create a tracker with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DragConfig::default())
    }

    /// Create a tracker with a custom configuration.
    #[must_use]
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            config,
            session: None,
            hooks: None,
        }
    }

    /// Install listener lifecycle hooks.
    pub fn set_hooks(&mut self, hooks: Box<dyn SessionHooks>) {
        self.hooks = Some(hooks);
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Whether a session is currently open.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Subject of the open session, if any.
    #[must_use]
    pub fn subject(&self) -> Option<DragSubject> {
        self.session.map(|s| s.subject)
    }

    /// Open a drag session.
    ///
    /// Records the pointer and subject start positions and fires
    /// `attach`. Returns `false` (ignoring the request) if a session is
    /// already open: sessions are mutually exclusive.
    pub fn begin_drag(
        &mut self,
        subject: DragSubject,
        subject_size: Size,
        pointer: Point,
        subject_position: Point,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        self.session = Some(DragSession {
            subject,
            subject_size,
            start_pointer: pointer,
            start_position: subject_position,
        });
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.attach();
        }
        true
    }

    /// Propose a new subject position for a pointer move.
    ///
    /// Computes `start_position + (pointer - start_pointer)` and clamps
    /// it into the viewport for the subject's size. Returns `None` when
    /// no session is open. Idempotent: the output depends only on the
    /// session start and the current pointer, not on prior moves.
    pub fn on_pointer_move(
        &mut self,
        pointer: Point,
        viewport: Size,
    ) -> Option<(DragSubject, Point)> {
        let session = self.session?;
        let proposed = session.start_position + (pointer - session.start_pointer);
        let clamped = proposed.clamp_within(viewport, session.subject_size);
        Some((session.subject, clamped))
    }

    /// Close the session and classify the gesture.
    ///
    /// Releases with per-axis displacement below the click threshold are
    /// reclassified as clicks. Session state is cleared unconditionally;
    /// a release with no open session is a no-op returning `None`.
    pub fn end_drag(&mut self, pointer: Point) -> Option<DragOutcome> {
        let session = self.close_session()?;
        let delta = pointer - session.start_pointer;
        if delta.x.abs() < self.config.click_threshold
            && delta.y.abs() < self.config.click_threshold
        {
            Some(DragOutcome::Click {
                subject: session.subject,
                start_position: session.start_position,
            })
        } else {
            Some(DragOutcome::Drag {
                subject: session.subject,
            })
        }
    }

    /// Force the session closed (pointer capture lost).
    ///
    /// The subject stays at its last clamped position; no click
    /// classification happens.
    pub fn cancel(&mut self) {
        let _ = self.close_session();
    }

    /// Single exit path for every way a session can end. Fires `detach`
    /// exactly once per opened session.
    fn close_session(&mut self) -> Option<DragSession> {
        let session = self.session.take()?;
        if let Some(hooks) = self.hooks.as_mut() {
            hooks.detach();
        }
        Some(session)
    }
}

impl Default for DragTracker {
    fn default() -> Self {
        Self::new()
    }
}
