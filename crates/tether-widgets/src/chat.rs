//! The floating chat widget state object.
//!
//! Owns the trigger button's anchor position, the open/closed flag, the
//! solved panel placement, the drag tracker, the message log view, the
//! composer draft, and the advisory connection-liveness flag. All state
//! transitions happen synchronously inside the host's pointer-event
//! callbacks; the widget raises no errors and never panics on malformed
//! event sequences.
//!
//! Drag coordination keeps the two elements tethered: dragging the
//! button re-solves the panel placement on every move, while dragging
//! the panel takes the panel position literally and re-derives the
//! button through the inverse mapping of the placement's origin.

use std::time::{Duration, Instant};

use tether_core::{
    button_from_panel, solve, DragConfig, DragOutcome, DragSubject, DragTracker, Event,
    PanelPlacement, PlacementMetrics, Point, Rect, SessionHooks, Size, ViewportProvider,
};

use crate::message::{ChatMessage, MessageAlignment, MessageLog};

/// How long a message fetch may stay outstanding while the widget is
/// open before the connection is flagged as degraded.
pub const STALL_TIMEOUT: Duration = Duration::from_secs(10);

/// Default inset of the trigger button from the bottom-right corner.
const ANCHOR_INSET: f32 = 24.0;

/// Side effects the widget requests from its collaborators.
///
/// Both are fire-and-forget from the widget's perspective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatEffect {
    /// Deliver a composed message to the transport.
    SendMessage {
        /// Trimmed message body.
        text: String,
    },
    /// Scroll the rendered message list to its latest entry.
    ScrollToLatest,
}

/// The floating chat widget.
pub struct ChatWidget {
    viewport_source: Box<dyn ViewportProvider + Send>,
    viewport: Size,
    metrics: PlacementMetrics,
    tracker: DragTracker,
    anchor: Point,
    placement: Option<PanelPlacement>,
    log: MessageLog,
    current_user_id: String,
    draft: String,
    loading_since: Option<Instant>,
}

impl std::fmt::Debug for ChatWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatWidget")
            .field("viewport", &self.viewport)
            .field("anchor", &self.anchor)
            .field("placement", &self.placement)
            .field("messages", &self.log.len())
            .finish_non_exhaustive()
    }
}

impl ChatWidget {
    /// Create a widget with default metrics and drag configuration.
    ///
    /// The initial anchor sits inset from the viewport's bottom-right
    /// corner, clamped for small surfaces.
    #[must_use]
    pub fn new(
        viewport_source: Box<dyn ViewportProvider + Send>,
        current_user_id: impl Into<String>,
    ) -> Self {
        Self::with_config(
            viewport_source,
            current_user_id,
            PlacementMetrics::default(),
            DragConfig::default(),
        )
    }

    /// Create a widget with custom metrics and drag configuration.
    #[must_use]
    pub fn with_config(
        viewport_source: Box<dyn ViewportProvider + Send>,
        current_user_id: impl Into<String>,
        metrics: PlacementMetrics,
        drag_config: DragConfig,
    ) -> Self {
        let viewport = viewport_source.size();
        let anchor = Point::new(
            viewport.width - metrics.button_size.width - ANCHOR_INSET,
            viewport.height - metrics.button_size.height - ANCHOR_INSET,
        )
        .clamp_within(viewport, metrics.button_size);

        Self {
            viewport_source,
            viewport,
            metrics,
            tracker: DragTracker::with_config(drag_config),
            anchor,
            placement: None,
            log: MessageLog::new(),
            current_user_id: current_user_id.into(),
            draft: String::new(),
            loading_since: None,
        }
    }

    /// Install listener lifecycle hooks on the drag tracker.
    pub fn set_session_hooks(&mut self, hooks: Box<dyn SessionHooks>) {
        self.tracker.set_hooks(hooks);
    }

    // ------------------------------------------------------------------
    // Read surface
    // ------------------------------------------------------------------

    /// Whether the panel is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.placement.is_some()
    }

    /// The trigger button's authoritative position.
    #[must_use]
    pub const fn anchor(&self) -> Point {
        self.anchor
    }

    /// The solved panel placement while open.
    #[must_use]
    pub const fn placement(&self) -> Option<PanelPlacement> {
        self.placement
    }

    /// Screen rectangle of the trigger button.
    #[must_use]
    pub const fn button_rect(&self) -> Rect {
        Rect::at(self.anchor, self.metrics.button_size)
    }

    /// Screen rectangle of the panel while open.
    #[must_use]
    pub fn panel_rect(&self) -> Option<Rect> {
        self.placement
            .map(|p| Rect::at(p.position, self.metrics.panel_size))
    }

    /// Whether a drag session is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// The placement metrics in use.
    #[must_use]
    pub const fn metrics(&self) -> &PlacementMetrics {
        &self.metrics
    }

    /// The message log view.
    #[must_use]
    pub const fn messages(&self) -> &MessageLog {
        &self.log
    }

    /// Composer draft text.
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Bubble alignment for a message relative to the current user.
    #[must_use]
    pub fn alignment_for(&self, message: &ChatMessage) -> MessageAlignment {
        MessageAlignment::for_message(message, &self.current_user_id)
    }

    // ------------------------------------------------------------------
    // Open/close state machine
    // ------------------------------------------------------------------

    /// Flip the open/closed flag.
    ///
    /// Opening solves the panel placement for the current anchor;
    /// closing discards it. Dragging never reaches this: only a
    /// sub-threshold click does.
    pub fn toggle(&mut self) {
        if self.placement.is_some() {
            self.placement = None;
        } else {
            self.placement = Some(solve(self.anchor, self.viewport, &self.metrics));
        }
    }

    // ------------------------------------------------------------------
    // Pointer input
    // ------------------------------------------------------------------

    /// Pointer pressed on the trigger button: open a button session.
    ///
    /// Ignored while another session is active.
    pub fn pointer_down_on_button(&mut self, position: Point) {
        self.tracker.begin_drag(
            DragSubject::Button,
            self.metrics.button_size,
            position,
            self.anchor,
        );
    }

    /// Pointer pressed on the panel: open a panel session.
    ///
    /// Ignored while the panel is closed or another session is active.
    pub fn pointer_down_on_panel(&mut self, position: Point) {
        if let Some(placement) = self.placement {
            self.tracker.begin_drag(
                DragSubject::Panel,
                self.metrics.panel_size,
                position,
                placement.position,
            );
        }
    }

    /// Feed a globally-routed event: pointer move/up/cancel or a
    /// viewport resize. Down events are routed per-element via
    /// [`Self::pointer_down_on_button`] and
    /// [`Self::pointer_down_on_panel`] and ignored here.
    pub fn handle_event(&mut self, event: &Event) {
        match *event {
            Event::PointerMove { position } => self.apply_move(position),
            Event::PointerUp { position } => self.finish_session(position),
            Event::PointerCancel => self.tracker.cancel(),
            Event::Resize { width, height } => self.set_viewport(Size::new(width, height)),
            Event::PointerDown { .. } => {}
        }
    }

    /// Re-read the injected viewport provider and reclamp.
    pub fn refresh_viewport(&mut self) {
        let size = self.viewport_source.size();
        self.set_viewport(size);
    }

    fn apply_move(&mut self, pointer: Point) {
        let Some((subject, position)) = self.tracker.on_pointer_move(pointer, self.viewport)
        else {
            return;
        };
        match subject {
            DragSubject::Button => {
                self.anchor = position;
                if self.placement.is_some() {
                    self.placement = Some(solve(self.anchor, self.viewport, &self.metrics));
                }
            }
            DragSubject::Panel => {
                if let Some(placement) = self.placement.as_mut() {
                    // The panel position is taken literally while it is
                    // the drag subject; the button follows via the
                    // inverse mapping of the current origin.
                    placement.position = position;
                    let origin = placement.origin;
                    self.anchor = button_from_panel(position, origin, &self.metrics)
                        .clamp_within(self.viewport, self.metrics.button_size);
                }
            }
        }
    }

    fn finish_session(&mut self, pointer: Point) {
        match self.tracker.end_drag(pointer) {
            Some(DragOutcome::Click {
                subject,
                start_position,
            }) => {
                // A click restores the subject to where the session
                // began, then toggles. Reclamp on restore: the viewport
                // may have shrunk mid-session.
                match subject {
                    DragSubject::Button => {
                        self.anchor = start_position
                            .clamp_within(self.viewport, self.metrics.button_size);
                    }
                    DragSubject::Panel => {
                        if let Some(placement) = self.placement.as_mut() {
                            placement.position = start_position
                                .clamp_within(self.viewport, self.metrics.panel_size);
                            let origin = placement.origin;
                            self.anchor =
                                button_from_panel(placement.position, origin, &self.metrics)
                                    .clamp_within(self.viewport, self.metrics.button_size);
                        }
                    }
                }
                self.toggle();
            }
            Some(DragOutcome::Drag { .. }) | None => {}
        }
    }

    fn set_viewport(&mut self, size: Size) {
        self.viewport = size;
        self.anchor = self
            .anchor
            .clamp_within(self.viewport, self.metrics.button_size);
        if self.placement.is_some() {
            self.placement = Some(solve(self.anchor, self.viewport, &self.metrics));
        }
    }

    // ------------------------------------------------------------------
    // Messages, composer, liveness
    // ------------------------------------------------------------------

    /// Replace the message list with the collaborator's current view.
    ///
    /// Emits [`ChatEffect::ScrollToLatest`] when the list grew.
    pub fn sync_messages(&mut self, messages: Vec<ChatMessage>) -> Vec<ChatEffect> {
        if self.log.sync(messages) {
            vec![ChatEffect::ScrollToLatest]
        } else {
            Vec::new()
        }
    }

    /// Record whether a message fetch is outstanding.
    pub fn set_loading(&mut self, loading: bool, now: Instant) {
        if loading {
            if self.loading_since.is_none() {
                self.loading_since = Some(now);
            }
        } else {
            self.loading_since = None;
        }
    }

    /// Whether a message fetch is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading_since.is_some()
    }

    /// Advisory liveness flag: a fetch has been outstanding for at
    /// least [`STALL_TIMEOUT`] while the widget is open.
    ///
    /// Display-only; it never blocks input or sending.
    #[must_use]
    pub fn connection_degraded(&self, now: Instant) -> bool {
        self.is_open()
            && self
                .loading_since
                .is_some_and(|since| now.duration_since(since) >= STALL_TIMEOUT)
    }

    /// Update the composer draft.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Submit the composer draft.
    ///
    /// Blank drafts (empty or whitespace) produce no effect; otherwise
    /// the draft is cleared and a [`ChatEffect::SendMessage`] is
    /// requested. Sending is attempted even while the connection is
    /// flagged as degraded.
    pub fn submit_draft(&mut self) -> Vec<ChatEffect> {
        let text = self.draft.trim();
        if text.is_empty() {
            return Vec::new();
        }
        let text = text.to_string();
        self.draft.clear();
        vec![ChatEffect::SendMessage { text }]
    }
}
