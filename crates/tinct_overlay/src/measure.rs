//! Measurement lifecycle for anchored overlays
//!
//! Anchor and content sizes arrive from asynchronous layout callbacks. An
//! [`AnchoredOverlay`] collects them and only yields a position once both are
//! real. Each measurement request carries a generation token; callbacks that
//! complete after the overlay was closed (or reopened) are dropped.

use tinct_core::{Rect, Size};

use crate::position::{calculate_position, PlacementOptions, PositionedContent};

/// Ticket for one pending anchor measurement
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct MeasureToken(u64);

/// Overlay lifecycle phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OverlayPhase {
    #[default]
    Closed,
    /// Open, waiting on anchor or content measurement
    Measuring,
    /// Open and positioned
    Ready,
}

/// Tracks measurements for one tooltip or context menu
#[derive(Clone, Debug)]
pub struct AnchoredOverlay {
    options: PlacementOptions,
    viewport: Size,
    anchor: Option<Rect>,
    content: Size,
    generation: u64,
    open: bool,
}

impl AnchoredOverlay {
    pub fn new(options: PlacementOptions, viewport: Size) -> Self {
        Self {
            options,
            viewport,
            anchor: None,
            content: Size::ZERO,
            generation: 0,
            open: false,
        }
    }

    pub fn options(&self) -> &PlacementOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: PlacementOptions) {
        self.options = options;
    }

    /// Window resized or rotated
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Open the overlay and request an anchor measurement
    pub fn open(&mut self) -> MeasureToken {
        self.open = true;
        self.begin_measure()
    }

    /// Request a fresh anchor measurement, invalidating older ones
    pub fn begin_measure(&mut self) -> MeasureToken {
        self.generation += 1;
        self.anchor = None;
        MeasureToken(self.generation)
    }

    /// Deliver an anchor measurement. Returns false if the token is stale.
    pub fn complete_anchor(&mut self, token: MeasureToken, anchor: Rect) -> bool {
        if !self.open || token.0 != self.generation {
            tracing::trace!(
                token = token.0,
                current = self.generation,
                "discarding stale anchor measurement"
            );
            return false;
        }
        self.anchor = Some(anchor);
        true
    }

    /// Content laid out (or re-laid out)
    pub fn set_content_size(&mut self, content: Size) {
        self.content = content;
    }

    /// Close the overlay; pending measurements become stale
    pub fn close(&mut self) {
        self.open = false;
        self.generation += 1;
        self.anchor = None;
        self.content = Size::ZERO;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Anchor is known and not at the unmeasured origin
    fn measured_anchor(&self) -> Option<Rect> {
        self.anchor
            .filter(|anchor| !(anchor.x() == 0.0 && anchor.y() == 0.0))
    }

    pub fn phase(&self) -> OverlayPhase {
        if !self.open {
            OverlayPhase::Closed
        } else if self.measured_anchor().is_some() && !self.content.is_empty() {
            OverlayPhase::Ready
        } else {
            OverlayPhase::Measuring
        }
    }

    /// Position to render at, or `None` while content must stay hidden
    pub fn position(&self) -> Option<PositionedContent> {
        if self.phase() != OverlayPhase::Ready {
            return None;
        }
        let anchor = self.measured_anchor()?;
        Some(calculate_position(
            anchor,
            self.content,
            self.viewport,
            &self.options,
        ))
    }
}
