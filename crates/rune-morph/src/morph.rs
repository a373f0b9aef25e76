//! The morph state machine.
//!
//! A [`TextMorph`] owns the layouts of its old and new text, the aligned
//! lines, the timeline and the progress controller. It is driven by two
//! kinds of events, both handled synchronously:
//!
//! - [`set_text`](TextMorph::set_text): a new text value arrives
//! - [`tick`](TextMorph::tick): wall time passes
//!
//! ```text
//!            set_text (differs)              progress reaches 1
//!   Idle ───────────────────────► Animating ───────────────────► Idle
//!                                   │   ▲       (new promoted to old,
//!                      set_text     └───┘        pending text applied)
//!                   (queued as pending)
//! ```

use tracing::{debug, trace};

use rune_text::{LayoutEngine, TextLayout};

use crate::controller::{AnimationController, AnimationStatus};
use crate::error::Result;
use crate::frame::{MorphFrame, RenderSurface};
use crate::line::{align_layouts, Line};
use crate::options::MorphOptions;
use crate::timeline::Timeline;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphState {
    /// Old and new text are equal; nothing moves.
    Idle,
    /// Progress is advancing from old to new text.
    Animating,
}

/// Animates changes of a text value character by character.
#[derive(Debug)]
pub struct TextMorph<E: LayoutEngine> {
    engine: E,
    options: MorphOptions,
    old_text: String,
    new_text: String,
    /// Latest value received while animating, applied once the current
    /// run completes.
    pending_text: Option<String>,
    old_layout: TextLayout,
    new_layout: TextLayout,
    lines: Vec<Line>,
    timeline: Timeline,
    controller: AnimationController,
}

impl<E: LayoutEngine> TextMorph<E> {
    /// Create an idle morph showing `text`.
    pub fn new(engine: E, options: MorphOptions, text: impl Into<String>) -> Result<Self> {
        options.validate()?;
        let text = text.into();
        let base = options.base_duration_ms();
        let mut morph = Self {
            engine,
            options,
            old_text: text.clone(),
            new_text: text,
            pending_text: None,
            old_layout: TextLayout::empty(),
            new_layout: TextLayout::empty(),
            lines: Vec::new(),
            timeline: Timeline::new(base, 0),
            controller: AnimationController::new(base),
        };
        morph.relayout();
        Ok(morph)
    }

    pub fn state(&self) -> MorphState {
        if self.controller.is_animating() {
            MorphState::Animating
        } else {
            MorphState::Idle
        }
    }

    pub fn options(&self) -> &MorphOptions {
        &self.options
    }

    pub fn old_text(&self) -> &str {
        &self.old_text
    }

    pub fn new_text(&self) -> &str {
        &self.new_text
    }

    /// Value waiting for the in-flight run to finish.
    pub fn pending_text(&self) -> Option<&str> {
        self.pending_text.as_deref()
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn old_layout(&self) -> &TextLayout {
        &self.old_layout
    }

    pub fn new_layout(&self) -> &TextLayout {
        &self.new_layout
    }

    /// Global progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.controller.value()
    }

    /// Receive a new text value.
    ///
    /// When idle, a differing value starts a new run immediately. While a
    /// run is advancing it is not interrupted; the value is kept as the
    /// pending target and replaces any earlier pending value.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();

        if self.controller.is_animating() && self.controller.status() == AnimationStatus::Forward {
            if text == self.new_text {
                self.pending_text = None;
            } else {
                debug!(
                    pending = %text,
                    target = %self.new_text,
                    "deferring text change until morph completes"
                );
                self.pending_text = Some(text);
            }
            return;
        }

        if text != self.new_text {
            self.begin(text);
        }
    }

    /// Advance time by `delta_ms`.
    pub fn tick(&mut self, delta_ms: f32) -> MorphState {
        if !self.controller.is_animating() {
            return self.state();
        }
        let status = self.controller.tick(delta_ms);
        trace!(progress = self.controller.value(), ?status, "morph tick");
        if status == AnimationStatus::Completed {
            self.complete();
        }
        self.state()
    }

    /// Change the available width and lay out again.
    pub fn set_max_width(&mut self, max_width: Option<f32>) -> Result<()> {
        let options = self.options.clone().with_max_width(max_width);
        options.validate()?;
        self.options = options;
        self.relayout();
        Ok(())
    }

    /// Snapshot for drawing the current frame.
    pub fn frame(&self) -> MorphFrame<'_> {
        MorphFrame {
            lines: &self.lines,
            progress: self.controller.value(),
            delay_fraction: self.timeline.delay_fraction(),
            duration_fraction: self.timeline.duration_fraction(),
            old_layout_size: self.old_layout.size(),
            new_layout_size: self.new_layout.size(),
            old_layout: &self.old_layout,
            new_layout: &self.new_layout,
            curve: self.options.easing,
        }
    }

    pub fn render<S: RenderSurface>(&self, surface: &mut S) -> std::result::Result<(), S::Error> {
        surface.draw(&self.frame())
    }

    /// Idle → Animating.
    fn begin(&mut self, text: String) {
        self.old_text = std::mem::replace(&mut self.new_text, text);
        self.relayout();
        self.controller.set_duration_ms(self.timeline.total_duration_ms);
        self.controller.forward_from(0.0);
        debug!(
            old = %self.old_text,
            new = %self.new_text,
            lines = self.lines.len(),
            weight = self.timeline.total_diff_weight,
            duration_ms = self.timeline.total_duration_ms,
            "starting morph"
        );
    }

    /// Animating → Idle, then pick up any pending value.
    fn complete(&mut self) {
        self.old_text.clone_from(&self.new_text);
        self.controller.reset();
        // Geometry must match the settled text before the next change.
        self.relayout();
        debug!(text = %self.new_text, "morph completed");

        if let Some(text) = self.pending_text.take() {
            if text != self.new_text {
                self.begin(text);
            }
        }
    }

    /// Lay out both texts and rebuild the lines and timeline.
    fn relayout(&mut self) {
        let style = &self.options.style;
        let constraints = self.options.constraints();
        self.new_layout = self.engine.layout(&self.new_text, style, &constraints);
        self.old_layout = if self.old_text == self.new_text {
            self.new_layout.clone()
        } else {
            self.engine.layout(&self.old_text, style, &constraints)
        };
        self.lines = align_layouts(&self.old_layout, &self.new_layout);
        self.timeline = Timeline::for_lines(self.options.base_duration_ms(), &self.lines);
    }
}
