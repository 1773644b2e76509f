//! Time-to-progress animation driver.
//!
//! The driver owns at most one in-flight morph. The host's frame loop calls
//! [`Driver::tick`] with the current time; each tick eases the elapsed
//! fraction, evaluates the morph, and publishes the resulting sequence to
//! the sink the render surface registered at construction. Published
//! sequences are always whole replacements — points are never mutated in
//! place, so a reader can never observe a half-written frame.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use kurbo::Point;
use log::debug;

use crate::easing::Easing;
use crate::error::MorphError;
use crate::glyph::{self, Symbol};
use crate::morph::Morph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Running,
    Completed,
    Cancelled,
}

/// One animation request: endpoints plus timing. Lives for the duration of
/// the animation it describes.
#[derive(Debug, Clone)]
pub struct AnimationSpec {
    pub start: Vec<Point>,
    pub end: Vec<Point>,
    pub duration: Duration,
    pub easing: Easing,
}

impl AnimationSpec {
    /// Morph one digit into another.
    pub fn digit_transition(
        from: u8,
        to: u8,
        duration: Duration,
        easing: Easing,
    ) -> Result<Self, MorphError> {
        let start = glyph::sequence_for(Symbol::digit(from))?.to_vec();
        let end = glyph::sequence_for(Symbol::digit(to))?.to_vec();

        Ok(Self {
            start,
            end,
            duration,
            easing,
        })
    }

    /// Grow a digit out of the blank glyph, or shrink it back into it.
    /// `appearing` selects which side of the morph is blank.
    pub fn appearance(
        digit: u8,
        appearing: bool,
        duration: Duration,
        easing: Easing,
    ) -> Result<Self, MorphError> {
        let blank = glyph::sequence_for(Symbol::Nothing)?.to_vec();
        let shape = glyph::sequence_for(Symbol::digit(digit))?.to_vec();

        let (start, end) = if appearing { (blank, shape) } else { (shape, blank) };

        Ok(Self {
            start,
            end,
            duration,
            easing,
        })
    }
}

#[derive(Debug, Default)]
struct HandleState {
    cancelled: Cell<bool>,
    complete: Cell<bool>,
}

/// Returned by [`Driver::start`]. Cancels or observes one animation.
///
/// Cancellation is cooperative: the flag is read at the top of every tick,
/// before anything is published, so no frame is published after `cancel`
/// returns.
#[derive(Debug, Clone)]
pub struct AnimationHandle {
    shared: Rc<HandleState>,
}

impl AnimationHandle {
    pub fn cancel(&self) {
        self.shared.cancelled.set(true);
    }

    /// True once the animation ran to completion and the final sequence
    /// was published. Never set for cancelled or replaced animations.
    pub fn is_complete(&self) -> bool {
        self.shared.complete.get()
    }
}

struct Active {
    morph: Morph,
    duration: Duration,
    easing: Easing,
    started: Instant,
    shared: Rc<HandleState>,
}

/// Single-threaded animation driver. One instance per rendered glyph;
/// at most one animation in flight.
pub struct Driver {
    state: DriverState,
    active: Option<Active>,
    sink: Box<dyn FnMut(Vec<Point>)>,
}

impl Driver {
    /// `sink` is the observer the render surface subscribes with; it
    /// receives every published control-point sequence.
    pub fn new(sink: impl FnMut(Vec<Point>) + 'static) -> Self {
        Self {
            state: DriverState::Idle,
            active: None,
            sink: Box::new(sink),
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Begin an animation at reference time `now`. Starting while one is
    /// already running abandons the old spec — it is replaced, not queued,
    /// and its handle never completes.
    pub fn start(&mut self, spec: AnimationSpec, now: Instant) -> Result<AnimationHandle, MorphError> {
        let morph = Morph::new(spec.start, spec.end)?;

        if self.state == DriverState::Running {
            debug!("replacing in-flight animation");
        }

        let shared = Rc::new(HandleState::default());
        self.active = Some(Active {
            morph,
            duration: spec.duration,
            easing: spec.easing,
            started: now,
            shared: Rc::clone(&shared),
        });
        self.state = DriverState::Running;
        debug!("animation started, duration {:?}", spec.duration);

        Ok(AnimationHandle { shared })
    }

    /// Advance the animation to time `now`, publishing one frame while
    /// running. On the tick that reaches the full duration the published
    /// sequence is the spec's end exactly — the eased evaluation is skipped
    /// so floating-point drift cannot leave a visible seam.
    pub fn tick(&mut self, now: Instant) -> DriverState {
        if self.state != DriverState::Running {
            return self.state;
        }

        let Some(active) = &self.active else {
            return self.state;
        };

        if active.shared.cancelled.get() {
            debug!("animation cancelled via handle");
            self.state = DriverState::Cancelled;
            self.active = None;
            return self.state;
        }

        let raw = elapsed_fraction(active.started, now, active.duration);
        let finished = raw >= 1.0;

        let frame = if finished {
            active.morph.end().to_vec()
        } else {
            active.morph.eval(active.easing.apply(raw))
        };

        if finished {
            active.shared.complete.set(true);
        }

        (self.sink)(frame);

        if finished {
            debug!("animation completed");
            self.state = DriverState::Completed;
            self.active = None;
        }

        self.state
    }

    /// Stop immediately. The last published sequence stays on screen —
    /// there is no snap to the target. Redundant cancels are no-ops.
    pub fn cancel(&mut self) {
        if self.state == DriverState::Running {
            debug!("animation cancelled");
            self.state = DriverState::Cancelled;
            self.active = None;
        }
    }
}

fn elapsed_fraction(started: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = now.saturating_duration_since(started).as_secs_f64();
    (elapsed / duration.as_secs_f64()).clamp(0.0, 1.0)
}
