//! Timeline sequencer.
//!
//! A [`Timeline`] is an ordered list of effects, each scheduled at an offset in
//! milliseconds from the start of the sequence, plus the offset at which the
//! sequence counts as finished. A [`Sequencer`] plays one timeline against a
//! logical clock:
//!
//! ```text
//! Idle --start--> Animating(step) --last step + finish offset--> Done
//! ```
//!
//! Polling never blocks. Every step is returned exactly once, in schedule
//! order, and exactly one [`Cue::Finished`] follows the last step.

/// An effect scheduled at `at_ms` after the sequence starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<E> {
    pub at_ms: u64,
    pub effect: E,
}

/// Builder for an ordered sequence of timed effects.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline<E> {
    steps: Vec<Step<E>>,
    finish_ms: u64,
}

impl<E> Default for Timeline<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Timeline<E> {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            finish_ms: 0,
        }
    }

    /// Schedules `effect` at `at_ms`. Steps with equal offsets keep insertion order.
    pub fn at(mut self, at_ms: u64, effect: E) -> Self {
        self.push(at_ms, effect);
        self
    }

    pub fn push(&mut self, at_ms: u64, effect: E) {
        // insertion point after every step scheduled at or before `at_ms`
        let idx = self.steps.partition_point(|s| s.at_ms <= at_ms);
        self.steps.insert(idx, Step { at_ms, effect });
        self.finish_ms = self.finish_ms.max(at_ms);
    }

    /// Extends the finish offset so it is at least `at_ms`.
    pub fn finish_at(mut self, at_ms: u64) -> Self {
        self.extend_finish(at_ms);
        self
    }

    pub fn extend_finish(&mut self, at_ms: u64) {
        self.finish_ms = self.finish_ms.max(at_ms);
    }

    /// Appends every step of `other`, shifted by `offset_ms`.
    pub fn append(&mut self, offset_ms: u64, other: Timeline<E>) {
        for step in other.steps {
            self.push(offset_ms.saturating_add(step.at_ms), step.effect);
        }
        self.extend_finish(offset_ms.saturating_add(other.finish_ms));
    }

    pub fn steps(&self) -> &[Step<E>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Offset at which the completion cue fires.
    pub fn finish_ms(&self) -> u64 {
        self.finish_ms
    }
}

/// Something the sequencer reports while polling.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue<E> {
    /// Step `index` of the timeline became due at absolute time `at_ms`.
    Step { index: usize, at_ms: u64, effect: E },
    /// The whole timeline has played.
    Finished { at_ms: u64 },
}

/// Sequencer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    /// `step` is the index of the next step that has not fired yet.
    Animating { step: usize },
    Done,
}

/// Plays one [`Timeline`] at a time against a logical clock in milliseconds.
#[derive(Debug)]
pub struct Sequencer<E> {
    pending: std::vec::IntoIter<Step<E>>,
    next_index: usize,
    origin_ms: u64,
    finish_ms: u64,
    phase: Phase,
}

impl<E> Default for Sequencer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Sequencer<E> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new().into_iter(),
            next_index: 0,
            origin_ms: 0,
            finish_ms: 0,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Animating { .. })
    }

    /// Starts `timeline` with its zero offset at `now_ms`, replacing anything running.
    pub fn start(&mut self, timeline: Timeline<E>, now_ms: u64) {
        self.pending = timeline.steps.into_iter();
        self.next_index = 0;
        self.origin_ms = now_ms;
        self.finish_ms = timeline.finish_ms;
        self.phase = Phase::Animating { step: 0 };
    }

    /// Drops whatever is running without emitting a completion cue.
    pub fn cancel(&mut self) {
        self.pending = Vec::new().into_iter();
        self.next_index = 0;
        self.phase = Phase::Idle;
    }

    /// Returns every cue due at or before `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Cue<E>> {
        let mut cues = Vec::new();
        if !self.is_running() {
            return cues;
        }

        while let Some(step) = self.pending.as_slice().first() {
            let at_ms = self.origin_ms.saturating_add(step.at_ms);
            if at_ms > now_ms {
                break;
            }
            // `first()` just returned Some, so `next()` cannot be None here
            if let Some(step) = self.pending.next() {
                cues.push(Cue::Step {
                    index: self.next_index,
                    at_ms,
                    effect: step.effect,
                });
                self.next_index += 1;
            }
        }
        self.phase = Phase::Animating { step: self.next_index };

        let finish_at = self.origin_ms.saturating_add(self.finish_ms);
        if self.pending.as_slice().is_empty() && finish_at <= now_ms {
            cues.push(Cue::Finished { at_ms: finish_at });
            self.phase = Phase::Done;
        }
        cues
    }
}
