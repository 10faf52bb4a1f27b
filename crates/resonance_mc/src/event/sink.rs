//! Event types and sinks for observing generation runs.
//!
//! This module defines [`GenerationEvent`] and a set of sinks to collect or forward
//! events while [`crate::event::generator::EventGenerator::run`] executes.
use crate::catalog::SpeciesId;
use crate::error::Error;
use crate::event::config::GeneratorConfig;
use crate::event::generator::RunSummary;

/// Describes events emitted during generation.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum GenerationEvent {
    /// Emitted once before the first event is generated.
    RunStarted {
        /// The configuration used for the run.
        config: GeneratorConfig,
    },

    /// Emitted after each generated event.
    EventFinished {
        /// Index of the event in the run.
        index: usize,
        /// Number of final-state particles.
        particles: usize,
        /// Number of successful decays.
        decays: usize,
        /// Number of resonances that could not decay.
        failed_decays: usize,
    },

    /// Emitted when a resonance could not be decayed.
    DecayFailed {
        /// Index of the event containing the resonance.
        event: usize,
        /// Species of the resonance.
        parent: Option<SpeciesId>,
        /// Reason reported by the decay engine.
        error: Error,
    },

    /// Emitted once after the last event.
    RunFinished {
        /// Totals over the run.
        summary: RunSummary,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. event index).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`GenerationEvent`], used for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationEventKind {
    RunStarted,
    EventFinished,
    DecayFailed,
    RunFinished,
    Warning,
}

impl GenerationEvent {
    pub fn kind(&self) -> GenerationEventKind {
        match self {
            Self::RunStarted { .. } => GenerationEventKind::RunStarted,
            Self::EventFinished { .. } => GenerationEventKind::EventFinished,
            Self::DecayFailed { .. } => GenerationEventKind::DecayFailed,
            Self::RunFinished { .. } => GenerationEventKind::RunFinished,
            Self::Warning { .. } => GenerationEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`GenerationEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: GenerationEvent);

    /// Whether events of `kind` should be built at all. Defaults to `true`.
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: GenerationEvent) {}

    #[inline]
    fn wants(&self, _kind: GenerationEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(GenerationEvent),
{
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally only some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<GenerationEvent>,
    only: Option<Vec<GenerationEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects only events of the listed kinds.
    pub fn only(kinds: &[GenerationEventKind]) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.to_vec()),
        }
    }

    pub fn into_inner(self) -> Vec<GenerationEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[GenerationEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: GenerationEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: GenerationEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}
