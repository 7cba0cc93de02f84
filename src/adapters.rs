//! Adapter traits for plugins.
//!
//! Rendering can hand math spans to an external typesetting engine; the
//! types here are that boundary, including the readiness handshake for
//! engines that finish loading some time after construction.

use std::fmt::{Debug, Formatter};
use std::time::{Duration, Instant};

use thiserror::Error;

/// Failure surfaced by a [`MathTypesetter`].
///
/// Implementations catch every internal fault and return one of these.
/// Nothing may panic across the adapter boundary: the renderer turns an
/// error into a per-span fallback and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesetError {
    /// The engine is not, or is no longer, usable at all.
    #[error("typesetting engine unavailable: {0}")]
    EngineUnavailable(String),

    /// The engine rejected this particular span's source.
    #[error("{0}")]
    Render(String),
}

/// Implement this adapter for creating a plugin typesetting math spans with
/// an external engine.
pub trait MathTypesetter {
    /// Readiness probe.  Must be cheap and side-effect free; the host may
    /// call it from a timer until it first returns `true`.  The default
    /// suits engines that are usable as soon as construction succeeds.
    fn is_ready(&self) -> bool {
        true
    }

    /// Typesets one span's source into presentational markup.
    ///
    /// `display_mode` selects block-style output for `$$…$$` spans.  The
    /// returned markup is embedded in the HTML output verbatim.
    fn typeset(&self, source: &str, display_mode: bool) -> Result<String, TypesetError>;
}

impl Debug for dyn MathTypesetter + '_ {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        formatter.write_str("<dyn MathTypesetter>")
    }
}

#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// The loading state of a typesetting engine, as tracked by a
/// [`ReadinessGate`].
pub enum Readiness {
    /// No probe has run yet.
    #[default]
    Unloaded,

    /// Probes are running and the engine wasn't usable at the last one.
    Polling,

    /// The engine answered a probe.  Terminal: once here, a gate stays
    /// here, whatever later probes report.
    Ready,
}

impl Readiness {
    /// Whether this state allows handing spans to the engine.
    pub fn is_ready(self) -> bool {
        matches!(self, Readiness::Ready)
    }
}

/// Tracks an engine's loading state across renders.
///
/// The owner drives the gate from its own timer: each tick calls [`poll`]
/// with the adapter's [`is_ready`](MathTypesetter::is_ready) answer, and
/// once the gate reports [`Readiness::Ready`] the timer can be cancelled,
/// since the state latches.  The current state is passed into rendering by
/// value (see [`MathPlugin`](crate::options::MathPlugin)) rather than read
/// from ambient shared state mid-render.
///
/// [`poll`]: ReadinessGate::poll
#[derive(Debug, Clone)]
pub struct ReadinessGate {
    state: Readiness,
    interval: Duration,
}

impl ReadinessGate {
    /// The probe interval used by [`new`](ReadinessGate::new).
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

    /// Creates a gate with the default probe interval.
    pub fn new() -> Self {
        Self::with_interval(Self::DEFAULT_INTERVAL)
    }

    /// Creates a gate whose owner will probe every `interval`.
    pub fn with_interval(interval: Duration) -> Self {
        ReadinessGate {
            state: Readiness::Unloaded,
            interval,
        }
    }

    /// The current state, without advancing it.
    pub fn state(&self) -> Readiness {
        self.state
    }

    /// The interval the owner's timer should wait between polls.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Feeds one probe observation through the gate and returns the new
    /// state.  After the gate has latched ready, the observation is
    /// ignored.
    pub fn poll(&mut self, engine_ready: bool) -> Readiness {
        self.state = match (self.state, engine_ready) {
            (Readiness::Ready, _) => Readiness::Ready,
            (_, true) => Readiness::Ready,
            (_, false) => Readiness::Polling,
        };
        self.state
    }
}

impl Default for ReadinessGate {
    fn default() -> Self {
        Self::new()
    }
}

/// Polls `typesetter` on the current thread until it reports ready or
/// `timeout` passes, sleeping `interval` between probes.  Returns the final
/// gate state, so no timer outlives the call.
///
/// Handy for one-shot renderers like the CLI; a host with an event loop
/// will want to own a [`ReadinessGate`] and schedule the polls itself.
pub fn wait_until_ready(
    typesetter: &dyn MathTypesetter,
    interval: Duration,
    timeout: Duration,
) -> Readiness {
    let mut gate = ReadinessGate::with_interval(interval);
    let deadline = Instant::now() + timeout;
    loop {
        if gate.poll(typesetter.is_ready()).is_ready() {
            tracing::debug!("typesetting engine ready");
            return Readiness::Ready;
        }
        if Instant::now() >= deadline {
            tracing::debug!(?timeout, "typesetting engine still loading at deadline");
            return gate.state();
        }
        std::thread::sleep(interval);
    }
}
