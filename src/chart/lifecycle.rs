//! Chart artifact lifecycle
//!
//! Each rendering target holds at most one live chart. Installing onto a
//! bound target destroys the previous chart first and only then creates the
//! new one, so a target never has two charts alive and a replaced chart is
//! never leaked.
//!
//! ```text
//!            install                 install
//!   Empty ───────────────▶ Bound ─────────────▶ Bound (destroy old, create new)
//!     ▲                      │
//!     └────── release ───────┘
//! ```
//!
//! All mutation goes through `&mut self`, so a reentrant install cannot start
//! while a previous one is still tearing down.

use crate::chart::artifact::ChartArtifact;
use crate::data::{ChartError, ChartResult};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identity of a drawing surface (one canvas, one chart)
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The drawing collaborator.
///
/// `create` draws an artifact and returns whatever handle the collaborator
/// needs to tear it down again; `destroy` consumes that handle.
pub trait ChartRenderer {
    type Handle;

    fn create(&mut self, target: &TargetId, artifact: &ChartArtifact) -> Self::Handle;

    fn destroy(&mut self, target: &TargetId, handle: Self::Handle);
}

/// What a target currently shows
#[derive(Debug)]
enum Binding<H> {
    Empty,
    Bound { artifact: ChartArtifact, handle: H },
}

/// Owns the single active artifact of every registered target.
pub struct ChartLifecycleManager<R: ChartRenderer> {
    renderer: R,
    targets: HashMap<TargetId, Binding<R::Handle>>,
}

impl<R: ChartRenderer> ChartLifecycleManager<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            targets: HashMap::new(),
        }
    }

    /// Make a target known. Registering an existing target keeps its chart.
    pub fn register_target(&mut self, target: impl Into<TargetId>) {
        self.targets.entry(target.into()).or_insert(Binding::Empty);
    }

    /// Bind `artifact` to `target`, destroying whatever was there first.
    ///
    /// Returns the id of the newly bound artifact.
    pub fn install(&mut self, target: &TargetId, artifact: ChartArtifact) -> ChartResult<Uuid> {
        let slot = self
            .targets
            .get_mut(target)
            .ok_or_else(|| ChartError::InvalidTarget(target.to_string()))?;

        if let Binding::Bound { artifact: old, handle } = std::mem::replace(slot, Binding::Empty) {
            tracing::debug!(surface = %target, artifact = %old.id, "Destroying previous chart");
            self.renderer.destroy(target, handle);
        }

        let id = artifact.id;
        let handle = self.renderer.create(target, &artifact);
        tracing::debug!(surface = %target, artifact = %id, kind = %artifact.kind, "Installed chart");
        *slot = Binding::Bound { artifact, handle };
        Ok(id)
    }

    /// Destroy the target's chart, if any. Returns whether one was bound.
    pub fn release(&mut self, target: &TargetId) -> ChartResult<bool> {
        let slot = self
            .targets
            .get_mut(target)
            .ok_or_else(|| ChartError::InvalidTarget(target.to_string()))?;

        match std::mem::replace(slot, Binding::Empty) {
            Binding::Bound { artifact, handle } => {
                tracing::debug!(surface = %target, artifact = %artifact.id, "Released chart");
                self.renderer.destroy(target, handle);
                Ok(true)
            }
            Binding::Empty => Ok(false),
        }
    }

    /// Release every bound target (view teardown).
    pub fn teardown(&mut self) {
        for (target, slot) in self.targets.iter_mut() {
            if let Binding::Bound { handle, .. } = std::mem::replace(slot, Binding::Empty) {
                self.renderer.destroy(target, handle);
            }
        }
    }

    /// The chart currently bound to `target`
    pub fn active(&self, target: &TargetId) -> Option<&ChartArtifact> {
        match self.targets.get(target)? {
            Binding::Bound { artifact, .. } => Some(artifact),
            Binding::Empty => None,
        }
    }

    pub fn active_id(&self, target: &TargetId) -> Option<Uuid> {
        self.active(target).map(|a| a.id)
    }

    pub fn bound_count(&self) -> usize {
        self.targets
            .values()
            .filter(|b| matches!(b, Binding::Bound { .. }))
            .count()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartLifecycleManager<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}
