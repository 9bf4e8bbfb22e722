//! Expanded/collapsed state machine.
//!
//! The controller owns the participant registry and at most one active
//! [`AnimationGroup`]. `expand`, `collapse` and `toggle` return as soon as
//! the new group is started; the host then calls [`tick`] once per display
//! frame until the group completes.
//!
//! ```text
//! Collapsed --expand()--> Expanding --(group completes)--> Expanded
//! Expanded --collapse()--> Collapsing --(group completes)--> Collapsed
//! ```
//!
//! Reversing mid-flight cancels the running group first, so the new group
//! starts from whatever heights the children were frozen at.
//!
//! [`tick`]: ExpansionController::tick

use std::collections::VecDeque;
use std::fmt;
use std::time::{Duration, Instant};

use serde_json::Value;

use crate::animation::{AnimationGroup, GroupId};
use crate::config::ExpansionConfig;
use crate::event::{Direction, ExpansionEvent};
use crate::host::Host;
use crate::layout::{Constraints, LayoutParams};
use crate::registry::{ChildId, ChildRegistry, Participant};
use crate::state::SavedState;
use crate::transitions::TransitionConfig;

/// Observable state of the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpansionState {
    Collapsed,
    Expanding,
    Expanded,
    Collapsing,
}

impl ExpansionState {
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Expanding | Self::Collapsing)
    }
}

type ProgressListener = Box<dyn FnMut(f32)>;

/// Drives expansion and collapse of an expandable container.
pub struct ExpansionController {
    config: ExpansionConfig,
    expanded: bool,
    reduced_motion: bool,
    registry: ChildRegistry,
    active: Option<AnimationGroup>,
    next_group: u64,
    constraints: Constraints,
    events: VecDeque<ExpansionEvent>,
    listener: Option<ProgressListener>,
}

impl fmt::Debug for ExpansionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpansionController")
            .field("config", &self.config)
            .field("expanded", &self.expanded)
            .field("reduced_motion", &self.reduced_motion)
            .field("registry", &self.registry)
            .field("active", &self.active)
            .field("constraints", &self.constraints)
            .field("pending_events", &self.events.len())
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl Default for ExpansionController {
    fn default() -> Self {
        Self::new(ExpansionConfig::default())
    }
}

impl ExpansionController {
    pub fn new(config: ExpansionConfig) -> Self {
        Self {
            expanded: config.expanded_initially,
            reduced_motion: config.reduced_motion,
            config,
            registry: ChildRegistry::new(),
            active: None,
            next_group: 0,
            constraints: Constraints::default(),
            events: VecDeque::new(),
            listener: None,
        }
    }

    pub fn config(&self) -> &ExpansionConfig {
        &self.config
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn state(&self) -> ExpansionState {
        match (self.expanded, self.active.is_some()) {
            (true, false) => ExpansionState::Expanded,
            (true, true) => ExpansionState::Expanding,
            (false, false) => ExpansionState::Collapsed,
            (false, true) => ExpansionState::Collapsing,
        }
    }

    /// Returns true if a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_group(&self) -> Option<&AnimationGroup> {
        self.active.as_ref()
    }

    pub fn registry(&self) -> &ChildRegistry {
        &self.registry
    }

    /// Receive the unified 0..1 progress once per animation frame.
    pub fn set_progress_listener(&mut self, listener: impl FnMut(f32) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_progress_listener(&mut self) {
        self.listener = None;
    }

    /// Enable or disable reduced motion (accessibility).
    /// Applies to transitions started after the call.
    pub fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Record the constraints the container was just measured with.
    pub fn on_measure(&mut self, constraints: Constraints) {
        self.constraints = constraints;
    }

    pub fn constraints(&self) -> Constraints {
        self.constraints
    }

    /// A child was added to the container.
    ///
    /// Returns true if the child now takes part in expand/collapse.
    pub fn attach<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        child: impl Into<ChildId>,
        expandable: bool,
        params: LayoutParams,
    ) -> bool {
        self.registry
            .register(host, child.into(), expandable, params, self.expanded)
    }

    /// A child was removed from the container.
    pub fn detach(&mut self, child: &ChildId) -> Option<Participant> {
        let removed = self.registry.unregister(child)?;
        if let Some(group) = self.active.as_mut() {
            group.remove_member(child);
        }
        Some(removed)
    }

    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.expanded {
            self.collapse(host);
        } else {
            self.expand(host);
        }
    }

    pub fn expand<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.expanded {
            return;
        }
        self.cancel();
        self.expanded = true;

        let starts: Vec<u16> = self
            .registry
            .participants()
            .map(|p| host.rendered_size(&p.id))
            .collect();

        // A hidden child can't report its natural height, so show it and
        // measure it at its declared size first.
        let mut targets = Vec::with_capacity(starts.len());
        for participant in self.registry.participants() {
            host.set_visible(&participant.id, true);
            let height = host.measure(
                &participant.id,
                participant.original.params(),
                self.constraints,
            );
            targets.push(height);
        }

        let mut group = self.new_group(Direction::Expanding);
        for (participant, (from, to)) in self
            .registry
            .participants()
            .zip(starts.into_iter().zip(targets))
        {
            group.member_from(participant, from, to);
        }
        self.start_group(host, group);
    }

    pub fn collapse<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.expanded {
            return;
        }
        self.cancel();
        self.expanded = false;

        let mut group = self.new_group(Direction::Collapsing);
        for participant in self.registry.participants() {
            group.member(&*host, participant, 0);
        }
        self.start_group(host, group);
    }

    /// Advance the active transition by one frame.
    ///
    /// Returns true while a transition is still in flight.
    pub fn tick<H: Host + ?Sized>(&mut self, host: &mut H, now: Instant) -> bool {
        let Some(group) = self.active.as_mut() else {
            return false;
        };

        let progress = group.tick(host, now, &mut self.events);
        let finished = group.is_finished();
        self.trim_events();

        if let (Some(progress), Some(listener)) = (progress, self.listener.as_mut()) {
            listener(progress);
        }

        if finished {
            self.active = None;
            log::debug!("[expand] now {:?}", self.state());
        }
        self.active.is_some()
    }

    /// Interrupt the active transition, leaving children where they are.
    ///
    /// Hosts call this on configuration changes. The `expanded` flag is
    /// untouched. Returns true if a transition was interrupted.
    pub fn cancel(&mut self) -> bool {
        let canceled = match self.active.take() {
            Some(mut group) => group.cancel(&mut self.events),
            None => false,
        };
        self.trim_events();
        canceled
    }

    /// Take every event queued since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<ExpansionEvent> {
        self.events.drain(..).collect()
    }

    /// Snapshot for persistence, wrapping the upstream state blob.
    pub fn save_state(&self, super_state: Option<Value>) -> SavedState {
        SavedState::new(self.expanded, super_state)
    }

    /// Apply a saved record without animating.
    ///
    /// Any transition in flight is canceled, and every participant is shown
    /// or hidden at its declared size to match the restored flag. Returns
    /// the upstream state blob for the caller to pass on.
    pub fn restore_state<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        saved: SavedState,
    ) -> Option<Value> {
        self.cancel();
        self.expanded = saved.expanded;
        log::debug!("[expand] restored {:?}", self.state());

        for participant in self.registry.participants() {
            host.set_visible(&participant.id, self.expanded);
            host.apply_layout(&participant.id, participant.original.params());
        }
        saved.super_state
    }

    /// Number of events waiting to be drained.
    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    fn trim_events(&mut self) {
        let excess = self.events.len().saturating_sub(self.config.event_capacity);
        if excess > 0 {
            self.events.drain(..excess);
            log::trace!("[expand] dropped {} undrained events", excess);
        }
    }

    fn new_group(&mut self, direction: Direction) -> AnimationGroup {
        let id = GroupId(self.next_group);
        self.next_group += 1;

        let transition = if self.reduced_motion {
            TransitionConfig::new(Duration::ZERO, self.config.easing)
        } else {
            self.config.transition()
        };
        log::debug!(
            "[expand] group {} {:?} over {} children ({:?})",
            id,
            direction,
            self.registry.len(),
            transition.duration
        );
        AnimationGroup::new(id, direction, transition, self.config.progress_mode)
    }

    fn start_group<H: Host + ?Sized>(&mut self, host: &mut H, mut group: AnimationGroup) {
        group.start(host, &mut self.events);
        self.trim_events();
        if group.is_playing() {
            self.active = Some(group);
        } else {
            log::debug!("[expand] group {} had nothing to animate", group.id());
        }
    }
}
