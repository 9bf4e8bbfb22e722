use std::collections::VecDeque;
use std::fmt;
use std::time::Instant;

use crate::event::{Direction, ExpansionEvent};
use crate::host::Host;
use crate::layout::{LayoutParams, SizeSnapshot};
use crate::registry::{ChildId, Participant};
use crate::transitions::{ProgressMode, TransitionConfig};

/// Identifies one transition over the life of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Where a group is in its play/cancel/complete lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Built but not started.
    Idle,
    /// Started; the first tick latches the start instant.
    Pending,
    Running { start: Instant },
    Finished,
    Canceled,
}

/// One child's leg of a group.
#[derive(Debug, Clone)]
struct Member {
    child: ChildId,
    from: u16,
    to: u16,
    current: u16,
    original: SizeSnapshot,
}

/// A batch of per-child height transitions that share one clock.
///
/// Every member interpolates with the same eased fraction on every frame,
/// so children with different start heights still move in lockstep. The
/// group either completes as a whole or is canceled as a whole.
#[derive(Debug)]
pub struct AnimationGroup {
    id: GroupId,
    direction: Direction,
    transition: TransitionConfig,
    progress_mode: ProgressMode,
    members: Vec<Member>,
    phase: Phase,
    last_progress: Option<f32>,
}

impl AnimationGroup {
    pub fn new(
        id: GroupId,
        direction: Direction,
        transition: TransitionConfig,
        progress_mode: ProgressMode,
    ) -> Self {
        Self {
            id,
            direction,
            transition,
            progress_mode,
            members: Vec::new(),
            phase: Phase::Idle,
            last_progress: None,
        }
    }

    /// Add a member animating from its current rendered height to `target`.
    pub fn member<H: Host + ?Sized>(
        &mut self,
        host: &H,
        participant: &Participant,
        target: u16,
    ) -> &mut Self {
        self.member_from(participant, host.rendered_size(&participant.id), target)
    }

    /// Add a member with an explicit start height.
    pub fn member_from(&mut self, participant: &Participant, from: u16, target: u16) -> &mut Self {
        log::trace!(
            "[expand] group {} member {}: {} -> {}",
            self.id,
            participant.id,
            from,
            target
        );
        self.members.push(Member {
            child: participant.id.clone(),
            from,
            to: target,
            current: from,
            original: participant.original,
        });
        self
    }

    /// Begin playback.
    ///
    /// Members are pinned at their start heights and made visible; the
    /// clock starts on the next [`tick`](Self::tick). An empty group
    /// finishes here and queues its completion.
    pub fn start<H: Host + ?Sized>(&mut self, host: &mut H, events: &mut VecDeque<ExpansionEvent>) {
        if self.phase != Phase::Idle {
            return;
        }

        if self.members.is_empty() {
            self.phase = Phase::Finished;
            events.push_back(ExpansionEvent::Completed {
                group: self.id,
                canceled: false,
            });
            return;
        }

        for member in &self.members {
            host.set_visible(&member.child, true);
            host.apply_layout(&member.child, LayoutParams::fixed(member.from));
        }
        self.phase = Phase::Pending;
    }

    /// Advance one frame.
    ///
    /// Returns the progress reported for this frame, or `None` if the
    /// group is not playing.
    pub fn tick<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        now: Instant,
        events: &mut VecDeque<ExpansionEvent>,
    ) -> Option<f32> {
        let start = match self.phase {
            Phase::Pending => {
                self.phase = Phase::Running { start: now };
                now
            }
            Phase::Running { start } => start,
            _ => return None,
        };

        let elapsed = now.saturating_duration_since(start);
        let done = elapsed >= self.transition.duration;
        let fraction = if done {
            1.0
        } else {
            self.transition.fraction_at(elapsed)
        };
        let progress = self
            .progress_mode
            .report(fraction, self.direction == Direction::Collapsing);
        log::trace!(
            "[expand] group {} frame at {:?}: fraction {:.3}",
            self.id,
            elapsed,
            fraction
        );

        for member in &mut self.members {
            let size = lerp_u16(member.from, member.to, fraction);
            member.current = size;
            host.apply_layout(&member.child, LayoutParams::fixed(size));
            events.push_back(ExpansionEvent::FrameUpdate {
                group: self.id,
                child: member.child.clone(),
                size,
                progress,
                direction: self.direction,
            });
        }
        self.last_progress = Some(progress);

        if done {
            self.complete(host, events);
        }

        Some(progress)
    }

    fn complete<H: Host + ?Sized>(&mut self, host: &mut H, events: &mut VecDeque<ExpansionEvent>) {
        for member in &self.members {
            if member.to == 0 {
                host.set_visible(&member.child, false);
            }
            host.apply_layout(&member.child, member.original.params());
        }
        self.phase = Phase::Finished;
        log::debug!("[expand] group {} completed ({:?})", self.id, self.direction);
        events.push_back(ExpansionEvent::Completed {
            group: self.id,
            canceled: false,
        });
    }

    /// Halt playback where it stands.
    ///
    /// Children keep whatever height the last frame gave them and no
    /// completion work runs. Returns false if the group had already
    /// finished or been canceled.
    pub fn cancel(&mut self, events: &mut VecDeque<ExpansionEvent>) -> bool {
        if matches!(self.phase, Phase::Finished | Phase::Canceled) {
            return false;
        }
        self.phase = Phase::Canceled;
        log::debug!("[expand] group {} canceled", self.id);
        events.push_back(ExpansionEvent::Completed {
            group: self.id,
            canceled: true,
        });
        true
    }

    /// Drop a member, e.g. because its child was detached mid-flight.
    pub fn remove_member(&mut self, child: &ChildId) -> bool {
        let before = self.members.len();
        self.members.retain(|m| &m.child != child);
        self.members.len() != before
    }

    pub fn id(&self) -> GroupId {
        self.id
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn transition(&self) -> TransitionConfig {
        self.transition
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True while started and not yet finished or canceled.
    pub fn is_playing(&self) -> bool {
        matches!(self.phase, Phase::Pending | Phase::Running { .. })
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_canceled(&self) -> bool {
        self.phase == Phase::Canceled
    }

    /// Progress reported on the most recent frame.
    pub fn last_progress(&self) -> Option<f32> {
        self.last_progress
    }

    /// Start and target heights of `child`, if it is a member.
    pub fn span(&self, child: &ChildId) -> Option<(u16, u16)> {
        self.members
            .iter()
            .find(|m| &m.child == child)
            .map(|m| (m.from, m.to))
    }

    /// Height `child` was given on the most recent frame.
    pub fn current_size(&self, child: &ChildId) -> Option<u16> {
        self.members
            .iter()
            .find(|m| &m.child == child)
            .map(|m| m.current)
    }
}

/// Linear interpolation for u16 values.
pub fn lerp_u16(from: u16, to: u16, t: f32) -> u16 {
    let from = from as f32;
    let to = to as f32;
    (from + (to - from) * t).round() as u16
}
