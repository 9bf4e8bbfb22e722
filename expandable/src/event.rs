use crate::animation::GroupId;
use crate::registry::ChildId;

/// Which way a transition is heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Expanding,
    Collapsing,
}

/// Notifications produced while a transition runs, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpansionEvent {
    /// One child moved to a new interpolated height this frame.
    FrameUpdate {
        group: GroupId,
        child: ChildId,
        size: u16,
        /// Group-wide progress, as reported to the listener.
        progress: f32,
        direction: Direction,
    },
    /// A group finished or was interrupted.
    ///
    /// A canceled group never ran its per-child completion work.
    Completed { group: GroupId, canceled: bool },
}

impl ExpansionEvent {
    pub fn group(&self) -> GroupId {
        match self {
            ExpansionEvent::FrameUpdate { group, .. } | ExpansionEvent::Completed { group, .. } => {
                *group
            }
        }
    }
}
