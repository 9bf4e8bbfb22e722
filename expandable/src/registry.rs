use std::collections::HashMap;
use std::fmt;

use crate::host::Host;
use crate::layout::{LayoutParams, SizeSnapshot};

/// Identity of a child element, as the host names it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChildId(String);

impl ChildId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ChildId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ChildId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Bookkeeping for one child that takes part in expand/collapse.
#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: ChildId,
    /// Declared size, captured before any animation touched the child.
    pub original: SizeSnapshot,
}

/// Ordered set of participating children.
///
/// Insertion order is attach order; a child is tracked at most once.
#[derive(Debug, Default)]
pub struct ChildRegistry {
    order: Vec<ChildId>,
    participants: HashMap<ChildId, Participant>,
}

impl ChildRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `child` if it is expandable and show or hide it to match
    /// `expanded`.
    ///
    /// Returns true if the child is newly tracked. Non-expandable children
    /// and children already tracked are left alone.
    pub fn register<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        child: ChildId,
        expandable: bool,
        params: LayoutParams,
        expanded: bool,
    ) -> bool {
        if !expandable || self.participants.contains_key(&child) {
            return false;
        }

        host.set_visible(&child, expanded);
        log::debug!(
            "[expand] registered {} ({:?}, {})",
            child,
            params.height,
            if expanded { "visible" } else { "hidden" }
        );

        self.order.push(child.clone());
        self.participants.insert(
            child.clone(),
            Participant {
                id: child,
                original: SizeSnapshot::capture(params),
            },
        );
        true
    }

    /// Stop tracking `child`. Untracked children are ignored.
    pub fn unregister(&mut self, child: &ChildId) -> Option<Participant> {
        let removed = self.participants.remove(child)?;
        self.order.retain(|id| id != child);
        log::debug!("[expand] unregistered {}", child);
        Some(removed)
    }

    /// Tracked children in attach order.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.order.iter().filter_map(|id| self.participants.get(id))
    }

    pub fn get(&self, child: &ChildId) -> Option<&Participant> {
        self.participants.get(child)
    }

    pub fn contains(&self, child: &ChildId) -> bool {
        self.participants.contains_key(child)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
