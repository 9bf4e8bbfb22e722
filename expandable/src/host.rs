//! The UI framework as seen from the expansion engine.

use crate::layout::{Constraints, LayoutParams};
use crate::registry::ChildId;

/// Layout, measurement and visibility primitives supplied by the host.
///
/// All calls happen on the host's UI thread, from inside controller
/// methods; implementations never see two calls interleaved.
pub trait Host {
    /// Natural height of `child` if it were laid out with `params` inside
    /// a container measured with `constraints`.
    ///
    /// Must work for hidden children; the controller makes the child
    /// visible first, but the host may not have laid it out yet.
    fn measure(&mut self, child: &ChildId, params: LayoutParams, constraints: Constraints) -> u16;

    /// Height the child currently occupies on screen. Zero when hidden.
    fn rendered_size(&self, child: &ChildId) -> u16;

    /// Show or hide without detaching.
    fn set_visible(&mut self, child: &ChildId, visible: bool);

    /// Store new params for `child` and request a re-layout.
    fn apply_layout(&mut self, child: &ChildId, params: LayoutParams);
}
