#![allow(dead_code)]

use std::collections::HashMap;
use std::time::{Duration, Instant};

use expandable::{
    ChildId, Constraints, ExpansionConfig, ExpansionController, Host, LayoutParams, Size,
};

/// What the host knows about one child.
#[derive(Debug, Clone, PartialEq)]
pub struct MockChild {
    pub natural: u16,
    pub params: LayoutParams,
    pub visible: bool,
    pub layout_requests: usize,
}

/// In-memory host that lays children out immediately.
#[derive(Debug, Default)]
pub struct MockHost {
    pub children: HashMap<ChildId, MockChild>,
    pub measured: Vec<(ChildId, LayoutParams, Constraints)>,
}

impl MockHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a visible child with the given natural height and params.
    pub fn add(&mut self, id: &str, natural: u16, params: LayoutParams) {
        self.children.insert(
            ChildId::new(id),
            MockChild {
                natural,
                params,
                visible: true,
                layout_requests: 0,
            },
        );
    }

    pub fn hide(&mut self, id: &str) {
        self.set_visible(&ChildId::new(id), false);
    }

    pub fn child(&self, id: &str) -> &MockChild {
        self.children
            .get(&ChildId::new(id))
            .unwrap_or_else(|| panic!("unknown child {id}"))
    }

    pub fn visible(&self, id: &str) -> bool {
        self.child(id).visible
    }

    pub fn params(&self, id: &str) -> LayoutParams {
        self.child(id).params
    }

    pub fn size(&self, id: &str) -> u16 {
        self.rendered_size(&ChildId::new(id))
    }
}

impl Host for MockHost {
    fn measure(&mut self, child: &ChildId, params: LayoutParams, constraints: Constraints) -> u16 {
        self.measured.push((child.clone(), params, constraints));
        let natural = self.children.get(child).map_or(0, |c| c.natural);
        match params.height {
            Size::Fixed(h) => h,
            _ => natural,
        }
    }

    fn rendered_size(&self, child: &ChildId) -> u16 {
        let Some(c) = self.children.get(child) else {
            return 0;
        };
        if !c.visible {
            return 0;
        }
        match c.params.height {
            Size::Fixed(h) => h,
            _ => c.natural,
        }
    }

    fn set_visible(&mut self, child: &ChildId, visible: bool) {
        if let Some(c) = self.children.get_mut(child) {
            c.visible = visible;
        }
    }

    fn apply_layout(&mut self, child: &ChildId, params: LayoutParams) {
        if let Some(c) = self.children.get_mut(child) {
            c.params = params;
            c.layout_requests += 1;
        }
    }
}

/// Controller plus host with every `(id, natural)` attached as an
/// expandable `Auto` child.
pub fn setup(config: ExpansionConfig, children: &[(&str, u16)]) -> (ExpansionController, MockHost) {
    let mut host = MockHost::new();
    let mut controller = ExpansionController::new(config);
    controller.on_measure(Constraints::new(80, 24));
    for (id, natural) in children {
        host.add(id, *natural, LayoutParams::default());
        controller.attach(&mut host, *id, true, LayoutParams::default());
    }
    (controller, host)
}

pub fn at(base: Instant, ms: u64) -> Instant {
    base + Duration::from_millis(ms)
}

/// Tick every `step` ms from `from` until the controller goes idle.
/// Returns the instant of the last tick.
pub fn run_to_end(
    controller: &mut ExpansionController,
    host: &mut MockHost,
    base: Instant,
    from: u64,
    step: u64,
) -> Instant {
    let mut ms = from;
    while controller.tick(host, at(base, ms)) {
        ms += step;
        assert!(ms < 60_000, "animation never finished");
    }
    at(base, ms)
}

pub fn linear(ms: u64) -> ExpansionConfig {
    ExpansionConfig::new()
        .duration(Duration::from_millis(ms))
        .easing(expandable::Easing::Linear)
}
