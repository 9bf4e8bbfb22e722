/// Height of a child along the container's main (vertical) axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    /// Weighted share of the space left over after fixed and auto children.
    Flex(u16),
    #[default]
    Auto,
}

impl Size {
    /// Returns the weight this size claims, zero for anything but `Flex`.
    pub const fn weight(self) -> u16 {
        match self {
            Size::Flex(w) => w,
            _ => 0,
        }
    }
}

/// Per-child layout parameters handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutParams {
    pub height: Size,
}

impl LayoutParams {
    pub const fn new(height: Size) -> Self {
        Self { height }
    }

    /// Params pinning a child to an exact height with no weight.
    pub const fn fixed(height: u16) -> Self {
        Self {
            height: Size::Fixed(height),
        }
    }
}

/// Constraints the container itself was last measured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Constraints {
    pub width: u16,
    pub height: u16,
}

impl Constraints {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A child's declared size, captured once when it is attached.
///
/// Animation only ever touches the live [`LayoutParams`]; the snapshot is
/// what gets restored when a child comes to rest.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeSnapshot {
    height: Size,
}

impl SizeSnapshot {
    pub const fn capture(params: LayoutParams) -> Self {
        Self {
            height: params.height,
        }
    }

    pub const fn height(&self) -> Size {
        self.height
    }

    /// The params a child should carry when it is at its natural size.
    pub const fn params(&self) -> LayoutParams {
        LayoutParams::new(self.height)
    }
}
