//! Mark colors.

/// A color as stored in a Wang `RGBQUAD`: blue, green, red.
///
/// The component order of the wire format is kept; use [`ColorTriple::to_rgb`]
/// when a host API expects red first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorTriple {
    pub blue: u8,
    pub green: u8,
    pub red: u8,
}

impl ColorTriple {
    pub fn new(blue: u8, green: u8, red: u8) -> Self {
        Self { blue, green, red }
    }

    /// Build a color from the three component bytes in wire order.
    pub fn from_bgr(components: [u8; 3]) -> Self {
        Self::new(components[0], components[1], components[2])
    }

    /// Components in wire order: `[blue, green, red]`.
    pub fn components(&self) -> [u8; 3] {
        [self.blue, self.green, self.red]
    }

    /// Components reordered as `[red, green, blue]`.
    pub fn to_rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}
