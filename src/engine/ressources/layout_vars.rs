//! Parameters used by the radial layout.

use glam::Vec2;

/// Distance between the center node and every peer, in layout units.
pub struct LayoutRadius(pub f32);

impl Default for LayoutRadius {
    fn default() -> Self {
        Self(350.0)
    }
}

/// Where the center node is placed.
#[derive(Default)]
pub struct LayoutOrigin(pub Vec2);
