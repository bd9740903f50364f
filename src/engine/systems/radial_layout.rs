use crate::engine::ressources::layout_vars::{LayoutOrigin, LayoutRadius};
use glam::Vec2;
use std::f32::consts::TAU;

/// Angle of the `index`-th peer when `peer_count` peers share the circle.
///
/// Peers are spread evenly, starting on the positive x axis. A count of
/// zero is treated as one so the division is always defined.
pub fn peer_angle(index: usize, peer_count: usize) -> f32 {
    (index as f32 / peer_count.max(1) as f32) * TAU
}

/// Positions for `peer_count` peers around the origin.
///
/// The center itself sits on [`LayoutOrigin`] and is not part of the
/// returned list.
pub fn radial_positions(peer_count: usize, radius: &LayoutRadius, origin: &LayoutOrigin) -> Vec<Vec2> {
    (0..peer_count)
        .map(|i| {
            let (sin, cos) = peer_angle(i, peer_count).sin_cos();
            origin.0 + Vec2::new(cos, sin) * radius.0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    #[test]
    fn no_peers_no_positions() {
        assert!(radial_positions(0, &LayoutRadius::default(), &LayoutOrigin::default()).is_empty());
        assert_eq!(peer_angle(0, 0), 0.0);
    }

    #[test]
    fn single_peer_sits_on_the_x_axis() {
        let positions = radial_positions(1, &LayoutRadius::default(), &LayoutOrigin::default());
        assert_eq!(positions, vec![Vec2::new(350.0, 0.0)]);
    }

    #[test]
    fn four_peers_form_a_cross() {
        let positions = radial_positions(4, &LayoutRadius(100.0), &LayoutOrigin::default());
        let expected = [
            Vec2::new(100.0, 0.0),
            Vec2::new(0.0, 100.0),
            Vec2::new(-100.0, 0.0),
            Vec2::new(0.0, -100.0),
        ];
        for (actual, expected) in positions.iter().zip(expected) {
            assert!(actual.abs_diff_eq(expected, EPS), "{actual} != {expected}");
        }
    }

    #[test]
    fn peers_keep_their_distance_from_a_shifted_origin() {
        let origin = LayoutOrigin(Vec2::new(400.0, 300.0));
        let positions = radial_positions(7, &LayoutRadius(250.0), &origin);
        assert_eq!(positions.len(), 7);
        for position in positions {
            assert!((position.distance(origin.0) - 250.0).abs() < EPS);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let a = radial_positions(13, &LayoutRadius::default(), &LayoutOrigin::default());
        let b = radial_positions(13, &LayoutRadius::default(), &LayoutOrigin::default());
        assert_eq!(a, b);
    }
}
