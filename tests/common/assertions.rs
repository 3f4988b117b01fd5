//! Assertion utilities for testing.
//!
//! This module provides helper functions for comparing extents and
//! floating-point coordinates.

use floodtiles::Extent;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two extents match component-wise.
pub fn assert_extent_approx_eq(actual: &Extent, expected: &Extent) {
    assert_approx_eq(actual.left, expected.left, None);
    assert_approx_eq(actual.right, expected.right, None);
    assert_approx_eq(actual.bottom, expected.bottom, None);
    assert_approx_eq(actual.top, expected.top, None);
}

/// Assert that `inner` lies inside `outer`.
pub fn assert_extent_contains(outer: &Extent, inner: &Extent) {
    assert!(
        outer.left <= inner.left
            && inner.right <= outer.right
            && outer.bottom <= inner.bottom
            && inner.top <= outer.top,
        "Extent {:?} is not inside {:?}",
        inner,
        outer
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_extent_contains() {
        let outer = Extent::new(0.0, 10.0, 0.0, 10.0);
        assert_extent_contains(&outer, &Extent::new(1.0, 2.0, 3.0, 4.0));
        assert_extent_contains(&outer, &outer);
    }
}
