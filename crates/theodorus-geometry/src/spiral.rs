//! The Theodorus spiral: a chain of right triangles sharing one vertex.
//!
//! Every triangle has the spiral origin as its first corner, the previous
//! triangle's outer vertex as its second, and a new vertex one unit away
//! along the perpendicular as its third. Starting from `(1, 0)`:
//!
//! ```text
//! h     = |(x, y)|
//! next  = (x - y/h, y + x/h)
//! ```
//!
//! which rotates by `atan(1/h)` and stretches so that `|next|² = |base|² + 1`.
//! The outer vertex of step `i` therefore lies at distance `√(i + 2)`.

use crate::{Error, Result, Vector2};

/// One triangle of the spiral, in unit geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralStep {
    /// Position in the sequence, starting at 0.
    pub index: usize,
    /// Shared spiral origin.
    pub origin: Vector2,
    /// Inner edge endpoint; equals the previous step's `next_vertex`.
    pub base_vertex: Vector2,
    /// Outer vertex added by this step.
    pub next_vertex: Vector2,
}

impl SpiralStep {
    /// The three corners in drawing order: origin, base, next.
    pub fn vertices(&self) -> [Vector2; 3] {
        [self.origin, self.base_vertex, self.next_vertex]
    }

    /// Length of the outer edge from origin to `next_vertex`.
    pub fn hypotenuse(&self) -> f64 {
        (self.next_vertex - self.origin).norm()
    }
}

/// Advance one step of the recurrence.
///
/// `v` must be non-zero; a zero vector divides by zero. [`Theodorus`]
/// guarantees this by rejecting degenerate starting points.
#[inline]
pub fn next_vertex(v: Vector2) -> Vector2 {
    let h = v.norm();
    Vector2::new(v.x - v.y / h, v.y + v.x / h)
}

/// Closed-form length of the outer edge of step `index`: `√(index + 2)`.
#[inline]
pub fn hypotenuse(index: usize) -> f64 {
    ((index + 2) as f64).sqrt()
}

/// Largest vertex radius of a spiral with `step_count` triangles.
///
/// Zero for an empty spiral, otherwise the radius of the last outer vertex.
pub fn extent(step_count: usize) -> f64 {
    if step_count == 0 {
        0.0
    } else {
        ((step_count + 1) as f64).sqrt()
    }
}

/// Build the first `step_count` triangles of the spiral.
///
/// Deterministic and pure; an empty vector when `step_count == 0`.
pub fn generate(step_count: usize) -> Vec<SpiralStep> {
    Theodorus::take_steps(step_count).collect()
}

/// Iterator over spiral triangles.
///
/// Owns the running outer vertex, so two iterators never share state.
#[derive(Debug, Clone)]
pub struct Theodorus {
    base: Vector2,
    current: usize,
    limit: Option<usize>,
}

impl Theodorus {
    /// Create an infinite spiral iterator starting from `(1, 0)`.
    pub fn new() -> Self {
        Self {
            base: Vector2::UNIT_X,
            current: 0,
            limit: None,
        }
    }

    /// Create a spiral iterator that yields exactly `count` triangles.
    pub fn take_steps(count: usize) -> Self {
        Self {
            limit: Some(count),
            ..Self::new()
        }
    }

    /// Create an infinite iterator from a custom first outer vertex.
    ///
    /// Fails for the zero vector and for non-finite components.
    pub fn starting_at(base: Vector2) -> Result<Self> {
        if !base.is_finite() {
            return Err(Error::invalid(
                "initial_vertex",
                format!("must be finite, got {base}"),
            ));
        }
        if base.is_zero() {
            return Err(Error::invalid("initial_vertex", "must be non-zero"));
        }
        Ok(Self {
            base,
            current: 0,
            limit: None,
        })
    }

    /// Bound an iterator to at most `count` further triangles.
    pub fn limited(mut self, count: usize) -> Self {
        self.limit = Some(self.current.saturating_add(count));
        self
    }
}

impl Default for Theodorus {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Theodorus {
    type Item = SpiralStep;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.current >= limit {
                return None;
            }
        }

        let next = next_vertex(self.base);
        let step = SpiralStep {
            index: self.current,
            origin: Vector2::ORIGIN,
            base_vertex: self.base,
            next_vertex: next,
        };
        self.base = next;
        self.current += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.current);
                (remaining, Some(remaining))
            }
            None => (usize::MAX, None),
        }
    }
}
