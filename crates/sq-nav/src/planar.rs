//! Flat-ground reference implementation of the navigation contracts.
//!
//! `PlanarSurface` is a rectangle of walkable ground with optional
//! rectangular holes (pits, chasms) and axis-aligned blocker boxes (walls)
//! that occlude sight.  `PlanarNav` is a kinematic agent that slides toward
//! its destination at constant speed — no pathfinding, it walks straight
//! lines, which is all the headless tests and demos need.

use std::sync::Arc;

use sq_core::Vec3;

use crate::provider::{LineOfSight, NavProvider};

// ── Geometry helpers ──────────────────────────────────────────────────────────

/// Axis-aligned rectangle on the ground plane.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min_x: f32,
    pub min_z: f32,
    pub max_x: f32,
    pub max_z: f32,
}

impl Rect {
    pub fn new(min_x: f32, min_z: f32, max_x: f32, max_z: f32) -> Self {
        Self { min_x, min_z, max_x, max_z }
    }

    /// Square rect centered on the origin with the given half-extent.
    pub fn centered(half: f32) -> Self {
        Self::new(-half, -half, half, half)
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.z >= self.min_z && p.z <= self.max_z
    }

    /// Closest point inside the rect to `p` (ground plane; keeps `p.y`).
    pub fn clamp(&self, p: Vec3) -> Vec3 {
        Vec3::new(
            p.x.clamp(self.min_x, self.max_x),
            p.y,
            p.z.clamp(self.min_z, self.max_z),
        )
    }
}

/// Axis-aligned box used as a sight blocker.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Segment/box intersection via the slab method.
    pub fn intersects_segment(&self, from: Vec3, to: Vec3) -> bool {
        let d = to - from;
        let mut t_min = 0.0_f32;
        let mut t_max = 1.0_f32;

        for (origin, dir, lo, hi) in [
            (from.x, d.x, self.min.x, self.max.x),
            (from.y, d.y, self.min.y, self.max.y),
            (from.z, d.z, self.min.z, self.max.z),
        ] {
            if dir.abs() < 1e-8 {
                // Segment parallel to this slab: miss unless inside it.
                if origin < lo || origin > hi {
                    return false;
                }
            } else {
                let inv = 1.0 / dir;
                let (t0, t1) = {
                    let a = (lo - origin) * inv;
                    let b = (hi - origin) * inv;
                    if a <= b { (a, b) } else { (b, a) }
                };
                t_min = t_min.max(t0);
                t_max = t_max.min(t1);
                if t_min > t_max {
                    return false;
                }
            }
        }
        true
    }
}

// ── PlanarSurface ─────────────────────────────────────────────────────────────

/// The walkable world for the planar implementation.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarSurface {
    /// Walkable bounds.  `None` means an unbounded plane.
    pub bounds:   Option<Rect>,
    /// Non-walkable cutouts inside the bounds.
    pub holes:    Vec<Rect>,
    /// Boxes that block line of sight (but not movement).
    pub blockers: Vec<Aabb>,
}

impl PlanarSurface {
    /// Unbounded open plane with nothing in the way.
    pub fn open() -> Self {
        Self::default()
    }

    /// Bounded square arena centered on the origin.
    pub fn arena(half_extent: f32) -> Self {
        Self { bounds: Some(Rect::centered(half_extent)), ..Self::default() }
    }

    pub fn with_hole(mut self, hole: Rect) -> Self {
        self.holes.push(hole);
        self
    }

    pub fn with_blocker(mut self, blocker: Aabb) -> Self {
        self.blockers.push(blocker);
        self
    }

    /// `true` if `point` is on walkable ground.
    pub fn valid(&self, point: Vec3) -> bool {
        if let Some(bounds) = &self.bounds {
            if !bounds.contains(point) {
                return false;
            }
        }
        !self.holes.iter().any(|h| h.contains(point))
    }

    /// Project `point` to walkable ground within `tolerance`, if possible.
    ///
    /// Valid points pass through unchanged.  Out-of-bounds points are clamped
    /// to the bounds edge; points inside a hole (or whose clamp moved farther
    /// than `tolerance`) get `None` — the caller skips its destination update.
    pub fn nearest_valid(&self, point: Vec3, tolerance: f32) -> Option<Vec3> {
        if self.valid(point) {
            return Some(point);
        }
        if let Some(bounds) = &self.bounds {
            let clamped = bounds.clamp(point);
            if self.valid(clamped) && point.ground().distance(clamped.ground()) <= tolerance {
                return Some(clamped);
            }
        }
        None
    }
}

impl LineOfSight for PlanarSurface {
    fn clear(&self, from: Vec3, to: Vec3) -> bool {
        !self
            .blockers
            .iter()
            .any(|b| b.intersects_segment(from, to))
    }
}

// ── PlanarNav ─────────────────────────────────────────────────────────────────

/// Kinematic straight-line mover over a shared [`PlanarSurface`].
#[derive(Clone, Debug)]
pub struct PlanarNav {
    surface:           Arc<PlanarSurface>,
    position:          Vec3,
    forward:           Vec3,
    velocity:          Vec3,
    destination:       Vec3,
    /// Movement speed in units/second.
    pub speed:             f32,
    /// Radius inside which the destination counts as reached.
    pub stopping_distance: f32,
}

impl PlanarNav {
    pub fn new(surface: Arc<PlanarSurface>, position: Vec3, speed: f32) -> Self {
        Self {
            surface,
            position,
            forward:           Vec3::FORWARD,
            velocity:          Vec3::ZERO,
            destination:       position,
            speed,
            stopping_distance: 0.5,
        }
    }

    /// Teleport (initial placement, tests).
    pub fn place(&mut self, position: Vec3) {
        self.position = position;
        self.destination = position;
        self.velocity = Vec3::ZERO;
    }

    /// Override the facing direction (tests aiming the fire-control gate).
    pub fn face(&mut self, forward: Vec3) {
        self.forward = forward.normalized_or_zero();
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    pub fn surface(&self) -> &Arc<PlanarSurface> {
        &self.surface
    }
}

impl NavProvider for PlanarNav {
    fn position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.forward
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn on_surface(&self) -> bool {
        self.surface.valid(self.position)
    }

    fn set_destination(&mut self, point: Vec3) {
        // Best-effort, like an engine navmesh agent: invalid requests are
        // dropped and the previous destination stands.
        if self.surface.valid(point) {
            self.destination = point;
        }
    }

    fn remaining_distance(&self) -> f32 {
        self.position.ground().distance(self.destination.ground())
    }

    fn nearest_valid_point(&self, point: Vec3, tolerance: f32) -> Option<Vec3> {
        self.surface.nearest_valid(point, tolerance)
    }

    fn advance(&mut self, dt: f32) {
        let to_dest = (self.destination - self.position).ground();
        let dist = to_dest.length();
        if dist <= self.stopping_distance {
            self.velocity = Vec3::ZERO;
            return;
        }
        let dir = to_dest / dist;
        let step = (self.speed * dt).min(dist);
        self.position += dir * step;
        self.velocity = dir * self.speed;
        self.forward = dir;
    }
}
