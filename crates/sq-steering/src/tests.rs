//! Unit tests for sq-steering.

mod helpers {
    use sq_core::{AgentId, Vec3};
    use sq_crowd::Neighbor;

    /// Stationary neighbor at `position`, distance measured from the origin.
    pub fn neighbor(id: u32, position: Vec3) -> Neighbor {
        Neighbor {
            id: AgentId(id),
            position,
            velocity: Vec3::ZERO,
            in_combat: false,
            distance: position.length(),
        }
    }

    pub fn moving_neighbor(id: u32, position: Vec3, velocity: Vec3) -> Neighbor {
        Neighbor { velocity, ..neighbor(id, position) }
    }

    pub fn vec_approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }
}

// ── Cohesion ──────────────────────────────────────────────────────────────────

mod cohesion {
    use sq_core::Vec3;
    use crate::cohesion;
    use super::helpers::{neighbor, vec_approx};

    #[test]
    fn empty_set_is_exactly_zero() {
        assert_eq!(cohesion(Vec3::ZERO, &[]), Vec3::ZERO);
    }

    #[test]
    fn points_at_centroid() {
        let ns = [
            neighbor(1, Vec3::new(4.0, 0.0, 2.0)),
            neighbor(2, Vec3::new(4.0, 0.0, -2.0)),
        ];
        // Centroid (4, 0, 0) → unit +X from the origin.
        assert!(vec_approx(cohesion(Vec3::ZERO, &ns), Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn ground_projected() {
        let ns = [neighbor(1, Vec3::new(0.0, 50.0, 3.0))];
        let c = cohesion(Vec3::ZERO, &ns);
        assert_eq!(c.y, 0.0);
        assert!(vec_approx(c, Vec3::new(0.0, 0.0, 1.0)));
    }
}

// ── Separation ────────────────────────────────────────────────────────────────

mod separation {
    use sq_core::Vec3;
    use crate::separation;
    use super::helpers::{neighbor, vec_approx};

    #[test]
    fn empty_set_is_zero() {
        assert_eq!(separation(Vec3::ZERO, &[], 3.0), Vec3::ZERO);
    }

    #[test]
    fn two_agents_one_unit_apart() {
        // Separation radius 3, neighbor 1 unit away: push directly away
        // with magnitude 1 (1/distance weighting).
        let ns = [neighbor(1, Vec3::new(1.0, 0.0, 0.0))];
        let s = separation(Vec3::ZERO, &ns, 3.0);
        assert!(vec_approx(s, Vec3::new(-1.0, 0.0, 0.0)));
    }

    #[test]
    fn at_radius_contributes_nothing() {
        let ns = [neighbor(1, Vec3::new(3.0, 0.0, 0.0))]; // d == radius
        assert_eq!(separation(Vec3::ZERO, &ns, 3.0), Vec3::ZERO);
    }

    #[test]
    fn beyond_radius_contributes_nothing() {
        let ns = [neighbor(1, Vec3::new(5.0, 0.0, 0.0))];
        assert_eq!(separation(Vec3::ZERO, &ns, 3.0), Vec3::ZERO);
    }

    #[test]
    fn coincident_neighbor_skipped() {
        // Distance zero would divide by zero; it must be skipped, not NaN.
        let ns = [neighbor(1, Vec3::ZERO)];
        assert_eq!(separation(Vec3::ZERO, &ns, 3.0), Vec3::ZERO);
    }

    #[test]
    fn closer_pushes_harder() {
        let near = [neighbor(1, Vec3::new(0.5, 0.0, 0.0))];
        let far  = [neighbor(1, Vec3::new(2.0, 0.0, 0.0))];
        let s_near = separation(Vec3::ZERO, &near, 3.0);
        let s_far  = separation(Vec3::ZERO, &far, 3.0);
        assert!(s_near.length() > s_far.length());
    }

    #[test]
    fn averaged_over_contributors() {
        // Two symmetric pushes cancel; result is the average, i.e. zero.
        let ns = [
            neighbor(1, Vec3::new(1.0, 0.0, 0.0)),
            neighbor(2, Vec3::new(-1.0, 0.0, 0.0)),
        ];
        assert!(vec_approx(separation(Vec3::ZERO, &ns, 3.0), Vec3::ZERO));
    }
}

// ── Alignment ─────────────────────────────────────────────────────────────────

mod alignment {
    use sq_core::Vec3;
    use crate::alignment;
    use super::helpers::{moving_neighbor, neighbor, vec_approx};

    #[test]
    fn empty_set_is_zero() {
        assert_eq!(alignment(&[]), Vec3::ZERO);
    }

    #[test]
    fn all_stationary_is_zero() {
        let ns = [neighbor(1, Vec3::new(1.0, 0.0, 0.0))];
        assert_eq!(alignment(&ns), Vec3::ZERO);
    }

    #[test]
    fn normalized_mean_heading() {
        let ns = [
            moving_neighbor(1, Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0)),
            moving_neighbor(2, Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0)),
        ];
        let a = alignment(&ns);
        let expect = Vec3::new(1.0, 0.0, 1.0).normalized_or_zero();
        assert!(vec_approx(a, expect));
    }
}

// ── Weighted composition & blending ───────────────────────────────────────────

mod composition {
    use sq_core::Vec3;
    use crate::{blend_with_goal, flocking_force, propose_step, SteeringConfig};
    use super::helpers::{neighbor, vec_approx};

    #[test]
    fn default_config_validates() {
        assert!(SteeringConfig::default().validate().is_ok());
    }

    #[test]
    fn out_of_range_weight_rejected() {
        let cfg = SteeringConfig { separation_weight: 6.0, ..SteeringConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn force_is_zero_with_no_neighbors() {
        let cfg = SteeringConfig::default();
        assert_eq!(flocking_force(Vec3::ZERO, &[], &cfg), Vec3::ZERO);
    }

    #[test]
    fn separation_weight_applies() {
        // Lone close neighbor: cohesion pulls +X (weight 1), separation
        // pushes −X with magnitude 1/d × weight 2 → net −X.
        let cfg = SteeringConfig::default();
        let ns = [neighbor(1, Vec3::new(1.0, 0.0, 0.0))];
        let f = flocking_force(Vec3::ZERO, &ns, &cfg);
        assert!(f.x < 0.0, "separation (w=2) must dominate cohesion (w=1), got {f}");
    }

    #[test]
    fn goal_only_when_steering_zero() {
        // No neighbors, goal +X, influence 0.4: the final direction is
        // pure +X because the steering term is zero.
        let blended = blend_with_goal(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO, 0.4);
        assert!(vec_approx(
            blended.normalized_or_zero(),
            Vec3::new(1.0, 0.0, 0.0)
        ));
    }

    #[test]
    fn influence_zero_ignores_steering() {
        let blended = blend_with_goal(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 9.0),
            0.0,
        );
        assert!(vec_approx(blended, Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn influence_one_ignores_goal() {
        let blended = blend_with_goal(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 9.0),
            1.0,
        );
        assert!(vec_approx(blended, Vec3::new(0.0, 0.0, 1.0)));
    }

    #[test]
    fn step_pins_height() {
        let p = propose_step(Vec3::new(0.0, 1.5, 0.0), Vec3::new(0.0, 1.0, 0.0), 2.0);
        assert_eq!(p.y, 1.5);
    }
}

// ── Destination emission ──────────────────────────────────────────────────────

mod emission {
    use std::sync::Arc;

    use sq_core::Vec3;
    use sq_nav::{NavProvider, PlanarNav, PlanarSurface, Rect};

    use crate::{steer_toward, SteeringConfig};

    #[test]
    fn emits_validated_destination() {
        let mut nav = PlanarNav::new(Arc::new(PlanarSurface::open()), Vec3::ZERO, 4.5);
        steer_toward(&mut nav, Vec3::new(1.0, 0.0, 0.0), &[], 0.0, &SteeringConfig::default());
        assert_eq!(nav.destination(), Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn failed_validation_keeps_previous_destination() {
        // Hole exactly where the candidate step (2, 0, 0) lands.
        let surface = PlanarSurface::arena(20.0).with_hole(Rect::new(1.5, -0.5, 2.5, 0.5));
        let mut nav = PlanarNav::new(Arc::new(surface), Vec3::ZERO, 4.5);
        nav.set_destination(Vec3::new(0.0, 0.0, 5.0));

        steer_toward(&mut nav, Vec3::new(1.0, 0.0, 0.0), &[], 0.0, &SteeringConfig::default());
        assert_eq!(nav.destination(), Vec3::new(0.0, 0.0, 5.0), "no update on invalid candidate");
    }

    #[test]
    fn off_surface_agent_skips_steering() {
        let surface = Arc::new(PlanarSurface::arena(10.0));
        let mut nav = PlanarNav::new(surface, Vec3::ZERO, 4.5);
        nav.place(Vec3::new(50.0, 0.0, 0.0)); // off the arena
        let before = nav.destination();
        steer_toward(&mut nav, Vec3::new(1.0, 0.0, 0.0), &[], 0.4, &SteeringConfig::default());
        assert_eq!(nav.destination(), before);
    }
}
