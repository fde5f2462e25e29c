//! Non-overlapping object placement
//!
//! Points are drawn uniformly inside a normalized rectangle and rejected while
//! they sit closer than the minimum separation to anything already placed.
//! After `max_attempts` draws the last candidate is accepted anyway, so dense
//! layouts degrade into overlaps instead of failing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::ObjectKind;

/// Closed interval on one normalized axis (or a scale range)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Single-valued span
    pub const fn fixed(value: f32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Uniform draw; a degenerate span yields `min`
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.float_between(self.min, self.max)
    }

    /// Finite, ordered and inside `[0, 1]`
    pub fn is_unit(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min <= self.max
            && self.min >= 0.0
            && self.max <= 1.0
    }
}

/// A generated spot in normalized playfield coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Position, both axes in `[0, 1]`
    pub pos: Vec2,
    /// Sprite scale
    pub scale: f32,
}

/// Parameters for one category of placements
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementRequest {
    pub count: u32,
    pub x: Span,
    pub y: Span,
    pub scale: Span,
    /// Minimum normalized distance to every earlier point
    pub min_separation: f32,
    /// Candidate draws per point; 0 behaves like 1
    pub max_attempts: u32,
}

/// How a single point was accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementTrace {
    /// Candidates drawn for this point (1-based)
    pub attempts: u32,
    /// Accepted on the final capped attempt without meeting the separation
    pub fallback: bool,
}

/// Placements plus how each one was accepted
#[derive(Debug, Clone, Default)]
pub struct PlacementReport {
    pub placements: Vec<Placement>,
    pub traces: Vec<PlacementTrace>,
}

impl PlacementReport {
    /// Number of points accepted without meeting the separation
    pub fn fallbacks(&self) -> usize {
        self.traces.iter().filter(|t| t.fallback).count()
    }
}

fn clear_of(candidate: Vec2, occupied: &[Vec2], min_separation: f32) -> bool {
    occupied
        .iter()
        .all(|p| p.distance(candidate) >= min_separation)
}

/// Generate `request.count` placements, treating `occupied` as obstacles.
///
/// Accepted points are appended to `occupied` as they are placed, so the
/// caller can chain categories and each sees all earlier ones.
pub fn generate_placements_with_report<R: RandomSource + ?Sized>(
    rng: &mut R,
    request: &PlacementRequest,
    occupied: &mut Vec<Vec2>,
) -> PlacementReport {
    let max_attempts = request.max_attempts.max(1);
    let mut report = PlacementReport {
        placements: Vec::with_capacity(request.count as usize),
        traces: Vec::with_capacity(request.count as usize),
    };

    for _ in 0..request.count {
        let mut candidate = Vec2::ZERO;
        let mut trace = PlacementTrace {
            attempts: 0,
            fallback: false,
        };

        for attempt in 1..=max_attempts {
            candidate = Vec2::new(request.x.sample(rng), request.y.sample(rng));
            trace.attempts = attempt;
            if clear_of(candidate, occupied, request.min_separation) {
                break;
            }
            if attempt == max_attempts {
                trace.fallback = true;
            }
        }

        if trace.fallback {
            log::debug!(
                "Placement at ({:.3}, {:.3}) accepted after {} attempts without clearance",
                candidate.x,
                candidate.y,
                max_attempts
            );
        }

        let scale = request.scale.sample(rng);
        occupied.push(candidate);
        report.placements.push(Placement {
            pos: candidate,
            scale,
        });
        report.traces.push(trace);
    }

    report
}

/// Generate placements for one category; see [`generate_placements_with_report`]
pub fn generate_placements<R: RandomSource + ?Sized>(
    rng: &mut R,
    request: &PlacementRequest,
    occupied: &mut Vec<Vec2>,
) -> Vec<Placement> {
    generate_placements_with_report(rng, request, occupied).placements
}

/// Place several categories in order. Later categories avoid earlier ones,
/// never the reverse.
pub fn place_categories<R: RandomSource + ?Sized>(
    rng: &mut R,
    categories: &[(ObjectKind, PlacementRequest)],
) -> Vec<(ObjectKind, Placement)> {
    let mut occupied = Vec::new();
    let mut out = Vec::new();
    for (kind, request) in categories {
        let placements = generate_placements(rng, request, &mut occupied);
        out.extend(placements.into_iter().map(|p| (*kind, p)));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::{ScriptedRandom, SeededRandom};
    use proptest::prelude::*;

    fn request(count: u32, min_separation: f32, max_attempts: u32) -> PlacementRequest {
        PlacementRequest {
            count,
            x: Span::new(0.1, 0.9),
            y: Span::new(0.3, 0.8),
            scale: Span::new(0.25, 0.35),
            min_separation,
            max_attempts,
        }
    }

    #[test]
    fn test_sparse_layout_respects_separation() {
        let mut rng = SeededRandom::new(2024);
        let mut occupied = Vec::new();
        let report = generate_placements_with_report(&mut rng, &request(18, 0.06, 30), &mut occupied);

        assert_eq!(report.placements.len(), 18);
        assert_eq!(occupied.len(), 18);
        assert_eq!(report.fallbacks(), 0);
        for (i, a) in report.placements.iter().enumerate() {
            assert!((0.1..0.9).contains(&a.pos.x));
            assert!((0.3..0.8).contains(&a.pos.y));
            assert!((0.25..0.35).contains(&a.scale));
            for b in &report.placements[i + 1..] {
                assert!(a.pos.distance(b.pos) >= 0.06);
            }
        }
    }

    #[test]
    fn test_zero_count_places_nothing() {
        let mut rng = SeededRandom::new(1);
        let mut occupied = vec![Vec2::new(0.5, 0.5)];
        let placements = generate_placements(&mut rng, &request(0, 0.1, 30), &mut occupied);
        assert!(placements.is_empty());
        assert_eq!(occupied.len(), 1);
    }

    #[test]
    fn test_zero_attempts_still_places() {
        let mut rng = SeededRandom::new(1);
        let mut occupied = Vec::new();
        let report = generate_placements_with_report(&mut rng, &request(3, 0.1, 0), &mut occupied);
        assert_eq!(report.placements.len(), 3);
        assert!(report.traces.iter().all(|t| t.attempts == 1));
    }

    #[test]
    fn test_degenerate_ranges_collapse() {
        let mut rng = SeededRandom::new(9);
        let mut occupied = Vec::new();
        let req = PlacementRequest {
            count: 3,
            x: Span::fixed(0.5),
            y: Span::fixed(0.5),
            scale: Span::fixed(0.3),
            min_separation: 0.1,
            max_attempts: 5,
        };
        let report = generate_placements_with_report(&mut rng, &req, &mut occupied);
        assert!(report.placements.iter().all(|p| p.pos == Vec2::new(0.5, 0.5)));
        // First point is clear, the rest overlap after exhausting attempts
        assert!(!report.traces[0].fallback);
        assert!(report.traces[1].fallback && report.traces[2].fallback);
        assert_eq!(report.traces[1].attempts, 5);
    }

    #[test]
    fn test_rejects_then_accepts() {
        // First candidate lands on the obstacle, second is clear
        let mut rng = ScriptedRandom::new().fractions([0.5, 0.5, 0.0, 0.0]);
        let mut occupied = vec![Vec2::new(0.5, 0.5)];
        let req = PlacementRequest {
            count: 1,
            x: Span::new(0.0, 1.0),
            y: Span::new(0.0, 1.0),
            scale: Span::fixed(1.0),
            min_separation: 0.2,
            max_attempts: 10,
        };
        let report = generate_placements_with_report(&mut rng, &req, &mut occupied);
        assert_eq!(report.placements[0].pos, Vec2::ZERO);
        assert_eq!(report.traces[0].attempts, 2);
        assert!(!report.traces[0].fallback);
    }

    #[test]
    fn test_later_categories_avoid_earlier() {
        let mut rng = SeededRandom::new(77);
        let categories = [
            (ObjectKind::Rock, request(6, 0.06, 50)),
            (ObjectKind::Log, request(4, 0.06, 50)),
            (ObjectKind::LilyPad, request(4, 0.06, 50)),
        ];
        let placed = place_categories(&mut rng, &categories);
        assert_eq!(placed.len(), 14);
        assert_eq!(placed[0].0, ObjectKind::Rock);
        assert_eq!(placed[6].0, ObjectKind::Log);
        assert_eq!(placed[13].0, ObjectKind::LilyPad);
        for (i, (_, a)) in placed.iter().enumerate() {
            for (_, b) in &placed[i + 1..] {
                assert!(a.pos.distance(b.pos) >= 0.06);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_violations_only_on_capped_attempts(
            seed in any::<u64>(),
            count in 0u32..40,
            sep in 0.0f32..0.4,
            attempts in 1u32..20,
            obstacles in proptest::collection::vec((0.1f32..0.9, 0.3f32..0.8), 0..8),
        ) {
            let mut rng = SeededRandom::new(seed);
            let earlier: Vec<Vec2> = obstacles.iter().map(|&(x, y)| Vec2::new(x, y)).collect();
            let mut occupied = earlier.clone();
            let report = generate_placements_with_report(
                &mut rng,
                &request(count, sep, attempts),
                &mut occupied,
            );
            prop_assert_eq!(report.placements.len(), count as usize);
            prop_assert_eq!(occupied.len(), earlier.len() + count as usize);
            prop_assert_eq!(&occupied[..earlier.len()], &earlier[..]);
            for (j, b) in report.placements.iter().enumerate() {
                let trace = report.traces[j];
                prop_assert!(trace.attempts >= 1 && trace.attempts <= attempts);
                let violates = earlier.iter().any(|a| a.distance(b.pos) < sep)
                    || report.placements[..j]
                        .iter()
                        .any(|a| a.pos.distance(b.pos) < sep);
                if violates {
                    prop_assert!(trace.fallback);
                    prop_assert_eq!(trace.attempts, attempts);
                }
            }
        }
    }
}
