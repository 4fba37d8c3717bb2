//! Scoring ratchet
//!
//! The score is a side channel of vertical motion: climbing earns random
//! increments, falling pays them back. Only the max-so-far is ever shown, so
//! falling never visibly reduces the score. The signed accumulator can go
//! negative with no visible effect until the next ascent claws it back.

use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Score;
use crate::consts::SCORE_STEP_RANGE;

/// Per-tick score update, keyed off the doodler's vertical velocity
pub fn update(score: &mut Score, vel_y: f32, rng: &mut Pcg32) {
    if vel_y < 0.0 {
        score.running += rng.random_range(0..SCORE_STEP_RANGE);
        score.display = score.display.max(score.running);
    } else {
        score.running -= rng.random_range(0..SCORE_STEP_RANGE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;

    #[test]
    fn test_ascent_never_lowers_display() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut score = Score::default();
        let mut last = 0;
        for _ in 0..200 {
            update(&mut score, -1.0, &mut rng);
            assert!(score.display >= last);
            assert_eq!(score.display, score.running.max(last));
            last = score.display;
        }
    }

    #[test]
    fn test_descent_leaves_display_untouched() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut score = Score {
            running: 100,
            display: 100,
        };
        for _ in 0..200 {
            update(&mut score, 2.0, &mut rng);
            assert_eq!(score.display, 100);
        }
        // A long fall drives the accumulator well below zero
        assert!(score.running < 0);
    }

    #[test]
    fn test_recovery_after_deficit() {
        let mut rng = Pcg32::seed_from_u64(12);
        let mut score = Score {
            running: -500,
            display: 30,
        };
        // Climbing out of a deficit leaves the display parked at its ratchet
        // until the accumulator passes it again
        for _ in 0..5 {
            update(&mut score, -1.0, &mut rng);
            assert_eq!(score.display, 30.max(score.running));
        }
    }

    proptest! {
        #[test]
        fn prop_display_is_nondecreasing(
            seed in any::<u64>(),
            signs in prop::collection::vec(any::<bool>(), 1..300),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut score = Score::default();
            let mut last = score.display;
            for ascending in signs {
                let vel_y = if ascending { -3.0 } else { 3.0 };
                update(&mut score, vel_y, &mut rng);
                prop_assert!(score.display >= last);
                last = score.display;
            }
        }

        #[test]
        fn prop_display_tracks_running_max(
            seed in any::<u64>(),
            signs in prop::collection::vec(any::<bool>(), 1..300),
        ) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut score = Score::default();
            let mut max_running = 0;
            for ascending in signs {
                let vel_y = if ascending { -3.0 } else { 3.0 };
                update(&mut score, vel_y, &mut rng);
                if ascending {
                    max_running = max_running.max(score.running);
                }
                prop_assert_eq!(score.display, max_running);
            }
        }
    }
}
