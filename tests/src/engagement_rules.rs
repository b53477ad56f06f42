//! Engagement scoring, goal clamping, and leaderboard placement.

use engagement::{Achievement, Engagement, EngagementCategory, Goal};
use lumira_health_shared::Progress;

/// Achievement roster whose unlocked entries sum to `total` points.
pub fn achievements_worth(total: u32) -> Vec<Achievement> {
    vec![
        Achievement {
            id: "ACH-1".to_string(),
            title: "Seeded".to_string(),
            detail: "Unlocked for the requested total".to_string(),
            category: EngagementCategory::Fitness,
            points: total,
            unlocked: true,
        },
        Achievement {
            id: "ACH-2".to_string(),
            title: "Locked extra".to_string(),
            detail: "Never counted".to_string(),
            category: EngagementCategory::Learning,
            points: 999,
            unlocked: false,
        },
    ]
}

pub fn goal(id: &str, current: u32, target: u32) -> Goal {
    Goal {
        id: id.to_string(),
        title: format!("Goal {}", id),
        category: EngagementCategory::Fitness,
        progress: Progress::clamped(current, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    fn module_with_goals(goals: Vec<Goal>) -> Engagement {
        Engagement::new("Test Member", vec![], goals, vec![], vec![], vec![])
    }

    #[test]
    fn test_random_toggle_sequences_track_the_sum_invariant() {
        let mut rng = StdRng::seed_from_u64(7);
        let ids = ["ACH-1", "ACH-2", "ACH-3", "ACH-4", "ACH-5"];
        let mut module = Engagement::with_sample_data("Alex Mutua");

        for _ in 0..200 {
            let id = ids[rng.gen_range(0..ids.len())];
            module.toggle_unlocked(id).unwrap();

            let by_hand: u32 = module
                .achievements()
                .iter()
                .filter(|a| a.unlocked)
                .map(|a| a.points)
                .sum();
            assert_eq!(module.total_points(), by_hand);
        }
    }

    #[test]
    fn test_advancing_one_goal_leaves_the_others_untouched() {
        let mut module = module_with_goals(vec![goal("GL-A", 5, 8), goal("GL-B", 7, 8)]);

        module.advance_goal("GL-A", 10).unwrap();

        let a = &module.goals()[0];
        assert_eq!(a.progress.current(), 8);
        assert!(a.is_complete());

        let b = &module.goals()[1];
        assert_eq!(b.progress.current(), 7);
        assert!(!b.is_complete());
    }

    #[test]
    fn test_a_like_round_trip_restores_the_whole_feed() {
        let mut module = Engagement::with_sample_data("Alex Mutua");
        let baseline = module.posts().to_vec();

        module.toggle_like("POST-1").unwrap();
        assert_ne!(module.posts(), baseline.as_slice());

        module.toggle_like("POST-1").unwrap();
        assert_eq!(module.posts(), baseline.as_slice());
    }

    #[test]
    fn test_a_points_tie_ranks_the_peer_ahead() {
        // Daniel Kim also holds 2180; the tied member slots in behind him.
        let module = Engagement::new(
            "Alex Mutua",
            achievements_worth(2180),
            vec![],
            vec![],
            vec![],
            engagement::sample_peers(),
        );

        let board = module.leaderboard();
        let points: Vec<u32> = board.iter().map(|row| row.points).collect();
        assert_eq!(points, vec![2450, 2180, 2180, 1650, 1420]);

        assert_eq!(board[1].name, "Daniel Kim");
        assert!(!board[1].is_you);
        assert!(board[2].is_you);
        assert_eq!(module.your_rank(), 3);

        for (index, row) in board.iter().enumerate() {
            assert_eq!(row.rank, index + 1);
        }
    }
}
