//! Interactive Features Module
//!
//! Gamified engagement for patients:
//! - Achievements with point values and a points total over unlocked ones
//! - Personal goals backed by bounded progress pairs
//! - Community challenges with join/leave toggles
//! - A community feed with likes and a post composer
//! - A leaderboard ranking the member among their peers

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use lumira_health_shared::ids::{next_id, JUST_NOW};
use lumira_health_shared::{
    error::require_text, views, HealthError, Progress, ScreenName, ScreenState, ShellPort,
};

// ==================== TYPES ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngagementCategory {
    Donation,
    Fitness,
    Community,
    Learning,
}

impl EngagementCategory {
    pub fn label(&self) -> &'static str {
        match self {
            EngagementCategory::Donation => "Donation",
            EngagementCategory::Fitness => "Fitness",
            EngagementCategory::Community => "Community",
            EngagementCategory::Learning => "Learning",
        }
    }
}

impl std::fmt::Display for EngagementCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub category: EngagementCategory,
    pub points: u32,
    pub unlocked: bool,
}

/// A personal goal; completion is always derived from the progress pair.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: EngagementCategory,
    pub progress: Progress,
}

impl Goal {
    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    pub fn percent(&self) -> u8 {
        self.progress.percent()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub detail: String,
    pub days_left: u32,
    pub participants: u32,
    pub joined: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CommunityPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub posted: String,
    pub likes: u32,
    pub liked: bool,
}

/// Another member on the leaderboard.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Peer {
    pub name: String,
    pub points: u32,
}

/// One ranked leaderboard row.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub name: String,
    pub points: u32,
    pub is_you: bool,
}

// ==================== SCREENS ====================

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum EngagementScreen {
    Main,
    Community,
    Achievements,
    Goals,
    Challenges,
}

impl ScreenName for EngagementScreen {
    fn home() -> Self {
        EngagementScreen::Main
    }
}

/// What the active screen shows.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub enum EngagementView {
    Main {
        member: String,
        total_points: u32,
        rank: usize,
        completed_goals: usize,
        active_goals: usize,
        joined_challenges: usize,
    },
    Community {
        posts: Vec<CommunityPost>,
    },
    Achievements {
        achievements: Vec<Achievement>,
        total_points: u32,
        unlocked: usize,
    },
    Goals {
        goals: Vec<Goal>,
    },
    Challenges {
        challenges: Vec<Challenge>,
        leaderboard: Vec<LeaderboardEntry>,
    },
}

// ==================== MODULE STATE ====================

/// The interactive features module.
#[derive(Clone, Debug)]
pub struct Engagement {
    screen: ScreenState<EngagementScreen>,
    member: String,
    achievements: Vec<Achievement>,
    goals: Vec<Goal>,
    challenges: Vec<Challenge>,
    posts: Vec<CommunityPost>,
    peers: Vec<Peer>,
}

impl Engagement {
    pub fn new(
        member: impl Into<String>,
        achievements: Vec<Achievement>,
        goals: Vec<Goal>,
        challenges: Vec<Challenge>,
        posts: Vec<CommunityPost>,
        peers: Vec<Peer>,
    ) -> Self {
        Self {
            screen: ScreenState::new(),
            member: member.into(),
            achievements,
            goals,
            challenges,
            posts,
            peers,
        }
    }

    /// Module loaded with the seeded sample datasets.
    pub fn with_sample_data(member: impl Into<String>) -> Self {
        Self::new(
            member,
            sample_achievements(),
            sample_goals(),
            sample_challenges(),
            sample_posts(),
            sample_peers(),
        )
    }

    pub fn screen(&self) -> EngagementScreen {
        self.screen.current()
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn challenges(&self) -> &[Challenge] {
        &self.challenges
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    // ==================== DERIVED VIEWS ====================

    /// Points from unlocked achievements only.
    pub fn total_points(&self) -> u32 {
        self.achievements
            .iter()
            .filter(|a| a.unlocked)
            .map(|a| a.points)
            .sum()
    }

    pub fn unlocked_count(&self) -> usize {
        views::count_matching(&self.achievements, |a| a.unlocked)
    }

    pub fn completed_goals(&self) -> usize {
        views::count_matching(&self.goals, |g| g.is_complete())
    }

    pub fn active_goals(&self) -> usize {
        views::count_matching(&self.goals, |g| !g.is_complete())
    }

    pub fn joined_challenges(&self) -> usize {
        views::count_matching(&self.challenges, |c| c.joined)
    }

    /// Peers plus the member, ranked by points descending.
    ///
    /// The sort is stable, so equal totals keep their dataset order with the
    /// member listed after established peers.
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let mut rows: Vec<(String, u32, bool)> = self
            .peers
            .iter()
            .map(|p| (p.name.clone(), p.points, false))
            .collect();
        rows.push((self.member.clone(), self.total_points(), true));
        rows.sort_by(|a, b| b.1.cmp(&a.1));

        rows.into_iter()
            .enumerate()
            .map(|(i, (name, points, is_you))| LeaderboardEntry {
                rank: i + 1,
                name,
                points,
                is_you,
            })
            .collect()
    }

    /// The member's 1-based leaderboard position.
    pub fn your_rank(&self) -> usize {
        self.leaderboard()
            .iter()
            .find(|row| row.is_you)
            .map(|row| row.rank)
            .unwrap_or(0)
    }

    pub fn view(&self) -> EngagementView {
        match self.screen.current() {
            EngagementScreen::Main => EngagementView::Main {
                member: self.member.clone(),
                total_points: self.total_points(),
                rank: self.your_rank(),
                completed_goals: self.completed_goals(),
                active_goals: self.active_goals(),
                joined_challenges: self.joined_challenges(),
            },
            EngagementScreen::Community => EngagementView::Community {
                posts: self.posts.clone(),
            },
            EngagementScreen::Achievements => EngagementView::Achievements {
                achievements: self.achievements.clone(),
                total_points: self.total_points(),
                unlocked: self.unlocked_count(),
            },
            EngagementScreen::Goals => EngagementView::Goals {
                goals: self.goals.clone(),
            },
            EngagementScreen::Challenges => EngagementView::Challenges {
                challenges: self.challenges.clone(),
                leaderboard: self.leaderboard(),
            },
        }
    }

    // ==================== ACTIONS ====================

    pub fn show(&mut self, screen: EngagementScreen) {
        self.screen.navigate(screen);
    }

    /// Flips the like flag and moves the counter with it, one update.
    pub fn toggle_like(&mut self, id: &str) -> Result<(), HealthError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| HealthError::unknown("community post", id))?;
        if post.liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.liked = !post.liked;
        Ok(())
    }

    /// Joins or leaves a challenge, moving the participant count with it.
    pub fn toggle_joined(&mut self, id: &str) -> Result<(), HealthError> {
        let challenge = self
            .challenges
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| HealthError::unknown("challenge", id))?;
        if challenge.joined {
            challenge.participants = challenge.participants.saturating_sub(1);
        } else {
            challenge.participants += 1;
        }
        challenge.joined = !challenge.joined;
        debug!(id = %id, joined = challenge.joined, "challenge toggled");
        Ok(())
    }

    /// Advances a goal, clamped at its target.
    pub fn advance_goal(&mut self, id: &str, delta: u32) -> Result<(), HealthError> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| HealthError::unknown("goal", id))?;
        goal.progress.advance(delta);
        Ok(())
    }

    pub fn toggle_unlocked(&mut self, id: &str) -> Result<(), HealthError> {
        let achievement = self
            .achievements
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| HealthError::unknown("achievement", id))?;
        achievement.unlocked = !achievement.unlocked;
        Ok(())
    }

    /// Prepends a post by the member to the community feed.
    pub fn publish_post(&mut self, content: &str) -> Result<String, HealthError> {
        let content = require_text("content", content)?;
        let id = next_id("POST", self.posts.iter().map(|p| p.id.as_str()));
        info!(id = %id, "community post published");
        self.posts.insert(
            0,
            CommunityPost {
                id: id.clone(),
                author: self.member.clone(),
                content,
                posted: JUST_NOW.to_string(),
                likes: 0,
                liked: false,
            },
        );
        Ok(id)
    }

    pub fn back_home(&mut self) {
        self.screen.back_home();
    }

    /// Hands control back to the shell.
    pub fn exit(&self, shell: &dyn ShellPort) {
        shell.go_back();
    }
}

// ==================== SAMPLE DATA ====================

pub fn sample_achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            id: "ACH-1".to_string(),
            title: "First Donation".to_string(),
            detail: "Completed your first blood donation".to_string(),
            category: EngagementCategory::Donation,
            points: 100,
            unlocked: true,
        },
        Achievement {
            id: "ACH-2".to_string(),
            title: "Regular Donor".to_string(),
            detail: "Donated blood five times".to_string(),
            category: EngagementCategory::Donation,
            points: 250,
            unlocked: true,
        },
        Achievement {
            id: "ACH-3".to_string(),
            title: "Community Voice".to_string(),
            detail: "Published ten community posts".to_string(),
            category: EngagementCategory::Community,
            points: 150,
            unlocked: true,
        },
        Achievement {
            id: "ACH-4".to_string(),
            title: "Marathon Walker".to_string(),
            detail: "Logged 100km of walking in a month".to_string(),
            category: EngagementCategory::Fitness,
            points: 300,
            unlocked: false,
        },
        Achievement {
            id: "ACH-5".to_string(),
            title: "Health Scholar".to_string(),
            detail: "Finished every article in a learning track".to_string(),
            category: EngagementCategory::Learning,
            points: 200,
            unlocked: false,
        },
    ]
}

pub fn sample_goals() -> Vec<Goal> {
    vec![
        Goal {
            id: "GL-1".to_string(),
            title: "Walk 10,000 steps a day".to_string(),
            category: EngagementCategory::Fitness,
            progress: Progress::clamped(6_500, 10_000),
        },
        Goal {
            id: "GL-2".to_string(),
            title: "Donate four times this year".to_string(),
            category: EngagementCategory::Donation,
            progress: Progress::clamped(3, 4),
        },
        Goal {
            id: "GL-3".to_string(),
            title: "Attend two health workshops".to_string(),
            category: EngagementCategory::Learning,
            progress: Progress::clamped(2, 2),
        },
        Goal {
            id: "GL-4".to_string(),
            title: "Drink eight glasses of water".to_string(),
            category: EngagementCategory::Fitness,
            progress: Progress::clamped(5, 8),
        },
    ]
}

pub fn sample_challenges() -> Vec<Challenge> {
    vec![
        Challenge {
            id: "CH-1".to_string(),
            title: "10K Steps Challenge".to_string(),
            detail: "Hit 10,000 steps every day for two weeks".to_string(),
            days_left: 12,
            participants: 48,
            joined: false,
        },
        Challenge {
            id: "CH-2".to_string(),
            title: "Hydration Week".to_string(),
            detail: "Eight glasses a day, seven days straight".to_string(),
            days_left: 3,
            participants: 132,
            joined: true,
        },
        Challenge {
            id: "CH-3".to_string(),
            title: "Blood Donor Drive".to_string(),
            detail: "Book a donation slot before the end of the month".to_string(),
            days_left: 20,
            participants: 25,
            joined: false,
        },
    ]
}

pub fn sample_posts() -> Vec<CommunityPost> {
    vec![
        CommunityPost {
            id: "POST-1".to_string(),
            author: "Maya Okonkwo".to_string(),
            content: "Just completed my 10th donation! The staff at Central were lovely."
                .to_string(),
            posted: "2 hours ago".to_string(),
            likes: 24,
            liked: false,
        },
        CommunityPost {
            id: "POST-2".to_string(),
            author: "Daniel Kim".to_string(),
            content: "Week two of the hydration challenge and my headaches are gone.".to_string(),
            posted: "5 hours ago".to_string(),
            likes: 11,
            liked: true,
        },
        CommunityPost {
            id: "POST-3".to_string(),
            author: "Lena Farouk".to_string(),
            content: "Any tips for first-time donors? A little nervous about next week."
                .to_string(),
            posted: "Yesterday".to_string(),
            likes: 8,
            liked: false,
        },
    ]
}

pub fn sample_peers() -> Vec<Peer> {
    vec![
        Peer {
            name: "Maya Okonkwo".to_string(),
            points: 2450,
        },
        Peer {
            name: "Daniel Kim".to_string(),
            points: 2180,
        },
        Peer {
            name: "Lena Farouk".to_string(),
            points: 1650,
        },
        Peer {
            name: "Samir Patel".to_string(),
            points: 1420,
        },
    ]
}

// ==================== TESTS ====================
