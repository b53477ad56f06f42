//! Lumira Health Test Suite
//!
//! Cross-module scenario tests over the real feature crates:
//! - Filter subsets: exactness and order preservation, on random rosters too
//! - Donor eligibility and the donation confirmation flow
//! - Engagement scoring, goal clamping, leaderboard placement
//! - Notification badge arithmetic and cross-module routing
//! - Screen machines and the selection lifecycle every module shares
//! - Review queues and the prepend contract of every message board
//! - Role-conditional projections and their serialized shapes

pub mod donation_rules;
pub mod engagement_rules;
pub mod filtering;
pub mod notification_rules;
pub mod review_flows;
pub mod role_views;
pub mod screen_flows;
