//! Identifiers and timestamp markers for records created at view time.

/// Timestamp label carried by records prepended during the current session.
pub const JUST_NOW: &str = "Just now";

/// Next id in a `PREFIX-N` sequence: one past the highest numeric suffix
/// already present, so prepends never collide with the seeded ids.
pub fn next_id<'a>(prefix: &str, existing: impl Iterator<Item = &'a str>) -> String {
    let max = existing
        .filter_map(|id| id.rsplit('-').next())
        .filter_map(|suffix| suffix.parse::<u32>().ok())
        .max()
        .unwrap_or(0);
    format!("{}-{}", prefix, max + 1)
}
