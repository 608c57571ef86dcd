pub mod leaderboard;
pub mod rollmap;
pub mod rollteam;
pub mod roster;

/// Marker reactions the bot attaches to its roll messages. A user re-adding
/// one triggers the matching re-roll or winner confirmation.
pub const REROLL_MARKER: &str = "\u{1F3B2}";
pub const TEAM_ONE_MARKER: &str = "1\u{FE0F}\u{20E3}";
pub const TEAM_TWO_MARKER: &str = "2\u{FE0F}\u{20E3}";
