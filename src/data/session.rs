use poise::serenity_prelude as serenity;
use rand::seq::SliceRandom;

use super::maps::Game;

pub const TEAM_SIZE: usize = 5;

/// Teams rolled from the roster. Both teams hold exactly [`TEAM_SIZE`]
/// players; surplus roster entries sit on the bench for that game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RolledTeams {
    pub team_one: Vec<String>,
    pub team_two: Vec<String>,
    pub bench: Vec<String>,
    pub confirmed: bool,
}

/// Which of the bot's roll messages a reaction landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RollMessage {
    Map,
    Teams,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    TeamOne,
    TeamTwo,
}

impl Winner {
    pub fn label(&self) -> &'static str {
        match self {
            Winner::TeamOne => "Team 1",
            Winner::TeamTwo => "Team 2",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub winners: Vec<String>,
    pub losers: Vec<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RollError {
    #[error("Please use the `!add` command to add players before rolling the teams.")]
    NoPlayers,
    #[error("There must be at least 10 players to roll teams; the roster has {0}.")]
    NotEnough(usize),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfirmError {
    #[error("Roll teams before confirming a winner.")]
    NoTeams,
    #[error("Winner already recorded for these teams.")]
    AlreadyConfirmed,
    #[error("Teams are malformed; roll again before confirming.")]
    Malformed,
}

/// Volatile per-process session state. A single instance lives in
/// [`crate::Data`] behind an `RwLock`; every mutation happens inside one
/// dispatched command or reaction handler.
#[derive(Debug, Default)]
pub struct Session {
    roster: Vec<String>,
    pub last_game: Option<Game>,
    pub teams: Option<RolledTeams>,
    last_map_message: Option<serenity::MessageId>,
    last_team_message: Option<serenity::MessageId>,
}

impl Session {
    /// Replaces the roster with the comma-separated names in `raw`, trimming
    /// whitespace and dropping empty entries. Duplicates are kept.
    pub fn set_roster(&mut self, raw: &str) -> &[String] {
        self.roster = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        &self.roster
    }

    pub fn clear_roster(&mut self) {
        self.roster.clear();
    }

    pub fn roster(&self) -> &[String] {
        &self.roster
    }

    pub fn track_map_message(&mut self, id: serenity::MessageId) {
        self.last_map_message = Some(id);
    }

    pub fn track_team_message(&mut self, id: serenity::MessageId) {
        self.last_team_message = Some(id);
    }

    /// Resolves a reacted message against the latest roll messages.
    /// Superseded rolls no longer resolve.
    pub fn roll_message(&self, id: serenity::MessageId) -> Option<RollMessage> {
        if self.last_map_message == Some(id) {
            Some(RollMessage::Map)
        } else if self.last_team_message == Some(id) {
            Some(RollMessage::Teams)
        } else {
            None
        }
    }

    /// Rolls two fresh teams of [`TEAM_SIZE`] from the roster; everyone left
    /// over goes on the bench. Replaces any previous roll and resets the
    /// confirmation flag.
    pub fn roll_teams(&mut self) -> Result<&RolledTeams, RollError> {
        if self.roster.is_empty() {
            return Err(RollError::NoPlayers);
        }
        if self.roster.len() < TEAM_SIZE * 2 {
            return Err(RollError::NotEnough(self.roster.len()));
        }

        let mut pool = self.roster.clone();
        pool.shuffle(&mut rand::thread_rng());
        let bench = pool.split_off(TEAM_SIZE * 2);
        let team_two = pool.split_off(TEAM_SIZE);

        Ok(self.teams.insert(RolledTeams {
            team_one: pool,
            team_two,
            bench,
            confirmed: false,
        }))
    }

    /// Records which team won the current roll. Valid once per roll; the
    /// stats mutation itself is the caller's job.
    pub fn confirm_winner(&mut self, winner: Winner) -> Result<MatchResult, ConfirmError> {
        let teams = self.teams.as_mut().ok_or(ConfirmError::NoTeams)?;
        if teams.confirmed {
            return Err(ConfirmError::AlreadyConfirmed);
        }
        if teams.team_one.len() != TEAM_SIZE || teams.team_two.len() != TEAM_SIZE {
            return Err(ConfirmError::Malformed);
        }
        teams.confirmed = true;

        let (winners, losers) = match winner {
            Winner::TeamOne => (teams.team_one.clone(), teams.team_two.clone()),
            Winner::TeamTwo => (teams.team_two.clone(), teams.team_one.clone()),
        };
        Ok(MatchResult { winners, losers })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn roster_of(n: usize) -> String {
        (0..n).map(|i| format!("p{}", i)).collect::<Vec<_>>().join(", ")
    }

    #[test]
    fn set_roster_trims_and_drops_empties() {
        let mut session = Session::default();
        let roster = session.set_roster(" Alice , Bob ,, Carol ,   ");
        assert_eq!(roster, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn set_roster_replaces_not_merges() {
        let mut session = Session::default();
        session.set_roster("Alice, Bob");
        session.set_roster("Carol");
        assert_eq!(session.roster(), ["Carol"]);
    }

    #[test]
    fn clear_roster_empties_any_state() {
        let mut session = Session::default();
        session.set_roster("Alice, Bob");
        session.clear_roster();
        assert!(session.roster().is_empty());
    }

    #[test]
    fn roll_needs_players() {
        let mut session = Session::default();
        assert_eq!(session.roll_teams().unwrap_err(), RollError::NoPlayers);
        assert!(session.teams.is_none());
    }

    #[test]
    fn roll_needs_ten_players() {
        let mut session = Session::default();
        session.set_roster(&roster_of(9));
        assert_eq!(session.roll_teams().unwrap_err(), RollError::NotEnough(9));
        assert!(session.teams.is_none());
    }

    #[test]
    fn roll_partitions_ten_players() {
        let mut session = Session::default();
        session.set_roster(&roster_of(10));
        let teams = session.roll_teams().unwrap().clone();

        assert_eq!(teams.team_one.len(), 5);
        assert_eq!(teams.team_two.len(), 5);
        assert!(teams.bench.is_empty());
        assert!(!teams.confirmed);

        let union: HashSet<_> = teams.team_one.iter().chain(&teams.team_two).collect();
        assert_eq!(union.len(), 10);
        for name in session.roster() {
            assert!(union.contains(name));
        }
    }

    #[test]
    fn roll_benches_surplus_players() {
        let mut session = Session::default();
        session.set_roster(&roster_of(13));
        let teams = session.roll_teams().unwrap();
        assert_eq!(teams.team_one.len(), 5);
        assert_eq!(teams.team_two.len(), 5);
        assert_eq!(teams.bench.len(), 3);
    }

    #[test]
    fn confirm_is_one_shot_per_roll() {
        let mut session = Session::default();
        session.set_roster(&roster_of(10));
        session.roll_teams().unwrap();

        let team_one = session.teams.as_ref().unwrap().team_one.clone();
        let result = session.confirm_winner(Winner::TeamOne).unwrap();
        assert_eq!(result.winners, team_one);
        assert_eq!(
            session.confirm_winner(Winner::TeamTwo).unwrap_err(),
            ConfirmError::AlreadyConfirmed
        );
    }

    #[test]
    fn reroll_resets_confirmation() {
        let mut session = Session::default();
        session.set_roster(&roster_of(10));
        session.roll_teams().unwrap();
        session.confirm_winner(Winner::TeamTwo).unwrap();

        session.roll_teams().unwrap();
        assert!(session.confirm_winner(Winner::TeamOne).is_ok());
    }

    #[test]
    fn confirm_without_roll_is_rejected() {
        let mut session = Session::default();
        assert_eq!(
            session.confirm_winner(Winner::TeamOne).unwrap_err(),
            ConfirmError::NoTeams
        );
    }

    #[test]
    fn reactions_resolve_only_latest_roll_messages() {
        let mut session = Session::default();
        let first = serenity::MessageId::new(100);
        let second = serenity::MessageId::new(200);

        session.track_team_message(first);
        assert_eq!(session.roll_message(first), Some(RollMessage::Teams));

        session.track_team_message(second);
        assert_eq!(session.roll_message(first), None);
        assert_eq!(session.roll_message(second), Some(RollMessage::Teams));

        session.track_map_message(serenity::MessageId::new(300));
        assert_eq!(
            session.roll_message(serenity::MessageId::new(300)),
            Some(RollMessage::Map)
        );
    }
}
