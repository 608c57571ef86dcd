pub mod maps;
pub mod session;
pub mod stats;

#[cfg(test)]
mod tests {
    use super::session::{Session, Winner};
    use super::stats::StatsStore;

    // End-to-end roll flow without the Discord layer: add ten players,
    // roll teams, confirm team one.
    #[test]
    fn roll_and_confirm_updates_stats_once() {
        let mut session = Session::default();
        let mut stats = StatsStore::default();

        let added = session
            .set_roster("Alice, Bob, Carol, Dave, Eve, Frank, Grace, Heidi, Ivan, Judy")
            .to_vec();
        assert_eq!(added.len(), 10);
        stats.ensure_players(added.iter().map(String::as_str));

        session.roll_teams().unwrap();
        let result = session.confirm_winner(Winner::TeamOne).unwrap();
        assert_eq!(result.winners.len(), 5);
        assert_eq!(result.losers.len(), 5);
        stats.record_outcome(&result.winners, &result.losers);

        let winners = stats
            .standings()
            .iter()
            .filter(|r| r.wins == 1 && r.losses == 0)
            .count();
        let losers = stats
            .standings()
            .iter()
            .filter(|r| r.wins == 0 && r.losses == 1)
            .count();
        assert_eq!((winners, losers), (5, 5));

        // A second confirmation is blocked and the totals stay put.
        assert!(session.confirm_winner(Winner::TeamOne).is_err());
        let total: u32 = stats.standings().iter().map(|r| r.wins + r.losses).sum();
        assert_eq!(total, 10);
    }
}
