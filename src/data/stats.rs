use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Leaderboard page length.
pub const PAGE_SIZE: usize = 10;

/// Cross-session win/loss record for one player, keyed by exact name.
/// `wins + losses` only ever grows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
}

impl PlayerRecord {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            wins: 0,
            losses: 0,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses
    }

    pub fn win_rate(&self) -> f64 {
        if self.games() == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.games())
        }
    }
}

/// Persisted player records. On disk this is a bare JSON array of
/// `{name, wins, losses}` objects, rewritten whole on every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsStore {
    players: Vec<PlayerRecord>,
}

impl StatsStore {
    /// Appends a zeroed record for every name not seen before. Existing
    /// records are left untouched.
    pub fn ensure_players<'a>(&mut self, names: impl IntoIterator<Item = &'a str>) {
        for name in names {
            if !self.players.iter().any(|record| record.name == name) {
                self.players.push(PlayerRecord::new(name));
            }
        }
    }

    /// Adds a win or a loss by exact name match. Names without a record are
    /// skipped silently.
    pub fn record_outcome(&mut self, winners: &[String], losers: &[String]) {
        for record in &mut self.players {
            if winners.contains(&record.name) {
                record.wins += 1;
            }
            if losers.contains(&record.name) {
                record.losses += 1;
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PlayerRecord> {
        self.players.iter().find(|record| record.name == name)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Records ordered for the leaderboard: wins descending, losses
    /// ascending, then name.
    pub fn standings(&self) -> Vec<&PlayerRecord> {
        let mut records: Vec<&PlayerRecord> = self.players.iter().collect();
        records.sort_by(|a, b| {
            b.wins
                .cmp(&a.wins)
                .then(a.losses.cmp(&b.losses))
                .then(a.name.cmp(&b.name))
        });
        records
    }

    /// Loads the full record array. A missing file yields an empty store; a
    /// present but unparseable one is an error so startup can abort.
    pub async fn load_from_disk(path: &Path) -> Result<StatsStore, crate::Error> {
        if !path.exists() {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            return Ok(StatsStore::default());
        }
        let data = tokio::fs::read(path).await?;
        if data.is_empty() {
            return Ok(StatsStore::default());
        }
        let players: Vec<PlayerRecord> = serde_json::from_slice(&data)?;
        Ok(StatsStore { players })
    }

    pub async fn save_to_disk(&self, path: &Path) -> Result<(), crate::Error> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.ok();
        }
        let json = serde_json::to_vec_pretty(&self.players)?;
        let tmp_path: PathBuf = path.with_extension("json.tmp");
        tokio::fs::write(&tmp_path, &json).await?;
        match tokio::fs::rename(&tmp_path, path).await {
            Ok(()) => {}
            Err(_) => {
                tokio::fs::write(path, &json).await?;
                let _ = tokio::fs::remove_file(&tmp_path).await;
            }
        }
        Ok(())
    }
}
