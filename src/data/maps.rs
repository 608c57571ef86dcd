use rand::Rng;

/// Games the bot knows how to roll maps for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Game {
    Overwatch,
    Valorant,
    Siege,
}

/// Keys accepted by `rollmap`, in menu order.
pub const GAME_KEYS: &[&str] = &["ow", "val", "r6"];

const OVERWATCH_MAPS: &[&str] = &[
    "Circuit Royal",
    "Dorado",
    "Route 66",
    "Junkertown",
    "Rialto",
    "Havana",
    "Watchpoint: Gibraltar",
    "Shambali Monastery",
    "Blizzard World",
    "Numbani",
    "Hollywood",
    "Eichenwalde",
    "King's Row",
    "Midtown",
    "Paraiso",
    "Busan",
    "Nepal",
    "Ilios",
    "Oasis",
    "Lijiang Tower",
    "Antarctic Peninsula",
    "Colosseo",
    "Esperanca",
    "New Queen Street",
];

const VALORANT_MAPS: &[&str] = &[
    "Bind", "Haven", "Split", "Ascent", "Icebox", "Breeze", "Fracture", "Pearl", "Lotus",
];

const SIEGE_MAPS: &[&str] = &[
    "Nighthaven Labs",
    "Stadium",
    "Close Quarter",
    "Emerald Plains",
    "Bank",
    "Border",
    "Chalet",
    "Clubhouse",
    "Coastline",
    "Consulate",
    "Favela",
    "Fortress",
    "Hereford Base",
    "House",
    "Kafe Dostoyevsky",
    "Kanal",
    "Oregon",
    "Outback",
    "Presidential Plane",
    "Skyscraper",
    "Theme Park",
    "Tower",
    "Villa",
    "Yacht",
];

impl Game {
    pub fn parse(input: &str) -> Option<Game> {
        match input.trim().to_lowercase().as_str() {
            "ow" => Some(Game::Overwatch),
            "val" => Some(Game::Valorant),
            "r6" => Some(Game::Siege),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Game::Overwatch => "ow",
            Game::Valorant => "val",
            Game::Siege => "r6",
        }
    }

    pub fn maps(&self) -> &'static [&'static str] {
        match self {
            Game::Overwatch => OVERWATCH_MAPS,
            Game::Valorant => VALORANT_MAPS,
            Game::Siege => SIEGE_MAPS,
        }
    }

    /// Uniform pick from this game's map pool.
    pub fn pick_map(&self) -> &'static str {
        let maps = self.maps();
        maps[rand::thread_rng().gen_range(0..maps.len())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_keys() {
        assert_eq!(Game::parse("ow"), Some(Game::Overwatch));
        assert_eq!(Game::parse("val"), Some(Game::Valorant));
        assert_eq!(Game::parse("r6"), Some(Game::Siege));
        assert_eq!(Game::parse(" VAL "), Some(Game::Valorant));
        assert_eq!(Game::parse("cs"), None);
        assert_eq!(Game::parse(""), None);
    }

    #[test]
    fn catalogs_match_expected_sizes() {
        assert_eq!(Game::Overwatch.maps().len(), 24);
        assert_eq!(Game::Valorant.maps().len(), 9);
        assert_eq!(Game::Siege.maps().len(), 24);
    }

    #[test]
    fn pick_stays_within_catalog() {
        for _ in 0..200 {
            let map = Game::Valorant.pick_map();
            assert!(Game::Valorant.maps().contains(&map));
        }
    }

    #[test]
    fn keys_round_trip() {
        for key in GAME_KEYS {
            assert_eq!(Game::parse(key).map(|g| g.key()), Some(*key));
        }
    }
}
