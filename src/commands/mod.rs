pub mod games;
pub mod general;

pub fn commands() -> Vec<poise::Command<crate::Data, crate::Error>> {
    vec![
        general::hi(),
        general::menu(),
        general::exit(),
        games::roster::add(),
        games::roster::list(),
        games::roster::clearplayer(),
        games::rollmap::rollmap(),
        games::rollteam::rollteam(),
        games::leaderboard::leaderboard(),
    ]
}
