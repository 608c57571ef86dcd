use poise::serenity_prelude as serenity;

use crate::data::session::Winner;

#[poise::command(slash_command, prefix_command)]
pub async fn rollteam(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
) -> Result<(), crate::Error> {
    send_team_roll(ctx.serenity_context(), ctx.channel_id(), ctx.data()).await
}

/// Rolls fresh teams from the roster, announces them with re-roll and winner
/// markers, and tracks the sent message for reaction routing.
pub async fn send_team_roll(
    ctx: &serenity::Context,
    channel: serenity::ChannelId,
    data: &crate::Data,
) -> Result<(), crate::Error> {
    let rolled = {
        let mut session = data.session.write().await;
        session.roll_teams().map(|teams| teams.clone())
    };
    let rolled = match rolled {
        Ok(teams) => teams,
        Err(reason) => {
            channel.say(&ctx.http, reason.to_string()).await?;
            return Ok(());
        }
    };

    let mut text = format!(
        "Team 1: {}\nTeam 2: {}",
        rolled.team_one.join(", "),
        rolled.team_two.join(", ")
    );
    if !rolled.bench.is_empty() {
        text.push_str(&format!("\nBench: {}", rolled.bench.join(", ")));
    }

    let message = channel.say(&ctx.http, text).await?;
    for marker in [
        super::REROLL_MARKER,
        super::TEAM_ONE_MARKER,
        super::TEAM_TWO_MARKER,
    ] {
        message
            .react(&ctx.http, serenity::ReactionType::Unicode(marker.to_string()))
            .await?;
    }

    data.session.write().await.track_team_message(message.id);
    Ok(())
}

/// Records a winner for the current roll and persists the updated stats.
/// Guarded by the per-roll confirmation flag inside the session.
pub async fn confirm_winner(
    ctx: &serenity::Context,
    channel: serenity::ChannelId,
    data: &crate::Data,
    winner: Winner,
) -> Result<(), crate::Error> {
    let result = {
        let mut session = data.session.write().await;
        session.confirm_winner(winner)
    };
    let result = match result {
        Ok(result) => result,
        Err(reason) => {
            channel.say(&ctx.http, reason.to_string()).await?;
            return Ok(());
        }
    };

    {
        let mut stats = data.stats.write().await;
        stats.record_outcome(&result.winners, &result.losers);
        stats.save_to_disk(&data.stats_path).await?;
    }
    log::info!("{} confirmed as winners", winner.label());

    channel
        .say(
            &ctx.http,
            format!(
                "{} wins!\nWinners: {}\nLosers: {}",
                winner.label(),
                result.winners.join(", "),
                result.losers.join(", ")
            ),
        )
        .await?;
    Ok(())
}
