use poise::serenity_prelude as serenity;

use crate::data::maps::{Game, GAME_KEYS};

#[poise::command(slash_command, prefix_command)]
pub async fn rollmap(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Game to roll for (ow, val, r6). Defaults to the last rolled game"] game: Option<
        String,
    >,
) -> Result<(), crate::Error> {
    let picked = match game {
        Some(key) => match Game::parse(&key) {
            Some(game) => game,
            None => {
                ctx.say(format!("Invalid game. Allowed: {}", GAME_KEYS.join(", ")))
                    .await?;
                return Ok(());
            }
        },
        None => match ctx.data().session.read().await.last_game {
            Some(game) => game,
            None => {
                ctx.say("Please specify a game.").await?;
                return Ok(());
            }
        },
    };
    send_map_roll(ctx.serenity_context(), ctx.channel_id(), ctx.data(), picked).await
}

/// Picks a map for `game`, announces it, and tracks the sent message so a
/// marker reaction can re-roll it. Also remembers `game` for argument-less
/// rolls.
pub async fn send_map_roll(
    ctx: &serenity::Context,
    channel: serenity::ChannelId,
    data: &crate::Data,
    game: Game,
) -> Result<(), crate::Error> {
    let map = game.pick_map();
    log::debug!("rolled {} for {}", map, game.key());

    let message = channel.say(&ctx.http, format!("Map: {}", map)).await?;
    message
        .react(
            &ctx.http,
            serenity::ReactionType::Unicode(super::REROLL_MARKER.to_string()),
        )
        .await?;

    let mut session = data.session.write().await;
    session.last_game = Some(game);
    session.track_map_message(message.id);
    Ok(())
}
