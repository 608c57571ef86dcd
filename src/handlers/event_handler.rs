use poise::serenity_prelude as serenity;

use crate::commands::games::{
    rollmap, rollteam, REROLL_MARKER, TEAM_ONE_MARKER, TEAM_TWO_MARKER,
};
use crate::data::session::{RollMessage, Winner};

pub async fn handle_event<'a>(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'a, crate::Data, crate::Error>,
    data: &crate::Data,
) -> Result<(), crate::Error> {
    match event {
        serenity::FullEvent::Ready { data_about_bot, .. } => {
            log::info!(
                "logged in as {} after {:.3}s",
                data_about_bot.user.name,
                data.started_at.elapsed().as_secs_f64()
            );
            log::info!(
                "{} command(s) registered in {:.3}s",
                data.command_statuses.len(),
                data.commands_check_duration.as_secs_f64()
            );
            for status in &data.command_statuses {
                log::debug!("command {}: {}", status.name, status.status);
            }
        }
        serenity::FullEvent::ReactionAdd { add_reaction } => {
            handle_reaction(ctx, add_reaction, data).await?;
        }
        _ => {}
    }
    Ok(())
}

/// Routes a reaction to a re-roll or a winner confirmation. Intent comes
/// from the tracked message IDs of the latest roll messages, so reactions on
/// anything else, including superseded rolls, fall through.
async fn handle_reaction(
    ctx: &serenity::Context,
    reaction: &serenity::Reaction,
    data: &crate::Data,
) -> Result<(), crate::Error> {
    // The bot seeds its own roll messages with marker reactions.
    if reaction.user_id == Some(ctx.cache.current_user().id) {
        return Ok(());
    }

    let target = {
        let session = data.session.read().await;
        session.roll_message(reaction.message_id)
    };
    let Some(target) = target else {
        return Ok(());
    };
    let channel = reaction.channel_id;

    match target {
        RollMessage::Map if reaction.emoji.unicode_eq(REROLL_MARKER) => {
            let remembered = data.session.read().await.last_game;
            match remembered {
                Some(game) => rollmap::send_map_roll(ctx, channel, data, game).await?,
                None => {
                    channel.say(&ctx.http, "Please specify a game.").await?;
                }
            }
        }
        RollMessage::Teams if reaction.emoji.unicode_eq(REROLL_MARKER) => {
            rollteam::send_team_roll(ctx, channel, data).await?;
        }
        RollMessage::Teams if reaction.emoji.unicode_eq(TEAM_ONE_MARKER) => {
            rollteam::confirm_winner(ctx, channel, data, Winner::TeamOne).await?;
        }
        RollMessage::Teams if reaction.emoji.unicode_eq(TEAM_TWO_MARKER) => {
            rollteam::confirm_winner(ctx, channel, data, Winner::TeamTwo).await?;
        }
        _ => {}
    }
    Ok(())
}
