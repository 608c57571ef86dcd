/// Sent by `menu` and whenever an unknown command comes in.
pub const MENU_TEXT: &str = "\
Available Commands:
!hi - Check the bot is alive.
!list - List all players.
!add <names> - Replace the roster with a comma-separated list of players.
!rollmap [game] - Roll a map for the specified game (ow, val, r6).
!rollteam - Roll two teams of five from the roster.
!leaderboard [page] - Show the win/loss standings.
!clearplayer - Clear the player list.
!exit - Stop the bot.";

#[poise::command(slash_command, prefix_command)]
pub async fn hi(ctx: poise::Context<'_, crate::Data, crate::Error>) -> Result<(), crate::Error> {
    ctx.say("Testing123").await?;
    Ok(())
}

#[poise::command(slash_command, prefix_command)]
pub async fn menu(ctx: poise::Context<'_, crate::Data, crate::Error>) -> Result<(), crate::Error> {
    ctx.say(MENU_TEXT).await?;
    Ok(())
}

#[poise::command(slash_command, prefix_command)]
pub async fn exit(ctx: poise::Context<'_, crate::Data, crate::Error>) -> Result<(), crate::Error> {
    ctx.say("Shutting down.").await?;
    log::info!("exit requested by {}", ctx.author().name);
    ctx.serenity_context().shard.shutdown_clean();
    Ok(())
}
