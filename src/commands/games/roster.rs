#[poise::command(slash_command, prefix_command)]
pub async fn add(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Comma-separated player names"]
    #[rest]
    players: String,
) -> Result<(), crate::Error> {
    let added = {
        let mut session = ctx.data().session.write().await;
        session.set_roster(&players).to_vec()
    };
    if added.is_empty() {
        ctx.say("No player names given. Usage: `!add name1, name2, ...`")
            .await?;
        return Ok(());
    }

    // Every rostered player gets a zeroed stats record on first sight.
    {
        let mut stats = ctx.data().stats.write().await;
        stats.ensure_players(added.iter().map(String::as_str));
        stats.save_to_disk(&ctx.data().stats_path).await?;
    }

    ctx.say(format!("Players added: {}", added.join(", ")))
        .await?;
    Ok(())
}

#[poise::command(slash_command, prefix_command)]
pub async fn list(ctx: poise::Context<'_, crate::Data, crate::Error>) -> Result<(), crate::Error> {
    let roster = ctx.data().session.read().await.roster().to_vec();
    if roster.is_empty() {
        ctx.say("No players added.").await?;
    } else {
        ctx.say(roster.join(", ")).await?;
    }
    Ok(())
}

#[poise::command(slash_command, prefix_command)]
pub async fn clearplayer(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
) -> Result<(), crate::Error> {
    ctx.data().session.write().await.clear_roster();
    ctx.say("Player list cleared.").await?;
    Ok(())
}
