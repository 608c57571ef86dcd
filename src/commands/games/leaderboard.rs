use poise::serenity_prelude as serenity;

use crate::data::stats::PAGE_SIZE;

#[poise::command(slash_command, prefix_command)]
pub async fn leaderboard(
    ctx: poise::Context<'_, crate::Data, crate::Error>,
    #[description = "Page of the standings (default 1)"] page: Option<usize>,
) -> Result<(), crate::Error> {
    let page = page.unwrap_or(1);
    if page == 0 {
        ctx.say("Pages start at 1.").await?;
        return Ok(());
    }

    let standings: Vec<_> = {
        let stats = ctx.data().stats.read().await;
        stats.standings().into_iter().cloned().collect()
    };
    if standings.is_empty() {
        ctx.say("No players on the leaderboard yet. Use `!add` to register some.")
            .await?;
        return Ok(());
    }

    let pages = standings.len().div_ceil(PAGE_SIZE);
    if page > pages {
        ctx.say(format!(
            "No such page; the leaderboard has {} page(s).",
            pages
        ))
        .await?;
        return Ok(());
    }

    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(standings.len());
    let mut desc = String::new();
    for (offset, record) in standings[start..end].iter().enumerate() {
        desc.push_str(&format!(
            "**#{}** {}: {}W/{}L ({:.0}%)\n",
            start + offset + 1,
            record.name,
            record.wins,
            record.losses,
            record.win_rate() * 100.0
        ));
    }

    let embed = serenity::CreateEmbed::default()
        .title(format!("Leaderboard (page {}/{})", page, pages))
        .description(desc)
        .color(0x3B82F6);
    ctx.send(poise::CreateReply::default().embed(embed)).await?;
    Ok(())
}
