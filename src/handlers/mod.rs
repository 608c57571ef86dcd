pub mod event_handler;

use crate::commands::general::MENU_TEXT;

pub async fn on_error(error: poise::FrameworkError<'_, crate::Data, crate::Error>) {
    match error {
        // Unknown commands get the menu instead of a generic error.
        poise::FrameworkError::UnknownCommand { ctx, msg, .. } => {
            if let Err(e) = msg.channel_id.say(&ctx.http, MENU_TEXT).await {
                log::error!("failed to send menu for unknown command: {}", e);
            }
        }
        poise::FrameworkError::ArgumentParse { ctx, error, .. } => {
            if let Err(e) = ctx.say(format!("Couldn't read that: {}", error)).await {
                log::error!("failed to send argument error: {}", e);
            }
        }
        error => {
            if let Err(e) = poise::builtins::on_error(error).await {
                log::error!("error while handling error: {}", e);
            }
        }
    }
}
