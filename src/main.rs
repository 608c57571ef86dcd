use poise::serenity_prelude as serenity;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use data::session::Session;
use data::stats::StatsStore;

pub struct CommandStatus {
    pub name: String,
    pub status: String,
}

pub struct Data {
    pub started_at: Instant,
    pub commands_check_duration: Duration,
    pub command_statuses: Vec<CommandStatus>,
    pub session: Arc<RwLock<Session>>,
    pub stats: Arc<RwLock<StatsStore>>,
    pub stats_path: PathBuf,
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;

mod handlers;
pub mod commands;
pub mod data;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    env_logger::init();
    let program_started = Instant::now();

    let token = std::env::var("TOKEN").expect("missing TOKEN");
    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MESSAGE_REACTIONS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::commands(),
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some("!".into()),
                ..Default::default()
            },
            on_error: |error| Box::pin(handlers::on_error(error)),
            event_handler: |ctx, event, framework, data| {
                Box::pin(async move {
                    handlers::event_handler::handle_event(ctx, event, framework, data).await
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, _ready, framework| {
            let program_started = program_started;
            Box::pin(async move {
                let mut statuses: Vec<CommandStatus> = framework
                    .options()
                    .commands
                    .iter()
                    .map(|c| CommandStatus {
                        name: c.name.to_string(),
                        status: "Loaded".to_string(),
                    })
                    .collect();

                let check_started = Instant::now();
                let reg_result =
                    poise::builtins::register_globally(ctx, &framework.options().commands).await;
                let commands_check_duration = check_started.elapsed();

                match reg_result {
                    Ok(()) => {
                        for s in &mut statuses {
                            s.status = "Registered".to_string();
                        }
                    }
                    Err(e) => {
                        let msg = format!("Reg err: {}", e);
                        for s in &mut statuses {
                            s.status = msg.clone();
                        }
                    }
                }

                let stats_path = std::env::var("STATS_PATH")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| PathBuf::from("data/player_stats.json"));
                // A corrupt stats file aborts startup; a missing one starts empty.
                let stats = StatsStore::load_from_disk(&stats_path).await?;

                Ok(Data {
                    started_at: program_started,
                    commands_check_duration,
                    command_statuses: statuses,
                    session: Arc::new(RwLock::new(Session::default())),
                    stats: Arc::new(RwLock::new(stats)),
                    stats_path,
                })
            })
        })
        .build();

    let client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await;
    client.unwrap().start().await.unwrap();
}
