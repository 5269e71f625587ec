use anyhow::Result;
use dotenvy::dotenv;
use log::{debug, error, info, warn};
use serenity::async_trait;
use serenity::http::Http;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::Arc;
use std::time::Duration;

use study_planner::commands::{CommandContext, CommandRouter, InboundMessage};
use study_planner::core::{chunk_for_message, Config};
use study_planner::features::{FocusTimers, RateLimiter, ReminderScheduler};
use study_planner::outbound::{DiscordOutbound, Outbound};
use study_planner::store::UserStore;

struct Handler {
    router: Arc<CommandRouter>,
    start_time: std::time::Instant,
}

impl Handler {
    fn new(router: CommandRouter) -> Self {
        Handler {
            router: Arc::new(router),
            start_time: std::time::Instant::now(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let inbound = InboundMessage {
            user_id: msg.author.id.0,
            channel_id: msg.channel_id.0,
            content: msg.content.clone(),
        };

        let Some(reply) = self.router.dispatch(&inbound).await else {
            return;
        };

        for chunk in chunk_for_message(&reply) {
            if let Err(e) = msg.channel_id.say(&ctx.http, chunk).await {
                error!("Failed to send reply in channel {}: {e}", msg.channel_id);
                break;
            }
        }
    }

    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!("🎉 {} is connected and ready!", ready.user.name);
        info!("📡 Connected to {} guilds", ready.guilds.len());
        info!("🤖 Bot ID: {}", ready.user.id);
        debug!(
            "Ready after {:.1}s",
            self.start_time.elapsed().as_secs_f32()
        );

        if let Some(shard) = ready.shard {
            info!("⚡ Shard: {}/{}", shard[0] + 1, shard[1]);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let config = Config::from_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Starting study planner bot...");

    let store = UserStore::json_file(&config.data_file);
    info!("📁 User data: {}", store.describe());
    if let Err(e) = store.load().await {
        // Keep running; commands reply with a store error until the file is fixed
        warn!("⚠️ Could not read user data at startup: {e}");
    }

    // Focus timers and reminders post outside a command reply, so they get
    // their own REST client rather than borrowing the gateway's
    let outbound: Arc<dyn Outbound> = Arc::new(DiscordOutbound::new(Arc::new(Http::new(
        &config.discord_token,
    ))));

    let ctx = CommandContext::new(
        store.clone(),
        FocusTimers::new(Arc::clone(&outbound)),
        config.next_class_policy,
        config.command_prefix.clone(),
    );
    let rate_limiter = RateLimiter::new(config.rate_limit_per_minute, Duration::from_secs(60));
    let handler = Handler::new(CommandRouter::new(ctx, rate_limiter));

    info!(
        "⚙️ Prefix '{}', next class policy '{}', {} commands/minute per user",
        config.command_prefix, config.next_class_policy, config.rate_limit_per_minute
    );

    let intents = GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
        .map_err(|e| {
            error!("Failed to create Discord client: {e}");
            anyhow::anyhow!("Client creation failed: {}", e)
        })?;

    if config.reminders_enabled {
        let scheduler = ReminderScheduler::new(store, outbound);
        tokio::spawn(async move {
            scheduler.run().await;
        });
        info!("⏰ Class reminders enabled");
    } else {
        info!("⏰ Class reminders disabled (REMINDERS_ENABLED=false)");
    }

    info!("Establishing WebSocket connection to Discord gateway...");
    info!("Gateway intents: {intents:?}");

    if let Err(why) = client.start().await {
        error!("Gateway connection failed: {why:?}");
        return Err(anyhow::anyhow!(
            "Failed to establish gateway connection: {}",
            why
        ));
    }

    Ok(())
}
