use std::env;
use std::sync::Arc;

use anyhow::Result;
use log::{info, warn};
use sqlx::postgres::PgPoolOptions;
use teloxide::prelude::*;

use menubot::bot;
use menubot::config::BotConfig;
use menubot::db;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    menubot::init_logging();

    info!("Starting Menubot");

    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Get bot token from environment
    let bot_token = env::var("TELEGRAM_BOT_TOKEN").expect("TELEGRAM_BOT_TOKEN must be set");

    // Get database URL from environment
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let config = Arc::new(BotConfig::from_env()?);

    // Lazy pool: a dead database degrades features per query instead of
    // preventing startup
    let pool = Arc::new(
        PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(&database_url)?,
    );

    // The schema may already be owned by the administrator; a failure here
    // is tolerated and logged
    if let Err(e) = db::init_schema(&pool).await {
        warn!("Schema initialization skipped: {e}");
    }

    // Initialize the bot
    let bot = Bot::new(bot_token);

    info!("Bot initialized, starting dispatcher");

    // Set up the dispatcher with shared pool and config
    let handler = dptree::entry().branch(Update::filter_message().endpoint({
        let pool = Arc::clone(&pool);
        let config = Arc::clone(&config);
        move |bot: Bot, msg: Message| {
            let pool = Arc::clone(&pool);
            let config = Arc::clone(&config);
            async move { bot::message_handler(bot, msg, pool, config).await }
        }
    }));

    Dispatcher::builder(bot, handler)
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
