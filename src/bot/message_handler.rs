//! Message Handler module for processing incoming Telegram messages
//!
//! Per-message pipeline: derive the sender's identity, append the raw text
//! to the audit log, build the effective action table for the sender's
//! class, resolve the message to exactly one action, and dispatch. Store
//! failures degrade to the built-in table and are reported on the operator
//! side only; the sender always gets a reply.

use anyhow::Result;
use sqlx::postgres::PgPool;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::{InputFile, KeyboardMarkup, ParseMode};
use tracing::{debug, warn};

use crate::config::BotConfig;
use crate::content;
use crate::db;
use crate::identity::Identity;
use crate::router::{keyboard_labels, Action, ActionTable};

use super::ui_builder::{format_echo, format_logs, format_users, menu_keyboard};

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    pool: Arc<PgPool>,
    config: Arc<BotConfig>,
) -> Result<()> {
    let Some(text) = msg.text() else {
        debug!(chat_id = %msg.chat.id, "Ignoring non-text message");
        return Ok(());
    };

    let identity = Identity::from_user(msg.from.as_ref(), &config);
    debug!(
        chat_id = %msg.chat.id,
        user = %identity.display_name,
        class = identity.class.as_str(),
        "Received text message"
    );

    // Audit append happens exactly once per message, before dispatch.
    // Fire-and-forget: a dead store must not block the reply.
    if let Err(e) = db::append_log(&pool, &identity.display_name, text).await {
        warn!(error = %e, "Failed to append audit log entry");
    }

    let rows = match db::query_menu_rows(&pool, identity.class.as_str()).await {
        Ok(rows) => rows,
        Err(e) => {
            warn!(error = %e, "Menu store unavailable, falling back to built-in table");
            Vec::new()
        }
    };

    let action = ActionTable::with_rows(&rows).resolve(text);
    let keyboard = menu_keyboard(&keyboard_labels(&rows));
    debug!(chat_id = %msg.chat.id, ?action, "Resolved action");

    match action {
        // The start page shows the same static info text as the info action
        Action::Start | Action::ShowInfo => show_info(&bot, &msg, &config, keyboard).await,
        Action::ShowRandomImage => send_random_image(&bot, &msg, &config, keyboard).await,
        Action::ShowUsers => show_users(&bot, &msg, &pool, keyboard).await,
        Action::ShowMenu => show_menu(&bot, &msg, keyboard).await,
        Action::ShowLogs => show_logs(&bot, &msg, &pool, &config, keyboard).await,
        Action::Echo(text) => echo(&bot, &msg, &identity, &text).await,
    }
}

async fn show_info(
    bot: &Bot,
    msg: &Message,
    config: &BotConfig,
    keyboard: KeyboardMarkup,
) -> Result<()> {
    let reply = match content::read_info_text(&config.info_file) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "Info file unavailable");
            "Information file not found.".to_string()
        }
    };

    bot.send_message(msg.chat.id, reply)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

async fn send_random_image(
    bot: &Bot,
    msg: &Message,
    config: &BotConfig,
    keyboard: KeyboardMarkup,
) -> Result<()> {
    match content::pick_random_image(&config.images_dir) {
        Some(path) => {
            debug!(chat_id = %msg.chat.id, image = %path.display(), "Sending random image");
            bot.send_photo(msg.chat.id, InputFile::file(path))
                .reply_markup(keyboard)
                .await?;
        }
        None => {
            bot.send_message(msg.chat.id, "No images found 😿")
                .reply_markup(keyboard)
                .await?;
        }
    }
    Ok(())
}

async fn show_users(
    bot: &Bot,
    msg: &Message,
    pool: &PgPool,
    keyboard: KeyboardMarkup,
) -> Result<()> {
    let reply = match db::query_users(pool).await {
        Ok(rows) if rows.is_empty() => "No users in the database.".to_string(),
        Ok(rows) => format_users(&rows),
        Err(e) => {
            warn!(error = %e, "Users query failed");
            "No database connection.".to_string()
        }
    };

    bot.send_message(msg.chat.id, reply)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

async fn show_menu(bot: &Bot, msg: &Message, keyboard: KeyboardMarkup) -> Result<()> {
    bot.send_message(msg.chat.id, "Choose a menu item:")
        .reply_markup(keyboard)
        .await?;
    Ok(())
}

async fn show_logs(
    bot: &Bot,
    msg: &Message,
    pool: &PgPool,
    config: &BotConfig,
    keyboard: KeyboardMarkup,
) -> Result<()> {
    match db::query_recent_logs(pool, config.log_page_size).await {
        Ok(rows) if rows.is_empty() => {
            bot.send_message(msg.chat.id, "No logs yet.")
                .reply_markup(keyboard)
                .await?;
        }
        Ok(rows) => {
            bot.send_message(msg.chat.id, format_logs(&rows))
                .parse_mode(ParseMode::Html)
                .reply_markup(keyboard)
                .await?;
        }
        Err(e) => {
            warn!(error = %e, "Logs query failed");
            bot.send_message(msg.chat.id, "No database connection.")
                .reply_markup(keyboard)
                .await?;
        }
    }
    Ok(())
}

async fn echo(bot: &Bot, msg: &Message, identity: &Identity, text: &str) -> Result<()> {
    // The echo path carries no store dependency: always the built-in keyboard
    let keyboard = menu_keyboard(&keyboard_labels(&[]));

    bot.send_message(msg.chat.id, format_echo(&identity.display_name, text))
        .parse_mode(ParseMode::Html)
        .reply_markup(keyboard)
        .await?;
    Ok(())
}
