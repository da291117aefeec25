//! Telegram adapter: long-polling listener that feeds messages and inline
//! button presses through the command dispatcher.

use std::sync::Arc;

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, ParseMode};
use url::Url;
use tracing::{debug, info, warn};

use carebridge_commands::{
    detect_command, Button, CallbackAction, CommandResponse, Dispatcher as CommandDispatcher,
    Keyboard,
};

use crate::ChannelAdapter;

pub struct TelegramAdapter {
    bot: Bot,
    dispatcher: Arc<CommandDispatcher>,
}

impl TelegramAdapter {
    pub fn new(token: String, dispatcher: Arc<CommandDispatcher>) -> Self {
        Self {
            bot: Bot::new(token),
            dispatcher,
        }
    }
}

#[async_trait]
impl ChannelAdapter for TelegramAdapter {
    fn name(&self) -> &str {
        "telegram"
    }

    async fn start(&self) -> anyhow::Result<()> {
        info!("[Telegram] Starting adapter");

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(message_handler))
            .branch(Update::filter_callback_query().endpoint(callback_handler));

        Dispatcher::builder(self.bot.clone(), handler)
            .dependencies(dptree::deps![self.dispatcher.clone()])
            .default_handler(|upd| async move {
                debug!("[Telegram] Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        Ok(())
    }
}

async fn message_handler(
    bot: Bot,
    msg: Message,
    dispatcher: Arc<CommandDispatcher>,
) -> ResponseResult<()> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let chat_id = msg.chat.id;
    info!("[Telegram] Message in chat {}: {}", chat_id, text);

    let response = match detect_command(text, dispatcher.registry()) {
        Some(inv) => {
            // Verification commands get a provisional message that is edited
            // with the verdict once the API answers, so the user is never
            // left staring at silence during the call.
            if let Some(loading) = dispatcher.loading_text(&inv) {
                let sent = bot.send_message(chat_id, loading).await?;
                let result = dispatcher.dispatch_command(&inv).await;
                if let Err(e) = bot
                    .edit_message_text(chat_id, sent.id, result.text)
                    .parse_mode(ParseMode::Markdown)
                    .await
                {
                    warn!("[Telegram] Failed to edit message: {e}");
                }
                return Ok(());
            }
            dispatcher.dispatch_command(&inv).await
        }
        None => dispatcher.dispatch_text(text).await,
    };

    send_response(&bot, chat_id, response).await;
    Ok(())
}

async fn callback_handler(
    bot: Bot,
    query: CallbackQuery,
    dispatcher: Arc<CommandDispatcher>,
) -> ResponseResult<()> {
    // Always acknowledge first so the client clears its loading indicator,
    // whatever happens to the reply itself.
    bot.answer_callback_query(&query.id).await?;

    let Some(action) = query.data.as_deref().and_then(CallbackAction::parse) else {
        warn!("[Telegram] Unknown callback action: {:?}", query.data);
        return Ok(());
    };
    info!("[Telegram] Callback from {}: {}", query.from.id, action.as_str());

    let response = dispatcher.dispatch_callback(action).await;

    match &query.message {
        Some(message) => {
            if let Err(e) = bot
                .edit_message_text(message.chat().id, message.id(), response.text)
                .parse_mode(ParseMode::Markdown)
                .await
            {
                warn!("[Telegram] Failed to edit message: {e}");
            }
        }
        // No originating message to edit (rare): send fresh.
        None => send_response(&bot, ChatId(query.from.id.0 as i64), response).await,
    }
    Ok(())
}

async fn send_response(bot: &Bot, chat_id: ChatId, response: CommandResponse) {
    let mut request = bot
        .send_message(chat_id, response.text)
        .parse_mode(ParseMode::Markdown);
    if let Some(keyboard) = response.keyboard {
        request = request.reply_markup(to_markup(keyboard));
    }
    if let Err(e) = request.await {
        warn!("[Telegram] Failed to send message: {e}");
    }
}

fn to_markup(keyboard: Keyboard) -> InlineKeyboardMarkup {
    let rows = keyboard.into_iter().map(|row| {
        row.into_iter()
            .filter_map(|button| match button {
                Button::Callback { label, action } => Some(InlineKeyboardButton::callback(
                    label,
                    action.as_str().to_string(),
                )),
                Button::Url { label, url } => match Url::parse(&url) {
                    Ok(url) => Some(InlineKeyboardButton::url(label, url)),
                    Err(e) => {
                        warn!("[Telegram] Dropping button with bad URL {url}: {e}");
                        None
                    }
                },
            })
            .collect::<Vec<_>>()
    });
    InlineKeyboardMarkup::new(rows)
}
