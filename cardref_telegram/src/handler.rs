use crate::{Command, Error, Result, TelegramBot, to_telegram_html};
use teloxide::prelude::*;
use teloxide::types::{ParseMode, ReplyParameters};
use tracing::{debug, info};

/// Longest text Telegram accepts in one message.
pub const TELEGRAM_MAX_CHARS: usize = 4096;

/// Split `text` into pieces of at most `limit` characters, breaking after a
/// newline where possible and mid-line only when a single line is too long.
#[must_use]
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_chars = 0usize;

    for line in text.split_inclusive('\n') {
        let line_chars = line.chars().count();
        if current_chars + line_chars > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_chars = 0;
        }

        if line_chars <= limit {
            current.push_str(line);
            current_chars += line_chars;
            continue;
        }
        for ch in line.chars() {
            if current_chars == limit {
                chunks.push(std::mem::take(&mut current));
                current_chars = 0;
            }
            current.push(ch);
            current_chars += 1;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

/// Handle bot commands
pub async fn handle_command(bot: TelegramBot, msg: Message, cmd: Command) -> Result<()> {
    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    let text = match cmd {
        Command::Start => Command::welcome_text(),
        Command::Help => Command::help_text(),
        Command::Info => bot.info_message(),
    };
    info!("[@{username}] Command: {cmd:?}");
    bot.bot.send_message(msg.chat.id, text).await?;

    Ok(())
}

/// Handle any message (commands or regular text)
pub async fn handle_message(bot: TelegramBot, msg: Message) -> Result<()> {
    let chat_id = msg.chat.id.0;
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if msg.from.as_ref().is_some_and(|u| u.is_bot) {
        return Ok(());
    }
    if !bot.is_allowed(chat_id) {
        return Err(Error::Unauthorized(chat_id));
    }

    let username = msg
        .from
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .unwrap_or("unknown");

    // Check if this is a command
    if let Some(cmd) = Command::parse_from_text(text) {
        return handle_command(bot.clone(), msg.clone(), cmd).await;
    }

    if bot.wants_info(text) {
        info!("[@{username}] Asked for info");
        bot.bot
            .send_message(msg.chat.id, bot.info_message())
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
        return Ok(());
    }

    let body = bot.reply_body(text);
    if body.is_empty() {
        debug!("[@{username}] No card mentions in message");
        return Ok(());
    }

    info!("[@{username}] Replying with {} chars", body.chars().count());
    for chunk in split_message(&to_telegram_html(&body), TELEGRAM_MAX_CHARS) {
        bot.bot
            .send_message(msg.chat.id, chunk)
            .parse_mode(ParseMode::Html)
            .reply_parameters(ReplyParameters::new(msg.id))
            .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_message_is_one_chunk() {
        assert_eq!(split_message("a\nb\n", 10), vec!["a\nb\n"]);
        assert!(split_message("", 10).is_empty());
    }

    #[test]
    fn test_split_prefers_line_breaks() {
        let chunks = split_message("aaaa\nbbbb\ncccc\n", 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb\n", "cccc\n"]);
    }

    #[test]
    fn test_overlong_line_is_cut() {
        let chunks = split_message(&"x".repeat(25), 10);
        assert_eq!(chunks.len(), 3);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
        assert_eq!(chunks.concat(), "x".repeat(25));
    }

    #[test]
    fn test_chunks_never_exceed_limit() {
        let body = "**Card**\n\r\n^^Points: ^^3    \n".repeat(400);
        let chunks = split_message(&body, TELEGRAM_MAX_CHARS);
        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= TELEGRAM_MAX_CHARS));
        assert_eq!(chunks.concat(), body);
    }
}
