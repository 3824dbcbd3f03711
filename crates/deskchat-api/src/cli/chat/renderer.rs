//! Terminal rendering for transcript messages.
//!
//! Agent content goes through `termimad` so markdown in replies renders as
//! formatted text. User messages are printed as typed.

use std::time::Duration;

use chrono::{DateTime, Utc};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use termimad::crossterm::style::Color;
use termimad::MadSkin;

use deskchat_types::message::{Message, MessageRole};

/// Shown above an agent message that suggests escalation.
pub const ESCALATION_NOTICE: &str = "This issue may require human assistance";

/// Renders messages, chips, and the typing indicator.
pub struct ChatRenderer {
    skin: MadSkin,
    agent_name: String,
}

impl ChatRenderer {
    pub fn new(agent_name: impl Into<String>) -> Self {
        let mut skin = MadSkin::default_dark();
        skin.bold.set_fg(Color::Cyan);
        skin.headers[0].set_fg(Color::Cyan);
        skin.headers[1].set_fg(Color::Cyan);
        skin.inline_code.set_fg(Color::Yellow);

        Self {
            skin,
            agent_name: agent_name.into(),
        }
    }

    /// Print one transcript message with its role label and timestamp.
    pub fn print_message(&self, message: &Message, now: DateTime<Utc>) {
        let when = style(format_relative(message.created_at, now)).dim();
        match message.role {
            MessageRole::User => {
                println!("  {} {}", style("You").green().bold(), when);
                for line in message.content.lines() {
                    println!("  {line}");
                }
            }
            MessageRole::Agent => {
                if message.is_escalation() {
                    println!(
                        "  {} {}",
                        style("!").yellow().bold(),
                        style(ESCALATION_NOTICE).yellow()
                    );
                }
                println!("  {} {}", style(&self.agent_name).cyan().bold(), when);
                let rendered = self.skin.term_text(&message.content).to_string();
                for line in rendered.trim_end().lines() {
                    println!("  {line}");
                }
                if !message.suggested_topics.is_empty() {
                    println!(
                        "  {} {}",
                        style("Related:").dim(),
                        style(message.suggested_topics.join(" \u{00b7} ")).dim()
                    );
                }
            }
        }
        println!();
    }

    /// Print numbered quick-reply chips.
    pub fn print_quick_replies(&self, topics: &[String]) {
        if topics.is_empty() {
            return;
        }
        println!("  {}", style("Quick replies:").bold());
        for (index, topic) in topics.iter().enumerate() {
            println!("  {} {}", style(format!("[{}]", index + 1)).cyan(), topic);
        }
        println!();
    }

    /// Start the typing indicator. Clear it with `finish_and_clear`.
    pub fn typing_indicator(&self) -> ProgressBar {
        let spinner = ProgressBar::new_spinner();
        if let Ok(template) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(template);
        }
        spinner.set_message(format!("{} is typing...", self.agent_name));
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

/// Format `at` relative to `now`, the way a chat thread labels messages.
///
/// Under a minute reads "just now"; then minutes and hours; anything older
/// than a day falls back to the calendar date.
pub fn format_relative(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at);
    let seconds = elapsed.num_seconds();

    if seconds < 60 {
        "just now".to_string()
    } else if seconds < 3600 {
        format!("{}m ago", elapsed.num_minutes())
    } else if seconds < 86_400 {
        format!("{}h ago", elapsed.num_hours())
    } else {
        at.format("%Y-%m-%d %H:%M").to_string()
    }
}
