//! Main chat loop orchestration.
//!
//! Runs one chat session: welcome state and quick-reply chips, the input
//! loop with slash commands, the typing indicator while a turn is pending,
//! and rendering of each settled agent message.

use chrono::Utc;
use console::style;
use tracing::info;

use deskchat_core::agent::client::AgentClient;
use deskchat_core::chat::controller::ChatController;

use crate::state::AppState;

use super::banner::{print_footer, print_welcome_banner};
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer::ChatRenderer;

/// Run the interactive chat loop against the configured agent endpoint.
pub async fn run_chat_loop(state: &AppState) -> anyhow::Result<()> {
    let client = state.agent_client()?;
    let mut controller = ChatController::new(client, &state.config);
    let renderer = ChatRenderer::new(state.config.agent_display_name.clone());

    print_welcome_banner(&state.config.company_name, &controller.session().session_id);
    renderer.print_quick_replies(controller.quick_reply_topics());

    let prompt = format!("  {} ", style("You >").green().bold());
    let (mut chat_input, _writer) = ChatInput::new(prompt)
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let line = match chat_input.read_line().await {
            InputEvent::Eof => break,
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Line(line) => line,
        };

        if let Some(cmd) = commands::parse(&line) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Topics => {
                    let topics = controller.quick_reply_topics();
                    if topics.is_empty() {
                        println!(
                            "\n  {}\n",
                            style("Quick replies are only available before the first message.").dim()
                        );
                    } else {
                        println!();
                        renderer.print_quick_replies(topics);
                    }
                }
                ChatCommand::History => {
                    println!();
                    let now = Utc::now();
                    for message in controller.transcript() {
                        renderer.print_message(message, now);
                    }
                }
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => break,
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        take_turn(&mut controller, &renderer, &line).await;
    }

    chat_input.flush();
    println!("\n  {}", style("Session ended.").dim());
    print_footer(&state.config.company_name);
    info!(
        session_id = %controller.session().session_id,
        messages = controller.transcript().len(),
        "Chat session ended"
    );
    Ok(())
}

/// Submit one line and render the resulting exchange.
///
/// A bare number picks the matching quick-reply chip while chips are shown.
async fn take_turn<C: AgentClient>(
    controller: &mut ChatController<C>,
    renderer: &ChatRenderer,
    line: &str,
) {
    let chip = quick_reply_choice(line, controller.quick_reply_topics());
    let turn = match chip {
        Some(topic) => controller.begin_quick_reply(&topic),
        None => {
            controller.set_input(line);
            controller.begin_input()
        }
    };
    let Some(turn) = turn else {
        return;
    };

    if let Some(user_message) = controller.transcript().last() {
        renderer.print_message(user_message, Utc::now());
    }

    let spinner = renderer.typing_indicator();
    let reply = controller.dispatch(turn).await;
    spinner.finish_and_clear();

    if let Some(message) = reply {
        renderer.print_message(message, Utc::now());
    }
}

/// Map a 1-based chip number to its topic.
fn quick_reply_choice(line: &str, topics: &[String]) -> Option<String> {
    let index: usize = line.trim().parse().ok()?;
    topics.get(index.checked_sub(1)?).cloned()
}
