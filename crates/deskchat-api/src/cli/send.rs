//! One-shot `send` command.

use anyhow::Result;
use chrono::Utc;
use console::style;

use deskchat_core::chat::controller::ChatController;
use deskchat_core::chat::transcript::Transcript;
use deskchat_types::message::MessageRole;

use crate::cli::chat::renderer::ChatRenderer;
use crate::state::AppState;

/// Send `message` as a new session's first turn and print the exchange.
///
/// With `quiet`, only the agent's reply text is printed. Agent-side failures
/// are still printed as the agent message; the command only fails when the
/// message is blank or the client cannot be built.
pub async fn send_message(state: &AppState, message: &str, json: bool, quiet: bool) -> Result<()> {
    let client = state.agent_client()?;
    let mut controller = ChatController::new(client, &state.config);

    if controller.submit(message).await.is_none() {
        anyhow::bail!("Message is empty");
    }

    if json {
        let output = serde_json::json!({
            "session_id": controller.session().session_id,
            "user_id": controller.session().user_id,
            "messages": controller.transcript().messages(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    if quiet {
        if let Some(reply) = agent_reply(controller.transcript()) {
            println!("{reply}");
        }
        return Ok(());
    }

    let renderer = ChatRenderer::new(state.config.agent_display_name.clone());
    println!();
    let now = Utc::now();
    for message in controller.transcript() {
        renderer.print_message(message, now);
    }
    println!("  {}  {}", style("Session:").bold(), style(&controller.session().session_id).dim());
    println!();
    Ok(())
}

/// Content of the latest agent message.
fn agent_reply(transcript: &Transcript) -> Option<&str> {
    transcript
        .iter()
        .rev()
        .find(|message| message.role == MessageRole::Agent)
        .map(|message| message.content.as_str())
}
