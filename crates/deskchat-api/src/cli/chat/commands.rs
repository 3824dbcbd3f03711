//! Slash commands available inside `deskchat chat`.

use console::style;

/// In-chat controls recognized by the input loop.
#[derive(Debug, PartialEq)]
pub enum ChatCommand {
    Help,
    /// Re-list the quick-reply chips.
    Topics,
    /// Print the transcript so far.
    History,
    Clear,
    Exit,
    /// Anything else starting with `/`; holds the lowercased command word.
    Unknown(String),
}

/// Command names and descriptions, in help order.
const COMMANDS: &[(&str, &str)] = &[
    ("/help", "Show this help message"),
    ("/topics", "Show quick-reply topics"),
    ("/history", "Show the conversation so far"),
    ("/clear", "Clear the screen"),
    ("/exit", "End the chat session"),
];

/// Interpret a line as a slash command. Plain text yields `None`.
///
/// Only the first word counts, so `/clear please` is still `/clear`.
pub fn parse(line: &str) -> Option<ChatCommand> {
    let word = line.split_whitespace().next()?;
    if !word.starts_with('/') {
        return None;
    }

    let command = match word.to_lowercase().as_str() {
        "/help" | "/h" | "/?" => ChatCommand::Help,
        "/topics" | "/t" => ChatCommand::Topics,
        "/history" => ChatCommand::History,
        "/clear" | "/cls" => ChatCommand::Clear,
        "/exit" | "/quit" | "/q" => ChatCommand::Exit,
        unknown => ChatCommand::Unknown(unknown.to_string()),
    };
    Some(command)
}

pub fn print_help() {
    println!();
    println!("  {}", style("Commands:").bold());
    for (name, description) in COMMANDS {
        println!("    {:<10} {}", style(name).cyan(), description);
    }
    println!();
    println!(
        "  {}",
        style("While quick replies are listed, type a number to send that topic.").dim()
    );
    println!("  {}", style("Ctrl+D to exit").dim());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_help_aliases() {
        for alias in ["/help", "/h", "/?", "/HELP"] {
            assert_eq!(parse(alias), Some(ChatCommand::Help), "{alias}");
        }
    }

    #[test]
    fn test_parse_topics_and_history() {
        assert_eq!(parse("/topics"), Some(ChatCommand::Topics));
        assert_eq!(parse("/history"), Some(ChatCommand::History));
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse("/exit"), Some(ChatCommand::Exit));
        assert_eq!(parse("/QUIT"), Some(ChatCommand::Exit));
        assert_eq!(parse("  /q  "), Some(ChatCommand::Exit));
    }

    #[test]
    fn test_parse_clear_ignores_arguments() {
        assert_eq!(parse("/clear now"), Some(ChatCommand::Clear));
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        assert_eq!(parse("what does /help do?"), None);
        assert_eq!(parse("1"), None);
        assert_eq!(parse("   "), None);
    }

    #[test]
    fn test_unrecognized_slash_word() {
        assert_eq!(parse("/foo"), Some(ChatCommand::Unknown("/foo".to_string())));
    }
}
