//! Welcome state shown while the transcript is empty.

use console::style;

/// Print the welcome state at the start of a chat session.
pub fn print_welcome_banner(company_name: &str, session_id: &str) {
    println!();
    println!(
        "  {} {}",
        style("*").cyan().bold(),
        style("Support Chat").cyan().bold()
    );
    println!("  {}", style("Powered by AI").dim());
    println!();
    println!("  {}", style("Hello! How can we help?").bold());
    println!(
        "  I'm here to assist you with any questions about {company_name}. Ask me"
    );
    println!("  anything about our products, services, pricing, or accounts.");
    println!();
    println!("  {}", style("Popular topics:").bold());
    for topic in [
        "Get pricing information and plan details",
        "Learn about features and capabilities",
        "Account management and billing help",
        "Technical support and troubleshooting",
    ] {
        println!("  {} {}", style("\u{2022}").cyan().bold(), topic);
    }
    println!();
    println!("  {}  {}", style("Session:").bold(), style(session_id).dim());
    println!(
        "  {}",
        style("Type /help for commands, Ctrl+D to exit").dim()
    );
    println!("  {}", style("---").dim());
    println!();
}

/// Print the footer line shown when the session ends.
pub fn print_footer(company_name: &str) {
    println!(
        "  {}",
        style(format!("AI-powered support for {company_name}")).dim()
    );
}
