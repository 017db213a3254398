// Portfolio chat terminal front end.
// Reads messages from stdin and prints panels or assistant replies.

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use portfolio_chat_core::portfolio::HttpPortfolioClient;
use portfolio_chat_core::render;
use portfolio_chat_core::session::{ChatSession, QuickAction};
use portfolio_chat_core::ChatConfig;

const HELP: &str = "Type a question, a number for a quick action, /retry to reload data or /quit to exit.";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = ChatConfig::from_env().context("Invalid chat configuration")?;
    info!("Using portfolio backend at {}", config.api_base_url);

    let backend = Arc::new(HttpPortfolioClient::new(config.clone()).context("Failed to build HTTP client")?);
    let mut session = ChatSession::new(backend, &config);
    session.open().await;

    println!("Hey, I'm Ahib 👋  Ask me anything about my work.");
    println!("{}", HELP);
    if let Some(err) = session.data_error() {
        println!("{}", err);
    }
    println!("{}", render::quick_actions(session.quick_actions()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        let pending = match input {
            "" => continue,
            "/quit" | "/exit" => break,
            "/help" => {
                println!("{}", HELP);
                continue;
            }
            "/retry" => {
                session.retry_load().await;
                match session.data_error() {
                    Some(err) => println!("{}", err),
                    None => println!("Portfolio data loaded."),
                }
                continue;
            }
            _ => match input.parse::<usize>().ok().and_then(QuickAction::from_position) {
                Some(action) => session.submit_quick_action(action),
                None => session.submit(input),
            },
        };

        let Some(pending) = pending else { continue };
        println!("{}", render::thinking(pending.category()));

        let store = Arc::clone(session.store());
        tokio::select! {
            resolved = pending.resolve(&store) => {
                if session.apply(&resolved) {
                    println!("\n{}\n", render::outcome(&resolved.outcome));
                    println!("{}", render::quick_actions(session.quick_actions()));
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted while waiting for a reply");
                session.close();
                break;
            }
        }
    }

    if session.is_visible() {
        session.close();
    }
    Ok(())
}
