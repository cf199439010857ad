pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod logging;
pub mod model;
pub mod providers;
pub mod render;
pub mod wrap;

use reqwest::Client;
use std::env;
use std::io::{self, Write};
use tracing::{debug, info, warn};

use cli::Invocation;
use config::Config;
use error::{ClientError, Result};
use gateway::{CompletionGateway, HttpGateway};
use history::{LogEntry, LogOutcome};
use model::ChatRequest;

/// Result of one prompt round-trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub content: String,
    pub log: LogOutcome,
}

pub async fn run() -> Result<()> {
    let _log_guard = logging::init();

    let prompt = match cli::collect(env::args().skip(1)) {
        Invocation::Help => {
            print!("{}", render::help());
            return Ok(());
        }
        Invocation::Prompt(prompt) => prompt,
    };

    let cfg = Config::from_env()?;
    info!(
        model = %cfg.model,
        api_url = %cfg.api_url,
        wrap_width = ?cfg.wrap_width,
        home_dir = ?cfg.home_dir,
        "loaded runtime configuration"
    );
    if cfg.api_key.is_empty() {
        warn!("GPTKEY is not set; the chat API will reject the request");
    }
    if cfg.model.is_empty() {
        warn!("GPTMOD is not set; sending an empty model name");
    }

    let client = Client::builder().build().map_err(ClientError::HttpClient)?;
    let gateway = HttpGateway::new(&client, &cfg);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute(&gateway, &cfg, &prompt, &mut out).await?;
    Ok(())
}

/// Sends `prompt`, prints the summary to `out` and appends the request log.
///
/// Nothing is printed or logged unless a first choice was decoded.
pub async fn execute<G, W>(
    gateway: &G,
    cfg: &Config,
    prompt: &str,
    out: &mut W,
) -> Result<Report>
where
    G: CompletionGateway + ?Sized,
    W: Write,
{
    let request = ChatRequest::new(&cfg.model, prompt);
    let completion = gateway.complete(&request).await?;
    let choice = completion.first_choice()?;
    debug!(
        index = choice.index,
        role = choice.message.role.as_str(),
        finish_reason = %choice.finish_reason,
        total_tokens = completion.usage.total_tokens,
        "received completion"
    );

    let content = choice.message.content.clone();
    let rendered = render::summary(&cfg.model, &completion, &content, cfg.wrap_width);
    out.write_all(rendered.as_bytes())
        .and_then(|()| out.flush())
        .map_err(ClientError::Output)?;

    let log = history::append(cfg.home_dir.as_deref(), &LogEntry::now(prompt, &content))?;
    Ok(Report { content, log })
}
