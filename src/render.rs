use colored::Colorize;

use crate::model::ChatResponse;
use crate::wrap::wrap;

pub fn help_text() -> String {
    format!(
        "\ngptcmd v{}\n\
         Requires 2 Env Variables:\n\
         \x20 GPTKEY=\"your OpenAI key\" (required)\n\
         \x20 GPTMOD=\"engine model\" (required)\n\
         \x20 GPTWRAP=\"line wrap length\" (optional)\n\
         Type your prompt on the command-line.\n",
        env!("CARGO_PKG_VERSION")
    )
}

pub fn help() -> String {
    format!("{}\n", help_text().green())
}

/// Formats the console summary for one completion.
///
/// `requested_model` is the configured model name; the response's own model
/// field is reported separately since the service may resolve an alias.
pub fn summary(
    requested_model: &str,
    completion: &ChatResponse,
    content: &str,
    wrap_width: Option<i64>,
) -> String {
    let content = match wrap_width {
        Some(limit) => wrap(content, limit),
        None => content.to_string(),
    };
    let block = format!(
        "\n{} says:\nModel: {}\nTotal Tokens: {}\nContent:\n {}",
        requested_model, completion.model, completion.usage.total_tokens, content
    );
    format!("{}\n\n", block.yellow().bold())
}
