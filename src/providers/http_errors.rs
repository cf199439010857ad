use std::error::Error as StdError;
use std::io::ErrorKind;

use crate::error::ClientError;

fn error_chain_has(err: &(dyn StdError + 'static), kind: ErrorKind, needle: &str) -> bool {
    let mut current: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(source) = current {
        if let Some(io_err) = source.downcast_ref::<std::io::Error>()
            && io_err.kind() == kind
        {
            return true;
        }

        if source.to_string().to_ascii_lowercase().contains(needle) {
            return true;
        }

        current = source.source();
    }

    false
}

fn error_chain_has_connection_refused(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has(err, ErrorKind::ConnectionRefused, "connection refused")
}

fn error_chain_has_timeout(err: &(dyn StdError + 'static)) -> bool {
    error_chain_has(err, ErrorKind::TimedOut, "timed out")
}

pub(crate) fn chat_api_request_error(err: reqwest::Error, api_url: &str) -> ClientError {
    let message = if err.is_timeout() || error_chain_has_timeout(&err) {
        format!(
            "Request to chat API at '{}' timed out. Check network connectivity.",
            api_url
        )
    } else if err.is_connect() && error_chain_has_connection_refused(&err) {
        format!(
            "Connection refused by chat API at '{}'. \
             Ensure the service is reachable and GPTURL is correct.",
            api_url
        )
    } else if err.is_connect() {
        format!(
            "Failed to connect to chat API at '{}'. \
             Check GPTURL and network connectivity.",
            api_url
        )
    } else {
        format!("Failed to call chat API at '{}': {}", api_url, err)
    };

    ClientError::Transport {
        message,
        source: err,
    }
}
