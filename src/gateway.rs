use reqwest::Client;
use std::future::Future;
use std::pin::Pin;

use crate::config::Config;
use crate::error::Result;
use crate::model::{ChatRequest, ChatResponse};
use crate::providers;

pub type CompletionFuture<'a> = Pin<Box<dyn Future<Output = Result<ChatResponse>> + 'a>>;

/// Source of chat completions for the command pipeline.
pub trait CompletionGateway {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> CompletionFuture<'a>;
}

pub struct HttpGateway<'a> {
    client: &'a Client,
    cfg: &'a Config,
}

impl<'a> HttpGateway<'a> {
    pub fn new(client: &'a Client, cfg: &'a Config) -> Self {
        Self { client, cfg }
    }
}

impl CompletionGateway for HttpGateway<'_> {
    fn complete<'a>(&'a self, request: &'a ChatRequest) -> CompletionFuture<'a> {
        Box::pin(async move { providers::openai::chat(self.client, self.cfg, request).await })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use super::{CompletionGateway, HttpGateway};
    use crate::config::Config;
    use crate::error::ClientError;
    use crate::model::ChatRequest;

    #[tokio::test]
    async fn http_gateway_reports_transport_failures() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind should succeed");
        let addr = listener.local_addr().expect("address should be available");
        drop(listener);

        let client = reqwest::Client::new();
        let cfg = Config {
            api_key: String::new(),
            model: "gpt-4o-mini".to_string(),
            api_url: format!("http://{}/v1/chat/completions", addr),
            wrap_width: None,
            home_dir: None,
        };
        let gateway = HttpGateway::new(&client, &cfg);

        let err = gateway
            .complete(&ChatRequest::new(&cfg.model, "ping"))
            .await
            .expect_err("nothing is listening");
        assert!(matches!(err, ClientError::Transport { .. }), "{err}");
    }
}
