//! Chat-completion client for number generation.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

use crate::campaign::SampleSource;
use crate::config::GeneratorConfig;
use crate::error::ProviderError;
use crate::prompt::{PromptStyle, SYSTEM_PROMPT};
use crate::provider::Provider;

/// One message in a chat-completion request.
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Chat-completion request body (OpenAI-compatible wire format).
#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f64,
    max_tokens: u32,
}

/// Chat-completion response body; only the reply text is read.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

/// Extracts a number from a model reply.
///
/// Strips every character except digits, the decimal point and the minus
/// sign, then parses the remainder. Replies like "42.", "The number is 7"
/// or " -3.5\n" all survive; anything that cleans to a non-number does not.
///
/// Returns `None` when no number can be recovered or when the parsed value
/// falls outside [min, max].
pub fn parse_reply(raw: &str, min: f64, max: f64) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    match cleaned.parse::<f64>() {
        Ok(number) if (min..=max).contains(&number) => Some(number),
        Ok(number) => {
            warn!(number, min, max, "generated number outside range");
            None
        }
        Err(_) => {
            warn!(reply = raw.trim(), "could not parse number from reply");
            None
        }
    }
}

/// Generates numbers by querying an LLM chat-completions API.
///
/// # Examples
///
/// ```rust,no_run
/// use sampler_providers::{GeneratorConfig, NumberGenerator, PromptStyle};
///
/// # async fn example() -> Result<(), sampler_providers::ProviderError> {
/// let config = GeneratorConfig::builder("gpt-4.1-mini").build()?;
/// let mut generator = NumberGenerator::new(config)?;
///
/// if let Some(n) = generator.generate_number(0.0, 1.0, PromptStyle::Direct).await? {
///     println!("model picked {}", n);
/// }
/// # Ok(())
/// # }
/// ```
pub struct NumberGenerator {
    config: GeneratorConfig,
    provider: Provider,
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl NumberGenerator {
    /// Creates a client for the configured model.
    ///
    /// Resolves the provider from the model name and reads its API key from
    /// the environment.
    pub fn new(config: GeneratorConfig) -> Result<Self, ProviderError> {
        let provider = Provider::from_model(config.model())?;
        let api_key = provider.api_key()?;
        debug!(model = config.model(), %provider, "initialised number generator");

        Ok(Self {
            base_url: provider.base_url().to_string(),
            provider,
            api_key,
            client: reqwest::Client::new(),
            config,
        })
    }

    /// Overrides the provider base URL. Intended for tests against a local
    /// stand-in server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// The provider resolved from the model name.
    pub fn provider(&self) -> Provider {
        self.provider
    }

    /// The client configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Asks the model for one number in [min, max].
    ///
    /// `Ok(None)` means the sample was dropped: the reply was unusable
    /// (empty, unparseable or out of range), or the provider kept failing.
    /// Transport errors and rate limits are retried with jittered backoff
    /// up to the configured budget before the sample is abandoned, and
    /// non-retryable API errors abandon it immediately, so one bad stretch
    /// of provider behaviour shrinks the batch instead of killing the
    /// campaign. Misconfiguration (missing key, unknown model) is rejected
    /// by [`NumberGenerator::new`] before any sampling starts.
    pub async fn generate_number(
        &mut self,
        min: f64,
        max: f64,
        style: PromptStyle,
    ) -> Result<Option<f64>, ProviderError> {
        let prompt = style.render(min, max);

        let mut attempt = 0;
        loop {
            match self.chat(&prompt).await {
                Ok(Some(reply)) => return Ok(parse_reply(&reply, min, max)),
                Ok(None) => {
                    warn!("empty reply from model");
                    return Ok(None);
                }
                Err(err) if attempt < self.config.max_retries() && is_retryable(&err) => {
                    attempt += 1;
                    let pause = backoff(self.config.call_delay(), attempt);
                    warn!(%err, attempt, ?pause, "retrying after provider error");
                    tokio::time::sleep(pause).await;
                }
                Err(err) => {
                    warn!(%err, attempts = attempt + 1, "abandoning sample after provider error");
                    return Ok(None);
                }
            }
        }
    }

    /// Issues one chat-completion request and returns the reply text.
    async fn chat(&self, prompt: &str) -> Result<Option<String>, ProviderError> {
        let request = ChatRequest {
            model: self.config.model(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.config.temperature(),
            max_tokens: self.config.max_tokens(),
        };

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                body: body.chars().take(200).collect(),
            });
        }

        let parsed: ChatResponse = response.json().await?;
        Ok(parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }
}

impl SampleSource for NumberGenerator {
    async fn sample(
        &mut self,
        min: f64,
        max: f64,
        style: PromptStyle,
    ) -> Result<Option<f64>, ProviderError> {
        self.generate_number(min, max, style).await
    }

    fn call_delay(&self) -> Duration {
        self.config.call_delay()
    }
}

/// True for errors worth retrying: rate limits, server-side failures and
/// transport problems. Client-side 4xx responses (other than 429) are not.
fn is_retryable(err: &ProviderError) -> bool {
    match err {
        ProviderError::Http(_) => true,
        ProviderError::Api { status, .. } => *status == 429 || *status >= 500,
        _ => false,
    }
}

/// Exponential backoff from the base delay, with up to 50% jitter.
fn backoff(base: Duration, attempt: u32) -> Duration {
    let exp = base.saturating_mul(1 << attempt.min(6));
    let jitter = 1.0 + rand::thread_rng().gen_range(0.0..0.5);
    exp.mul_f64(jitter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    async fn answer(mut socket: TcpStream, response: String) {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        // Read the full request (headers plus content-length body) before
        // answering, or reqwest may see the connection reset mid-write.
        loop {
            let n = match socket.read(&mut chunk).await {
                Ok(0) | Err(_) => break,
                Ok(n) => n,
            };
            buf.extend_from_slice(&chunk[..n]);
            if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
                let content_length = headers
                    .lines()
                    .find_map(|line| line.strip_prefix("content-length:"))
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .unwrap_or(0);
                if buf.len() >= end + 4 + content_length {
                    break;
                }
            }
        }
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
    }

    /// Serves the same canned response to every request; returns the base
    /// URL and a counter of requests received.
    async fn serve(response: String) -> (String, Arc<AtomicUsize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        tokio::spawn(async move {
            loop {
                let Ok((socket, _)) = listener.accept().await else {
                    return;
                };
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::spawn(answer(socket, response.clone()));
            }
        });
        (format!("http://{}", addr), hits)
    }

    fn test_generator(base_url: String, max_retries: u32) -> NumberGenerator {
        std::env::set_var("OPENAI_API_KEY", "test-key");
        let config = GeneratorConfig::builder("gpt-4.1")
            .call_delay(Duration::from_millis(1))
            .max_retries(max_retries)
            .build()
            .unwrap();
        NumberGenerator::new(config).unwrap().with_base_url(base_url)
    }

    #[tokio::test]
    async fn test_successful_reply_is_parsed() {
        let body = r#"{"choices":[{"message":{"content":"7"}}]}"#;
        let (base_url, hits) = serve(http_response("200 OK", body)).await;
        let mut generator = test_generator(base_url, 2);

        let result = generator.generate_number(0.0, 10.0, PromptStyle::Direct).await;
        assert_eq!(result.unwrap(), Some(7.0));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_persistent_server_error_drops_sample() {
        let (base_url, hits) = serve(http_response("500 Internal Server Error", "")).await;
        let mut generator = test_generator(base_url, 1);

        // Retry budget spent against a server that never recovers: the
        // sample is dropped, the campaign is not aborted.
        let result = generator.generate_number(0.0, 10.0, PromptStyle::Direct).await;
        assert_eq!(result.unwrap(), None);
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_client_error_drops_sample_without_retry() {
        let (base_url, hits) = serve(http_response("400 Bad Request", "")).await;
        let mut generator = test_generator(base_url, 3);

        let result = generator.generate_number(0.0, 10.0, PromptStyle::Direct).await;
        assert_eq!(result.unwrap(), None);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_parse_reply_plain_numbers() {
        assert_eq!(parse_reply("42", 0.0, 100.0), Some(42.0));
        assert_eq!(parse_reply(" 0.37\n", 0.0, 1.0), Some(0.37));
        assert_eq!(parse_reply("-3.5", -10.0, 10.0), Some(-3.5));
    }

    #[test]
    fn test_parse_reply_strips_prose() {
        assert_eq!(parse_reply("The number is 7", 0.0, 10.0), Some(7.0));
        assert_eq!(parse_reply("7.", 0.0, 10.0), Some(7.0));
        assert_eq!(parse_reply("**0.5**", 0.0, 1.0), Some(0.5));
    }

    #[test]
    fn test_parse_reply_rejects_out_of_range() {
        assert_eq!(parse_reply("150", 0.0, 100.0), None);
        assert_eq!(parse_reply("-0.1", 0.0, 1.0), None);
    }

    #[test]
    fn test_parse_reply_rejects_garbage() {
        assert_eq!(parse_reply("I cannot do that", 0.0, 1.0), None);
        assert_eq!(parse_reply("", 0.0, 1.0), None);
        // Two decimal points survive cleaning but do not parse.
        assert_eq!(parse_reply("1.2.3", 0.0, 10.0), None);
    }

    #[test]
    fn test_parse_reply_boundary_values() {
        assert_eq!(parse_reply("0", 0.0, 1.0), Some(0.0));
        assert_eq!(parse_reply("1", 0.0, 1.0), Some(1.0));
    }

    #[test]
    fn test_backoff_grows_with_attempts() {
        let base = Duration::from_millis(100);
        let first = backoff(base, 1);
        let third = backoff(base, 3);
        assert!(first >= Duration::from_millis(200));
        assert!(third >= Duration::from_millis(800));
        // Jitter is bounded.
        assert!(first <= Duration::from_millis(300));
    }

    proptest! {
        #[test]
        fn prop_parse_reply_round_trips_displayed_values(x in -1000.0f64..1000.0) {
            // f64 Display never uses scientific notation, so the cleaned
            // reply is exactly the shortest round-trip representation.
            let reply = format!("The number is {}", x);
            prop_assert_eq!(parse_reply(&reply, -1000.0, 1000.0), Some(x));
        }

        #[test]
        fn prop_parse_reply_never_exceeds_range(raw in ".{0,40}") {
            if let Some(v) = parse_reply(&raw, 0.0, 1.0) {
                prop_assert!((0.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_is_retryable_classification() {
        assert!(is_retryable(&ProviderError::Api {
            status: 429,
            body: String::new()
        }));
        assert!(is_retryable(&ProviderError::Api {
            status: 503,
            body: String::new()
        }));
        assert!(!is_retryable(&ProviderError::Api {
            status: 401,
            body: String::new()
        }));
        assert!(!is_retryable(&ProviderError::UnknownModel("x".into())));
    }
}
