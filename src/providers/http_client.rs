use reqwest::Client;
use std::time::Duration;

/// HTTP client for a responder with the given attempt `deadline`.
///
/// The request timeout is only a backstop at twice the deadline; the
/// responder's own deadline always fires first.
pub fn backstop_client(deadline: Duration) -> Client {
    Client::builder()
        .timeout(deadline.saturating_mul(2).max(Duration::from_secs(1)))
        .connect_timeout(deadline.clamp(Duration::from_secs(1), Duration::from_secs(10)))
        .pool_max_idle_per_host(2)
        .pool_idle_timeout(Duration::from_secs(90))
        .build()
        .unwrap_or_else(|_| Client::new())
}
