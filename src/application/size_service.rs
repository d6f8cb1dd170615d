//! Size lookup service and its request/response adapter
//!
//! [`SizeAdvisor`] is the synchronous core: one document scan plus one
//! recommendation per request. [`spawn_page_agent`] wraps it behind a
//! channel so a requester can send a single `FIND_SIZE` message and await a
//! single reply, the way a page-side content script answers a popup.

use super::dto::{SizeMessage, SizeResponse};
use super::error::{FindSizeError, RecommendationError};
use super::size_recommender::SizeRecommender;
use crate::domain::{Recommendation, SizeInfo, UserMeasurements};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::parsing::{ParsingResult, SizeInfoLocator, SizeInfoSource};
use scraper::Html;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Reply slot for one request.
pub type ReplySender = oneshot::Sender<Result<SizeResponse, RecommendationError>>;

/// A request travelling to the page agent.
pub type PageEnvelope = (SizeMessage, ReplySender);

/// Discovery plus recommendation over a document snapshot.
pub struct SizeAdvisor<S = SizeInfoLocator> {
    source: S,
    recommender: SizeRecommender,
}

impl SizeAdvisor<SizeInfoLocator> {
    pub fn from_config(config: &AppConfig) -> ParsingResult<Self> {
        Ok(Self::new(
            SizeInfoLocator::with_config(&config.parsing)?,
            SizeRecommender::new(config.chart.clone()),
        ))
    }
}

impl<S: SizeInfoSource> SizeAdvisor<S> {
    pub const fn new(source: S, recommender: SizeRecommender) -> Self {
        Self {
            source,
            recommender,
        }
    }

    pub fn inspect(&self, html: &Html) -> SizeInfo {
        self.source.find_size_information(html)
    }

    pub fn find_size(
        &self,
        html: &Html,
        measurements: &UserMeasurements,
    ) -> Result<Recommendation, RecommendationError> {
        let size_info = self.inspect(html);
        self.recommender.recommend(measurements, &size_info)
    }

    /// Answer one message against a fresh parse of `page_source`.
    pub fn handle_message(
        &self,
        page_source: &str,
        message: SizeMessage,
    ) -> Result<SizeResponse, RecommendationError> {
        match message {
            SizeMessage::FindSize { measurements } => {
                info!("Handling FIND_SIZE request");
                let html = Html::parse_document(page_source);
                self.find_size(&html, &measurements).map(SizeResponse::from)
            }
        }
    }
}

/// Requesting side of the page agent channel.
#[derive(Debug, Clone)]
pub struct SizeClient {
    requests: mpsc::Sender<PageEnvelope>,
    response_timeout: Option<Duration>,
}

impl SizeClient {
    pub const fn new(requests: mpsc::Sender<PageEnvelope>, response_timeout: Option<Duration>) -> Self {
        Self {
            requests,
            response_timeout,
        }
    }

    /// Send one `FIND_SIZE` request and wait for its single reply.
    pub async fn find_size(&self, measurements: UserMeasurements) -> Result<SizeResponse, FindSizeError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.requests
            .send((SizeMessage::FindSize { measurements }, reply_tx))
            .await
            .map_err(|_| FindSizeError::AgentUnavailable)?;

        let reply = match self.response_timeout {
            Some(limit) => tokio::time::timeout(limit, reply_rx).await.map_err(|_| {
                warn!("No response from page agent within {:?}", limit);
                FindSizeError::NoResponse
            })?,
            None => reply_rx.await,
        };

        let response = reply.map_err(|_| FindSizeError::NoResponse)??;
        Ok(response)
    }
}

/// Start a task that answers size requests for `page_source`.
///
/// The task ends once every [`SizeClient`] clone is dropped.
pub fn spawn_page_agent<S>(
    advisor: SizeAdvisor<S>,
    page_source: String,
    capacity: usize,
    response_timeout: Option<Duration>,
) -> (SizeClient, JoinHandle<()>)
where
    S: SizeInfoSource + Send + Sync + 'static,
{
    let (tx, mut rx) = mpsc::channel::<PageEnvelope>(capacity.max(1));

    let handle = tokio::spawn(async move {
        while let Some((message, reply)) = rx.recv().await {
            let result = advisor.handle_message(&page_source, message);
            if reply.send(result).is_err() {
                debug!("Requester went away before the reply was sent");
            }
        }
        debug!("Page agent stopped");
    });

    (SizeClient::new(tx, response_timeout), handle)
}
