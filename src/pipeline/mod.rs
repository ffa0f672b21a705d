//! Row pipeline: resolve, synthesize, verify, assemble.
//!
//! Each row walks `ResolveIds -> Synthesize -> VerifyTitle -> Assembled`
//! exactly once. Absence flows forward as a normal value, so every row
//! reaches `Assembled` and there is no failed state. Rows are processed one
//! at a time in input order.

pub mod progress;

use std::sync::Arc;

use reelscout_common::{ProviderMatch, ResultRow, SearchQuery};
use tracing::{debug, info, trace};

use crate::config::Config;
use crate::embed::EmbedSynthesizer;
use crate::http::HttpClient;
use crate::metadata::{FilmDbProvider, Resolvers, TmdbProvider};
use crate::verify::{TitleVerifier, VerifyStrategy};

pub use progress::{progress_bar_callback, ProgressCallback, ProgressEvent};

/// Stages a row passes through, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStage {
    ResolveIds,
    Synthesize,
    VerifyTitle,
    Assembled,
}

/// The configured resolution pipeline.
#[derive(Clone)]
pub struct Pipeline {
    resolvers: Resolvers,
    synthesizer: EmbedSynthesizer,
    verifier: TitleVerifier,
}

impl Pipeline {
    pub fn new(resolvers: Resolvers, synthesizer: EmbedSynthesizer, verifier: TitleVerifier) -> Self {
        Self {
            resolvers,
            synthesizer,
            verifier,
        }
    }

    /// Wire the real providers from configuration.
    pub fn from_config(config: &Config, strategy: VerifyStrategy) -> Self {
        let http = HttpClient::new(&config.http);
        let resolvers = Resolvers::new(
            Arc::new(FilmDbProvider::new(
                http.clone(),
                config.providers.filmdb_base_url.clone(),
            )),
            Arc::new(TmdbProvider::new(
                http.clone(),
                config.providers.tmdb_base_url.clone(),
                config.providers.tmdb_api_key.clone(),
            )),
        );
        let verifier = TitleVerifier::new(http, resolvers.clone(), strategy);
        Self::new(
            resolvers,
            EmbedSynthesizer::new(config.embed.base_url.clone()),
            verifier,
        )
    }

    /// Run every query in order and return one row per query.
    pub async fn run(
        &self,
        queries: &[SearchQuery],
        progress: Option<&ProgressCallback>,
    ) -> Vec<ResultRow> {
        let total = queries.len();
        info!(rows = total, strategy = %self.verifier.strategy(), "Starting resolution pass");
        emit(progress, ProgressEvent::Started { total });

        let mut rows = Vec::with_capacity(total);
        for (index, query) in queries.iter().enumerate() {
            let row = self.process_row(query).await;
            rows.push(row);
            emit(
                progress,
                ProgressEvent::RowFinished {
                    index,
                    total,
                    title: query.title.clone(),
                },
            );
        }

        let embedded = rows.iter().filter(|r| r.embed.url.is_some()).count();
        info!(rows = total, with_embed = embedded, "Resolution pass complete");
        emit(progress, ProgressEvent::Finished { total });
        rows
    }

    /// Resolve a single query into its assembled row.
    pub async fn process_row(&self, query: &SearchQuery) -> ResultRow {
        trace!(title = %query.title, stage = ?RowStage::ResolveIds);
        let film_db = self.resolvers.resolve_film_db(query).await;
        let metadata = self.resolvers.resolve_metadata(query).await;

        trace!(title = %query.title, stage = ?RowStage::Synthesize);
        let embed = self.synthesizer.synthesize(film_db.as_ref(), metadata);

        trace!(title = %query.title, stage = ?RowStage::VerifyTitle);
        let mut titles = vec![
            self.verifier
                .verify_embed(&embed, film_db.as_ref(), metadata)
                .await,
        ];
        if let Some(url) = query.comparison_url.as_deref() {
            titles.push(self.verifier.verify_comparison(url).await);
        }

        debug!(
            title = %query.title,
            year = query.year,
            film_db = film_db.as_ref().map(|id| id.as_str()),
            metadata = metadata.map(|id| id.get()),
            embed = embed.url.as_deref(),
            stage = ?RowStage::Assembled,
            "Row assembled"
        );

        ResultRow {
            query: query.clone(),
            film_db: ProviderMatch::film_db(film_db.as_ref()),
            metadata: ProviderMatch::metadata(metadata),
            embed,
            titles,
        }
    }
}

fn emit(progress: Option<&ProgressCallback>, event: ProgressEvent) {
    if let Some(cb) = progress {
        cb(event);
    }
}
