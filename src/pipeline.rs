use crate::output::{OutputRow, RowWriter};
use crate::search::{Place, PlaceFinder, ReviewFetcher, SearchArea};
use crate::summarize::Summarizer;
use anyhow::Context;
use std::io::Write;

pub const NO_REVIEW: &str = "No review";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStats {
    pub places: usize,
    pub skipped_places: usize,
    pub pages: usize,
    pub rows: usize,
    pub summary_failures: usize,
}

pub struct Pipeline<'a> {
    pub finder: &'a dyn PlaceFinder,
    pub fetcher: &'a dyn ReviewFetcher,
    pub summarizer: &'a dyn Summarizer,
}

impl Pipeline<'_> {
    /// Runs the whole extraction. Search and output failures abort the run;
    /// rows written before the failure stay in `writer`.
    pub fn run<W: Write>(
        &self,
        area: &SearchArea,
        writer: &mut RowWriter<W>,
    ) -> anyhow::Result<RunStats> {
        let places = self
            .finder
            .find_places(area)
            .context("place search failed")?;
        let mut stats = RunStats {
            places: places.len(),
            ..RunStats::default()
        };
        tracing::info!(places = places.len(), "place search complete");

        for place in &places {
            let Some(place_id) = place.place_id.as_deref().filter(|id| !id.is_empty()) else {
                stats.skipped_places += 1;
                tracing::debug!(title = ?place.title, "place without id skipped");
                continue;
            };
            self.process_place(place, place_id, writer, &mut stats)?;
        }
        Ok(stats)
    }

    fn process_place<W: Write>(
        &self,
        place: &Place,
        place_id: &str,
        writer: &mut RowWriter<W>,
        stats: &mut RunStats,
    ) -> anyhow::Result<()> {
        let mut token: Option<String> = None;
        let mut rows = 0usize;
        loop {
            let page = self
                .fetcher
                .fetch_reviews(place_id, token.as_deref())
                .with_context(|| format!("review fetch failed for place {place_id}"))?;
            stats.pages += 1;

            for review in &page.reviews {
                let text = review.snippet.as_deref().unwrap_or("");
                let summary = self.summary_for(text, stats);
                writer
                    .write_row(&OutputRow::new(place, review, summary))
                    .context("writing output row")?;
                rows += 1;
            }

            match page.next_page_token {
                Some(next) => token = Some(next),
                None => break,
            }
        }
        stats.rows += rows;
        tracing::debug!(%place_id, rows, "place exhausted");
        Ok(())
    }

    fn summary_for(&self, text: &str, stats: &mut RunStats) -> String {
        if text.is_empty() {
            return NO_REVIEW.to_string();
        }
        match self.summarizer.summarize(text) {
            Ok(res) => {
                tracing::debug!(backend = res.backend, "review summarized");
                res.summary
            }
            Err(e) => {
                stats.summary_failures += 1;
                tracing::debug!(error = %e, "summarization failed");
                format!("Error: {e}")
            }
        }
    }
}
