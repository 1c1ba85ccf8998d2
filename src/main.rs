use anyhow::Context;

mod config;
mod errors;
mod logging;
mod output;
mod pipeline;
mod search;
mod summarize;
#[cfg(test)]
mod test_support;

use crate::config::AppConfig;
use crate::output::RowWriter;
use crate::pipeline::Pipeline;
use crate::search::serpapi::SerpApiClient;
use crate::search::SearchArea;
use crate::summarize::build_summarizer;

fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env_and_args().context("loading .env")?;
    logging::init_logging();

    if let Err(e) = cfg.validate() {
        anyhow::bail!("invalid config: {e}");
    }

    let area = SearchArea {
        lat: cfg.lat,
        lon: cfg.lon,
        radius: cfg.radius,
        zoom: cfg.zoom,
    };
    tracing::info!(
        lat = area.lat,
        lon = area.lon,
        radius = area.radius,
        summary_backend = %cfg.summary_backend,
        output = %cfg.output,
        "starting grocery review export"
    );

    let search = SerpApiClient::new(cfg.serpapi_base_url.clone(), cfg.serpapi_key.clone());
    let summarizer = build_summarizer(
        &cfg.summary_backend,
        cfg.summary_model.clone(),
        cfg.openai_base_url.clone(),
        cfg.openai_api_key.clone(),
    );
    let mut writer = RowWriter::create(&cfg.output)
        .with_context(|| format!("creating output file {}", cfg.output))?;

    let pipeline = Pipeline {
        finder: &search,
        fetcher: &search,
        summarizer: summarizer.as_ref(),
    };
    let stats = pipeline.run(&area, &mut writer)?;

    tracing::info!(
        places = stats.places,
        skipped_places = stats.skipped_places,
        pages = stats.pages,
        rows = stats.rows,
        summary_failures = stats.summary_failures,
        output = %cfg.output,
        "export complete"
    );
    Ok(())
}
