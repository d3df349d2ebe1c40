use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::classify::Classifier;
use crate::extract::extract_paragraph_text;
use crate::fetch::PageFetcher;
use crate::report::{ActivityData, ActivityResult, ResultSet};

/// Per-run counters, printed after the loop completes.
pub struct RunStats {
    pub total: usize,
    pub recorded: usize,
    pub fetch_failed: usize,
    pub no_text: usize,
    pub no_activities: usize,
    pub classify_failed: usize,
}

impl RunStats {
    pub fn print(&self) {
        println!(
            "Done: {} of {} URLs recorded ({} fetch errors, {} without text, {} without activities, {} classification errors).",
            self.recorded,
            self.total,
            self.fetch_failed,
            self.no_text,
            self.no_activities,
            self.classify_failed,
        );
    }
}

/// Sequential driver: fetch → extract → classify → record, one URL at a time.
///
/// Per-URL failures are logged and skipped; the failed URL is simply absent
/// from the output. Nothing is retried.
pub struct Pipeline<F, C> {
    fetcher: F,
    classifier: C,
    delay: Duration,
}

impl<F: PageFetcher, C: Classifier> Pipeline<F, C> {
    pub fn new(fetcher: F, classifier: C, delay: Duration) -> Self {
        Pipeline {
            fetcher,
            classifier,
            delay,
        }
    }

    pub async fn run(&self, urls: &[String]) -> Result<(ResultSet, RunStats)> {
        let pb = ProgressBar::new(urls.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40} {pos}/{len} (eta {eta})")?
                .progress_chars("=> "),
        );

        let mut results = Vec::new();
        let mut stats = RunStats {
            total: urls.len(),
            recorded: 0,
            fetch_failed: 0,
            no_text: 0,
            no_activities: 0,
            classify_failed: 0,
        };

        for url in urls {
            info!("Processing {}", url);
            match self.fetcher.fetch(url).await {
                Ok(html) => {
                    let text = extract_paragraph_text(&html);
                    if text.is_empty() {
                        info!("No paragraph text on {}", url);
                        stats.no_text += 1;
                    } else {
                        match self.classifier.classify(&text).await {
                            Ok(activities) if activities.is_empty() => {
                                info!("No activities found on {}", url);
                                stats.no_activities += 1;
                            }
                            Ok(activities) => {
                                results.push(ActivityResult {
                                    url: url.clone(),
                                    data: ActivityData { activities },
                                });
                                stats.recorded += 1;
                            }
                            Err(e) => {
                                warn!("Classification failed for {}: {:#}", url, e);
                                stats.classify_failed += 1;
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!("Error fetching {}: {:#}", url, e);
                    stats.fetch_failed += 1;
                }
            }

            pb.inc(1);
            // Unconditional pause to stay under site/API rate limits
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        }

        pb.finish_and_clear();
        Ok((ResultSet { result: results }, stats))
    }
}

// ── Tests ──
