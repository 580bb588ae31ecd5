use std::io::BufRead;

use tracing::{debug, info};

use formscan_fetcher::PageFetcher;
use formscan_parser::extract_forms;

use crate::report::Reporter;

/// Drives the per-URL workflow over a line-oriented URL list: validate
/// each line, fetch and parse the page, extract its forms, route results
/// and diagnostics to the reporter. One URL at a time, in file order.
pub struct BatchRunner<F, R> {
    fetcher: F,
    reporter: R,
}

impl<F: PageFetcher, R: Reporter> BatchRunner<F, R> {
    pub fn new(fetcher: F, reporter: R) -> Self {
        Self { fetcher, reporter }
    }

    pub async fn run(&mut self, lines: impl BufRead) {
        let mut scanned = 0usize;
        for line in lines.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    // A read error ends the scan; everything already
                    // reported stands.
                    self.reporter.scan_failure(&e);
                    break;
                }
            };
            scanned += 1;

            let url = line.trim();
            if url.is_empty() || !url.starts_with("http") {
                self.reporter.invalid_url(url);
                continue;
            }

            self.process_url(url).await;
        }
        info!(lines = scanned, "batch finished");
    }

    async fn process_url(&mut self, url: &str) {
        let tree = match self.fetcher.fetch(url).await {
            Ok(tree) => tree,
            Err(e) => {
                // Per-URL failures are isolated; no retry, the batch moves on.
                self.reporter.fetch_failure(url, &e);
                return;
            }
        };

        let forms = extract_forms(&tree);
        debug!(url, count = forms.len(), "extracted forms");

        // A page with no forms produces no output section.
        if !forms.is_empty() {
            self.reporter.page(url, &forms);
        }
    }
}
