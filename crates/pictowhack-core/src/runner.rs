//! Run driver: pattern expansion, per-file processing and run totals.

use std::path::Path;

use crate::classifier::Classification;
use crate::config::{RunOptions, ScanConfig};
use crate::error::PictowhackError;
use crate::pattern::expand_pattern;
use crate::processor::process_file;

/// Progress reported while running
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Pattern matched nothing
    NoMatches { pattern: &'a str },
    /// Pattern could not be parsed
    InvalidPattern {
        pattern: &'a str,
        error: &'a PictowhackError,
    },
    /// A character is being removed (verbose only)
    Pictogram {
        path: &'a Path,
        classification: &'a Classification,
    },
    /// File had pictograms; `index` is the running count of processed files
    Modified {
        index: usize,
        path: &'a Path,
        removed: usize,
        dry_run: bool,
    },
    /// File had no pictograms (verbose only)
    Unchanged { index: usize, path: &'a Path },
    /// Match is not a regular file (verbose only)
    SkippedDirectory { path: &'a Path },
    /// File could not be read or written
    Failed {
        path: &'a Path,
        error: &'a PictowhackError,
    },
}

/// Callback type for run progress reporting
pub type EventCallback<'a> = &'a dyn Fn(&RunEvent<'_>);

/// Totals for a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_processed: usize,
    /// Files modified, or that would be modified in a dry run
    pub files_modified: usize,
    pub files_failed: usize,
    pub chars_removed: usize,
    pub dry_run: bool,
}

pub struct Runner {
    options: RunOptions,
    scan: ScanConfig,
}

impl Runner {
    pub fn new(options: RunOptions, scan: ScanConfig) -> Self {
        Self { options, scan }
    }

    /// Process every file matched by `patterns`, in order.
    ///
    /// Per-pattern and per-file failures are reported through `on_event` and
    /// never stop the run.
    pub fn run<S: AsRef<str>>(&self, patterns: &[S], on_event: EventCallback<'_>) -> RunSummary {
        let mut summary = RunSummary {
            dry_run: self.options.dry_run,
            ..RunSummary::default()
        };

        for pattern in patterns {
            let pattern = pattern.as_ref();

            let matches = match expand_pattern(pattern, &self.scan) {
                Ok(matches) => matches,
                Err(error) => {
                    on_event(&RunEvent::InvalidPattern {
                        pattern,
                        error: &error,
                    });
                    continue;
                }
            };

            if matches.is_empty() {
                on_event(&RunEvent::NoMatches { pattern });
                continue;
            }

            for path in &matches {
                if !path.is_file() {
                    if self.options.verbose {
                        on_event(&RunEvent::SkippedDirectory { path });
                    }
                    continue;
                }

                summary.files_processed += 1;
                self.process_one(path, summary.files_processed, &mut summary, on_event);
            }
        }

        summary
    }

    fn process_one(
        &self,
        path: &Path,
        index: usize,
        summary: &mut RunSummary,
        on_event: EventCallback<'_>,
    ) {
        let report = |classification: &Classification| {
            on_event(&RunEvent::Pictogram {
                path,
                classification,
            })
        };
        let on_pictogram: Option<&dyn Fn(&Classification)> = if self.options.verbose {
            Some(&report)
        } else {
            None
        };

        match process_file(path, self.options.dry_run, on_pictogram) {
            Ok(outcome) if outcome.modified => {
                summary.files_modified += 1;
                summary.chars_removed += outcome.removed();
                on_event(&RunEvent::Modified {
                    index,
                    path,
                    removed: outcome.removed(),
                    dry_run: self.options.dry_run,
                });
            }
            Ok(_) => {
                if self.options.verbose {
                    on_event(&RunEvent::Unchanged { index, path });
                }
            }
            Err(error) => {
                summary.files_failed += 1;
                on_event(&RunEvent::Failed {
                    path,
                    error: &error,
                });
            }
        }
    }
}
