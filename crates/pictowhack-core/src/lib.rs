pub mod classifier;
pub mod config;
pub mod error;
pub mod pattern;
pub mod processor;
pub mod runner;
pub mod text;

pub use classifier::{
    category_code, classify, is_pictogram, is_pictogram_with, Classification, PictogramCallback,
    Rule, KEEP_KEYWORDS, KEEP_RANGES,
};
pub use config::{Config, RunOptions, ScanConfig, DEFAULT_CONFIG_TEMPLATE, LOCAL_CONFIG_FILE};
pub use error::{PictowhackError, Result};
pub use pattern::expand_pattern;
pub use processor::{process_file, FileOutcome};
pub use runner::{EventCallback, RunEvent, RunSummary, Runner};
pub use text::{decode_permissive, strip_pictograms};
