//! fluXis chart model and loading.
//!
//! This module contains:
//! - `SourceChart`, `ChartMetadata`, `TimingPoint`, `HitObject` - the `.fsc` document
//! - `TextEncoding` - candidate encodings for reading chart files
//! - `load_chart` - read a chart file with encoding fallback

mod encoding;
mod loader;
mod types;

pub use encoding::*;
pub use loader::*;
pub use types::*;
