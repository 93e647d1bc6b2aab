use std::fs;
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::chart::encoding::{CANDIDATES, TextEncoding};
use crate::chart::types::SourceChart;
use crate::error::{DecodeAttempt, Error, Result};

/// A parsed chart together with the encoding it was read with.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedChart {
    pub chart: SourceChart,
    pub encoding: TextEncoding,
}

/// Parse chart JSON that is already decoded.
pub fn parse_chart(text: &str) -> Result<SourceChart> {
    Ok(serde_json::from_str(text)?)
}

/// Load a chart file, trying each candidate encoding in turn.
///
/// The first encoding under which the file both decodes and parses wins.
pub fn load_chart<P: AsRef<Path>>(path: P) -> Result<LoadedChart> {
    let path = path.as_ref();
    if !path.is_file() {
        error!("Input file {} does not exist", path.display());
        return Err(Error::InputNotFound(path.to_path_buf()));
    }

    info!("Reading chart: {}", path.display());
    let bytes = fs::read(path)?;
    decode_chart(&bytes)
}

/// Decode raw chart bytes with the encoding fallback chain.
pub fn decode_chart(bytes: &[u8]) -> Result<LoadedChart> {
    let mut attempts = Vec::new();

    for encoding in CANDIDATES {
        let outcome = match encoding.decode(bytes) {
            Some(text) => parse_chart(&text).map_err(|e| e.to_string()),
            None => Err(format!("bytes are not valid {}", encoding)),
        };

        match outcome {
            Ok(chart) => {
                debug!("Decoded chart as {}", encoding);
                return Ok(LoadedChart { chart, encoding });
            }
            Err(message) => {
                warn!("Attempt with encoding {} failed. Error: {}", encoding, message);
                attempts.push(DecodeAttempt {
                    encoding: encoding.name(),
                    message,
                });
            }
        }
    }

    error!("Failed to decode chart with all attempted encodings");
    Err(Error::DecodeFailed { attempts })
}
