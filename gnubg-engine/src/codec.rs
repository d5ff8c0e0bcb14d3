//! Reversible text compression for transporting large match payloads.
//!
//! Position and match exports can run to tens of kilobytes; callers move
//! them around as gzip-compressed, base64-encoded tokens. Both directions
//! fail closed: an error is logged and the operation yields `None`, it is
//! never raised to the caller as a crash.

use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::warn;

/// Gzip-compress `text` and encode the result as a base64 token.
pub fn compress(text: &str) -> Option<String> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    if let Err(e) = encoder.write_all(text.as_bytes()) {
        warn!(error = %e, "failed to compress payload");
        return None;
    }
    match encoder.finish() {
        Ok(bytes) => Some(STANDARD.encode(bytes)),
        Err(e) => {
            warn!(error = %e, "failed to finish gzip stream");
            None
        }
    }
}

/// Decode a base64 token and gunzip it back to text. Inverse of
/// [`compress`].
pub fn decompress(token: &str) -> Option<String> {
    let bytes = match STANDARD.decode(token) {
        Ok(b) => b,
        Err(e) => {
            warn!(error = %e, "payload token is not valid base64");
            return None;
        }
    };
    let mut text = String::new();
    match GzDecoder::new(bytes.as_slice()).read_to_string(&mut text) {
        Ok(_) => Some(text),
        Err(e) => {
            warn!(error = %e, "failed to decompress payload");
            None
        }
    }
}
