// Document input — file reading with an explicit decode step.
//
// Rather than assuming UTF-8 and silently corrupting legacy files, the
// decode order is declared: BOM sniff first (catches UTF-16 exports from
// Windows editors), then strict UTF-8, then GBK as the legacy fallback
// for mainland-Chinese documents (GBK is a superset of GB2312). A file
// that none of these decode cleanly is a fatal error, not a lossy read.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use encoding_rs::{Encoding, GBK};
use tracing::debug;

/// Read and decode one document.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    decode(&bytes).with_context(|| format!("Failed to decode document: {}", path.display()))
}

fn decode(bytes: &[u8]) -> Result<String> {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(bytes) {
        debug!(encoding = encoding.name(), "BOM detected");
        // decode() strips the BOM for the encoding it belongs to
        let (text, _, had_errors) = encoding.decode(bytes);
        if had_errors {
            bail!("Malformed {} text", encoding.name());
        }
        return Ok(text.into_owned());
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(text.to_string());
    }

    debug!("Not valid UTF-8, falling back to GBK");
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        bail!("Document is neither valid UTF-8 nor GBK");
    }
    Ok(text.into_owned())
}
