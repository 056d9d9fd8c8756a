use std::fs;
use std::io::{self, Read};
use std::path::Path;

use chardetng::EncodingDetector;
use color_eyre::Result;
use color_eyre::eyre::WrapErr;
use encoding_rs::Encoding;
use tracing::{debug, warn};

/// Reads a curriculum export from `path`, or from stdin when `path` is
/// absent or `-`.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    read_source_or(path, io::stdin().lock())
}

/// Like [`read_source`], with `fallback` standing in for stdin.
pub fn read_source_or<R: Read>(path: Option<&Path>, mut fallback: R) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).wrap_err_with(|| format!("failed to read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            fallback.read_to_end(&mut buf).wrap_err("failed to read stdin")?;
            buf
        }
    };
    Ok(decode(&bytes))
}

/// Decodes raw bytes, honouring a BOM and otherwise guessing the charset.
/// Pages saved from Korean sites are often EUC-KR rather than UTF-8, so the
/// guess is biased towards `.kr`.
pub fn decode(bytes: &[u8]) -> String {
    let encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(Some(b"kr"), true)
        }
    };
    let (text, used, had_errors) = encoding.decode(bytes);
    debug!(encoding = used.name(), bytes = bytes.len(), "decoded input");
    if had_errors {
        warn!(encoding = used.name(), "input contained undecodable bytes");
    }
    text.into_owned()
}
