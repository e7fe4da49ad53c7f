use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::errors::ActifuzzError;

/// Built-in payloads, in the order variants are generated
pub fn default_payloads() -> Vec<String> {
    vec![
        String::new(),
        " ".to_owned(),
        "null".to_owned(),
        "None".to_owned(),
        "0".to_owned(),
        "-1".to_owned(),
        "9999999999".to_owned(),
        "!@#$%^&*()".to_owned(),
        "A".repeat(100),
        "A".repeat(5000),
        "<script>alert(1)</script>".to_owned(),
        "🔥".to_owned(),
        "\n\t".to_owned(),
    ]
}

/// Payload list used for one run, either user supplied or the built-in one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadList(Vec<String>);

impl PayloadList {
    /// Pick the custom list when it has at least one entry, built-in otherwise
    pub fn new(custom: Option<Vec<String>>) -> PayloadList {
        match custom {
            Some(payloads) if !payloads.is_empty() => PayloadList(payloads),
            _ => PayloadList::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for PayloadList {
    fn default() -> Self {
        PayloadList(default_payloads())
    }
}

/// Read payloads from a wordlist file, one per line.
///
/// Blank lines and lines starting with `#` (after leading whitespace) are skipped.
/// Invalid UTF-8 is replaced rather than rejected. An empty result is not an
/// error, the caller falls back to the built-in list.
pub fn load_wordlist(path: &Path) -> Result<Vec<String>, ActifuzzError> {
    if !path.is_file() {
        return Err(ActifuzzError::WordlistNotFound(path.to_path_buf()));
    }

    let read_error = |source| ActifuzzError::WordlistRead {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut reader = BufReader::new(file);
    let mut payloads = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).map_err(read_error)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);

        if line.is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        payloads.push(line.to_owned());
    }

    info!("loaded {} payloads from {:?}", payloads.len(), path);

    Ok(payloads)
}
