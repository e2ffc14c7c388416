//! Labelled values: the ordered entry set plus its text loaders.

use std::{
    error::Error,
    fmt::{self, Display},
    io::{BufRead, BufReader, Read},
    str::FromStr,
};

use crate::core::error::ChartError;

// --- Public Row Structs ---
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub label: String,
    pub value: f64,
}

/// How a value is treated when sizing its bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Magnitude {
    Finite(f64),
    PositiveInfinity,
    NegativeInfinity,
    NotANumber,
}

impl Magnitude {
    #[inline]
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value.is_nan() {
            Self::NotANumber
        } else if value == f64::INFINITY {
            Self::PositiveInfinity
        } else if value == f64::NEG_INFINITY {
            Self::NegativeInfinity
        } else {
            Self::Finite(value)
        }
    }

    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }
}

/// Insertion-ordered `label -> value` map with unique labels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Entries {
    items: Vec<Entry>,
}

impl Entries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from pairs, rejecting the first repeated label.
    pub fn try_from_pairs<I, L>(pairs: I) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        let mut entries = Self::new();
        for (label, value) in pairs {
            entries.insert(label, value)?;
        }
        Ok(entries)
    }

    pub fn insert(&mut self, label: impl Into<String>, value: f64) -> Result<(), ChartError> {
        let label = label.into();
        if self.contains(&label) {
            return Err(ChartError::DuplicateLabel(label));
        }
        self.items.push(Entry { label, value });
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.items.iter().any(|e| e.label == label)
    }

    #[must_use]
    pub fn get(&self, label: &str) -> Option<f64> {
        self.items.iter().find(|e| e.label == label).map(|e| e.value)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.items.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|e| e.label.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(|e| e.value)
    }
}

impl<'a> IntoIterator for &'a Entries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

// --- Error Handling ---
#[derive(Debug)]
pub struct ParseEntryError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug)]
pub enum ParseErrorKind {
    Io(std::io::Error),
    MissingSeparator(char),
    BadFloat { text: String },
    DuplicateLabel(String),
}

impl Display for ParseEntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Line 0 is a command-line argument, not a file row.
        let at = if self.line == 0 {
            "argument".to_owned()
        } else {
            format!("line {}", self.line)
        };
        match &self.kind {
            ParseErrorKind::Io(e) => write!(f, "I/O error on {at}: {e}"),
            ParseErrorKind::MissingSeparator(c) => {
                write!(f, "{at}: expected `label{c}value`")
            }
            ParseErrorKind::BadFloat { text } => write!(f, "{at}: invalid value '{text}'"),
            ParseErrorKind::DuplicateLabel(l) => write!(f, "{at}: duplicate label `{l}`"),
        }
    }
}
impl Error for ParseEntryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(e) => Some(e),
            _ => None,
        }
    }
}

// --- Helpers ---
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

/// Parse a value, keeping `nan`, `inf` and `-inf` as they are.
#[inline]
fn parse_f64(bytes: &[u8], line: usize) -> Result<f64, ParseEntryError> {
    lexical_core::parse::<f64>(bytes.trim_ascii()).map_err(|_| ParseEntryError {
        line,
        kind: ParseErrorKind::BadFloat {
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    })
}

/// Split at the *last* separator so labels may contain it.
fn split_pair(buf: &[u8], sep: u8, line: usize) -> Result<(&[u8], &[u8]), ParseEntryError> {
    let at = buf
        .iter()
        .rposition(|&b| b == sep)
        .ok_or(ParseEntryError {
            line,
            kind: ParseErrorKind::MissingSeparator(char::from(sep)),
        })?;
    Ok((buf[..at].trim_ascii(), &buf[at + 1..]))
}

/// `LABEL=VALUE`, as given on the command line.
impl FromStr for Entry {
    type Err = ParseEntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut buf = s.as_bytes().to_vec();
        normalize_unicode_minus(&mut buf);
        let (label, value) = split_pair(&buf, b'=', 0)?;
        Ok(Entry {
            label: String::from_utf8_lossy(label).into_owned(),
            value: parse_f64(value, 0)?,
        })
    }
}

// --- Row ingest ---
const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read `label,value` rows.
///
/// Blank lines and `#` comments are skipped, as is a first row whose value
/// column does not parse (a header).
pub fn read_entries<R: Read>(src: R) -> Result<Entries, ParseEntryError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut entries = Entries::new();
    let mut saw_first = false;
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseEntryError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if buf.ends_with(b"\n") {
            buf.pop();
        }
        if buf.ends_with(b"\r") {
            buf.pop();
        }

        normalize_unicode_minus(&mut buf);
        match buf.trim_ascii().first() {
            None | Some(b'#') => continue,
            Some(_) => {}
        }

        let (label, value) = split_pair(&buf, b',', line_no)?;
        let is_header = !saw_first && lexical_core::parse::<f64>(value.trim_ascii()).is_err();
        saw_first = true;
        if is_header {
            continue;
        }

        let value = parse_f64(value, line_no)?;
        let label = String::from_utf8_lossy(label).into_owned();
        if entries.contains(&label) {
            return Err(ParseEntryError {
                line: line_no,
                kind: ParseErrorKind::DuplicateLabel(label),
            });
        }
        entries.items.push(Entry { label, value });
    }
    Ok(entries)
}

pub fn read_entries_from_path(path: &str) -> Result<Entries, ParseEntryError> {
    if path == "-" {
        read_entries(std::io::stdin())
    } else {
        use std::fs::File;
        read_entries(File::open(path).map_err(|e| ParseEntryError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}
