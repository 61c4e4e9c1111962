//! Single forward pass over a text stream, tallying symbol unigrams and
//! symbol/digit bigrams.
//!
//! Rules per code point:
//! 1. skippable whitespace is ignored without touching the pending state;
//! 2. anything that is neither symbol nor digit clears the pending character;
//! 3. symbols bump the unigram table, and any qualifying character pairs
//!    with the pending one unless both are digits.

use std::io::{BufRead, BufReader, Read};

use crate::core::{
    classify::CharClass,
    constants::BUF_CAP,
    error::ScanError,
    output::Report,
    table::FrequencyTable,
};

/// The two tables a scan produces.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NgramCounts {
    pub unigrams: FrequencyTable,
    pub bigrams: FrequencyTable,
}

impl NgramCounts {
    #[must_use]
    pub fn table(&self, report: Report) -> &FrequencyTable {
        match report {
            Report::Unigrams => &self.unigrams,
            Report::Bigrams => &self.bigrams,
        }
    }
}

/// Streaming accumulator.  Feed characters, then call [`Aggregator::finish`].
#[derive(Debug, Default)]
pub struct Aggregator {
    prev: Option<char>,
    counts: NgramCounts,
    // reused for building two-char keys
    key: String,
}

impl Aggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, c: char) {
        let class = CharClass::of(c);
        match class {
            CharClass::Skippable => return,
            CharClass::Other => {
                self.prev = None; // reset
                return;
            }
            CharClass::Symbol | CharClass::Digit => {}
        }

        if class == CharClass::Symbol {
            self.key.clear();
            self.key.push(c);
            self.counts.unigrams.increment(&self.key);
        }

        if let Some(p) = self.prev {
            // double digits are never counted
            let both_digits = class == CharClass::Digit && CharClass::of(p) == CharClass::Digit;
            if !both_digits {
                self.key.clear();
                self.key.push(p);
                self.key.push(c);
                self.counts.bigrams.increment(&self.key);
            }
        }

        self.prev = Some(c);
    }

    pub fn feed_str(&mut self, s: &str) {
        for c in s.chars() {
            self.feed(c);
        }
    }

    /// End of stream; a pending character never forms a trailing bigram.
    #[must_use]
    pub fn finish(self) -> NgramCounts {
        self.counts
    }
}

/// Count an in-memory string.
#[must_use]
pub fn count_str(s: &str) -> NgramCounts {
    let mut agg = Aggregator::new();
    agg.feed_str(s);
    agg.finish()
}

/// Count a UTF-8 stream, reading it once, forward only.
///
/// Invalid UTF-8 aborts with the offending line number.
pub fn count_reader<R: Read>(src: R) -> Result<NgramCounts, ScanError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = String::with_capacity(256);
    let mut agg = Aggregator::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_line(&mut buf).map_err(|source| ScanError {
            line: line_no + 1,
            source,
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;
        agg.feed_str(&buf);
    }
    Ok(agg.finish())
}
