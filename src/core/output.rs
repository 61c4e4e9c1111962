//! Output naming: which chart, what it is called, where it lands.

use std::path::{Path, PathBuf};

use crate::core::constants::{BIGRAM_SUFFIX, UNIGRAM_SUFFIX};

/// The two charts one run produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Report {
    Unigrams,
    Bigrams,
}

impl Report {
    pub const ALL: [Report; 2] = [Report::Unigrams, Report::Bigrams];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unigrams => "unigrams",
            Self::Bigrams => "bigrams",
        }
    }

    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Unigrams => UNIGRAM_SUFFIX,
            Self::Bigrams => BIGRAM_SUFFIX,
        }
    }

    /// `"<stem> unigrams"` etc.
    #[must_use]
    pub fn title(self, stem: &str) -> String {
        format!("{stem} {}", self.name())
    }

    /// `<dir>/<stem>_unigrams.png` etc.
    #[must_use]
    pub fn path_in(self, dir: &Path, stem: &str) -> PathBuf {
        dir.join(format!("{stem}{}", self.suffix()))
    }
}

/// File name without directory and without its final extension.
#[must_use]
pub fn input_stem(path: &Path) -> String {
    path.file_stem()
        .map_or_else(|| "input".to_owned(), |s| s.to_string_lossy().into_owned())
}
