//! Dataset identifiers and the upstream URL table.
//!
//! # Design Decisions
//! - Identifiers are a closed enum; parsing is exact and case-sensitive
//! - The table is built once from the configured base URL and never mutated
//! - Lookup is a linear scan over three entries

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use url::Url;

/// Errors raised while building or querying the source table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The requested identifier is not one of the published datasets.
    #[error("unsupported data type '{0}'")]
    UnknownSource(String),

    /// The base URL cannot be joined with a dataset file name.
    #[error("cannot build upstream URL for {code} from base '{base}': {reason}")]
    InvalidBase {
        code: &'static str,
        base: String,
        reason: String,
    },
}

/// One of the published violation datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSource {
    /// Labor Standards Act violations.
    A0101,
    /// Gender Equality in Employment Act violations.
    A0201,
    /// Minimum Wage Act violations.
    A0901,
}

impl DataSource {
    /// Every dataset, in the order they are listed on the index page.
    pub const ALL: [DataSource; 3] = [DataSource::A0101, DataSource::A0201, DataSource::A0901];

    /// Path identifier used in `/api/labor-data/{id}`.
    pub fn code(self) -> &'static str {
        match self {
            DataSource::A0101 => "a0101",
            DataSource::A0201 => "a0201",
            DataSource::A0901 => "a0901",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DataSource::A0101 => "Labor Standards Act violations",
            DataSource::A0201 => "Gender Equality in Employment Act violations",
            DataSource::A0901 => "Minimum Wage Act violations",
        }
    }

    /// Upstream file name under the base URL.
    pub fn file_name(self) -> String {
        format!("announcement_{}.csv", self.code())
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DataSource {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataSource::ALL
            .into_iter()
            .find(|source| source.code() == s)
            .ok_or_else(|| SourceError::UnknownSource(s.to_string()))
    }
}

/// Read-only mapping from dataset to its upstream URL.
#[derive(Debug, Clone)]
pub struct SourceTable {
    entries: Vec<(DataSource, Url)>,
}

impl SourceTable {
    /// Build the table from the directory URL holding the CSV files.
    ///
    /// A base without a trailing `/` is treated as a directory, so
    /// `https://host/data` and `https://host/data/` resolve identically.
    pub fn new(base: &Url) -> Result<Self, SourceError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let entries = DataSource::ALL
            .into_iter()
            .map(|source| {
                base.join(&source.file_name())
                    .map(|url| (source, url))
                    .map_err(|e| SourceError::InvalidBase {
                        code: source.code(),
                        base: base.to_string(),
                        reason: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { entries })
    }

    /// Look up the dataset and URL for a path identifier.
    pub fn resolve(&self, id: &str) -> Result<(DataSource, &Url), SourceError> {
        let source: DataSource = id.parse()?;
        self.url(source)
            .map(|url| (source, url))
            .ok_or_else(|| SourceError::UnknownSource(id.to_string()))
    }

    pub fn url(&self, source: DataSource) -> Option<&Url> {
        self.entries
            .iter()
            .find(|(s, _)| *s == source)
            .map(|(_, url)| url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (DataSource, &Url)> {
        self.entries.iter().map(|(s, url)| (*s, url))
    }
}
