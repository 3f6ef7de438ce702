use std::fmt;

use cvd_sources::CsvError;

use crate::rows::Metric;

/// The three upstream series do not line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataShapeError {
    /// Cases, deaths and (aligned) recovered must have one row per location.
    RowCountMismatch {
        cases: usize,
        deaths: usize,
        recovered: usize,
    },
    /// The first four columns are not `Province/State, Country/Region, Lat, Long`.
    MetadataPrefix { metric: Metric, found: Vec<String> },
}

impl fmt::Display for DataShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataShapeError::RowCountMismatch {
                cases,
                deaths,
                recovered,
            } => write!(
                f,
                "data shape error: row counts differ (cases={cases}, deaths={deaths}, recovered={recovered})"
            ),
            DataShapeError::MetadataPrefix { metric, found } => write!(
                f,
                "data shape error: {metric} header does not start with the metadata columns (found {found:?})"
            ),
        }
    }
}

impl std::error::Error for DataShapeError {}

/// Failure turning three CSV documents into a snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    Csv { metric: Metric, source: CsvError },
    Shape(DataShapeError),
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::Csv { metric, source } => write!(f, "{metric} csv: {source}"),
            BuildError::Shape(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for BuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BuildError::Csv { source, .. } => Some(source),
            BuildError::Shape(e) => Some(e),
        }
    }
}

impl From<DataShapeError> for BuildError {
    fn from(e: DataShapeError) -> Self {
        BuildError::Shape(e)
    }
}
