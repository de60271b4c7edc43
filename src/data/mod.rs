/// Data layer: core types, loading, filtering, and presentation planning.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → SurveyDataset (memoized for the default file)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ SurveyDataset  │  Vec<SurveyRecord>, indicator column index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply dimension selections → filtered row indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  present  │  row count + selected regions → PresentationPlan
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod present;
