/// Data layer: core types, loading, validation, statistics and binning.
///
/// Architecture:
/// ```text
///  .csv / .tsv / .txt
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → RawTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ validate  │  column 1 → MeasurementSeries | ValidationError
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌─────────┐   ┌───────────┐
///   │  stats   │   │ histogram │
///   └─────────┘   └───────────┘
///        │              │
///        └──────┬───────┘
///               ▼
///   ┌──────────────┐
///   │  pipeline     │  AnalysisReport → ResultSink
///   └──────────────┘
/// ```

pub mod histogram;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod stats;
pub mod validate;
