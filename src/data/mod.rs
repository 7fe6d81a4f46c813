/// Data layer: core types and CSV ingestion.
///
/// Architecture:
/// ```text
///   raw .csv text
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  skip / header / delimiter → parse cells (NaN on failure)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Row> of equal arity + column labels
///   └──────────┘
///        │
///        ▼
///   slicer::ChartInstance (domains, markers, measurement)
/// ```

pub mod loader;
pub mod model;
