/// Data layer: patient records, loading, and aggregation.
///
/// Architecture:
/// ```text
///   The_Cancer_data_1500_V2.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + header check → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, column names, optional ClassifierScore
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  counts, group means, histograms, densities
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
