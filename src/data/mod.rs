/// Data layer: core types, loading, filtering, and the session cache.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file, validate column contract → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  one load per source path, invalidated on mtime change
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<Record>, first-seen brand/category indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  apply brand selector → filtered indices
///   └──────────┘
/// ```

pub mod cache;
pub mod filter;
pub mod loader;
pub mod model;
