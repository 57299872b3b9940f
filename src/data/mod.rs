/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → MedicineDataset
///   └──────────┘
///        │
///        ▼
///   ┌─────────────────┐
///   │ MedicineDataset │  Vec<Medicine>, manufacturer index
///   └─────────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  name / manufacturer / threshold predicates → filtered view
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate │  means, manufacturer ranking, top rated
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
