/// Data layer: the in-memory table and the CSV loader.
///
/// Architecture:
/// ```text
///   file.csv  (';'-delimited, "Timestamp" header column)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse rows, coerce Timestamp → NaiveDateTime
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  timestamps + ordered named f64 columns
///   └──────────┘
/// ```
pub mod loader;
pub mod model;
