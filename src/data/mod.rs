/// Data layer: file loading, core types, and series extraction.
///
/// Architecture:
/// ```text
///   benchmark table (.txt)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read lines → DataTable (header + token rows)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  extract  │  ratio mode / multi-column mode → SeriesSet
///   └──────────┘
///        │
///        ▼
///     renderer (crate::app)
/// ```

pub mod error;
pub mod extract;
pub mod loader;
pub mod model;
pub mod sample;
