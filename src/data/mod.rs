//! Data layer: loading, enrichment and filtering.
//!
//! Architecture:
//! ```text
//!  .xlsx / .xls / .ods / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  first sheet → RawTable → RawCompany rows
//!   └──────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ index/industry │  weighted sum + name keywords → CompanyRecord
//!   └────────────────┘
//!        │
//!        ▼
//!   ┌────────────────┐
//!   │ CompanyDataset │  immutable for the session
//!   └────────────────┘
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  filter   │  FilterParams → filtered indices
//!   └──────────┘
//! ```

pub mod error;
pub mod filter;
pub mod index;
pub mod industry;
pub mod loader;
pub mod model;
