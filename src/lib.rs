//! WordLift - Entity link rewriting for semantically annotated HTML
//!
//! This crate re-exports all layers of the WordLift content filter for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: wordlift_runtime    - Site snapshots, CLI, logging setup
//! Layer 3: wordlift_filter     - Link policy, rendering, content rewriting
//! Layer 2: wordlift_storage    - Entity store, permalinks, site configuration
//! Layer 1: wordlift_markup     - Annotation marker scanning
//! Layer 0: wordlift_foundation - Core types (EntityRecord, LinkState, Error)
//! ```

pub use wordlift_filter as filter;
pub use wordlift_foundation as foundation;
pub use wordlift_markup as markup;
pub use wordlift_runtime as runtime;
pub use wordlift_storage as storage;
