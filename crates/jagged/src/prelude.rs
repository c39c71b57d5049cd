//! Prelude module - common imports for jagged users
//!
//! ```rust
//! use jagged::prelude::*;
//! ```

pub use crate::{
    // Rendering
    render,
    ColumnView,
    // Error types
    Error,
    // Main types
    Grid,
    Result,
    RowView,
    Table,
};

#[cfg(feature = "csv")]
pub use crate::{
    // I/O types
    CsvReadOptions,
    CsvReader,
    CsvWriteOptions,
    CsvWriter,
    // Extension traits
    GridExt,
};
