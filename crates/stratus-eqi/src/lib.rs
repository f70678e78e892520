#![deny(unsafe_code)]
#![warn(missing_docs)]

//! Chainable queries over Arrow record batches.
//!
//! [`Eqi`] wraps one [`RecordBatch`](arrow::record_batch::RecordBatch) and
//! exposes `e_*` methods that filter, reshape and group it in place. Every
//! method is a thin call into [`Tabular`], which is implemented for
//! `RecordBatch` with Arrow's compute kernels; a chain of `e_*` calls yields
//! the same batch as the equivalent `Tabular` calls made one after another.
//!
//! ```rust
//! # use std::sync::Arc;
//! # use arrow::array::{ArrayRef, Float64Array, StringArray};
//! # use arrow::record_batch::RecordBatch;
//! use stratus_eqi::{Aggregation, Eqi};
//!
//! # fn main() -> stratus_eqi::Result<()> {
//! let batch = RecordBatch::try_from_iter(vec![
//!     ("site", Arc::new(StringArray::from(vec!["n", "s", "n"])) as ArrayRef),
//!     ("signal", Arc::new(Float64Array::from(vec![1.0, 2.0, 3.0])) as ArrayRef),
//! ])?;
//!
//! let mut table = Eqi::from(batch);
//! table.e_group(&["site"], Aggregation::Sum)?.e_loc("n")?;
//! assert_eq!(table.num_rows(), 1);
//! # Ok(())
//! # }
//! ```

pub mod eqi;
pub mod error;
pub mod tabular;

pub use eqi::{Eqi, to_eqi};
pub use error::{EqiError, Result};
pub use tabular::{Aggregation, Tabular, Value};
