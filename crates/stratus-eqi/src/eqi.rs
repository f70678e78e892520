//! The fluent wrapper.

use std::ops::Deref;

use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;

use crate::error::{EqiError, Result};
use crate::tabular::{Aggregation, Tabular, Value};

/// A [`RecordBatch`] with chainable `e_*` query methods.
///
/// Each `e_*` method replaces the wrapped batch and returns `&mut Self`, so
/// calls chain with `?`:
///
/// ```rust
/// # use std::sync::Arc;
/// # use arrow::array::{ArrayRef, Int64Array, StringArray};
/// # use arrow::record_batch::RecordBatch;
/// use stratus_eqi::to_eqi;
///
/// # fn main() -> stratus_eqi::Result<()> {
/// # let batch = RecordBatch::try_from_iter(vec![
/// #     ("site", Arc::new(StringArray::from(vec!["a", "b", "a"])) as ArrayRef),
/// #     ("run", Arc::new(Int64Array::from(vec![1, 2, 3])) as ArrayRef),
/// # ])?;
/// let mut table = to_eqi(batch);
/// table.e_is("site", "a")?.e_sort(&["run"], true)?.e_head(1);
/// assert_eq!(table.num_rows(), 1);
/// # Ok(())
/// # }
/// ```
///
/// The batch's own read-only API is reachable through `Deref`; use
/// [`Eqi::e_apply`] to adopt the result of any other batch operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Eqi {
    batch: RecordBatch,
    index: Option<String>,
}

/// Wrap a batch.
pub fn to_eqi(batch: RecordBatch) -> Eqi {
    Eqi::new(batch)
}

impl Eqi {
    /// Wrap a batch with no index.
    pub fn new(batch: RecordBatch) -> Self {
        Self { batch, index: None }
    }

    /// The index column, if one is set.
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Unwrap the batch.
    pub fn into_inner(self) -> RecordBatch {
        self.batch
    }

    fn replace(&mut self, op: &'static str, batch: RecordBatch) -> &mut Self {
        tracing::trace!(
            op,
            rows_before = self.batch.num_rows(),
            rows_after = batch.num_rows(),
            columns = batch.num_columns(),
            "eqi"
        );
        self.batch = batch;
        if let Some(index) = &self.index
            && self.batch.schema().index_of(index).is_err()
        {
            self.index = None;
        }
        self
    }

    /// Keep only `columns`.
    pub fn e_select(&mut self, columns: &[&str]) -> Result<&mut Self> {
        let batch = self.batch.select(columns)?;
        Ok(self.replace("select", batch))
    }

    /// Remove `columns`.
    pub fn e_drop(&mut self, columns: &[&str]) -> Result<&mut Self> {
        let batch = self.batch.drop_columns(columns)?;
        Ok(self.replace("drop", batch))
    }

    /// Rename columns by `(from, to)` pairs. The index follows its column.
    pub fn e_rename(&mut self, mapping: &[(&str, &str)]) -> Result<&mut Self> {
        let batch = self.batch.rename(mapping)?;
        if let Some(index) = &self.index
            && let Some((_, to)) = mapping.iter().find(|(from, _)| *from == index.as_str())
        {
            self.index = Some(to.to_string());
        }
        Ok(self.replace("rename", batch))
    }

    /// Keep rows where `column` equals `value`.
    pub fn e_is(&mut self, column: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let batch = self.batch.filter_eq(column, &value.into())?;
        Ok(self.replace("is", batch))
    }

    /// Keep rows where `column` equals any of `values`.
    pub fn e_isin<I, V>(&mut self, column: &str, values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let values: Vec<Value> = values.into_iter().map(Into::into).collect();
        let batch = self.batch.filter_in(column, &values)?;
        Ok(self.replace("isin", batch))
    }

    /// Keep rows where `column` differs from `value`.
    pub fn e_not(&mut self, column: &str, value: impl Into<Value>) -> Result<&mut Self> {
        let batch = self.batch.filter_ne(column, &value.into())?;
        Ok(self.replace("not", batch))
    }

    /// Order rows by `columns`.
    pub fn e_sort(&mut self, columns: &[&str], descending: bool) -> Result<&mut Self> {
        let batch = self.batch.sort_by(columns, descending)?;
        Ok(self.replace("sort", batch))
    }

    /// Keep the first `n` rows.
    pub fn e_head(&mut self, n: usize) -> &mut Self {
        let batch = self.batch.head(n);
        self.replace("head", batch)
    }

    /// Make `column` the index and move it to the front.
    pub fn e_set_index(&mut self, column: &str) -> Result<&mut Self> {
        let batch = self.batch.move_to_front(column)?;
        self.index = Some(column.to_string());
        Ok(self.replace("set_index", batch))
    }

    /// Forget the index. The column stays.
    pub fn e_reset_index(&mut self) -> &mut Self {
        self.index = None;
        self
    }

    /// Keep rows whose index equals `key`.
    pub fn e_loc(&mut self, key: impl Into<Value>) -> Result<&mut Self> {
        let index = self.index.clone().ok_or(EqiError::NoIndex)?;
        let batch = self.batch.filter_eq(&index, &key.into())?;
        Ok(self.replace("loc", batch))
    }

    /// Group by `keys` and reduce the other columns. A single key becomes the
    /// index.
    pub fn e_group(&mut self, keys: &[&str], aggregation: Aggregation) -> Result<&mut Self> {
        let batch = self.batch.group_aggregate(keys, aggregation)?;
        self.index = match keys {
            [key] => Some(key.to_string()),
            _ => None,
        };
        Ok(self.replace("group", batch))
    }

    /// Replace the batch with the result of `f`.
    pub fn e_apply<F>(&mut self, f: F) -> Result<&mut Self>
    where
        F: FnOnce(&RecordBatch) -> std::result::Result<RecordBatch, ArrowError>,
    {
        let batch = f(&self.batch)?;
        Ok(self.replace("apply", batch))
    }
}

impl Deref for Eqi {
    type Target = RecordBatch;

    fn deref(&self) -> &RecordBatch {
        &self.batch
    }
}

impl From<RecordBatch> for Eqi {
    fn from(batch: RecordBatch) -> Self {
        Self::new(batch)
    }
}

impl From<Eqi> for RecordBatch {
    fn from(eqi: Eqi) -> Self {
        eqi.into_inner()
    }
}
