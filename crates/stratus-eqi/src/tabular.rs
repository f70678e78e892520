//! The table operations [`Eqi`](crate::Eqi) builds on.
//!
//! [`Tabular`] is implemented for [`RecordBatch`] by delegating to Arrow
//! kernels. Every operation returns a new batch and leaves the input alone.
//!
//! Row filters follow SQL comparison rules: a row whose value is null never
//! matches a non-null [`Value`], for equality and inequality alike. Use
//! [`Value::Null`] to select or exclude null rows.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use arrow::array::{
    Array, ArrayRef, AsArray, BooleanArray, Float64Array, Int64Array, Scalar, StringArray,
    UInt32Array, new_null_array,
};
use arrow::compute::kernels::{boolean, cmp};
use arrow::compute::{self, SortColumn, SortOptions};
use arrow::datatypes::{DataType, Field, Float64Type, Schema};
use arrow::record_batch::RecordBatch;
use arrow::row::{RowConverter, SortField};

use crate::error::{EqiError, Result};

/// A literal compared against column values.
///
/// Converted to the column's type with Arrow's cast rules before comparing.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Matches null entries
    Null,
    /// Boolean literal
    Bool(bool),
    /// Integer literal
    Int(i64),
    /// Floating point literal
    Float(f64),
    /// String literal
    Str(String),
}

impl Value {
    fn to_array(&self, data_type: &DataType) -> Result<ArrayRef> {
        let literal: ArrayRef = match self {
            Value::Null => return Ok(new_null_array(data_type, 1)),
            Value::Bool(v) => Arc::new(BooleanArray::from(vec![*v])),
            Value::Int(v) => Arc::new(Int64Array::from(vec![*v])),
            Value::Float(v) => Arc::new(Float64Array::from(vec![*v])),
            Value::Str(v) => Arc::new(StringArray::from(vec![v.as_str()])),
        };
        if literal.data_type() == data_type {
            Ok(literal)
        } else {
            Ok(compute::cast(&literal, data_type)?)
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// Per-group reduction for [`Tabular::group_aggregate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// Sum of non-null values
    Sum,
    /// Mean of non-null values
    Mean,
    /// Smallest non-null value
    Min,
    /// Largest non-null value
    Max,
    /// Number of non-null values
    Count,
}

/// Table operations used by [`Eqi`](crate::Eqi).
pub trait Tabular: Sized {
    /// Keep only `columns`, in the given order.
    fn select(&self, columns: &[&str]) -> Result<Self>;

    /// Remove `columns`.
    fn drop_columns(&self, columns: &[&str]) -> Result<Self>;

    /// Rename columns by `(from, to)` pairs. The resulting names must be unique.
    fn rename(&self, mapping: &[(&str, &str)]) -> Result<Self>;

    /// Rows where `column` equals `value`.
    fn filter_eq(&self, column: &str, value: &Value) -> Result<Self>;

    /// Rows where `column` equals any of `values`.
    fn filter_in(&self, column: &str, values: &[Value]) -> Result<Self>;

    /// Rows where `column` differs from `value`.
    fn filter_ne(&self, column: &str, value: &Value) -> Result<Self>;

    /// Rows ordered by `columns`, nulls last.
    fn sort_by(&self, columns: &[&str], descending: bool) -> Result<Self>;

    /// The first `n` rows.
    fn head(&self, n: usize) -> Self;

    /// Same columns with `column` first.
    fn move_to_front(&self, column: &str) -> Result<Self>;

    /// One row per distinct combination of `keys`, in first-seen order.
    ///
    /// Key columns come first. `Count` applies to every other column and
    /// yields `Int64`; the other reductions apply to numeric columns only and
    /// yield `Float64`.
    fn group_aggregate(&self, keys: &[&str], aggregation: Aggregation) -> Result<Self>;
}

fn column_index(batch: &RecordBatch, name: &str) -> Result<usize> {
    batch
        .schema()
        .index_of(name)
        .map_err(|_| EqiError::ColumnNotFound(name.to_string()))
}

fn column_indices(batch: &RecordBatch, names: &[&str]) -> Result<Vec<usize>> {
    names.iter().map(|name| column_index(batch, name)).collect()
}

fn eq_mask(column: &ArrayRef, value: &Value) -> Result<BooleanArray> {
    if let Value::Null = value {
        return Ok(boolean::is_null(column.as_ref())?);
    }
    let literal = Scalar::new(value.to_array(column.data_type())?);
    Ok(cmp::eq(column, &literal)?)
}

fn reduce(values: &ArrayRef, rows: &[u32], aggregation: Aggregation) -> Result<Option<f64>> {
    let taken = compute::take(values.as_ref(), &UInt32Array::from(rows.to_vec()), None)?;
    let floats = taken.as_primitive::<Float64Type>();
    Ok(match aggregation {
        Aggregation::Sum => compute::sum(floats),
        Aggregation::Min => compute::min(floats),
        Aggregation::Max => compute::max(floats),
        Aggregation::Mean => {
            let valid = floats.len() - floats.null_count();
            compute::sum(floats).map(|total| total / valid as f64)
        }
        Aggregation::Count => Some((floats.len() - floats.null_count()) as f64),
    })
}

impl Tabular for RecordBatch {
    fn select(&self, columns: &[&str]) -> Result<Self> {
        let indices = column_indices(self, columns)?;
        Ok(self.project(&indices)?)
    }

    fn drop_columns(&self, columns: &[&str]) -> Result<Self> {
        let dropped = column_indices(self, columns)?;
        let kept: Vec<usize> = (0..self.num_columns())
            .filter(|i| !dropped.contains(i))
            .collect();
        Ok(self.project(&kept)?)
    }

    fn rename(&self, mapping: &[(&str, &str)]) -> Result<Self> {
        for (from, _) in mapping {
            column_index(self, from)?;
        }
        let schema = self.schema();
        let fields: Vec<Field> = schema
            .fields()
            .iter()
            .map(|field| {
                match mapping.iter().find(|(from, _)| *from == field.name().as_str()) {
                    Some((_, to)) => field.as_ref().clone().with_name(*to),
                    None => field.as_ref().clone(),
                }
            })
            .collect();
        let mut seen = HashSet::with_capacity(fields.len());
        if let Some(clash) = fields.iter().find(|field| !seen.insert(field.name().as_str())) {
            return Err(EqiError::InvalidArgument(format!(
                "rename produces duplicate column '{}'",
                clash.name()
            )));
        }
        let schema = Schema::new_with_metadata(fields, schema.metadata().clone());
        Ok(RecordBatch::try_new(Arc::new(schema), self.columns().to_vec())?)
    }

    fn filter_eq(&self, column: &str, value: &Value) -> Result<Self> {
        let values = self.column(column_index(self, column)?);
        let mask = eq_mask(values, value)?;
        Ok(compute::filter_record_batch(self, &mask)?)
    }

    fn filter_in(&self, column: &str, values: &[Value]) -> Result<Self> {
        let data = self.column(column_index(self, column)?);
        let mut mask = BooleanArray::from(vec![false; self.num_rows()]);
        for value in values {
            mask = boolean::or_kleene(&mask, &eq_mask(data, value)?)?;
        }
        Ok(compute::filter_record_batch(self, &mask)?)
    }

    fn filter_ne(&self, column: &str, value: &Value) -> Result<Self> {
        let data = self.column(column_index(self, column)?);
        let mask = match value {
            Value::Null => boolean::is_not_null(data.as_ref())?,
            _ => {
                let literal = Scalar::new(value.to_array(data.data_type())?);
                cmp::neq(data, &literal)?
            }
        };
        Ok(compute::filter_record_batch(self, &mask)?)
    }

    fn sort_by(&self, columns: &[&str], descending: bool) -> Result<Self> {
        if columns.is_empty() {
            return Err(EqiError::InvalidArgument("sort needs at least one column".into()));
        }
        let options = SortOptions {
            descending,
            nulls_first: false,
        };
        let sort_columns = column_indices(self, columns)?
            .into_iter()
            .map(|i| SortColumn {
                values: self.column(i).clone(),
                options: Some(options),
            })
            .collect::<Vec<_>>();
        let indices = compute::lexsort_to_indices(&sort_columns, None)?;
        Ok(compute::take_record_batch(self, &indices)?)
    }

    fn head(&self, n: usize) -> Self {
        self.slice(0, n.min(self.num_rows()))
    }

    fn move_to_front(&self, column: &str) -> Result<Self> {
        let first = column_index(self, column)?;
        let order: Vec<usize> = std::iter::once(first)
            .chain((0..self.num_columns()).filter(|i| *i != first))
            .collect();
        Ok(self.project(&order)?)
    }

    fn group_aggregate(&self, keys: &[&str], aggregation: Aggregation) -> Result<Self> {
        if keys.is_empty() {
            return Err(EqiError::InvalidArgument("group needs at least one key column".into()));
        }
        let key_indices = column_indices(self, keys)?;
        let key_columns: Vec<ArrayRef> = key_indices.iter().map(|i| self.column(*i).clone()).collect();

        let converter = RowConverter::new(
            key_columns
                .iter()
                .map(|c| SortField::new(c.data_type().clone()))
                .collect(),
        )?;
        let rows = converter.convert_columns(&key_columns)?;

        let mut groups: Vec<Vec<u32>> = Vec::new();
        let mut seen = HashMap::new();
        for (i, row) in rows.iter().enumerate() {
            let next = groups.len();
            let group = *seen.entry(row).or_insert(next);
            if group == next {
                groups.push(Vec::new());
            }
            groups[group].push(i as u32);
        }

        let schema = self.schema();
        let firsts = UInt32Array::from(groups.iter().map(|g| g[0]).collect::<Vec<_>>());
        let mut fields = Vec::new();
        let mut columns = Vec::new();
        for i in &key_indices {
            fields.push(schema.field(*i).clone());
            columns.push(compute::take(self.column(*i).as_ref(), &firsts, None)?);
        }

        for (i, field) in schema.fields().iter().enumerate() {
            if key_indices.contains(&i) {
                continue;
            }
            let column = self.column(i);
            match aggregation {
                Aggregation::Count => {
                    let counts: Vec<i64> = groups
                        .iter()
                        .map(|rows| rows.iter().filter(|r| column.is_valid(**r as usize)).count() as i64)
                        .collect();
                    fields.push(Field::new(field.name(), DataType::Int64, false));
                    columns.push(Arc::new(Int64Array::from(counts)) as ArrayRef);
                }
                _ if field.data_type().is_numeric() => {
                    let floats = compute::cast(column.as_ref(), &DataType::Float64)?;
                    let reduced = groups
                        .iter()
                        .map(|rows| reduce(&floats, rows, aggregation))
                        .collect::<Result<Vec<_>>>()?;
                    fields.push(Field::new(field.name(), DataType::Float64, true));
                    columns.push(Arc::new(Float64Array::from(reduced)) as ArrayRef);
                }
                _ => {
                    tracing::trace!(column = %field.name(), "Skipping non-numeric column in aggregation");
                }
            }
        }

        Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn sample() -> RecordBatch {
        RecordBatch::try_from_iter(vec![
            (
                "site",
                Arc::new(StringArray::from(vec![Some("a"), Some("b"), Some("a"), None])) as ArrayRef,
            ),
            ("run", Arc::new(Int64Array::from(vec![1, 2, 3, 4])) as ArrayRef),
            (
                "signal",
                Arc::new(Float64Array::from(vec![Some(1.5), Some(2.0), None, Some(4.0)])) as ArrayRef,
            ),
        ])
        .unwrap()
    }

    fn strings(batch: &RecordBatch, name: &str) -> Vec<Option<String>> {
        batch
            .column(batch.schema().index_of(name).unwrap())
            .as_string::<i32>()
            .iter()
            .map(|v| v.map(str::to_string))
            .collect()
    }

    fn ints(batch: &RecordBatch, name: &str) -> Vec<i64> {
        batch
            .column(batch.schema().index_of(name).unwrap())
            .as_primitive::<arrow::datatypes::Int64Type>()
            .values()
            .to_vec()
    }

    fn names(batch: &RecordBatch) -> Vec<String> {
        batch.schema().fields().iter().map(|f| f.name().clone()).collect()
    }

    #[test]
    fn test_select_and_drop() {
        let batch = sample();
        assert_eq!(names(&batch.select(&["signal", "site"]).unwrap()), vec!["signal", "site"]);
        assert_eq!(names(&batch.drop_columns(&["run"]).unwrap()), vec!["site", "signal"]);
        assert_matches!(batch.select(&["nope"]), Err(EqiError::ColumnNotFound(c)) if c == "nope");
    }

    #[test]
    fn test_rename_rejects_duplicate_names() {
        let batch = sample();
        assert_matches!(
            batch.rename(&[("run", "site")]),
            Err(EqiError::InvalidArgument(msg)) if msg.contains("site")
        );
        assert_matches!(
            batch.rename(&[("run", "key"), ("signal", "key")]),
            Err(EqiError::InvalidArgument(_))
        );

        let swapped = batch.rename(&[("run", "signal"), ("signal", "run")]).unwrap();
        assert_eq!(names(&swapped), vec!["site", "signal", "run"]);
    }

    #[test]
    fn test_rename_keeps_data() {
        let renamed = sample().rename(&[("run", "run_id")]).unwrap();
        assert_eq!(names(&renamed), vec!["site", "run_id", "signal"]);
        assert_eq!(ints(&renamed, "run_id"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_filter_eq_casts_literal() {
        let batch = sample();
        assert_eq!(ints(&batch.filter_eq("site", &"a".into()).unwrap(), "run"), vec![1, 3]);
        assert_eq!(ints(&batch.filter_eq("run", &2.into()).unwrap(), "run"), vec![2]);
        assert_eq!(ints(&batch.filter_eq("site", &Value::Null).unwrap(), "run"), vec![4]);
    }

    #[test]
    fn test_filter_ne_drops_nulls() {
        let batch = sample();
        assert_eq!(ints(&batch.filter_ne("site", &"a".into()).unwrap(), "run"), vec![2]);
        assert_eq!(ints(&batch.filter_ne("site", &Value::Null).unwrap(), "run"), vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_in() {
        let batch = sample();
        let matched = batch.filter_in("run", &[1.into(), 4.into(), 9.into()]).unwrap();
        assert_eq!(ints(&matched, "run"), vec![1, 4]);

        let with_null = batch.filter_in("site", &["b".into(), Value::Null]).unwrap();
        assert_eq!(ints(&with_null, "run"), vec![2, 4]);

        assert_eq!(batch.filter_in("run", &[]).unwrap().num_rows(), 0);
    }

    #[test]
    fn test_sort_and_head() {
        let sorted = sample().sort_by(&["run"], true).unwrap();
        assert_eq!(ints(&sorted, "run"), vec![4, 3, 2, 1]);
        assert_eq!(ints(&sorted.head(2), "run"), vec![4, 3]);
        assert_eq!(sorted.head(10).num_rows(), 4);

        let by_site = sample().sort_by(&["site", "run"], false).unwrap();
        assert_eq!(
            strings(&by_site, "site"),
            vec![Some("a".into()), Some("a".into()), Some("b".into()), None]
        );
        assert_matches!(sample().sort_by(&[], false), Err(EqiError::InvalidArgument(_)));
    }

    #[test]
    fn test_move_to_front() {
        assert_eq!(
            names(&sample().move_to_front("signal").unwrap()),
            vec!["signal", "site", "run"]
        );
    }

    #[test]
    fn test_group_sum_and_count() {
        let summed = sample().group_aggregate(&["site"], Aggregation::Sum).unwrap();
        assert_eq!(names(&summed), vec!["site", "run", "signal"]);
        assert_eq!(
            strings(&summed, "site"),
            vec![Some("a".into()), Some("b".into()), None]
        );
        let signal = summed.column(2).as_primitive::<Float64Type>();
        assert_eq!(signal.value(0), 1.5);
        assert_eq!(signal.value(1), 2.0);
        assert_eq!(summed.column(1).as_primitive::<Float64Type>().value(0), 4.0);

        let counted = sample().group_aggregate(&["site"], Aggregation::Count).unwrap();
        assert_eq!(ints(&counted, "signal"), vec![1, 1, 1]);
        assert_eq!(ints(&counted, "run"), vec![2, 1, 1]);
    }

    #[test]
    fn test_group_mean_skips_text_columns() {
        let means = sample()
            .select(&["run", "site"])
            .unwrap()
            .group_aggregate(&["run"], Aggregation::Mean)
            .unwrap();
        assert_eq!(names(&means), vec!["run"]);
        assert_eq!(means.num_rows(), 4);
    }
}
