// src/node/accessors.rs
use crate::{error::TraceGradError, node::Node, types::Array, types::DType};
use std::cell::Ref;

impl Node {
    /// Borrows the value, failing if the node is empty.
    pub(crate) fn value_ref(&self, operation: &str) -> Result<Ref<'_, Array>, TraceGradError> {
        Ref::filter_map(self.read_data(), |data| data.value.as_ref()).map_err(|_| {
            TraceGradError::MissingValue {
                operation: operation.to_string(),
            }
        })
    }

    /// Returns a clone of the node's value, if any.
    pub fn value(&self) -> Option<Array> {
        self.read_data().value.clone()
    }

    /// Replaces the node's value. Graph links and gradient are left untouched.
    pub fn set_value(&self, value: Array) {
        self.write_data().value = Some(value);
    }

    /// Returns `true` when the node holds a value.
    pub fn has_value(&self) -> bool {
        self.read_data().value.is_some()
    }

    /// Returns a clone of the value's shape.
    pub fn shape(&self) -> Result<Vec<usize>, TraceGradError> {
        Ok(self.value_ref("shape()")?.shape().to_vec())
    }

    /// Returns the number of dimensions of the value.
    pub fn ndim(&self) -> Result<usize, TraceGradError> {
        Ok(self.value_ref("ndim()")?.ndim())
    }

    /// Returns the total number of elements of the value.
    pub fn size(&self) -> Result<usize, TraceGradError> {
        Ok(self.value_ref("size()")?.len())
    }

    /// Returns the length of the first axis (1 for 0-dimensional values).
    pub fn len(&self) -> Result<usize, TraceGradError> {
        let value = self.value_ref("len()")?;
        Ok(value.shape().first().copied().unwrap_or(1))
    }

    /// Returns the element type of the value.
    pub fn dtype(&self) -> Result<DType, TraceGradError> {
        self.value_ref("dtype()")?;
        Ok(DType::F64)
    }

    /// Extracts the single element of a node holding exactly one element.
    pub fn item(&self) -> Result<f64, TraceGradError> {
        let value = self.value_ref("item()")?;
        if value.len() != 1 {
            return Err(TraceGradError::ShapeMismatch {
                expected: vec![],
                actual: value.shape().to_vec(),
                operation: "item()".to_string(),
            });
        }
        value
            .iter()
            .next()
            .copied()
            .ok_or_else(|| TraceGradError::InternalError("item(): empty value".to_string()))
    }

    /// Returns the display name of the node.
    pub fn name(&self) -> Option<String> {
        self.read_data().name.clone()
    }

    /// Sets the display name of the node.
    pub fn set_name(&self, name: impl Into<String>) {
        self.write_data().name = Some(name.into());
    }

    /// Topological depth of the node: 0 for leaves.
    pub fn generation(&self) -> usize {
        self.read_data().generation
    }

    /// Returns `true` if the node was not produced by a recorded operation.
    pub fn is_leaf(&self) -> bool {
        self.read_data().producer.is_none()
    }
}
