/// The numeric value carried by every graph node.
///
/// The engine treats it as opaque: it only needs the shape, elementwise
/// addition (gradient accumulation) and `ones` (seed gradients).
pub type Array = ndarray::ArrayD<f64>;

/// Defines the possible data types for node values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    /// 64-bit floating-point type.
    F64,
}

impl DType {
    /// Name used when rendering node labels (numpy spelling).
    pub fn name(&self) -> &'static str {
        match self {
            DType::F64 => "float64",
        }
    }
}

impl std::fmt::Display for DType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
