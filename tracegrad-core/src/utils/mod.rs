pub mod dot;
pub mod shape;

#[cfg(test)]
pub(crate) mod testing;
