use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MathError {
    #[error("Invalid byte length: expected {expected}, found {found}")]
    InvalidByteLength { expected: usize, found: usize },
    #[error("Singular matrix (determinant {det})")]
    SingularMatrix { det: f64 },
}

pub type MathResult<T> = Result<T, MathError>;

/// Reads `N` little-endian `f64` values packed back to back.
pub(crate) fn read_le_f64<const N: usize>(bytes: &[u8]) -> MathResult<[f64; N]> {
    let expected = N * std::mem::size_of::<f64>();
    if bytes.len() != expected {
        return Err(MathError::InvalidByteLength {
            expected,
            found: bytes.len(),
        });
    }
    let mut values = [0.0; N];
    for (value, chunk) in values.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut raw = [0u8; 8];
        raw.copy_from_slice(chunk);
        *value = f64::from_le_bytes(raw);
    }
    Ok(values)
}
