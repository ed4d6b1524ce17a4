//! Square matrices stored as `#[repr(C)]` column vectors.
//!
//! Fields `i`, `j`, `k`, `l` are the first, second, third and fourth columns,
//! so element `(row, col)` sits at flat index `col * N + row` of the
//! `bytemuck` view. Element names in comments follow the `eRC` convention
//! (`e12` is row 1, column 2).

mod matrix2;
mod matrix3;
mod matrix4;

pub use matrix2::Matrix2;
pub use matrix3::Matrix3;
pub use matrix4::Matrix4;

use crate::error::{MathError, MathResult};
use crate::scalar;

/// Rejects determinants that compare equal to zero under the kernel tolerance.
#[inline]
fn check_det(name: &str, det: f64) -> MathResult<f64> {
    if scalar::equal(det, 0.0) || !det.is_finite() {
        log::debug!("{name}::try_inv: singular matrix, determinant {det}");
        Err(MathError::SingularMatrix { det })
    } else {
        Ok(det)
    }
}
