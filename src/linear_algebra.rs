//! Linear Algebra Helpers
//!
//! Small dense vector and matrix routines over `f64`. Matrices are plain
//! row-major `Vec<Vec<f64>>`; all operations are shape-checked and return
//! dimension errors rather than panicking on ragged input.

use crate::error::{MathError, MathResult};

pub type Matrix = Vec<Vec<f64>>;

/// A dense real vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    pub components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Vector { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    fn check_len(&self, other: &Vector) -> MathResult<()> {
        if self.len() != other.len() {
            return Err(MathError::Dimension {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    pub fn add(&self, other: &Vector) -> MathResult<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| a + b)
                .collect(),
        ))
    }

    pub fn sub(&self, other: &Vector) -> MathResult<Vector> {
        self.check_len(other)?;
        Ok(Vector::new(
            self.components
                .iter()
                .zip(&other.components)
                .map(|(a, b)| a - b)
                .collect(),
        ))
    }

    pub fn scale(&self, factor: f64) -> Vector {
        Vector::new(self.components.iter().map(|c| c * factor).collect())
    }

    pub fn dot(&self, other: &Vector) -> MathResult<f64> {
        self.check_len(other)?;
        Ok(self
            .components
            .iter()
            .zip(&other.components)
            .map(|(a, b)| a * b)
            .sum())
    }

    /// Cross product, defined for three-dimensional vectors only.
    pub fn cross(&self, other: &Vector) -> MathResult<Vector> {
        if self.len() != 3 || other.len() != 3 {
            return Err(MathError::Dimension {
                expected: 3,
                actual: if self.len() != 3 { self.len() } else { other.len() },
            });
        }
        let a = &self.components;
        let b = &other.components;
        Ok(Vector::new(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn magnitude(&self) -> f64 {
        self.components.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Unit vector in the same direction; the zero vector has none.
    pub fn normalize(&self) -> MathResult<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            return Err(MathError::domain("cannot normalize the zero vector"));
        }
        Ok(self.scale(1.0 / magnitude))
    }

    /// Angle between two vectors in radians.
    pub fn angle_between(&self, other: &Vector) -> MathResult<f64> {
        let denominator = self.magnitude() * other.magnitude();
        if denominator == 0.0 {
            return Err(MathError::domain(
                "angle is undefined for the zero vector",
            ));
        }
        let cosine = (self.dot(other)? / denominator).clamp(-1.0, 1.0);
        Ok(cosine.acos())
    }
}

fn dimensions(matrix: &Matrix) -> MathResult<(usize, usize)> {
    let rows = matrix.len();
    let cols = matrix.first().map(|row| row.len()).unwrap_or(0);
    for row in matrix {
        if row.len() != cols {
            return Err(MathError::Dimension {
                expected: cols,
                actual: row.len(),
            });
        }
    }
    Ok((rows, cols))
}

/// The n-by-n identity matrix.
pub fn identity(n: usize) -> Matrix {
    (0..n)
        .map(|i| (0..n).map(|j| if i == j { 1.0 } else { 0.0 }).collect())
        .collect()
}

pub fn transpose(matrix: &Matrix) -> MathResult<Matrix> {
    let (rows, cols) = dimensions(matrix)?;
    Ok((0..cols)
        .map(|j| (0..rows).map(|i| matrix[i][j]).collect())
        .collect())
}

pub fn multiply(a: &Matrix, b: &Matrix) -> MathResult<Matrix> {
    let (a_rows, a_cols) = dimensions(a)?;
    let (b_rows, b_cols) = dimensions(b)?;
    if a_cols != b_rows {
        return Err(MathError::Dimension {
            expected: a_cols,
            actual: b_rows,
        });
    }

    let mut product = vec![vec![0.0; b_cols]; a_rows];
    for i in 0..a_rows {
        for k in 0..a_cols {
            let aik = a[i][k];
            for j in 0..b_cols {
                product[i][j] += aik * b[k][j];
            }
        }
    }
    Ok(product)
}

/// Determinant via Gaussian elimination with partial pivoting.
pub fn determinant(matrix: &Matrix) -> MathResult<f64> {
    let (rows, cols) = dimensions(matrix)?;
    if rows != cols {
        return Err(MathError::Dimension {
            expected: rows,
            actual: cols,
        });
    }
    if rows == 0 {
        return Ok(1.0);
    }

    let mut work = matrix.clone();
    let mut det = 1.0;
    for col in 0..rows {
        let pivot_row = (col..rows)
            .max_by(|&a, &b| {
                work[a][col]
                    .abs()
                    .partial_cmp(&work[b][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if work[pivot_row][col] == 0.0 {
            return Ok(0.0);
        }
        if pivot_row != col {
            work.swap(pivot_row, col);
            det = -det;
        }
        det *= work[col][col];
        for row in (col + 1)..rows {
            let factor = work[row][col] / work[col][col];
            for k in col..rows {
                work[row][k] -= factor * work[col][k];
            }
        }
    }
    Ok(det)
}

/// Solve the square system Ax = b by Gaussian elimination with partial
/// pivoting. Singular systems are domain errors.
pub fn solve(a: &Matrix, b: &[f64]) -> MathResult<Vec<f64>> {
    let (rows, cols) = dimensions(a)?;
    if rows != cols {
        return Err(MathError::Dimension {
            expected: rows,
            actual: cols,
        });
    }
    if b.len() != rows {
        return Err(MathError::Dimension {
            expected: rows,
            actual: b.len(),
        });
    }

    let mut work = a.clone();
    let mut rhs = b.to_vec();

    for col in 0..rows {
        let pivot_row = (col..rows)
            .max_by(|&i, &j| {
                work[i][col]
                    .abs()
                    .partial_cmp(&work[j][col].abs())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(col);
        if work[pivot_row][col].abs() < 1e-12 {
            return Err(MathError::domain("matrix is singular"));
        }
        work.swap(pivot_row, col);
        rhs.swap(pivot_row, col);

        for row in (col + 1)..rows {
            let factor = work[row][col] / work[col][col];
            for k in col..rows {
                work[row][k] -= factor * work[col][k];
            }
            rhs[row] -= factor * rhs[col];
        }
    }

    let mut solution = vec![0.0; rows];
    for row in (0..rows).rev() {
        let mut sum = rhs[row];
        for col in (row + 1)..rows {
            sum -= work[row][col] * solution[col];
        }
        solution[row] = sum / work[row][row];
    }
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_vector_arithmetic() {
        let u = Vector::new(vec![1.0, 2.0, 3.0]);
        let v = Vector::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(u.add(&v).unwrap().components, vec![5.0, 7.0, 9.0]);
        assert_eq!(v.sub(&u).unwrap().components, vec![3.0, 3.0, 3.0]);
        assert_eq!(u.scale(2.0).components, vec![2.0, 4.0, 6.0]);
        assert_close(u.dot(&v).unwrap(), 32.0);
    }

    #[test]
    fn test_vector_dimension_mismatch() {
        let u = Vector::new(vec![1.0, 2.0]);
        let v = Vector::new(vec![1.0, 2.0, 3.0]);
        assert!(matches!(
            u.dot(&v),
            Err(MathError::Dimension {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_cross_product() {
        let x = Vector::new(vec![1.0, 0.0, 0.0]);
        let y = Vector::new(vec![0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).unwrap().components, vec![0.0, 0.0, 1.0]);
        let flat = Vector::new(vec![1.0, 0.0]);
        assert!(flat.cross(&y).is_err());
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector::new(vec![3.0, 4.0]);
        assert_close(v.magnitude(), 5.0);
        assert_close(v.normalize().unwrap().magnitude(), 1.0);
        assert!(Vector::new(vec![0.0, 0.0]).normalize().is_err());
    }

    #[test]
    fn test_angle_between() {
        let x = Vector::new(vec![1.0, 0.0]);
        let y = Vector::new(vec![0.0, 2.0]);
        assert_close(x.angle_between(&y).unwrap(), std::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn test_matrix_multiply_and_transpose() {
        let a = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let b = vec![vec![5.0, 6.0], vec![7.0, 8.0]];
        assert_eq!(
            multiply(&a, &b).unwrap(),
            vec![vec![19.0, 22.0], vec![43.0, 50.0]]
        );
        assert_eq!(
            transpose(&a).unwrap(),
            vec![vec![1.0, 3.0], vec![2.0, 4.0]]
        );
        assert_eq!(multiply(&a, &identity(2)).unwrap(), a);
    }

    #[test]
    fn test_determinant() {
        assert_close(determinant(&vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap(), -2.0);
        assert_close(
            determinant(&vec![
                vec![2.0, 0.0, 0.0],
                vec![0.0, 3.0, 0.0],
                vec![0.0, 0.0, 4.0],
            ])
            .unwrap(),
            24.0,
        );
        assert_close(
            determinant(&vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap(),
            0.0,
        );
    }

    #[test]
    fn test_solve() {
        // x + y = 3, x - y = 1 => x = 2, y = 1
        let a = vec![vec![1.0, 1.0], vec![1.0, -1.0]];
        let x = solve(&a, &[3.0, 1.0]).unwrap();
        assert_close(x[0], 2.0);
        assert_close(x[1], 1.0);

        let singular = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
        assert!(solve(&singular, &[1.0, 2.0]).is_err());
    }

    #[test]
    fn test_ragged_matrix_rejected() {
        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(transpose(&ragged).is_err());
        assert!(determinant(&ragged).is_err());
    }
}
