//! Scalar-or-vector inputs for the grid pricer.

use ndarray::Array1;

/// One pricing input axis: either a single value or a 1-D sequence.
///
/// A scalar axis has length 1 and is squeezed out of the result shape; a
/// vector axis keeps its dimension even when it holds a single element.
///
/// # Examples
/// ```
/// use pricer_models::instruments::GridAxis;
///
/// let spot = GridAxis::from(vec![90.0, 100.0, 110.0]);
/// assert_eq!(spot.len(), 3);
/// assert!(!spot.is_scalar());
///
/// let strike = GridAxis::from(100.0);
/// assert_eq!(strike.len(), 1);
/// assert!(strike.is_scalar());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum GridAxis {
    /// A single value; collapses out of the result shape.
    Scalar(f64),
    /// A 1-D sequence; contributes one result dimension.
    Vector(Vec<f64>),
}

impl GridAxis {
    /// Number of points along the axis (1 for a scalar).
    pub fn len(&self) -> usize {
        match self {
            GridAxis::Scalar(_) => 1,
            GridAxis::Vector(values) => values.len(),
        }
    }

    /// True for an empty vector axis.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the axis collapses out of the result shape.
    pub fn is_scalar(&self) -> bool {
        matches!(self, GridAxis::Scalar(_))
    }

    /// Values along the axis as a slice.
    pub fn values(&self) -> &[f64] {
        match self {
            GridAxis::Scalar(value) => std::slice::from_ref(value),
            GridAxis::Vector(values) => values,
        }
    }

    /// Values along the axis as an owned array.
    pub fn to_array(&self) -> Array1<f64> {
        Array1::from(self.values().to_vec())
    }

    /// Applies `f` to every value, keeping the scalar/vector shape.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> GridAxis {
        match self {
            GridAxis::Scalar(value) => GridAxis::Scalar(f(*value)),
            GridAxis::Vector(values) => GridAxis::Vector(values.iter().map(|&v| f(v)).collect()),
        }
    }
}

impl From<f64> for GridAxis {
    fn from(value: f64) -> Self {
        GridAxis::Scalar(value)
    }
}

impl From<Vec<f64>> for GridAxis {
    fn from(values: Vec<f64>) -> Self {
        GridAxis::Vector(values)
    }
}

impl From<&[f64]> for GridAxis {
    fn from(values: &[f64]) -> Self {
        GridAxis::Vector(values.to_vec())
    }
}

impl From<Array1<f64>> for GridAxis {
    fn from(values: Array1<f64>) -> Self {
        GridAxis::Vector(values.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_element_vector_is_not_scalar() {
        let axis = GridAxis::from(vec![100.0]);
        assert_eq!(axis.len(), 1);
        assert!(!axis.is_scalar());
    }

    #[test]
    fn test_empty_vector() {
        let axis = GridAxis::from(Vec::<f64>::new());
        assert!(axis.is_empty());
    }

    #[test]
    fn test_values_and_array_agree() {
        let axis = GridAxis::from(&[1.0, 2.0][..]);
        assert_eq!(axis.values(), &[1.0, 2.0]);
        assert_eq!(axis.to_array(), Array1::from(vec![1.0, 2.0]));
        assert_eq!(GridAxis::Scalar(5.0).values(), &[5.0]);
    }

    #[test]
    fn test_map_keeps_shape() {
        assert_eq!(GridAxis::Scalar(1.0).map(|x| x + 1.0), GridAxis::Scalar(2.0));
        assert_eq!(
            GridAxis::from(vec![1.0, 2.0]).map(|x| x * 10.0),
            GridAxis::Vector(vec![10.0, 20.0])
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_untagged() {
        let scalar: GridAxis = serde_json::from_str("150.0").unwrap();
        assert_eq!(scalar, GridAxis::Scalar(150.0));
        let vector: GridAxis = serde_json::from_str("[1.0, 2.5]").unwrap();
        assert_eq!(vector, GridAxis::Vector(vec![1.0, 2.5]));
    }
}
