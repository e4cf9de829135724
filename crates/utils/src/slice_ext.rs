use crate::error::{Error, Result};

/// Extends functionality for slices of float arrays
pub trait SliceExt<T> {
    /// Find the minimum value in float arrays
    ///
    /// Only provides the minimum value from a collection of valid numbers. Any
    /// NAN values, infinite values, or empty slices will return an error.
    ///
    /// ```rust
    /// # use ncards_utils::SliceExt;
    /// # use ncards_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_min(), Ok(0.5));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::NAN, 2.2].try_min(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_min(), Err(Error::SliceContainsNoValues));
    /// ```
    ///
    /// Uses `total_cmp` to always produce an ordering in accordance to the
    /// totalOrder predicate of IEEE 754.
    fn try_min(&self) -> Result<T>;

    /// Find the maximum value in float arrays
    ///
    /// ```rust
    /// # use ncards_utils::SliceExt;
    /// # use ncards_utils::Error;
    /// // Successful cases
    /// assert_eq!([1.1, 0.5, 2.2].try_max(), Ok(2.2));
    ///
    /// // Error cases
    /// assert_eq!([1.1, f64::INFINITY, 2.2].try_max(), Err(Error::SliceContainsUndefinedValues));
    /// assert_eq!(Vec::<f64>::new().try_max(), Err(Error::SliceContainsNoValues));
    /// ```
    fn try_max(&self) -> Result<T>;

    /// Check that every value is strictly greater than the one before it
    ///
    /// Bin bounds on cards like `E`, `T`, and `C` must be given in increasing
    /// order. An empty slice or a single value is trivially ascending.
    ///
    /// ```rust
    /// # use ncards_utils::SliceExt;
    /// assert!([1e-5, 1.0, 14.0].is_ascending());
    /// assert!(![1.0, 1.0, 14.0].is_ascending());
    /// assert!(![14.0, 1.0].is_ascending());
    /// ```
    fn is_ascending(&self) -> bool;
}

impl SliceExt<f64> for [f64] {
    fn try_min(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .min_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn try_max(&self) -> Result<f64> {
        if self.iter().any(|v| !v.is_finite()) {
            return Err(Error::SliceContainsUndefinedValues);
        };

        self.iter()
            .max_by(|a, b| a.total_cmp(b))
            .copied()
            .ok_or(Error::SliceContainsNoValues)
    }

    fn is_ascending(&self) -> bool {
        self.windows(2).all(|pair| pair[0] < pair[1])
    }
}
