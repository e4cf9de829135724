use crate::f;

/// Extends floats with MCNP-friendly formatting
pub trait ValueExt {
    /// Shortest text form of a real that reads back to exactly the same value
    ///
    /// Plain decimal notation is used for magnitudes in `[1e-4, 1e15)`, always
    /// with a decimal point so the value still reads as a real. Anything
    /// outside of that range uses exponent notation.
    ///
    /// ```rust
    /// # use ncards_utils::ValueExt;
    /// assert_eq!(3.0_f64.mcnp(), "3.0");
    /// assert_eq!((-2.5_f64).mcnp(), "-2.5");
    /// assert_eq!(1500.0_f64.mcnp(), "1500.0");
    /// assert_eq!(0.1_f64.mcnp(), "0.1");
    /// assert_eq!(1e-30_f64.mcnp(), "1e-30");
    /// assert_eq!(1.5e20_f64.mcnp(), "1.5e20");
    /// ```
    ///
    /// Both the `{}` and `{:e}` formats of the standard library already give
    /// the shortest representation that round-trips, so nothing is lost.
    fn mcnp(&self) -> String;
}

impl ValueExt for f64 {
    fn mcnp(&self) -> String {
        if *self == 0.0 {
            return "0.0".to_string();
        }

        if !self.is_finite() {
            return f!("{self}");
        }

        if (1e-4..1e15).contains(&self.abs()) {
            let text = f!("{self}");
            if text.contains('.') {
                text
            } else {
                f!("{text}.0")
            }
        } else {
            f!("{self:e}")
        }
    }
}
