use crate::data::model::Record;

use super::StatError;

// ---------------------------------------------------------------------------
// Least-squares DPI → price fit
// ---------------------------------------------------------------------------

/// A fitted line `price = slope * dpi + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendFit {
    /// Predicted price at the given dpi.
    pub fn predict(&self, dpi: f64) -> f64 {
        self.slope * dpi + self.intercept
    }
}

/// Least-squares fit over all `(dpi, price)` pairs.
///
/// Fewer than two points, or all dpi values identical, make the fit
/// singular; that is reported as [`StatError::DegenerateFit`] instead of
/// letting the division produce NaN or infinity.
pub fn linear_fit(records: &[Record]) -> Result<TrendFit, StatError> {
    if records.len() < 2 {
        return Err(StatError::DegenerateFit);
    }

    let n = records.len() as f64;
    let mean_x = records.iter().map(|r| r.dpi as f64).sum::<f64>() / n;
    let mean_y = records.iter().map(|r| r.price).sum::<f64>() / n;

    let mut cov_xy = 0.0;
    let mut var_x = 0.0;
    for rec in records {
        let dx = rec.dpi as f64 - mean_x;
        cov_xy += dx * (rec.price - mean_y);
        var_x += dx * dx;
    }

    if var_x == 0.0 {
        return Err(StatError::DegenerateFit);
    }

    let slope = cov_xy / var_x;
    Ok(TrendFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(dpi: u32, price: f64) -> Record {
        Record {
            brand: "B".to_string(),
            model: "M".to_string(),
            price,
            dpi,
            category: "wired".to_string(),
        }
    }

    #[test]
    fn perfectly_linear_points_recover_the_line() {
        let records = vec![rec(100, 10.0), rec(200, 20.0), rec(300, 30.0)];
        let fit = linear_fit(&records).unwrap();
        assert!((fit.slope - 0.1).abs() < 1e-9, "slope {}", fit.slope);
        assert!(fit.intercept.abs() < 1e-9, "intercept {}", fit.intercept);
        assert!((fit.predict(400.0) - 40.0).abs() < 1e-9);
    }

    #[test]
    fn noisy_points_fit_between_extremes() {
        let records = vec![rec(100, 12.0), rec(200, 18.0), rec(300, 32.0)];
        let fit = linear_fit(&records).unwrap();
        assert!(fit.slope > 0.0);
    }

    #[test]
    fn zero_dpi_variance_is_degenerate() {
        let records = vec![rec(800, 10.0), rec(800, 20.0), rec(800, 30.0)];
        assert_eq!(linear_fit(&records), Err(StatError::DegenerateFit));
    }

    #[test]
    fn fewer_than_two_points_is_degenerate() {
        assert_eq!(linear_fit(&[]), Err(StatError::DegenerateFit));
        assert_eq!(linear_fit(&[rec(800, 10.0)]), Err(StatError::DegenerateFit));
    }
}
