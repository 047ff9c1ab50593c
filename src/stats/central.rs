use super::StatError;

// ---------------------------------------------------------------------------
// Central tendency over price values
// ---------------------------------------------------------------------------

/// Arithmetic average of the prices.
pub fn mean(prices: &[f64]) -> Result<f64, StatError> {
    if prices.is_empty() {
        return Err(StatError::EmptyInput);
    }
    Ok(prices.iter().sum::<f64>() / prices.len() as f64)
}

/// Middle value of the sorted prices; average of the two middle values for
/// even counts.
pub fn median(prices: &[f64]) -> Result<f64, StatError> {
    if prices.is_empty() {
        return Err(StatError::EmptyInput);
    }
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let n = sorted.len();
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Most frequent price value.
///
/// Ties are broken deterministically: among equally frequent values the
/// smallest wins. Implemented as a run-length scan of the sorted prices, so
/// the first (lowest) run of maximal length is kept.
pub fn mode(prices: &[f64]) -> Result<f64, StatError> {
    if prices.is_empty() {
        return Err(StatError::EmptyInput);
    }
    let mut sorted = prices.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let mut best_value = sorted[0];
    let mut best_count = 0usize;
    let mut run_value = sorted[0];
    let mut run_count = 0usize;

    for &v in &sorted {
        if v == run_value {
            run_count += 1;
        } else {
            run_value = v;
            run_count = 1;
        }
        // Strict comparison keeps the earlier (smaller) value on ties.
        if run_count > best_count {
            best_count = run_count;
            best_value = run_value;
        }
    }
    Ok(best_value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_is_the_arithmetic_average() {
        assert_eq!(mean(&[10.0, 20.0, 30.0]).unwrap(), 20.0);
    }

    #[test]
    fn median_of_odd_and_even_counts() {
        assert_eq!(median(&[30.0, 10.0, 20.0]).unwrap(), 20.0);
        assert_eq!(median(&[40.0, 10.0, 20.0, 30.0]).unwrap(), 25.0);
    }

    #[test]
    fn mean_equals_median_on_symmetric_prices() {
        let prices = [50.0, 80.0, 100.0, 120.0, 150.0];
        let m = mean(&prices).unwrap();
        let md = median(&prices).unwrap();
        assert!((m - md).abs() < 1e-9, "mean {m} != median {md}");
    }

    #[test]
    fn mode_tie_breaks_to_the_smallest_value() {
        // 10 and 20 both appear twice; the smaller value must win, every run.
        assert_eq!(mode(&[10.0, 10.0, 20.0, 20.0, 30.0]).unwrap(), 10.0);
        assert_eq!(mode(&[20.0, 30.0, 10.0, 20.0, 10.0]).unwrap(), 10.0);
    }

    #[test]
    fn mode_picks_the_most_frequent_value() {
        assert_eq!(mode(&[5.0, 7.0, 7.0, 7.0, 9.0]).unwrap(), 7.0);
    }

    #[test]
    fn empty_input_is_signalled() {
        assert_eq!(mean(&[]), Err(StatError::EmptyInput));
        assert_eq!(median(&[]), Err(StatError::EmptyInput));
        assert_eq!(mode(&[]), Err(StatError::EmptyInput));
    }
}
