use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Frequency tables and grouped means
// ---------------------------------------------------------------------------

/// One row of the brand frequency table.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyRow {
    pub brand: String,
    pub count: usize,
    /// Relative share of all records, in percent, rounded to 2 decimals.
    pub percentage: f64,
}

/// Count labels in first-encountered order.
fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| l == label) {
            Some((_, n)) => *n += 1,
            None => counts.push((label.to_string(), 1)),
        }
    }
    counts
}

/// Absolute and relative brand frequencies over the given records.
///
/// Ordered by descending count; the sort is stable, so equal counts keep
/// their first-encountered brand order.
pub fn brand_frequency(records: &[Record]) -> Vec<FrequencyRow> {
    let total = records.len();
    let mut counts = count_labels(records.iter().map(|r| r.brand.as_str()));
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(brand, count)| FrequencyRow {
            brand,
            count,
            percentage: (count as f64 / total as f64 * 100.0 * 100.0).round() / 100.0,
        })
        .collect()
}

/// Mean price per category, in first-seen category order.
///
/// The ordering is load-bearing: the category chart draws labels and values
/// from the same vector, index for index.
pub fn grouped_mean(records: &[Record]) -> Vec<(String, f64)> {
    let mut groups: Vec<(String, f64, usize)> = Vec::new();
    for rec in records {
        match groups.iter_mut().find(|(c, _, _)| c == &rec.category) {
            Some((_, sum, n)) => {
                *sum += rec.price;
                *n += 1;
            }
            None => groups.push((rec.category.clone(), rec.price, 1)),
        }
    }
    groups
        .into_iter()
        .map(|(category, sum, n)| (category, sum / n as f64))
        .collect()
}

/// Number of records per category, ordered by descending count with the
/// same stable tie-break as [`brand_frequency`].
pub fn count_by_category(records: &[Record]) -> Vec<(String, usize)> {
    let mut counts = count_labels(records.iter().map(|r| r.category.as_str()));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(brand: &str, category: &str, price: f64) -> Record {
        Record {
            brand: brand.to_string(),
            model: format!("{brand}-m"),
            price,
            dpi: 1600,
            category: category.to_string(),
        }
    }

    #[test]
    fn frequencies_are_ordered_by_descending_count() {
        let records = vec![
            rec("Razer", "wired", 100.0),
            rec("Logitech", "wired", 100.0),
            rec("Logitech", "wired", 100.0),
            rec("Redragon", "wired", 100.0),
            rec("Logitech", "wired", 100.0),
        ];
        let table = brand_frequency(&records);
        assert_eq!(table[0].brand, "Logitech");
        assert_eq!(table[0].count, 3);
        assert_eq!(table[0].percentage, 60.0);
        // Razer and Redragon tie at 1; Razer appeared first.
        assert_eq!(table[1].brand, "Razer");
        assert_eq!(table[2].brand, "Redragon");
    }

    #[test]
    fn percentages_sum_to_one_hundred() {
        let records = vec![
            rec("A", "wired", 1.0),
            rec("B", "wired", 1.0),
            rec("C", "wired", 1.0),
        ];
        let table = brand_frequency(&records);
        let sum: f64 = table.iter().map(|r| r.percentage).sum();
        // Each entry is rounded to 2 decimals, tolerance 0.005 per entry.
        assert!((sum - 100.0).abs() <= table.len() as f64 * 0.005, "sum {sum}");
    }

    #[test]
    fn grouped_mean_per_category() {
        let records = vec![
            rec("A", "wireless", 100.0),
            rec("B", "wireless", 200.0),
            rec("C", "wired", 50.0),
        ];
        assert_eq!(
            grouped_mean(&records),
            vec![("wireless".to_string(), 150.0), ("wired".to_string(), 50.0)]
        );
    }

    #[test]
    fn count_by_category_orders_larger_groups_first() {
        let records = vec![
            rec("A", "wireless", 100.0),
            rec("B", "wireless", 200.0),
            rec("C", "wired", 50.0),
        ];
        assert_eq!(
            count_by_category(&records),
            vec![("wireless".to_string(), 2), ("wired".to_string(), 1)]
        );
    }

    #[test]
    fn empty_input_yields_empty_tables() {
        assert!(brand_frequency(&[]).is_empty());
        assert!(grouped_mean(&[]).is_empty());
        assert!(count_by_category(&[]).is_empty());
    }
}
