use super::model::Dataset;

// ---------------------------------------------------------------------------
// Brand filter: the single user-facing row selector
// ---------------------------------------------------------------------------

/// The brand selector driving the filtered views.
/// `All` is the sentinel "no filter" state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BrandFilter {
    #[default]
    All,
    Brand(String),
}

impl BrandFilter {
    /// Label shown in the filter combo box.
    pub fn label(&self) -> &str {
        match self {
            BrandFilter::All => "All brands",
            BrandFilter::Brand(b) => b,
        }
    }
}

/// Return indices of records that pass the filter, preserving file order.
///
/// An unmatched brand is not an error: it simply yields an empty vector,
/// and the statistic functions downstream signal "no data" for it.
pub fn filtered_indices(dataset: &Dataset, filter: &BrandFilter) -> Vec<usize> {
    match filter {
        BrandFilter::All => (0..dataset.len()).collect(),
        BrandFilter::Brand(brand) => dataset
            .records
            .iter()
            .enumerate()
            .filter(|(_, rec)| &rec.brand == brand)
            .map(|(i, _)| i)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Record;

    fn dataset() -> Dataset {
        let recs = [("Logitech", 120.0), ("Razer", 250.0), ("Logitech", 90.0)]
            .iter()
            .map(|(brand, price)| Record {
                brand: brand.to_string(),
                model: format!("{brand}-x"),
                price: *price,
                dpi: 1600,
                category: "wired".to_string(),
            })
            .collect();
        Dataset::from_records(recs)
    }

    #[test]
    fn all_selector_yields_every_index_in_order() {
        let ds = dataset();
        assert_eq!(filtered_indices(&ds, &BrandFilter::All), vec![0, 1, 2]);
    }

    #[test]
    fn brand_selector_matches_by_exact_equality() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &BrandFilter::Brand("Logitech".to_string()));
        assert_eq!(idx, vec![0, 2]);
        for i in idx {
            assert_eq!(ds.records[i].brand, "Logitech");
        }
    }

    #[test]
    fn unmatched_brand_yields_empty_subset() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &BrandFilter::Brand("NonexistentBrand".to_string()));
        assert!(idx.is_empty());
    }
}
