// ---------------------------------------------------------------------------
// Record – one listing (one row of the source table)
// ---------------------------------------------------------------------------

/// A single mouse listing with the typed column contract enforced at load:
/// `price` is finite and non-negative, `dpi` is positive, labels non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub brand: String,
    pub model: String,
    /// Listing price, currency unit implied (R$ in the sample data).
    pub price: f64,
    pub dpi: u32,
    /// Mouse type label, e.g. "wireless" / "wired" (open set).
    pub category: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed label indices.
///
/// `brands` and `categories` hold each unique label once, in the order it
/// first appears in the file. Chart axes and the filter combo box rely on
/// that order being stable across renders.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All listings (rows), in file order.
    pub records: Vec<Record>,
    /// Unique brand labels, first-seen order.
    pub brands: Vec<String>,
    /// Unique category labels, first-seen order.
    pub categories: Vec<String>,
}

impl Dataset {
    /// Build label indices from the loaded records.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut brands: Vec<String> = Vec::new();
        let mut categories: Vec<String> = Vec::new();

        for rec in &records {
            if !brands.iter().any(|b| b == &rec.brand) {
                brands.push(rec.brand.clone());
            }
            if !categories.iter().any(|c| c == &rec.category) {
                categories.push(rec.category.clone());
            }
        }

        Dataset {
            records,
            brands,
            categories,
        }
    }

    /// Number of listings.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(brand: &str, category: &str) -> Record {
        Record {
            brand: brand.to_string(),
            model: format!("{brand}-m"),
            price: 100.0,
            dpi: 1600,
            category: category.to_string(),
        }
    }

    #[test]
    fn label_indices_keep_first_seen_order() {
        let ds = Dataset::from_records(vec![
            rec("Logitech", "wireless"),
            rec("Razer", "wired"),
            rec("Logitech", "wireless"),
            rec("Redragon", "wireless"),
        ]);
        assert_eq!(ds.brands, vec!["Logitech", "Razer", "Redragon"]);
        assert_eq!(ds.categories, vec!["wireless", "wired"]);
        assert_eq!(ds.len(), 4);
    }
}
