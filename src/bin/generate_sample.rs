use std::sync::Arc;

use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

struct Listing {
    brand: &'static str,
    model: &'static str,
    base_price: f64,
    dpi: i64,
    category: &'static str,
}

const CATALOG: &[Listing] = &[
    Listing { brand: "Logitech", model: "G203 Lightsync", base_price: 129.9, dpi: 8000, category: "wired" },
    Listing { brand: "Logitech", model: "G305 Lightspeed", base_price: 249.9, dpi: 12000, category: "wireless" },
    Listing { brand: "Logitech", model: "MX Master 3S", base_price: 549.9, dpi: 8000, category: "wireless" },
    Listing { brand: "Razer", model: "DeathAdder Essential", base_price: 149.9, dpi: 6400, category: "wired" },
    Listing { brand: "Razer", model: "Viper V2 Pro", base_price: 899.9, dpi: 30000, category: "wireless" },
    Listing { brand: "Redragon", model: "Cobra M711", base_price: 89.9, dpi: 10000, category: "wired" },
    Listing { brand: "Redragon", model: "Storm Elite", base_price: 119.9, dpi: 16000, category: "wired" },
    Listing { brand: "Multilaser", model: "MO300", base_price: 29.9, dpi: 1600, category: "wired" },
    Listing { brand: "Multilaser", model: "MO331", base_price: 59.9, dpi: 2400, category: "wireless" },
    Listing { brand: "HyperX", model: "Pulsefire Haste", base_price: 199.9, dpi: 16000, category: "wired" },
    Listing { brand: "HyperX", model: "Pulsefire Haste 2 Wireless", base_price: 449.9, dpi: 26000, category: "wireless" },
    Listing { brand: "Attack Shark", model: "X3", base_price: 139.9, dpi: 12000, category: "bluetooth" },
];

/// Price jitter simulating different sellers: ±10% around the base price,
/// always non-negative, two decimals.
fn jitter_price(base: f64, rng: &mut SimpleRng) -> f64 {
    let factor = 0.9 + rng.next_f64() * 0.2;
    ((base * factor).max(0.0) * 100.0).round() / 100.0
}

fn main() {
    let mut rng = SimpleRng::new(42);

    // Three seller offers per catalog entry.
    let mut brands: Vec<String> = Vec::new();
    let mut models: Vec<String> = Vec::new();
    let mut prices: Vec<f64> = Vec::new();
    let mut dpis: Vec<i64> = Vec::new();
    let mut categories: Vec<String> = Vec::new();

    for listing in CATALOG {
        for offer in 0..3 {
            brands.push(listing.brand.to_string());
            models.push(if offer == 0 {
                listing.model.to_string()
            } else {
                format!("{} (seller {})", listing.model, offer + 1)
            });
            prices.push(jitter_price(listing.base_price, &mut rng));
            dpis.push(listing.dpi);
            categories.push(listing.category.to_string());
        }
    }
    let n_rows = brands.len();

    // ---- Parquet ----
    let brand_array = StringArray::from(brands.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let model_array = StringArray::from(models.iter().map(|s| s.as_str()).collect::<Vec<_>>());
    let price_array = Float64Array::from(prices.clone());
    let dpi_array = Int64Array::from(dpis.clone());
    let category_array =
        StringArray::from(categories.iter().map(|s| s.as_str()).collect::<Vec<_>>());

    let schema = Arc::new(Schema::new(vec![
        Field::new("marca", DataType::Utf8, false),
        Field::new("modelo", DataType::Utf8, false),
        Field::new("preco_mouse", DataType::Float64, false),
        Field::new("dpi", DataType::Int64, false),
        Field::new("tipo_mouse", DataType::Utf8, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(brand_array),
            Arc::new(model_array),
            Arc::new(price_array),
            Arc::new(dpi_array),
            Arc::new(category_array),
        ],
    )
    .expect("Failed to create RecordBatch");

    let parquet_path = "sample_data.parquet";
    let file = std::fs::File::create(parquet_path).expect("Failed to create output file");
    let mut writer = ArrowWriter::try_new(file, schema, None).expect("Failed to create writer");
    writer.write(&batch).expect("Failed to write batch");
    writer.close().expect("Failed to close writer");

    // ---- CSV ----
    let csv_path = "sample_data.csv";
    let mut csv_writer = csv::Writer::from_path(csv_path).expect("Failed to create CSV file");
    csv_writer
        .write_record(["marca", "modelo", "preco_mouse", "dpi", "tipo_mouse"])
        .expect("Failed to write CSV header");
    for i in 0..n_rows {
        csv_writer
            .write_record([
                brands[i].as_str(),
                models[i].as_str(),
                &format!("{:.2}", prices[i]),
                &dpis[i].to_string(),
                categories[i].as_str(),
            ])
            .expect("Failed to write CSV row");
    }
    csv_writer.flush().expect("Failed to flush CSV");

    println!("Wrote {n_rows} listings to {parquet_path} and {csv_path}");
}
