use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde::Deserialize;

use super::model::{Dataset, Record};

/// Required column names. These are a fixed contract with the source file;
/// a missing column is a fatal load-time error.
pub const REQUIRED_COLUMNS: [&str; 5] = ["marca", "modelo", "preco_mouse", "dpi", "tipo_mouse"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a listing dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.parquet` – flat columns `marca`, `modelo`, `preco_mouse`, `dpi`, `tipo_mouse`
/// * `.json`    – `[{ "marca": "...", "modelo": "...", "preco_mouse": 120.0, ... }, ...]`
/// * `.csv`     – header row with the same column names
pub fn load_file(path: &Path) -> Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => load_parquet(path),
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Raw row and validation
// ---------------------------------------------------------------------------

/// One row as it appears in the file, before validation.
/// Field names are the source column names.
#[derive(Debug, Deserialize)]
struct RawRow {
    marca: String,
    modelo: String,
    preco_mouse: f64,
    dpi: i64,
    tipo_mouse: String,
}

/// Turn a raw row into a typed [`Record`], rejecting defective rows.
///
/// Policy: a row with a non-finite or negative price, a non-positive dpi, or
/// an empty brand/category label fails the whole load with a row-numbered
/// error. The aggregation engine can then assume well-formed records.
fn validate_row(row_no: usize, raw: RawRow) -> Result<Record> {
    if !raw.preco_mouse.is_finite() || raw.preco_mouse < 0.0 {
        bail!(
            "Row {row_no}: 'preco_mouse' must be a non-negative number, got {}",
            raw.preco_mouse
        );
    }
    if raw.dpi <= 0 || raw.dpi > u32::MAX as i64 {
        bail!("Row {row_no}: 'dpi' must be a positive integer, got {}", raw.dpi);
    }
    if raw.marca.trim().is_empty() {
        bail!("Row {row_no}: 'marca' is empty");
    }
    if raw.tipo_mouse.trim().is_empty() {
        bail!("Row {row_no}: 'tipo_mouse' is empty");
    }

    Ok(Record {
        brand: raw.marca,
        model: raw.modelo,
        price: raw.preco_mouse,
        dpi: raw.dpi as u32,
        category: raw.tipo_mouse,
    })
}

fn rows_to_dataset(rows: Vec<RawRow>) -> Result<Dataset> {
    let records = rows
        .into_iter()
        .enumerate()
        .map(|(i, raw)| validate_row(i, raw))
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset::from_records(records))
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            bail!("CSV missing required column '{col}'");
        }
    }

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(raw);
    }

    rows_to_dataset(rows)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   {
///     "marca": "Logitech",
///     "modelo": "G203",
///     "preco_mouse": 129.9,
///     "dpi": 8000,
///     "tipo_mouse": "wired"
///   },
///   ...
/// ]
/// ```
fn load_json(path: &Path) -> Result<Dataset> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let rows: Vec<RawRow> = serde_json::from_str(&text)
        .context("parsing JSON (expected an array of listing objects)")?;
    rows_to_dataset(rows)
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a Parquet file with one flat column per required field.
///
/// Strings may be Utf8 or LargeUtf8, `dpi` Int32 or Int64, `preco_mouse`
/// Float32/Float64 or an integer type. Works with files written by both
/// Pandas (`df.to_parquet()`) and Polars (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut rows = Vec::new();
    let mut row_no = 0usize;

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        let col = |name: &str| -> Result<usize> {
            schema
                .index_of(name)
                .map_err(|_| anyhow::anyhow!("Parquet file missing required column '{name}'"))
        };
        let brand_col = batch.column(col("marca")?).clone();
        let model_col = batch.column(col("modelo")?).clone();
        let price_col = batch.column(col("preco_mouse")?).clone();
        let dpi_col = batch.column(col("dpi")?).clone();
        let category_col = batch.column(col("tipo_mouse")?).clone();

        for row in 0..batch.num_rows() {
            let raw = RawRow {
                marca: extract_string(&brand_col, row)
                    .with_context(|| format!("Row {row_no}: reading 'marca'"))?,
                modelo: extract_string(&model_col, row)
                    .with_context(|| format!("Row {row_no}: reading 'modelo'"))?,
                preco_mouse: extract_f64(&price_col, row)
                    .with_context(|| format!("Row {row_no}: reading 'preco_mouse'"))?,
                dpi: extract_i64(&dpi_col, row)
                    .with_context(|| format!("Row {row_no}: reading 'dpi'"))?,
                tipo_mouse: extract_string(&category_col, row)
                    .with_context(|| format!("Row {row_no}: reading 'tipo_mouse'"))?,
            };
            rows.push(raw);
            row_no += 1;
        }
    }

    rows_to_dataset(rows)
}

// -- Parquet / Arrow helpers --

fn extract_string(col: &Arc<dyn Array>, row: usize) -> Result<String> {
    if col.is_null(row) {
        bail!("null value in string column");
    }
    match col.data_type() {
        DataType::Utf8 => {
            let arr = col
                .as_any()
                .downcast_ref::<StringArray>()
                .context("expected StringArray")?;
            Ok(arr.value(row).to_string())
        }
        DataType::LargeUtf8 => {
            let arr = col.as_string::<i64>();
            Ok(arr.value(row).to_string())
        }
        other => bail!("Expected a string column, got {other:?}"),
    }
}

fn extract_i64(col: &Arc<dyn Array>, row: usize) -> Result<i64> {
    if col.is_null(row) {
        bail!("null value in integer column");
    }
    match col.data_type() {
        DataType::Int32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int32Array>()
                .context("expected Int32Array")?;
            Ok(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Int64Array>()
                .context("expected Int64Array")?;
            Ok(arr.value(row))
        }
        other => bail!("Expected an integer column, got {other:?}"),
    }
}

fn extract_f64(col: &Arc<dyn Array>, row: usize) -> Result<f64> {
    if col.is_null(row) {
        bail!("null value in numeric column");
    }
    match col.data_type() {
        DataType::Float64 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float64Array>()
                .context("expected Float64Array")?;
            Ok(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col
                .as_any()
                .downcast_ref::<Float32Array>()
                .context("expected Float32Array")?;
            Ok(arr.value(row) as f64)
        }
        DataType::Int32 | DataType::Int64 => extract_i64(col, row).map(|v| v as f64),
        other => bail!("Expected a numeric column, got {other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn csv_round_trip() {
        let path = write_temp(
            "mouse_metrics_ok.csv",
            "marca,modelo,preco_mouse,dpi,tipo_mouse\n\
             Logitech,G203,129.9,8000,wired\n\
             Razer,Viper,349.0,20000,wireless\n",
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].brand, "Logitech");
        assert_eq!(ds.records[1].dpi, 20000);
        assert_eq!(ds.brands, vec!["Logitech", "Razer"]);
    }

    #[test]
    fn csv_missing_column_is_fatal() {
        let path = write_temp(
            "mouse_metrics_missing_col.csv",
            "marca,modelo,preco_mouse,dpi\nLogitech,G203,129.9,8000\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(err.to_string().contains("tipo_mouse"), "{err:#}");
    }

    #[test]
    fn negative_price_is_rejected_with_row_number() {
        let path = write_temp(
            "mouse_metrics_bad_price.csv",
            "marca,modelo,preco_mouse,dpi,tipo_mouse\n\
             Logitech,G203,129.9,8000,wired\n\
             Razer,Viper,-5.0,20000,wireless\n",
        );
        let err = load_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Row 1"), "{err:#}");
    }

    #[test]
    fn zero_dpi_is_rejected() {
        let path = write_temp(
            "mouse_metrics_bad_dpi.csv",
            "marca,modelo,preco_mouse,dpi,tipo_mouse\nLogitech,G203,129.9,0,wired\n",
        );
        assert!(load_file(&path).is_err());
    }

    #[test]
    fn json_records_load() {
        let path = write_temp(
            "mouse_metrics_ok.json",
            r#"[
                {"marca": "Logitech", "modelo": "G203", "preco_mouse": 129.9, "dpi": 8000, "tipo_mouse": "wired"},
                {"marca": "Redragon", "modelo": "Cobra", "preco_mouse": 89.9, "dpi": 10000, "tipo_mouse": "wired"}
            ]"#,
        );
        let ds = load_file(&path).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].model, "Cobra");
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let path = write_temp("mouse_metrics.xlsx", "not really a spreadsheet");
        assert!(load_file(&path).is_err());
    }
}
