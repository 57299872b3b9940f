use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;

const HEADERS: [&str; 9] = [
    "Medicine Name",
    "Composition",
    "Uses",
    "Side_effects",
    "Image URL",
    "Manufacturer",
    "Excellent Review %",
    "Average Review %",
    "Poor Review %",
];

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

    fn below(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

struct Row {
    name: String,
    composition: String,
    uses: String,
    side_effects: String,
    image_url: String,
    manufacturer: String,
    excellent: f64,
    average: f64,
    poor: f64,
}

impl Row {
    fn fields(&self) -> [String; 9] {
        [
            self.name.clone(),
            self.composition.clone(),
            self.uses.clone(),
            self.side_effects.clone(),
            self.image_url.clone(),
            self.manufacturer.clone(),
            self.excellent.to_string(),
            self.average.to_string(),
            self.poor.to_string(),
        ]
    }
}

fn generate_rows(rng: &mut SimpleRng, count: usize) -> Vec<Row> {
    let actives = [
        ("Paracetamol", "Fever and mild pain"),
        ("Ibuprofen", "Pain relief and inflammation"),
        ("Amoxycillin", "Treatment of bacterial infections"),
        ("Cetirizine", "Allergic rhinitis and hives"),
        ("Dextromethorphan", "Dry cough"),
        ("Metformin", "Type 2 diabetes mellitus"),
        ("Omeprazole", "Acid reflux and peptic ulcer"),
        ("Azithromycin", "Respiratory tract infections"),
    ];
    let forms = ["Tablet", "Capsule", "Syrup", "Suspension", "Injection"];
    let strengths = ["100mg", "250mg", "400mg", "500mg", "650mg"];
    let manufacturers = [
        "Acme Pharmaceuticals Ltd",
        "Zenith Healthcare",
        "Cipla Ltd",
        "Sun Pharmaceutical Industries Ltd",
        "Mankind Pharma Ltd",
        "Alkem Laboratories Ltd",
        "Torrent Pharmaceuticals Ltd",
        "Abbott",
        "Lupin Ltd",
        "Intas Pharmaceuticals Ltd",
        "Glenmark Pharmaceuticals Ltd",
        "Dr Reddy's Laboratories Ltd",
    ];
    let side_effects = ["Nausea", "Headache", "Dizziness", "Diarrhea", "Rash"];

    (0..count)
        .map(|i| {
            let (active, uses) = actives[rng.below(actives.len() as u64) as usize];
            let form = rng.pick(&forms);
            let strength = rng.pick(&strengths);
            let excellent = rng.below(101) as f64;
            let average = rng.below(101 - excellent as u64) as f64;
            let poor = 100.0 - excellent - average;
            // Roughly one row in twenty has no image.
            let image_url = if rng.below(20) == 0 {
                String::new()
            } else {
                format!("https://picsum.photos/seed/medicine{i}/400/300")
            };
            Row {
                name: format!("{active} {strength} {form}"),
                composition: format!("{active} ({strength})"),
                uses: uses.to_string(),
                side_effects: rng.pick(&side_effects).to_string(),
                image_url,
                manufacturer: rng.pick(&manufacturers).to_string(),
                excellent,
                average,
                poor,
            }
        })
        .collect()
}

fn write_csv(path: &str, rows: &[Row]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {path}"))?;
    writer.write_record(HEADERS)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(())
}

fn text_column(rows: &[Row], field: impl Fn(&Row) -> &str) -> ArrayRef {
    Arc::new(StringArray::from(rows.iter().map(field).collect::<Vec<_>>()))
}

fn number_column(rows: &[Row], field: impl Fn(&Row) -> f64) -> ArrayRef {
    Arc::new(Float64Array::from(rows.iter().map(field).collect::<Vec<_>>()))
}

fn write_parquet(path: &str, rows: &[Row]) -> Result<()> {
    let schema = Arc::new(Schema::new(
        HEADERS
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let data_type = if i >= 6 { DataType::Float64 } else { DataType::Utf8 };
                Field::new(*name, data_type, false)
            })
            .collect::<Vec<_>>(),
    ));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            text_column(rows, |r| r.name.as_str()),
            text_column(rows, |r| r.composition.as_str()),
            text_column(rows, |r| r.uses.as_str()),
            text_column(rows, |r| r.side_effects.as_str()),
            text_column(rows, |r| r.image_url.as_str()),
            text_column(rows, |r| r.manufacturer.as_str()),
            number_column(rows, |r| r.excellent),
            number_column(rows, |r| r.average),
            number_column(rows, |r| r.poor),
        ],
    )
    .context("building record batch")?;

    let file = std::fs::File::create(path).with_context(|| format!("creating {path}"))?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating parquet writer")?;
    writer.write(&batch).context("writing parquet batch")?;
    writer.close().context("closing parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let rows = generate_rows(&mut rng, 500);

    let csv_path = "Medicine_Details.csv";
    let parquet_path = "Medicine_Details.parquet";
    write_csv(csv_path, &rows)?;
    write_parquet(parquet_path, &rows)?;

    println!(
        "Wrote {} medicines to {csv_path} and {parquet_path}",
        rows.len()
    );
    Ok(())
}
