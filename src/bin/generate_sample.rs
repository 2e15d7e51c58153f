use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value, json};

use fdi_explorer::data::model::{AreaKind, DatasetType, YearRange};

/// Sample table in depth-first order: (name, level, kind, base flow in US$ millions).
const AREAS: &[(&str, u32, AreaKind, f64)] = &[
    ("World", 0, AreaKind::Region, 900_000.0),
    ("Developed economies", 1, AreaKind::Region, 550_000.0),
    ("Europe", 2, AreaKind::Region, 300_000.0),
    ("Germany", 3, AreaKind::Country, 45_000.0),
    ("Ireland", 3, AreaKind::Country, 20_000.0),
    ("Luxembourg", 3, AreaKind::Country, 5_000.0),
    ("North America", 2, AreaKind::Region, 220_000.0),
    ("Canada", 3, AreaKind::Country, 40_000.0),
    ("United States", 3, AreaKind::Country, 180_000.0),
    ("Developing economies", 1, AreaKind::Region, 350_000.0),
    ("Africa", 2, AreaKind::Region, 40_000.0),
    ("Ghana", 3, AreaKind::Country, 2_000.0),
    ("Nigeria", 3, AreaKind::Country, 3_000.0),
    ("Asia", 2, AreaKind::Region, 280_000.0),
    ("China", 3, AreaKind::Country, 120_000.0),
    ("India", 3, AreaKind::Country, 40_000.0),
    ("Tuvalu", 3, AreaKind::Country, 1.5),
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

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// One table row with a noisy growth curve. Small economies swing negative
/// (net divestment) and some early years are left blank.
fn area_row(
    name: &str,
    level: u32,
    kind: AreaKind,
    base: f64,
    years: &YearRange,
    scale: f64,
    rng: &mut SimpleRng,
) -> Value {
    let mut row = Map::new();
    row.insert("Region/economy".into(), json!(name));
    row.insert("level".into(), json!(level.to_string()));
    row.insert(
        "type".into(),
        json!(match kind {
            AreaKind::Region => "region",
            AreaKind::Country => "country",
        }),
    );

    let n = years.len().max(1) as f64;
    for (i, year) in years.years().enumerate() {
        let trend = 0.2 + 0.8 * (i as f64 / n);
        let noise = (rng.next_f64() - 0.35) * 0.9;
        let value = base * scale * (trend + noise);
        let cell = if kind == AreaKind::Country && i < 3 && rng.next_f64() < 0.3 {
            json!("")
        } else {
            json!(format!("{value:.1}"))
        };
        row.insert(year.to_string(), cell);
    }
    Value::Object(row)
}

fn main() -> Result<()> {
    env_logger::init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("fdi_sample.json"));

    let years = YearRange::default();
    let mut rng = SimpleRng::new(42);
    let mut document = Map::new();

    for (dataset_type, scale) in [(DatasetType::Inflows, 1.0), (DatasetType::Outflows, 0.8)] {
        let rows: Vec<Value> = AREAS
            .iter()
            .map(|&(name, level, kind, base)| {
                area_row(name, level, kind, base, &years, scale, &mut rng)
            })
            .collect();
        document.insert(dataset_type.key().to_string(), Value::Array(rows));
    }

    let text = serde_json::to_string_pretty(&Value::Object(document))?;
    std::fs::write(&out, text).with_context(|| format!("writing {}", out.display()))?;

    log::info!("Wrote {} areas per corpus to {}", AREAS.len(), out.display());
    println!("Wrote sample data to {}", out.display());
    Ok(())
}
