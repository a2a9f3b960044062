use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate, NaiveTime};

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

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample.csv"));

    let mut rng = SimpleRng::new(42);

    // Two weeks of hourly data.
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .context("building start date")?
        .and_time(NaiveTime::MIN);
    let hours = 24 * 14;

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    writer.write_record(["Timestamp", "Price", "Volume", "Spread"])?;

    let mut price = 2300.0_f64;
    for hour in 0..hours {
        let ts = start + Duration::hours(hour);

        // Price: random walk. Volume: daytime bump plus noise. Spread: noisy floor.
        price = (price + rng.gauss(0.0, 12.0)).max(1.0);
        let daytime = if (8..20).contains(&(hour % 24)) { 900.0 } else { 0.0 };
        let volume = 5_000.0 + daytime + 1_500.0 * rng.next_f64();
        let spread = 0.8 + rng.gauss(0.0, 0.15).abs();

        writer.write_record([
            ts.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{price:.2}"),
            format!("{volume:.0}"),
            format!("{spread:.3}"),
        ])?;
    }

    writer.flush().context("flushing sample CSV")?;
    println!("Wrote {hours} rows to {}", output_path.display());
    Ok(())
}
