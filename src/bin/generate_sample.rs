//! Writes a small synthetic NFHS-style dataset to the path the explorer
//! reads at startup. Values are plausible but fabricated.

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

    /// Uniform value in [-spread, spread].
    fn jitter(&mut self, spread: f64) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * spread
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    let regions = [
        "India",
        "Bihar",
        "Goa",
        "Kerala",
        "Maharashtra",
        "Tamil Nadu",
    ];
    let surveys = ["NFHS-4", "NFHS-5"];
    let areas = ["Total", "Urban", "Rural"];

    // (indicator, NFHS-4 national baseline, round-to-round drift)
    let indicators: [(&str, f64, f64); 6] = [
        ("Female literacy rate (%)", 68.4, 3.1),
        ("Women who are anaemic (%)", 53.1, 3.9),
        ("Institutional births (%)", 78.9, 9.9),
        ("Children fully vaccinated (%)", 62.0, 14.5),
        ("Households with improved sanitation (%)", 48.4, 20.9),
        ("Sex ratio at birth", 919.0, 10.0),
    ];

    let output_path = "All India National Family Health Survey.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut header = vec!["India/States/UTs", "Survey", "Area"];
    header.extend(indicators.iter().map(|(name, _, _)| *name));
    writer.write_record(&header)?;

    let mut n_rows = 0usize;
    for region in &regions {
        // Each state sits somewhere around the national baseline.
        let region_offset = if *region == "India" {
            0.0
        } else {
            rng.jitter(12.0)
        };

        for (round, survey) in surveys.iter().enumerate() {
            for area in &areas {
                let area_offset = match *area {
                    "Urban" => 4.0,
                    "Rural" => -4.0,
                    _ => 0.0,
                };

                let mut row = vec![region.to_string(), survey.to_string(), area.to_string()];
                for (_, baseline, drift) in &indicators {
                    let value = baseline
                        + region_offset
                        + area_offset
                        + drift * round as f64
                        + rng.jitter(1.5);
                    row.push(format!("{value:.1}"));
                }
                writer.write_record(&row)?;
                n_rows += 1;
            }
        }
    }
    writer.flush()?;

    println!(
        "Wrote {n_rows} rows ({} indicators) to {output_path}",
        indicators.len()
    );
    Ok(())
}
