use anyhow::{Context, Result};

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
    env_logger::init();

    let mut rng = SimpleRng::new(42);

    // True Cq per (target, sample); replicates jitter around these.
    let targets = [("Actb", 18.0), ("Gapdh", 19.5), ("Stat3", 24.0)];
    let samples = [("KC_sample1", 0.0), ("KC_sample2", 0.8), ("Treated_A", 2.5)];
    let replicates = 3;
    let noise = 0.15;

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["Target", "Sample", "Cq", "Well"])?;

    let mut well = 1;
    let mut row_count = 0;
    for (target, base_cq) in targets {
        for (sample, offset) in samples {
            for rep in 1..=replicates {
                let cq = rng.gauss(base_cq + offset, noise);
                writer.write_record([
                    target.to_string(),
                    format!("{sample}_{rep}"),
                    format!("{cq:.3}"),
                    format!("A{well}"),
                ])?;
                well += 1;
                row_count += 1;
            }
        }
        // One unreplicated control per target, so n = 1 groups show up.
        let cq = rng.gauss(base_cq + 4.0, noise);
        writer.write_record([
            target.to_string(),
            "Control".to_string(),
            format!("{cq:.3}"),
            format!("A{well}"),
        ])?;
        well += 1;
        row_count += 1;
    }

    writer.flush().with_context(|| format!("writing {output_path}"))?;

    println!("Wrote {row_count} measurement rows to {output_path}");
    Ok(())
}
