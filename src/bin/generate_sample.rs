use anyhow::{Context, Result};
use serde::Serialize;

/// One synthetic patient, serialized with the dashboard's header names.
#[derive(Serialize)]
struct Patient {
    #[serde(rename = "Age")]
    age: i64,
    #[serde(rename = "Gender")]
    gender: u8,
    #[serde(rename = "BMI")]
    bmi: f64,
    #[serde(rename = "Smoking")]
    smoking: u8,
    #[serde(rename = "GeneticRisk")]
    genetic_risk: u8,
    #[serde(rename = "PhysicalActivity")]
    physical_activity: f64,
    #[serde(rename = "AlcoholIntake")]
    alcohol_intake: f64,
    #[serde(rename = "CancerHistory")]
    cancer_history: u8,
    #[serde(rename = "Diagnosis")]
    diagnosis: u8,
}

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

    fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// 1 with probability `p`.
    fn bernoulli(&mut self, p: f64) -> u8 {
        (self.next_f64() < p) as u8
    }
}

fn logistic(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

fn patient(rng: &mut SimpleRng) -> Patient {
    let age = 20 + (rng.next_u64() % 61) as i64;
    let gender = rng.bernoulli(0.5);
    let bmi = rng.uniform(15.0, 40.0);
    let smoking = rng.bernoulli(0.27);
    let genetic_risk = match rng.next_f64() {
        p if p < 0.6 => 0,
        p if p < 0.9 => 1,
        _ => 2,
    };
    let physical_activity = rng.uniform(0.0, 10.0);
    let alcohol_intake = rng.uniform(0.0, 5.0);
    let cancer_history = rng.bernoulli(0.14);

    // Risk rises with age, BMI, smoking, genetics, history and alcohol;
    // activity lowers it. Women carry a higher baseline.
    let z = -6.5
        + 0.035 * age as f64
        + 0.09 * bmi
        + 1.1 * smoking as f64
        + 0.8 * genetic_risk as f64
        + 0.5 * alcohol_intake
        - 0.15 * physical_activity
        + 1.6 * cancer_history as f64
        + 1.1 * gender as f64;
    let diagnosis = rng.bernoulli(logistic(z));

    Patient {
        age,
        gender,
        bmi,
        smoking,
        genetic_risk,
        physical_activity,
        alcohol_intake,
        cancer_history,
        diagnosis,
    }
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let output_path = "The_Cancer_data_1500_V2.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    let n = 1500;
    let mut positives = 0usize;
    for _ in 0..n {
        let p = patient(&mut rng);
        positives += p.diagnosis as usize;
        writer.serialize(&p).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {n} patients ({positives} diagnosed) to {output_path}");
    Ok(())
}
