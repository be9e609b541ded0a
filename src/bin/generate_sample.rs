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

    /// Uniform integer in `0..n`.
    fn below(&mut self, n: u64) -> u64 {
        (self.next_f64() * n as f64) as u64 % n
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len() as u64) as usize]
    }
}

const HEADERS: [&str; 8] = [
    "stock_code",
    "company_name",
    "AI-technology",
    "blockchain-technology",
    "big-data-technology",
    "cloud-technology",
    "digital-application",
    "total_word_count",
];

const PREFIXES: &[&str] = &[
    "Eastern", "Pacific", "Golden", "Huaxia", "Sunrise", "Northern", "Jade", "Great Wall",
    "Pearl River", "Yangtze",
];

/// Sector words; most hit one industry keyword, a few hit none or two.
const SECTORS: &[&str] = &[
    "Bank",
    "Insurance",
    "Real Estate",
    "Machinery",
    "Logistics",
    "Energy",
    "Software",
    "Pharma",
    "Food",
    "Education",
    "Media",
    "Holdings",
    "Bank Software",
    "Logistics Media",
];

/// Relative intensity of each technology term, same order as the columns.
const TERM_SCALE: [f64; 5] = [40.0, 8.0, 30.0, 20.0, 60.0];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "sample_word_frequency.csv";
    let companies = 60;

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(HEADERS).context("writing header")?;

    for i in 0..companies {
        let code = format!("{:06}", 600000 + i * 17);
        let name = format!(
            "{} {} Co., Ltd.",
            rng.pick(PREFIXES),
            rng.pick(SECTORS)
        );

        // Digital maturity drives all term counts for a company.
        let maturity = rng.next_f64();
        let counts: Vec<u64> = TERM_SCALE
            .iter()
            .map(|scale| (scale * maturity * (0.5 + rng.next_f64())).round() as u64)
            .collect();
        let total_words = 20_000 + rng.below(80_000);

        let mut record = vec![code, name];
        record.extend(counts.iter().map(u64::to_string));
        record.push(total_words.to_string());
        writer.write_record(&record).context("writing company row")?;
    }

    writer.flush().context("flushing CSV")?;

    println!("Wrote {companies} companies to {output_path}");
    println!("Set \"data_path\": \"{output_path}\" in digindex.json to explore it.");
    Ok(())
}
