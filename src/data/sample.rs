use super::extract::ColumnSet;

// ---------------------------------------------------------------------------
// Synthetic benchmark tables
// ---------------------------------------------------------------------------

/// First matrix dimension the benchmark times.
pub const START_N: usize = 400;

/// Rough per-method cost in ms for one `n = 400` multiply, in
/// [`ColumnSet::Full`] header order after `elements`.
const BASE_MS: [(&str, f64); 8] = [
    ("naive", 812.0),
    ("transpose", 95.0),
    ("transpose_parallel", 30.0),
    ("metal_naive", 4.0),
    ("metal_transpose", 3.5),
    ("mps", 1.3),
    ("gonum", 9.0),
    ("openblas", 2.0),
];

/// Render a table in the format the benchmark prints: a title line, the
/// header for `columns`, then one row per matrix size with `%.2f` timings.
pub fn generate_table(columns: ColumnSet, rows: usize, increment: usize, seed: u64) -> String {
    let mut rng = SimpleRng::new(seed);
    let header = columns.header();

    let mut lines = vec![
        format!("# matrix multiplication benchmark ({rows} sizes, seed {seed})"),
        header.join(" "),
    ];

    for r in 0..rows {
        let n = START_N + r * increment;
        let scale = (n as f64 / START_N as f64).powi(3);
        let mut line = (n * n).to_string();
        for name in &header[1..] {
            let base = BASE_MS
                .iter()
                .find(|(method, _)| method == name)
                .map(|(_, ms)| *ms)
                .unwrap_or(1.0);
            let jitter = 1.0 + rng.gauss(0.0, 0.03);
            line.push_str(&format!(" {:.2}", (base * scale * jitter).max(0.01)));
        }
        lines.push(line);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Minimal deterministic PRNG (xoshiro256**)
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
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

    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::extract::{extract_columns, extract_ratios};
    use crate::data::loader::parse_table;

    #[test]
    fn test_generated_table_parses_in_every_layout() {
        for cols in [ColumnSet::Full, ColumnSet::Fast, ColumnSet::GpuOnly] {
            let text = generate_table(cols, 5, 16, 42);
            let lines: Vec<&str> = text.lines().collect();
            let table = parse_table(&lines).unwrap();
            let set = extract_columns(&table, cols).unwrap();
            assert_eq!(set.len(), 5);
            assert_eq!(set.x[0], (START_N * START_N) as f64);
            assert_eq!(set.x[1], ((START_N + 16) * (START_N + 16)) as f64);
            assert_eq!(set.series.len(), cols.num_columns() - 1);
        }
    }

    #[test]
    fn test_full_table_supports_ratio_mode() {
        let text = generate_table(ColumnSet::Full, 3, 100, 7);
        let lines: Vec<&str> = text.lines().collect();
        let set = extract_ratios(&parse_table(&lines).unwrap(), true).unwrap();
        assert_eq!(set.labels(), vec!["metal_naive/naive", "metal_transpose/transpose"]);
        assert!(set.series.iter().flat_map(|s| &s.y).all(|v| v.is_finite() && *v > 0.0));
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(
            generate_table(ColumnSet::Fast, 4, 8, 1),
            generate_table(ColumnSet::Fast, 4, 8, 1)
        );
        let mut rng = SimpleRng::new(3);
        assert!((0..100).map(|_| rng.next_f64()).all(|v| (0.0..1.0).contains(&v)));
    }
}
