use regcost_core::errors::RegcostResult;
use regcost_core::models::{CostCategory, CostDriver, Department, DriverOrigin};
use regcost_core::traits::ICostDriverSource;

/// Deterministic driver generator. The same seed and regulation id always
/// yield the same drivers.
#[derive(Debug, Clone)]
pub struct SyntheticDriverSource {
    seed: u64,
    count: usize,
    origin: DriverOrigin,
}

impl SyntheticDriverSource {
    pub fn new(seed: u64, count: usize) -> Self {
        Self {
            seed,
            count,
            origin: DriverOrigin::Manual,
        }
    }

    pub fn with_origin(mut self, origin: DriverOrigin) -> Self {
        self.origin = origin;
        self
    }

    /// Generate drivers without going through the trait.
    pub fn generate(&self, regulation_id: &str) -> Vec<CostDriver> {
        let mut rng = SplitMix64::new(self.seed ^ fold(regulation_id));
        (0..self.count)
            .map(|i| {
                let category = CostCategory::ALL[rng.below(CostCategory::ALL.len())];
                let department = Department::ALL[rng.below(Department::ALL.len())];
                // Costs between 1k and 250k, confidences between 0.3 and 1.0.
                let estimated_cost = (1_000.0 + rng.unit() * 249_000.0).round();
                let confidence = ((0.3 + rng.unit() * 0.7) * 100.0).round() / 100.0;
                CostDriver {
                    id: format!("{regulation_id}-{i:04}"),
                    category,
                    description: format!("synthetic {} requirement {i}", category.as_str()),
                    is_one_time: rng.unit() < 0.6,
                    estimated_cost,
                    confidence,
                    department,
                }
            })
            .collect()
    }
}

impl ICostDriverSource for SyntheticDriverSource {
    fn drivers(&self, regulation_id: &str) -> RegcostResult<Vec<CostDriver>> {
        Ok(self.generate(regulation_id))
    }

    fn origin(&self) -> DriverOrigin {
        self.origin
    }
}

/// FNV-1a over the id bytes.
fn fold(s: &str) -> u64 {
    s.bytes().fold(0xcbf2_9ce4_8422_2325, |h, b| {
        (h ^ u64::from(b)).wrapping_mul(0x0100_0000_01b3)
    })
}

struct SplitMix64(u64);

impl SplitMix64 {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        z ^ (z >> 31)
    }

    /// Uniform in [0, 1).
    fn unit(&mut self) -> f64 {
        (self.next() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next() % n as u64) as usize
    }
}
