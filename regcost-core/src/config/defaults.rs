// Single source of truth for all default values.

// --- Estimation ---
pub const DEFAULT_COST_PER_FTE: f64 = 150_000.0;
pub const DEFAULT_LOW_SPREAD: f64 = 0.5;
pub const DEFAULT_HIGH_SPREAD: f64 = 1.0;
pub const DEFAULT_GEOGRAPHIC_STEP: f64 = 0.1;
pub const DEFAULT_LOW_MATURITY_MULTIPLIER: f64 = 1.25;
pub const DEFAULT_HIGH_MATURITY_MULTIPLIER: f64 = 0.8;
pub const DEFAULT_EMPTY_CONFIDENCE: f64 = 0.5;

// --- Scenarios ---
pub const DEFAULT_DELAY_PENALTY_RATE: f64 = 0.15;

// --- Calibration ---
pub const DEFAULT_SPREAD_THRESHOLD: f64 = 0.25;
pub const DEFAULT_SHRINKAGE_SAMPLES: f64 = 4.0;
pub const DEFAULT_MAX_MEAN_SHIFT: f64 = 0.5;
pub const DEFAULT_PER_SAMPLE_CONFIDENCE_DELTA: f64 = 0.05;
pub const DEFAULT_MAX_CONFIDENCE_DELTA: f64 = 0.15;
pub const DEFAULT_CONFIDENCE_FLOOR: f64 = 0.5;

// --- Health ---
pub const DEFAULT_TREND_WINDOW: usize = 6;
pub const DEFAULT_COST_PREDICTABILITY: f64 = 80.0;
pub const DEFAULT_EXPOSURE_PER_POINT: f64 = 10_000.0; // $1M saturates
pub const DEFAULT_TREND_STABLE_BAND: u8 = 2;
pub const DEFAULT_INDUSTRY_BENCHMARKS: [(&str, u8); 7] = [
    ("TECHNOLOGY", 74),
    ("FINANCIAL_SERVICES", 81),
    ("HEALTHCARE", 78),
    ("MANUFACTURING", 70),
    ("RETAIL", 68),
    ("ENERGY", 76),
    ("GOVERNMENT", 72),
];

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
