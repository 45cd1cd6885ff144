mod calibrator;
mod cost_calculator;
mod driver_source;
mod health_scorer;

pub use calibrator::ICalibrator;
pub use cost_calculator::ICostCalculator;
pub use driver_source::ICostDriverSource;
pub use health_scorer::IHealthScorer;
