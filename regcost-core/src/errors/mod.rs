mod regcost_error;
mod validation_error;

pub use regcost_error::{RegcostError, RegcostResult};
pub use validation_error::ValidationError;
