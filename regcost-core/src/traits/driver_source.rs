use crate::errors::RegcostResult;
use crate::models::{CostDriver, DriverOrigin};

/// Upstream supplier of classified cost drivers for a regulation.
///
/// The engine consumes whatever list a source returns; how text is segmented
/// into drivers is the source's concern.
pub trait ICostDriverSource: Send + Sync {
    fn drivers(&self, regulation_id: &str) -> RegcostResult<Vec<CostDriver>>;

    /// How this source produces drivers.
    fn origin(&self) -> DriverOrigin;
}
