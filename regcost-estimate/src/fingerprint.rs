//! Input fingerprint: a blake3 hash over everything an estimate depends on.
//!
//! Identical inputs always hash identically, so the persistence layer can
//! skip recomputing or re-storing unchanged estimates.

use regcost_core::models::{CompanyProfile, CostDriver, DriverOrigin, HistoricalVariance};

const FIELD_SEP: &[u8] = &[0x1f];
const RECORD_SEP: &[u8] = &[0x1e];

/// Hex-encoded blake3 hash of the resolved inputs.
pub fn compute(
    drivers: &[CostDriver],
    profile: &CompanyProfile,
    history: &[HistoricalVariance],
    origin: DriverOrigin,
) -> String {
    let mut hasher = blake3::Hasher::new();

    hasher.update(b"profile");
    hasher.update(profile.industry.as_str().as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(&profile.employee_count.to_le_bytes());
    hasher.update(&profile.revenue.unwrap_or(-1.0).to_le_bytes());
    hasher.update(&profile.geographic_complexity.to_le_bytes());
    hasher.update(profile.tech_maturity.as_str().as_bytes());
    hasher.update(FIELD_SEP);
    hasher.update(profile.risk_appetite.as_str().as_bytes());
    hasher.update(RECORD_SEP);

    // Drivers sorted by id, then by encoded bytes.
    let mut encoded: Vec<(&str, Vec<u8>)> =
        drivers.iter().map(|d| (d.id.as_str(), encode_driver(d))).collect();
    encoded.sort_unstable();

    hasher.update(b"drivers");
    hasher.update(&(encoded.len() as u64).to_le_bytes());
    for (_, bytes) in &encoded {
        hasher.update(bytes);
    }

    hasher.update(b"history");
    hasher.update(&(history.len() as u64).to_le_bytes());
    for h in history {
        hasher.update(&h.estimated.to_le_bytes());
        hasher.update(&h.actual.to_le_bytes());
        hasher.update(&h.variance.to_le_bytes());
    }

    hasher.update(b"origin");
    hasher.update(&[u8::from(origin == DriverOrigin::ModelClassified)]);

    hasher.finalize().to_hex().to_string()
}

fn encode_driver(d: &CostDriver) -> Vec<u8> {
    let mut buf = Vec::with_capacity(d.id.len() + d.description.len() + 48);
    buf.extend_from_slice(d.id.as_bytes());
    buf.extend_from_slice(FIELD_SEP);
    buf.extend_from_slice(d.category.as_str().as_bytes());
    buf.extend_from_slice(FIELD_SEP);
    buf.extend_from_slice(d.description.as_bytes());
    buf.extend_from_slice(FIELD_SEP);
    buf.push(u8::from(d.is_one_time));
    buf.extend_from_slice(&d.estimated_cost.to_le_bytes());
    buf.extend_from_slice(&d.confidence.to_le_bytes());
    buf.extend_from_slice(d.department.as_str().as_bytes());
    buf.extend_from_slice(RECORD_SEP);
    buf
}
