// ── Domain model ──

pub mod link;
pub mod record;
pub mod results;
pub mod validation;

pub use link::{
    AntennaConfig, DEFAULT_BEAMWIDTH_DEG, DEFAULT_DISTANCE_M, DEFAULT_FREQUENCY_MHZ,
    DEFAULT_GAIN_DBI, DEFAULT_POWER_DBM, LinkConfiguration, LinkParams, Polarization,
    SystemGeneration,
};
pub use record::{RecordSummary, SimulationRecord, SummaryParameters, generate_id};
pub use results::{
    AntennaBreakdown, ComparisonParameters, RangeCurve, RangeSample, SimulationResults,
    SpectrumSample, SystemComparison, SystemMetrics,
};
pub use validation::{ConfigLimits, LIMITS, Limit, ValidationReport, validate};
