/// Clausal system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Upper bound accepted by the age extractor. Larger matches are discarded.
pub const MAX_PLAUSIBLE_AGE: u32 = 120;

/// Maximum number of synonym expansions appended to a query.
pub const MAX_QUERY_EXPANSIONS: usize = 8;

/// Radius in characters of the excerpt window cut around matched evidence
/// when building clause references.
pub const EXCERPT_RADIUS: usize = 120;

/// Number of top-weighted fired rules that contribute clause references.
pub const CLAUSE_REFERENCE_RULES: usize = 2;
