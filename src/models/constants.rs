/// Items per page in the grid and list views.
pub const PAGE_SIZE: usize = 12;

/// Maximum number of page-number controls rendered at once.
pub const PAGE_WINDOW: usize = 5;

/// Number of execution records kept in the playground history.
pub const HISTORY_CAP: usize = 10;

/// Lower bound of the simulated execution latency.
pub const MIN_DELAY_MS: u64 = 800;

/// Upper bound of the simulated execution latency.
pub const MAX_DELAY_MS: u64 = 2000;

/// Largest source accepted by the simulated runner (64 KiB).
pub const MAX_SOURCE_BYTES: usize = 64 * 1024;
