// Constants for the resilience module
use std::time::Duration;

/// Default maximum amount of retries proposed by stock consultants
pub const DEFAULT_MAXIMUM_AMOUNT_OF_RETRIES: u32 = 3;

/// Default wait before a retried attempt
pub const DEFAULT_WAIT_BEFORE_RETRY: Duration = Duration::from_millis(500);

/// Default fail-fast window armed by stock fallthrough consultants
pub const DEFAULT_FALLTHROUGH_WINDOW: Duration = Duration::from_secs(60);
