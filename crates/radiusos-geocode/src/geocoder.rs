use std::future::Future;
use std::time::Duration;

use radiusos_core::Coordinates;

/// Turns a free-text address into coordinates.
///
/// Implementations absorb every provider failure (timeout, no match,
/// transport or auth error) and return `None`; callers treat `None` as
/// "no coordinates", never as a fatal condition. There is no retry.
pub trait Geocoder {
    fn geocode(&self, address: &str) -> impl Future<Output = Option<Coordinates>>;

    /// Minimum spacing between consecutive calls during a bulk pass.
    /// Interactive single lookups do not wait.
    fn min_delay(&self) -> Duration {
        Duration::ZERO
    }
}
