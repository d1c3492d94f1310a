pub mod backup;
pub mod device;
pub mod event;
pub mod stat;
pub mod station;
pub mod wlan;

/// Common trait for API endpoint handlers, giving access to the owning
/// controller session.
#[allow(dead_code)]
pub(crate) trait ApiEndpoint {
    fn controller(&self) -> &crate::Controller;
}
