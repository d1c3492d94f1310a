use serde_json::json;

use super::ApiEndpoint;
use crate::models::record::Record;
use crate::{Controller, ControllerError, ControllerResult};

/// Device `state` value the controller reports for a connected access point.
const STATE_CONNECTED: i64 = 1;

/// Access point operations.
pub struct DeviceApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for DeviceApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> DeviceApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Lists the access points managed by the controller.
    ///
    /// Records are returned as opaque maps; useful keys include `mac`, `name`
    /// and `state` (1 = connected).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the controller reports a
    /// failure envelope.
    pub async fn list(&self) -> ControllerResult<Vec<Record>> {
        let payload = json!({ "_depth": 2, "test": null });
        self.controller.read_records("stat/device", Some(payload)).await
    }

    /// Restarts the access point with the given MAC address.
    ///
    /// The controller accepts restart commands for unknown MACs with a
    /// success envelope, so no error is reported in that case.
    pub async fn restart(&self, mac: &str) -> ControllerResult<()> {
        self.controller.mac_cmd(mac, "restart", "devmgr").await
    }

    /// Restarts the first connected access point whose name exactly matches
    /// `name`.
    ///
    /// Completes without effect and without error when no connected access
    /// point carries that name.
    ///
    /// # Errors
    ///
    /// Fails with [`ControllerError::ApiError`] before any network call when
    /// `name` is empty.
    pub async fn restart_by_name(&self, name: &str) -> ControllerResult<()> {
        if name.is_empty() {
            return Err(ControllerError::ApiError(
                "Access point name is required".into(),
            ));
        }
        for ap in self.list().await? {
            let connected = ap.get("state").and_then(|v| v.as_i64()) == Some(STATE_CONNECTED);
            let matches = ap.get("name").and_then(|v| v.as_str()) == Some(name);
            if connected && matches {
                if let Some(mac) = ap.get("mac").and_then(|v| v.as_str()) {
                    return self.restart(mac).await;
                }
            }
        }
        Ok(())
    }
}
