use super::ApiEndpoint;
use crate::models::record::Record;
use crate::{Controller, ControllerResult};

/// Client (station) and user operations.
pub struct StationApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for StationApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> StationApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Lists the clients currently active on the controller.
    pub async fn list(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("stat/sta", None).await
    }

    /// Lists all users ever seen by the controller.
    pub async fn users(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("list/user", None).await
    }

    /// Lists the configured user groups.
    pub async fn user_groups(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("list/usergroup", None).await
    }

    /// Blocks the client with the given MAC address from the network.
    pub async fn block(&self, mac: &str) -> ControllerResult<()> {
        self.controller.mac_cmd(mac, "block-sta", "stamgr").await
    }

    /// Unblocks a previously blocked client.
    pub async fn unblock(&self, mac: &str) -> ControllerResult<()> {
        self.controller.mac_cmd(mac, "unblock-sta", "stamgr").await
    }

    /// Disconnects the client with the given MAC address, forcing it to
    /// reassociate. Useful for nudging a client off a weak access point.
    pub async fn reconnect(&self, mac: &str) -> ControllerResult<()> {
        self.controller.mac_cmd(mac, "kick-sta", "stamgr").await
    }
}
