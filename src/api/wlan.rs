use super::ApiEndpoint;
use crate::models::record::Record;
use crate::{Controller, ControllerResult};

/// WLAN configuration listing.
pub struct WlanApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for WlanApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> WlanApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Lists the WLAN configurations defined on the controller.
    pub async fn list(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("list/wlanconf", None).await
    }
}
