use serde_json::json;

use super::ApiEndpoint;
use crate::models::record::Record;
use crate::{Controller, ControllerResult};

/// Alert and event operations.
pub struct EventApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for EventApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> EventApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Lists all alerts, archived ones included.
    pub async fn alerts(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("list/alarm", None).await
    }

    /// Lists unarchived alerts, newest first.
    pub async fn unarchived_alerts(&self) -> ControllerResult<Vec<Record>> {
        let payload = json!({ "_sort": "-time", "archived": false });
        self.controller.read_records("list/alarm", Some(payload)).await
    }

    /// Archives every alert on the controller.
    pub async fn archive_all_alerts(&self) -> ControllerResult<()> {
        self.controller.sys_cmd("archive-all-alarms", "evtmgr").await?;
        Ok(())
    }

    /// Lists recent controller events (associations, roams, and the like).
    pub async fn list(&self) -> ControllerResult<Vec<Record>> {
        self.controller.read_records("stat/event", None).await
    }
}
