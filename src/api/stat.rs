use std::time::{SystemTime, UNIX_EPOCH};

use serde_json::json;

use super::ApiEndpoint;
use crate::models::record::Record;
use crate::{Controller, ControllerResult};

/// Statistics reports.
pub struct StatApi<'a> {
    controller: &'a Controller,
}

impl<'a> ApiEndpoint for StatApi<'a> {
    fn controller(&self) -> &Controller {
        self.controller
    }
}

impl<'a> StatApi<'a> {
    pub(crate) fn new(controller: &'a Controller) -> Self {
        Self { controller }
    }

    /// Fetches hourly system statistics (bytes transferred, station count,
    /// bucket time) for the window `[start, end]`, both in milliseconds since
    /// the epoch.
    pub async fn hourly_system(&self, start: u64, end: u64) -> ControllerResult<Vec<Record>> {
        let payload = json!({
            "attrs": ["bytes", "num_sta", "time"],
            "start": start,
            "end": end,
        });
        self.controller
            .read_records("stat/report/hourly.system", Some(payload))
            .await
    }

    /// Fetches hourly system statistics for the last day.
    ///
    /// The window ends one hour in the past so the still-filling current
    /// bucket is excluded.
    pub async fn last_day(&self) -> ControllerResult<Vec<Record>> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let (start, end) = last_day_window(now);
        self.hourly_system(start, end).await
    }
}

/// Window for the last-day report: `[now−24h, now−1h]` in whole seconds,
/// scaled to milliseconds.
fn last_day_window(now_secs: u64) -> (u64, u64) {
    let start = now_secs.saturating_sub(24 * 3600) * 1000;
    let end = now_secs.saturating_sub(3600) * 1000;
    (start, end)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn last_day_window_excludes_current_hour() {
        let now = 1_700_000_000;
        let (start, end) = last_day_window(now);
        assert_eq!(start, (now - 86_400) * 1000);
        assert_eq!(end, (now - 3_600) * 1000);
        assert!(start < end);
    }
}
