use serde_json::{Map, Value};

/// An opaque controller record: device, client, WLAN config, alert, event or
/// report row, exactly as the controller returned it.
///
/// The record schema is vendor-controlled and versioned independently of this
/// client, so rows are passed through as JSON maps rather than modeled as
/// typed structs. MAC addresses appear under the `"mac"` key as strings.
pub type Record = Map<String, Value>;
