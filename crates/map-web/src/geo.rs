//! Country-boundary geometry fetching and the dataset join.

use std::collections::HashMap;

use advice_core::{AdviceError, CountryAdvice};
use serde_json::{json, Value};
use tracing::debug;

/// Fetch the boundary feature collection.
pub async fn fetch_boundaries(http: &reqwest::Client, url: &str) -> Result<Value, AdviceError> {
    let response = http
        .get(url)
        .send()
        .await
        .map_err(|e| AdviceError::Network(format!("Request to {} failed: {}", url, e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AdviceError::Network(format!(
            "Request to {} returned status {}",
            url,
            status.as_u16()
        )));
    }

    response.json().await.map_err(|e| {
        AdviceError::Decode(format!("Failed to decode boundaries from {}: {}", url, e))
    })
}

/// Inner-join boundary features to advice rows on the `name` property.
///
/// Features without an advice row, and advice rows without a feature,
/// are dropped from the result. Joined features gain `value` and
/// `entry-requirements` properties for the choropleth fill and tooltip.
pub fn join_boundaries(
    boundaries: &Value,
    advice: &[CountryAdvice],
) -> Result<Value, AdviceError> {
    let features = boundaries
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AdviceError::Decode("Boundary document has no features array".to_string())
        })?;

    let by_name: HashMap<&str, &CountryAdvice> =
        advice.iter().map(|row| (row.name.as_str(), row)).collect();

    let mut joined = Vec::new();
    for feature in features {
        let Some(name) = feature.pointer("/properties/name").and_then(Value::as_str) else {
            continue;
        };
        let Some(row) = by_name.get(name) else {
            continue;
        };

        let mut feature = feature.clone();
        if let Some(properties) = feature.get_mut("properties").and_then(Value::as_object_mut) {
            properties.insert("value".to_string(), json!(row.value));
            properties.insert(
                "entry-requirements".to_string(),
                json!(row.entry_requirements),
            );
        }
        joined.push(feature);
    }

    debug!(
        boundaries = features.len(),
        joined = joined.len(),
        "Joined boundary features to advice rows"
    );

    Ok(json!({
        "type": "FeatureCollection",
        "features": joined,
    }))
}
