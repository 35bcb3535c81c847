//! Decision procedure turning a raw broadcast response into a
//! [`BroadcastResult`].

use serde_json::Value;

use crate::error::Error;
use crate::outcome::{BroadcastResult, Rejection};
use crate::rejection::{ReasonCode, RejectionKind};

/// Classify an already-deserialized broadcast response.
///
/// The `reason` string is the sole discriminant; payload shape never picks
/// the variant. Field values pass through verbatim, so classifying the same
/// value twice yields equal results.
///
/// # Errors
///
/// [`Error::UnrecognizedRejection`] when the response looks like a rejection
/// but its reason is outside the known taxonomy, and
/// [`Error::MalformedResponse`] when the shape matches neither outcome or a
/// known reason arrives with an undecodable payload.
pub fn classify(response: &Value) -> Result<BroadcastResult, Error> {
    tracing::trace!("classifying broadcast response");

    let Some(obj) = response.as_object() else {
        return Err(Error::MalformedResponse {
            reason: "response is not a JSON object".to_string(),
        });
    };

    let txid = obj.get("txid").and_then(Value::as_str);

    if !obj.contains_key("reason")
        && !obj.contains_key("error")
        && let Some(txid) = txid
    {
        return Ok(BroadcastResult::Accepted {
            txid: txid.to_string(),
        });
    }

    let Some(raw_reason) = obj.get("reason").and_then(Value::as_str) else {
        // Looks like a rejection (txid plus error-ish fields) but carries no
        // usable reason string.
        if txid.is_some() {
            tracing::debug!("rejection response without a usable reason field");
            return Err(Error::UnrecognizedRejection { reason: None });
        }
        return Err(Error::MalformedResponse {
            reason: "response carries neither txid nor reason".to_string(),
        });
    };

    let Ok(code) = raw_reason.parse::<ReasonCode>() else {
        tracing::debug!(reason = raw_reason, "unrecognized rejection reason");
        return Err(Error::UnrecognizedRejection {
            reason: Some(raw_reason.to_string()),
        });
    };

    Ok(BroadcastResult::Rejected(decode_rejection(code, obj)?))
}

/// Parse a raw response body and classify it.
///
/// # Errors
///
/// [`Error::Json`] when the body is not valid JSON, otherwise as
/// [`classify`].
pub fn classify_json(body: &str) -> Result<BroadcastResult, Error> {
    let response: Value = serde_json::from_str(body)?;
    classify(&response)
}

fn decode_rejection(
    code: ReasonCode,
    obj: &serde_json::Map<String, Value>,
) -> Result<Rejection, Error> {
    let error = required_string(obj, "error", code)?;
    let txid = required_string(obj, "txid", code)?;

    // Rebuild the tag/content wrapper so serde selects the variant from the
    // reason alone. A known code with an undecodable payload is malformed,
    // not unrecognized.
    let wrapper = serde_json::json!({
        "reason": code.as_ref(),
        "reason_data": obj.get("reason_data"),
    });
    let kind: RejectionKind =
        serde_json::from_value(wrapper).map_err(|err| Error::MalformedResponse {
            reason: format!("invalid reason_data for {code}: {err}"),
        })?;

    Ok(Rejection { error, txid, kind })
}

fn required_string(
    obj: &serde_json::Map<String, Value>,
    field: &str,
    code: ReasonCode,
) -> Result<String, Error> {
    obj.get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::MalformedResponse {
            reason: format!("rejection {code} is missing the {field} field"),
        })
}
