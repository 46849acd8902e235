//! Request DTOs with validation.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use validator::Validate;

use hub_service::ReorderTarget;

use crate::error::ApiError;

/// The typed fields of a create request that are checked before the body is
/// normalized. Every other field is accepted as-is.
#[derive(Debug, Clone, Default, Validate)]
pub struct CreateHubRequest {
    /// Display name; also the slug source when no slug is given.
    #[validate(length(max = 200, message = "Event name must be at most 200 characters"))]
    pub event_name: Option<String>,
    /// Requested slug, canonicalized by the service.
    #[validate(length(max = 100, message = "Slug must be at most 100 characters"))]
    pub slug: Option<String>,
}

impl CreateHubRequest {
    /// Check the body of `POST /api/hubs`.
    pub fn check(body: &Value) -> Result<(), ApiError> {
        if !body.is_object() {
            return Err(hub_core::error::AppError::validation(
                "Hub payload must be a JSON object",
            )
            .into());
        }
        Self::from_body(body).validate()?;
        Ok(())
    }

    /// Pick the string-valued fields out of `body`. Fields of any other type
    /// are ignored here and later by slug derivation.
    fn from_body(body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            event_name: text("eventName"),
            slug: text("slug"),
        }
    }
}

/// Body of `POST /api/hubs/{slug}/reorder`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReorderRequest {
    /// `blocks` or `sections`.
    pub target: ReorderTarget,
    /// Index of the item being moved.
    pub from: i64,
    /// Index it is dropped at.
    pub to: i64,
}

impl ReorderRequest {
    /// The indexes as list positions. A negative index maps past the end of
    /// any list, which makes the move a no-op.
    pub fn positions(&self) -> (usize, usize) {
        let position = |i: i64| usize::try_from(i).unwrap_or(usize::MAX);
        (position(self.from), position(self.to))
    }
}

/// Query for `GET /api/hubs`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive filter on event name or slug.
    pub q: Option<String>,
}

/// Query for `GET /h/{slug}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    /// Render unpublished hubs too.
    #[serde(default, deserialize_with = "query_flag")]
    pub preview: bool,
}

/// `true`, `1`, `yes` and `on` (any case) are set; anything else is unset.
fn query_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    Ok(matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_check() {
        assert!(CreateHubRequest::check(&json!({ "eventName": "Test Event" })).is_ok());
        assert!(CreateHubRequest::check(&json!({})).is_ok());
        assert!(CreateHubRequest::check(&json!([1, 2])).is_err());
        assert!(CreateHubRequest::check(&json!({ "slug": "x".repeat(101) })).is_err());
    }

    #[test]
    fn test_create_check_ignores_mistyped_siblings() {
        let body = json!({ "eventName": "x".repeat(300), "slug": 7 });
        assert!(CreateHubRequest::check(&body).is_err());

        let body = json!({ "eventName": ["not", "text"], "slug": "y".repeat(101) });
        assert!(CreateHubRequest::check(&body).is_err());

        assert!(CreateHubRequest::check(&json!({ "eventName": 5, "slug": null })).is_ok());
    }

    #[test]
    fn test_reorder_negative_index_is_out_of_range() {
        let req: ReorderRequest =
            serde_json::from_value(json!({ "target": "blocks", "from": -1, "to": 0 })).unwrap();
        assert_eq!(req.positions(), (usize::MAX, 0));

        let req: ReorderRequest =
            serde_json::from_value(json!({ "target": "blocks", "from": 2, "to": 1 })).unwrap();
        assert_eq!(req.positions(), (2, 1));
    }

    #[test]
    fn test_preview_flag_forms() {
        let parse = |value: &str| -> bool {
            let query: PageQuery =
                serde_json::from_value(json!({ "preview": value })).unwrap();
            query.preview
        };
        assert!(parse("true"));
        assert!(parse("1"));
        assert!(parse("YES"));
        assert!(!parse("0"));
        assert!(!parse("false"));
        assert!(!serde_json::from_value::<PageQuery>(json!({})).unwrap().preview);
    }

    #[test]
    fn test_reorder_request_target() {
        let req: ReorderRequest =
            serde_json::from_value(json!({ "target": "sections", "from": 0, "to": 2 })).unwrap();
        assert_eq!(req.target, ReorderTarget::Sections);
        assert!(serde_json::from_value::<ReorderRequest>(json!({ "target": "x", "from": 0, "to": 1 })).is_err());
    }
}
