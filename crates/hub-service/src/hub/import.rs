//! Bulk import of exported hub documents, including legacy exports.

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use hub_core::error::AppError;
use hub_core::result::AppResult;
use hub_entity::{normalize_hub, HubUpdate};

use super::service::HubService;

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Slugs that were created.
    pub created: Vec<String>,
    /// Slugs that existed and were overwritten.
    pub replaced: Vec<String>,
    /// Slugs that existed and were left alone.
    pub skipped: Vec<String>,
}

impl HubService {
    /// Import one hub document or an array of them.
    ///
    /// Every document is normalized first, so legacy `actionCards` exports
    /// are accepted. Existing slugs are skipped unless `overwrite` is set,
    /// in which case the stored hub is fully replaced.
    pub async fn import(&self, raw: &Value, overwrite: bool) -> AppResult<ImportReport> {
        let documents: Vec<&Value> = match raw {
            Value::Array(items) => items.iter().collect(),
            Value::Object(_) => vec![raw],
            _ => {
                return Err(AppError::validation(
                    "Import file must contain a hub object or an array of hubs",
                ));
            }
        };

        let mut report = ImportReport::default();
        for doc in documents {
            if !doc.is_object() {
                warn!("Skipping non-object entry in import file");
                continue;
            }
            let hub = normalize_hub(doc);
            let slug = hub.slug.clone();

            if self.store().get_hub(&slug).await?.is_some() {
                if overwrite {
                    self.store()
                        .update_hub(&slug, HubUpdate::replace_with(&hub))
                        .await?;
                    report.replaced.push(slug);
                } else {
                    report.skipped.push(slug);
                }
                continue;
            }

            self.store().create_hub(hub).await?;
            report.created.push(slug);
        }

        info!(
            created = report.created.len(),
            replaced = report.replaced.len(),
            skipped = report.skipped.len(),
            "Import finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use hub_database::JsonFileHubStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_import_legacy_and_skip_existing() {
        let dir = tempfile::tempdir().unwrap();
        let service = HubService::new(Arc::new(JsonFileHubStore::new(dir.path().join("h.json"))));
        service.create(&json!({ "eventName": "Existing" })).await.unwrap();

        let export = json!([
            { "slug": "existing", "eventName": "Changed" },
            {
                "slug": "volleyverse",
                "eventName": "Volleyverse",
                "actionCards": [{ "id": "c1", "title": "Chat", "link": "123", "linkType": "whatsapp" }]
            },
            "garbage"
        ]);

        let report = service.import(&export, false).await.unwrap();
        assert_eq!(report.created, ["volleyverse"]);
        assert_eq!(report.skipped, ["existing"]);
        assert_eq!(service.get("existing").await.unwrap().event_name, "Existing");
        assert_eq!(
            service.get("volleyverse").await.unwrap().blocks[0].url,
            "https://wa.me/123"
        );

        let report = service.import(&export, true).await.unwrap();
        assert_eq!(report.replaced, ["existing", "volleyverse"]);
        assert_eq!(service.get("existing").await.unwrap().event_name, "Changed");
    }

    #[tokio::test]
    async fn test_import_canonicalizes_slugs() {
        let dir = tempfile::tempdir().unwrap();
        let service = HubService::new(Arc::new(JsonFileHubStore::new(dir.path().join("h.json"))));

        let export = json!({ "slug": "Volley Verse/2025", "eventName": "Volley", "isPublished": true });
        let report = service.import(&export, false).await.unwrap();
        assert_eq!(report.created, ["volley-verse-2025"]);
        assert!(service.get_public("volley-verse-2025", false).await.is_ok());
    }

    #[tokio::test]
    async fn test_import_rejects_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let service = HubService::new(Arc::new(JsonFileHubStore::new(dir.path().join("h.json"))));
        assert!(service.import(&json!(42), false).await.is_err());
    }
}
