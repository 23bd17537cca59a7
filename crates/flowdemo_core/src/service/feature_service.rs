//! Feature flag use-case service.
//!
//! Features are read-only apart from toggling; there is no create path.

use super::ServiceResult;
use crate::model::feature::Feature;
use crate::model::RecordId;
use crate::store::FeatureRepository;
use log::info;

/// Use-case service wrapper for feature flag operations.
pub struct FeatureService<R: FeatureRepository> {
    repo: R,
}

impl<R: FeatureRepository> FeatureService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_features(&self) -> ServiceResult<Vec<Feature>> {
        Ok(self.repo.list_features()?)
    }

    pub fn get_feature(&self, id: RecordId) -> ServiceResult<Option<Feature>> {
        Ok(self.repo.get_feature(id)?)
    }

    /// Flips `is_enabled` on feature `id` and returns the updated record.
    pub fn toggle_feature(&self, id: RecordId) -> ServiceResult<Option<Feature>> {
        let toggled = self.repo.toggle_feature(id)?;
        match &toggled {
            Some(feature) => info!(
                "event=feature_toggle module=service status=ok id={id} enabled={}",
                feature.is_enabled
            ),
            None => info!("event=feature_toggle module=service status=not_found id={id}"),
        }
        Ok(toggled)
    }
}
