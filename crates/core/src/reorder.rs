//! Manual ordering by swapping two records.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::DbId;

/// Request body for `POST /{resource}/reorder`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SwapRequest {
    pub first_id: DbId,
    pub second_id: DbId,
}

impl SwapRequest {
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.first_id == self.second_id {
            return Err(CoreError::Validation(
                "first_id and second_id must refer to different records".into(),
            ));
        }
        Ok(())
    }
}
