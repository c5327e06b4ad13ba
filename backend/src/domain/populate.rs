//! Index population use-case.
//!
//! Writes a batch of synthetic users into the engine one document at a time.
//! There is no rollback: the first write failure aborts the remaining writes
//! and earlier documents stay in the index.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::domain::generator::synthetic_user;
use crate::domain::ports::{USER_INDEX, UserIndex, UserIndexError};

/// Populates the user index with synthetic documents.
#[derive(Clone)]
pub struct IndexPopulator {
    index: Arc<dyn UserIndex>,
}

impl IndexPopulator {
    /// Build a populator over the shared engine port.
    pub fn new(index: Arc<dyn UserIndex>) -> Self {
        Self { index }
    }

    /// Ensure the index exists, then write exactly `count` synthetic users.
    ///
    /// The caller is responsible for bounding `count`; this operation trusts
    /// it. Writes are sequential and the first failure is returned as-is.
    ///
    /// # Errors
    ///
    /// Propagates [`UserIndexError`] from the existence probe, from index
    /// creation, or from the first failing write.
    pub async fn populate(&self, count: u32) -> Result<(), UserIndexError> {
        self.ensure_index().await?;

        let mut rng = StdRng::from_os_rng();
        for written in 0..count {
            let user = synthetic_user(&mut rng);
            self.index.index_user(&user).await?;
            debug!(
                written = written + 1,
                username = %user.username,
                "indexed synthetic user"
            );
        }

        info!(count, "index population complete");
        Ok(())
    }

    /// Create the index when the existence probe reports it absent.
    async fn ensure_index(&self) -> Result<(), UserIndexError> {
        if self.index.index_exists().await? {
            return Ok(());
        }

        info!(index = USER_INDEX, "creating missing user index");
        self.index.create_index().await
    }
}
