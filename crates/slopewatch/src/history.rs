//! State behind the monitoring history screen.

use tracing::debug;

use crate::error::Result;
use crate::record::EnvironmentalRecord;
use crate::stats::{aggregate, Aggregate};
use crate::storage::{RecordStore, SortOrder};

/// The records on display and the order they are shown in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryView {
    records: Vec<EnvironmentalRecord>,
    order: SortOrder,
}

impl HistoryView {
    /// Create an empty view showing the most recent records first.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed records, in display order.
    #[must_use]
    pub fn records(&self) -> &[EnvironmentalRecord] {
        &self.records
    }

    /// The current display order.
    #[must_use]
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Reload the records from `store`.
    ///
    /// On failure the previously displayed records are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Storage`] if the store cannot be read.
    pub async fn refresh(&mut self, store: &RecordStore) -> Result<()> {
        self.records = store.list(self.order).await?;
        debug!("History refreshed with {} records", self.records.len());
        Ok(())
    }

    /// Flip between newest-first and oldest-first. Only the display changes.
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggled();
        self.order.sort(&mut self.records);
    }

    /// Delete one record from the store and from the view.
    ///
    /// Returns `true` if the record existed. The view is left as it was when
    /// the store cannot be updated.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Storage`] if the store cannot be updated.
    pub async fn delete(&mut self, store: &RecordStore, id: &str) -> Result<bool> {
        let removed = store.remove(id).await?;
        self.records.retain(|record| record.id != id);
        Ok(removed)
    }

    /// Delete the whole history.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Storage`] if the store cannot be cleared.
    pub async fn clear(&mut self, store: &RecordStore) -> Result<()> {
        store.clear().await?;
        self.records.clear();
        Ok(())
    }

    /// Averages over the displayed records, or `None` when there are none.
    #[must_use]
    pub fn statistics(&self) -> Option<Aggregate> {
        aggregate(&self.records)
    }
}
