use crate::error::ConsoleError;
use crate::models::DocumentRecord;
use crate::services::document_client::{DocumentClient, UploadFile};
use crate::services::store::DocumentStore;
use crate::services::upload::{upload_all, UploadReport};
use tokio::sync::RwLock;

/// Owns the document store and keeps it in step with the remote API.
///
/// Network calls run without holding the lock; their result is applied under
/// the write lock once the call completes, so store mutations land whole and
/// in completion order.
pub struct DocumentConsole {
    client: DocumentClient,
    store: RwLock<DocumentStore>,
}

/// What a batch upload did, including the refresh that follows it.
#[derive(Debug)]
pub struct BatchOutcome {
    pub report: UploadReport,
    pub refresh: Result<usize, ConsoleError>,
}

impl BatchOutcome {
    /// At most one notice per concern: the batch summary, then the refresh.
    pub fn notices(&self) -> Vec<&'static str> {
        let mut notices: Vec<&'static str> = self.report.failure_notice().into_iter().collect();
        if let Err(e) = &self.refresh {
            notices.push(e.notice());
        }
        notices
    }
}

impl DocumentConsole {
    pub fn new(client: DocumentClient) -> Self {
        Self {
            client,
            store: RwLock::new(DocumentStore::new()),
        }
    }

    /// Fetch page 1 and replace the store with it.
    ///
    /// A malformed listing empties the store before the error is returned;
    /// any other failure leaves it as it was.
    pub async fn refresh(&self) -> Result<usize, ConsoleError> {
        match self.client.list_documents(1, self.client.page_size()).await {
            Ok(records) => {
                let mut store = self.store.write().await;
                store.replace(records);
                Ok(store.len())
            }
            Err(e @ ConsoleError::MalformedResponse(_)) => {
                self.store.write().await.clear();
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Delete remotely, then drop the record locally without refetching.
    pub async fn delete(&self, doc_id: &str) -> Result<(), ConsoleError> {
        self.client.delete_document(doc_id).await?;

        if self.store.write().await.remove(doc_id).is_none() {
            tracing::debug!(doc_id = %doc_id, "Deleted document was not in the listing");
        }
        Ok(())
    }

    /// Upload every file concurrently, wait for all, then refresh regardless
    /// of how many succeeded.
    pub async fn upload_batch(&self, files: Vec<UploadFile>) -> BatchOutcome {
        let report = upload_all(&self.client, files).await;
        let refresh = self.refresh().await;
        BatchOutcome { report, refresh }
    }

    /// Copy of the current listing, in store order.
    pub async fn snapshot(&self) -> Vec<DocumentRecord> {
        self.store.read().await.records().to_vec()
    }
}
