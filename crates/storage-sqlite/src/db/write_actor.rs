use super::DbPool;
use crate::errors::StorageError;
use diesel::SqliteConnection;
use drinkminder_core::errors::Result;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

// Type alias for the job to be executed by the writer actor. Every store
// write replaces a whole record, so jobs only report success or failure.
type WriteJob =
    Box<dyn FnOnce(&mut SqliteConnection) -> std::result::Result<(), StorageError> + Send + 'static>;

/// Handle for sending jobs to the writer actor.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(WriteJob, oneshot::Sender<Result<()>>)>,
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    ///
    /// The job runs inside an immediate transaction: concurrent writers are
    /// serialized, and a failed job leaves the stored record untouched.
    pub async fn exec<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce(&mut SqliteConnection) -> std::result::Result<(), StorageError> + Send + 'static,
    {
        let (ret_tx, ret_rx) = oneshot::channel();

        self.tx
            .send((Box::new(job), ret_tx))
            .await
            .expect("Writer actor's receiving channel was closed, indicating the actor stopped.");

        ret_rx
            .await
            .expect("Writer actor dropped the reply sender without sending a result.")
    }
}

/// Spawns a background Tokio task that acts as a single writer to the database.
/// This actor owns one database connection from the pool and processes write
/// jobs serially.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(WriteJob, oneshot::Sender<Result<()>>)>(1024);

    tokio::spawn(async move {
        // This connection is held for the lifetime of the actor.
        let mut conn = pool
            .get()
            .expect("Failed to get a connection from the DB pool for the writer actor.");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, StorageError, _>(|c| job(c))
                .map_err(drinkminder_core::Error::from);

            // Ignore send errors if the requester has dropped (e.g. cancelled).
            let _ = reply_tx.send(result);
        }
        // rx.recv() returning None means every WriteHandle was dropped,
        // so the actor can terminate.
    });

    WriteHandle { tx }
}
