use tracing::info;

use crate::cli::{StudentArgs, UpdateArgs};
use crate::client::StudentsApi;
use crate::error::Result;
use crate::sync::{ListSyncClient, View};

pub async fn list<A: StudentsApi, V: View>(sync: &mut ListSyncClient<A, V>) -> Result<()> {
    sync.refresh().await
}

pub async fn add<A: StudentsApi, V: View>(
    sync: &mut ListSyncClient<A, V>,
    args: StudentArgs,
) -> Result<()> {
    info!(name = %args.name, "adding student");
    sync.create(&args.into()).await
}

pub async fn update<A: StudentsApi, V: View>(
    sync: &mut ListSyncClient<A, V>,
    args: UpdateArgs,
) -> Result<()> {
    info!(id = args.id, "updating student");
    sync.update(args.id, &args.fields.into()).await
}

pub async fn delete<A: StudentsApi, V: View>(
    sync: &mut ListSyncClient<A, V>,
    id: i64,
) -> Result<()> {
    info!(id, "deleting student");
    sync.remove(id).await
}
