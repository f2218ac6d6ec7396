// Settle-all combinator: every branch runs to completion and every outcome
// is reported, success or failure. This is the single place where provider
// failures are allowed to exist without aborting anything.

use std::future::Future;

use futures_util::future::join_all;

/// Drives all operations concurrently and returns one `Result` per
/// operation, in input order. Never short-circuits on the first failure.
pub async fn settle_all<F, T, E>(ops: impl IntoIterator<Item = F>) -> Vec<Result<T, E>>
where
    F: Future<Output = Result<T, E>>,
{
    join_all(ops).await
}
