use std::sync::Arc;

use futures::future::try_join_all;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::models::{Candidate, PersonSummary};
use crate::people_client::{LoadError, PeopleSource};
use crate::roster::board::Board;
use crate::roster::ranking::rank;

/// Fetches every roster entry's detail payload concurrently, scores each
/// candidate, and returns them ranked.
///
/// The first failing detail fetch aborts the load; the other in-flight
/// requests are dropped. Nothing partial is ever returned.
pub async fn load_details(
    source: &dyn PeopleSource,
    roster: Vec<PersonSummary>,
) -> Result<Vec<Candidate>, LoadError> {
    let candidates = try_join_all(roster.into_iter().map(|person| async move {
        let detail = source.fetch_detail(&person).await?;
        let candidate = Candidate::new(person, detail);
        debug!(
            "Candidate {} scored {}",
            candidate.id(),
            candidate.total_score()
        );
        Ok::<_, LoadError>(candidate)
    }))
    .await?;

    Ok(rank(&candidates))
}

/// Resets the board and loads it again in the background.
///
/// The reset happens before this returns, so callers observe the loading
/// state immediately. A load that has been superseded by a later reload
/// leaves the board alone.
pub async fn spawn_reload(
    board: Arc<RwLock<Board>>,
    source: Arc<dyn PeopleSource>,
) -> JoinHandle<()> {
    let epoch = board.write().await.begin_load();
    info!("Starting candidate load (epoch {epoch})");

    tokio::spawn(async move {
        let roster = match source.fetch_roster().await {
            Ok(roster) => roster,
            Err(e) => {
                warn!("Candidate load failed: {e}");
                board.write().await.finish_load(epoch, Err(e));
                return;
            }
        };
        info!("Roster loaded: {} people, fetching details", roster.len());
        board.write().await.roster_loaded(epoch);

        let result = load_details(source.as_ref(), roster).await;
        match &result {
            Ok(candidates) => info!("Loaded {} candidates", candidates.len()),
            Err(e) => warn!("Candidate load failed: {e}"),
        }
        if !board.write().await.finish_load(epoch, result) {
            debug!("Discarded results of superseded load (epoch {epoch})");
        }
    })
}
