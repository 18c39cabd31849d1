use crate::api::{sort_by_title, ApiError, Playlist, PlaylistApi};
use crate::player::state::{ListRequest, PlayerState, PlayerStore};
use dioxus::logger::tracing::{info, warn};

/// A request that changes playlists on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    Update(i64),
    Delete(i64),
    Upload(String),
}

impl Mutation {
    pub fn progress_label(&self) -> &'static str {
        match self {
            Mutation::Update(_) => "Updating...",
            Mutation::Delete(_) => "Deleting...",
            Mutation::Upload(_) => "Uploading...",
        }
    }

    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Mutation::Delete(_))
    }

    async fn send<A: PlaylistApi>(&self, api: &A) -> Result<(), ApiError> {
        match self {
            Mutation::Update(id) => api.update_playlist(*id).await,
            Mutation::Delete(id) => api.delete_playlist(*id).await,
            Mutation::Upload(playlist) => api.upload_playlist(playlist).await,
        }
    }
}

/// Outcome of a mutation plus the playlist list fetched after it.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationReport {
    pub label: &'static str,
    pub result: Result<(), ApiError>,
    pub refresh: ListRequest,
    pub playlists: Result<Vec<Playlist>, ApiError>,
}

/// Fetches the playlist collection sorted by title.
pub async fn load_playlists<A: PlaylistApi>(api: &A) -> Result<Vec<Playlist>, ApiError> {
    let mut playlists = api.list_playlists().await?;
    sort_by_title(&mut playlists);
    Ok(playlists)
}

/// Fetches the playlists under a fresh list handle and applies them.
pub async fn refresh_playlists<A, S>(api: &A, store: &mut S)
where
    A: PlaylistApi,
    S: PlayerStore,
{
    let refresh = store.with_state(|state| state.begin_list_refresh());
    let playlists = load_playlists(api).await;
    store.with_state(|state| state.finish_list_refresh(refresh, playlists));
}

/// Runs `mutation` against the server and re-fetches the playlists afterwards.
///
/// Deletes are only sent when `confirm` returns `true`; the return value tells
/// whether a request went out.
pub async fn perform<A, S, C>(api: &A, store: &mut S, mutation: Mutation, confirm: C) -> bool
where
    A: PlaylistApi,
    S: PlayerStore,
    C: FnOnce(&Mutation) -> bool,
{
    if mutation.needs_confirmation() && !confirm(&mutation) {
        info!("{mutation:?} cancelled");
        return false;
    }

    let label = mutation.progress_label();
    store.with_state(|state| state.begin_mutation(label));
    info!("sending {mutation:?}");
    let result = mutation.send(api).await;
    if let Err(err) = &result {
        warn!("{mutation:?} failed: {err}");
    }
    let refresh = store.with_state(|state| state.begin_list_refresh());
    let playlists = load_playlists(api).await;
    store.with_state(|state| {
        state.finish_mutation(MutationReport {
            label,
            result,
            refresh,
            playlists,
        })
    });
    true
}

impl PlayerState {
    /// Applies a list fetch, or reports its failure unless a newer list is
    /// already shown.
    pub fn finish_list_refresh(
        &mut self,
        request: ListRequest,
        playlists: Result<Vec<Playlist>, ApiError>,
    ) {
        match playlists {
            Ok(playlists) => {
                self.apply_playlists(request, playlists);
            }
            Err(err) => {
                warn!("failed to load playlists: {err}");
                self.playlists_loaded = true;
                if self.error.is_none() && !self.is_stale_list(request) {
                    self.show_error(err.to_string());
                }
            }
        }
    }

    pub fn finish_mutation(&mut self, report: MutationReport) {
        self.end_mutation(report.label);
        if let Err(err) = report.result {
            self.show_error(err.to_string());
        }
        self.finish_list_refresh(report.refresh, report.playlists);
    }
}
