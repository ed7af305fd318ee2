//! Effect handler implementations.
//!
//! Pure async functions that perform the I/O for one effect and return the
//! `UiEvent` carrying the result. Cancellable handlers race the request
//! against their token; a cancelled request produces `DataEvent::Cancelled`,
//! which the reducer discards.

use std::future::Future;
use std::sync::Arc;

use folio_core::api::types::Identity;
use folio_core::api::ApiClient;
use folio_core::prefs::PrefsStore;
use folio_core::session::{auth as auth_session, theme as theme_session};
use folio_core::probe;
use tokio_util::sync::CancellationToken;

use crate::events::{DataEvent, UiEvent};

async fn cancellable<F>(cancel: Option<CancellationToken>, fut: F) -> UiEvent
where
    F: Future<Output = UiEvent>,
{
    match cancel {
        Some(token) => {
            tokio::select! {
                () = token.cancelled() => UiEvent::Data(DataEvent::Cancelled),
                event = fut => event,
            }
        }
        None => fut.await,
    }
}

fn message(err: anyhow::Error) -> String {
    err.to_string()
}

// ============================================================================
// Startup / session
// ============================================================================

pub async fn run_probe(api: Arc<ApiClient>, cancel: Option<CancellationToken>) -> UiEvent {
    cancellable(cancel, async move {
        UiEvent::ProbeFinished(probe::wake(&api).await)
    })
    .await
}

pub async fn restore_session(api: Arc<ApiClient>) -> UiEvent {
    UiEvent::SessionRestored(auth_session::restore(&api).await)
}

pub async fn login(api: Arc<ApiClient>, email: String, password: String) -> UiEvent {
    UiEvent::LoginFinished(auth_session::login(&api, &email, &password).await)
}

pub async fn init_theme(
    api: Arc<ApiClient>,
    prefs: PrefsStore,
    identity: Option<Identity>,
) -> UiEvent {
    let selection = theme_session::resolve_initial(&api, &prefs, identity.as_ref()).await;
    UiEvent::ThemeResolved(selection)
}

// ============================================================================
// Data fetches
// ============================================================================

pub async fn load_users(api: Arc<ApiClient>, cancel: Option<CancellationToken>) -> UiEvent {
    cancellable(cancel, async move {
        UiEvent::Data(DataEvent::UsersLoaded(
            api.users().await.map_err(message),
        ))
    })
    .await
}

/// A portfolio is the user record plus the full blogs listing filtered down
/// to that author.
pub async fn load_portfolio(
    api: Arc<ApiClient>,
    user_id: i64,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    cancellable(cancel, async move {
        let result = match tokio::try_join!(api.user(user_id), api.blogs()) {
            Ok((user, blogs)) => {
                let owned: Vec<_> = blogs
                    .into_iter()
                    .filter(|blog| blog.author_id == user_id)
                    .collect();
                Ok((user, owned))
            }
            Err(err) => Err(message(err)),
        };
        UiEvent::Data(DataEvent::PortfolioLoaded { user_id, result })
    })
    .await
}

pub async fn load_blog(
    api: Arc<ApiClient>,
    blog_id: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    cancellable(cancel, async move {
        let result = tokio::try_join!(api.blog(&blog_id), api.blog_posts(&blog_id))
            .map_err(message);
        UiEvent::Data(DataEvent::BlogLoaded { blog_id, result })
    })
    .await
}

pub async fn load_post(
    api: Arc<ApiClient>,
    post_id: String,
    cancel: Option<CancellationToken>,
) -> UiEvent {
    cancellable(cancel, async move {
        let result = tokio::try_join!(api.post(&post_id), api.comments(&post_id))
            .map_err(message);
        UiEvent::Data(DataEvent::PostLoaded { post_id, result })
    })
    .await
}

pub async fn load_my_posts(api: Arc<ApiClient>, cancel: Option<CancellationToken>) -> UiEvent {
    cancellable(cancel, async move {
        UiEvent::Data(DataEvent::MyPostsLoaded(
            api.my_posts().await.map_err(message),
        ))
    })
    .await
}

// ============================================================================
// Mutations
// ============================================================================

pub async fn create_post(api: Arc<ApiClient>, title: String, content: String) -> UiEvent {
    UiEvent::Data(DataEvent::PostCreated(
        api.create_post(&title, &content).await.map_err(message),
    ))
}

pub async fn delete_post(api: Arc<ApiClient>, post_id: String) -> UiEvent {
    let result = api.delete_post(&post_id).await.map_err(message);
    UiEvent::Data(DataEvent::PostDeleted { post_id, result })
}

pub async fn create_comment(api: Arc<ApiClient>, post_id: String, content: String) -> UiEvent {
    let result = api.create_comment(&post_id, &content).await.map_err(message);
    UiEvent::Data(DataEvent::CommentCreated { post_id, result })
}

pub async fn delete_comment(
    api: Arc<ApiClient>,
    post_id: String,
    comment_id: String,
) -> UiEvent {
    let result = api.delete_comment(&comment_id).await.map_err(message);
    UiEvent::Data(DataEvent::CommentDeleted { post_id, result })
}
