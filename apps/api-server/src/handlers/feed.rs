//! Feed handlers - post CRUD and paginated listing.

use actix_web::{HttpResponse, web};
use serde::Deserialize;
use uuid::Uuid;

use feed_core::DomainError;
use feed_core::auth::require_owner;
use feed_core::domain::Post;
use feed_core::ports::POSTS_CHANNEL;
use feed_core::validate;
use feed_shared::dto::{FeedPage, PostEvent, PostInput, PostResponse};

use crate::middleware::auth::Auth;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_post_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title.clone(),
        content: post.content.clone(),
        image_url: post.image_url.clone(),
        creator: post.creator.to_string(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

async fn load_post(state: &AppState, id: Uuid) -> Result<Post, AppError> {
    let post = state.posts.find_by_id(id).await?;
    Ok(post.ok_or_else(|| DomainError::not_found("post", id))?)
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub page: Option<i64>,
}

/// GET /feed/posts?page=
///
/// Public. The count and the page slice are separate reads; a concurrent
/// mutation may leave the total stale by one for this response only.
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListQuery>,
) -> AppResult<HttpResponse> {
    let page = query.page.filter(|p| *p >= 1).unwrap_or(1) as u64;
    // The page number is caller-controlled; saturate instead of overflowing.
    let skip = (page - 1).saturating_mul(state.page_size);

    let items = state.posts.find_page(skip, state.page_size).await?;
    let total_items = state.posts.count_all().await?;

    Ok(HttpResponse::Ok().json(FeedPage {
        posts: items.iter().map(to_post_response).collect(),
        total_items,
    }))
}

/// GET /feed/post/{post_id}
pub async fn get_post(
    auth: Auth,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    auth.require_authenticated()?;

    let post = load_post(&state, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_post_response(&post)))
}

/// POST /feed/post
pub async fn create_post(
    auth: Auth,
    state: web::Data<AppState>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;
    let req = body.into_inner();

    validate::post(&req.title, &req.content)?;

    let post = Post::new(caller, req.title, req.content, req.image_url);
    let created = state.posts.create(post).await?;

    tracing::info!(post_id = %created.id, creator = %created.creator, "Post created");

    let response = to_post_response(&created);

    // Fan-out is best-effort; a publish failure never fails the request.
    let event = PostEvent {
        action: "create".to_string(),
        post: response.clone(),
    };
    match serde_json::to_string(&event) {
        Ok(payload) => {
            if let Err(e) = state.events.publish(POSTS_CHANNEL, &payload).await {
                tracing::warn!(error = %e, "Failed to publish post event");
            }
        }
        Err(e) => tracing::warn!(error = %e, "Failed to encode post event"),
    }

    Ok(HttpResponse::Created().json(response))
}

/// PUT /feed/post/{post_id}
pub async fn update_post(
    auth: Auth,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<PostInput>,
) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;
    let req = body.into_inner();

    let mut post = load_post(&state, path.into_inner()).await?;
    require_owner(&post, caller)?;

    validate::post(&req.title, &req.content)?;

    post.edit(req.title, req.content, req.image_url);
    let saved = state.posts.save(post).await?;

    Ok(HttpResponse::Ok().json(to_post_response(&saved)))
}

/// DELETE /feed/post/{post_id}
pub async fn delete_post(
    auth: Auth,
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let caller = auth.require_authenticated()?;

    let post = load_post(&state, path.into_inner()).await?;
    require_owner(&post, caller)?;

    // A concurrent duplicate delete between the lookup and here still
    // reports NotFound through the repository.
    state.posts.delete(post.id).await?;

    tracing::info!(post_id = %post.id, "Post deleted");

    Ok(HttpResponse::NoContent().finish())
}
