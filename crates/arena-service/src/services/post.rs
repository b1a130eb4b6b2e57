//! Post service
//!
//! Feed CRUD. Every read joins the post with its reaction tallies and the
//! viewer's own reaction so clients can render without extra round trips.

use std::collections::HashMap;

use arena_core::entities::Post;
use arena_core::traits::CursorQuery;
use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreatePostRequest, PostResponse, PostWithReactions, UpdatePostRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    /// Create a new PostService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List posts, newest first
    ///
    /// Reaction tallies and the viewer's own kinds are fetched in two batched
    /// queries, so the query count stays flat as the page grows.
    #[instrument(skip(self))]
    pub async fn list_posts(
        &self,
        query: &CursorQuery,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<Vec<PostResponse>> {
        let posts = self.ctx.post_repo().list(query).await?;
        let post_ids: Vec<Snowflake> = posts.iter().map(|p| p.id).collect();

        let mut counts = self.ctx.reaction_repo().counts_for(&post_ids).await?;
        let mut kinds = match viewer_id {
            Some(viewer) => self.ctx.reaction_repo().kinds_for(&post_ids, viewer).await?,
            None => HashMap::new(),
        };

        Ok(posts
            .into_iter()
            .map(|post| {
                let post_counts = counts.remove(&post.id).unwrap_or_default();
                let my_reaction = kinds.remove(&post.id);
                PostResponse::from(PostWithReactions {
                    post,
                    counts: post_counts,
                    my_reaction,
                })
            })
            .collect())
    }

    /// Get a single post
    #[instrument(skip(self))]
    pub async fn get_post(
        &self,
        post_id: Snowflake,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<PostResponse> {
        let post = self.find_post(post_id).await?;
        self.with_reactions(post, viewer_id).await
    }

    /// Create a new post authored by the caller
    #[instrument(skip(self, request))]
    pub async fn create_post(
        &self,
        author_id: Snowflake,
        request: CreatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = Post::new(
            self.ctx.generate_id(),
            author_id,
            request.title,
            request.content,
        );
        post.image_url = request.image_url;

        self.ctx.post_repo().create(&post).await?;

        info!(post_id = %post.id, author_id = %author_id, "Post created");

        self.with_reactions(post, Some(author_id)).await
    }

    /// Edit a post; only its author may do so
    #[instrument(skip(self, request))]
    pub async fn update_post(
        &self,
        post_id: Snowflake,
        actor_id: Snowflake,
        request: UpdatePostRequest,
    ) -> ServiceResult<PostResponse> {
        let mut post = self.find_post(post_id).await?;

        if !post.is_authored_by(actor_id) {
            return Err(ServiceError::forbidden("edit this post"));
        }

        post.edit(request.title, request.content);
        self.ctx.post_repo().update(&post).await?;

        info!(post_id = %post_id, "Post updated");

        self.with_reactions(post, Some(actor_id)).await
    }

    /// Delete a post; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_post(&self, post_id: Snowflake, actor_id: Snowflake) -> ServiceResult<()> {
        let post = self.find_post(post_id).await?;

        if !post.is_authored_by(actor_id) {
            return Err(ServiceError::forbidden("delete this post"));
        }

        self.ctx.post_repo().delete(post_id).await?;

        info!(post_id = %post_id, "Post deleted");

        Ok(())
    }

    async fn find_post(&self, post_id: Snowflake) -> ServiceResult<Post> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }

    async fn with_reactions(
        &self,
        post: Post,
        viewer_id: Option<Snowflake>,
    ) -> ServiceResult<PostResponse> {
        let counts = self.ctx.reaction_repo().counts(post.id).await?;
        let my_reaction = match viewer_id {
            Some(viewer) => self
                .ctx
                .reaction_repo()
                .find(post.id, viewer)
                .await?
                .map(|r| r.kind),
            None => None,
        };

        Ok(PostResponse::from(PostWithReactions {
            post,
            counts,
            my_reaction,
        }))
    }
}
