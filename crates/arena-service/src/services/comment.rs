//! Comment service

use arena_core::entities::Comment;
use arena_core::traits::CursorQuery;
use arena_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CommentResponse, CreateCommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Comment service
pub struct CommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CommentService<'a> {
    /// Create a new CommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List comments on a post, oldest first
    #[instrument(skip(self))]
    pub async fn list_comments(
        &self,
        post_id: Snowflake,
        query: &CursorQuery,
    ) -> ServiceResult<Vec<CommentResponse>> {
        self.verify_post(post_id).await?;

        let comments = self.ctx.comment_repo().find_by_post(post_id, query).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    /// Add a comment to a post
    #[instrument(skip(self, request))]
    pub async fn create_comment(
        &self,
        post_id: Snowflake,
        author_id: Snowflake,
        request: CreateCommentRequest,
    ) -> ServiceResult<CommentResponse> {
        self.verify_post(post_id).await?;

        let comment = Comment::new(
            self.ctx.generate_id(),
            post_id,
            author_id,
            request.content,
        );
        self.ctx.comment_repo().create(&comment).await?;

        info!(comment_id = %comment.id, post_id = %post_id, "Comment created");

        Ok(CommentResponse::from(&comment))
    }

    /// Delete a comment; only its author may do so
    #[instrument(skip(self))]
    pub async fn delete_comment(
        &self,
        post_id: Snowflake,
        comment_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<()> {
        self.verify_post(post_id).await?;

        let comment = self
            .ctx
            .comment_repo()
            .find_by_id(comment_id)
            .await?
            .filter(|c| c.post_id == post_id)
            .ok_or_else(|| ServiceError::not_found("Comment", comment_id.to_string()))?;

        if !comment.is_authored_by(actor_id) {
            return Err(ServiceError::forbidden("delete this comment"));
        }

        self.ctx.comment_repo().delete(comment_id).await?;

        info!(comment_id = %comment_id, "Comment deleted");

        Ok(())
    }

    async fn verify_post(&self, post_id: Snowflake) -> ServiceResult<()> {
        self.ctx
            .post_repo()
            .find_by_id(post_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found("Post", post_id.to_string()))
    }
}
