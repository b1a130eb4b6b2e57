//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance with migrations applied
//! - Environment variables: DATABASE_URL (JWT_SECRET optional)
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, seed_pool, TestServer,
};
use reqwest::StatusCode;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// User Tests
// ============================================================================

#[tokio::test]
async fn test_get_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .get_auth("/api/v1/users/@me", &user.token)
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, user.id.to_string());
    assert_eq!(fetched.username, user.username);
}

#[tokio::test]
async fn test_get_current_user_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/users/@me").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_current_user() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = UpdateUserRequest {
        display_name: Some("Renamed".to_string()),
        avatar_url: None,
        bio: Some("Competitive player".to_string()),
    };
    let response = server
        .patch_auth("/api/v1/users/@me", &user.token, &request)
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(updated.display_name, "Renamed");
    assert_eq!(updated.bio.as_deref(), Some("Competitive player"));
}

#[tokio::test]
async fn test_get_user_by_username() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/by-username/{}", user.username),
            &user.token,
        )
        .await
        .unwrap();
    let fetched: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(fetched.id, user.id.to_string());
}

// ============================================================================
// Post Tests
// ============================================================================

#[tokio::test]
async fn test_create_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &user.token, &request)
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(post.title, request.title);
    assert_eq!(post.author_id, user.id.to_string());
    assert_eq!(post.likes, 0);
    assert_eq!(post.dislikes, 0);
}

#[tokio::test]
async fn test_create_post_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let request = CreatePostRequest::unique();
    let response = server.post("/api/v1/posts", &request).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_create_post_empty_title() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = CreatePostRequest {
        title: String::new(),
        content: "body".to_string(),
        image_url: None,
    };
    let response = server
        .post_auth("/api/v1/posts", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_get_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = CreatePostRequest::unique();
    let response = server
        .post_auth("/api/v1/posts", &user.token, &request)
        .await
        .unwrap();
    let created: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Posts are publicly readable
    let response = server
        .get(&format!("/api/v1/posts/{}", created.id))
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(post.id, created.id);
    assert_eq!(post.title, request.title);
    assert!(post.my_reaction.is_none());
}

#[tokio::test]
async fn test_get_post_not_found() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/posts/1").await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_post_by_other_user_forbidden() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let author = TestUser::seed(&pool).await.unwrap();
    let other = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &author.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = UpdatePostRequest {
        title: Some("Hijacked".to_string()),
        content: None,
    };
    let response = server
        .patch_auth(&format!("/api/v1/posts/{}", post.id), &other.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_delete_post() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &user.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .delete_auth(&format!("/api/v1/posts/{}", post.id), &user.token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server
        .get(&format!("/api/v1/posts/{}", post.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_list_posts() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    for _ in 0..3 {
        server
            .post_auth("/api/v1/posts", &user.token, &CreatePostRequest::unique())
            .await
            .unwrap();
    }

    let response = server.get("/api/v1/posts?limit=2").await.unwrap();
    let posts: Vec<PostResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(posts.len(), 2);
    // Newest first
    assert!(posts[0].id > posts[1].id);
}

// ============================================================================
// Comment Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_list_comments() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &user.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    for i in 0..3 {
        let request = CreateCommentRequest::simple(&format!("Comment {i}"));
        let response = server
            .post_auth(
                &format!("/api/v1/posts/{}/comments", post.id),
                &user.token,
                &request,
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server
        .get(&format!("/api/v1/posts/{}/comments", post.id))
        .await
        .unwrap();
    let comments: Vec<CommentResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(comments.len(), 3);
    // Oldest first
    assert_eq!(comments[0].content, "Comment 0");
}

#[tokio::test]
async fn test_comment_delete_is_author_only() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let author = TestUser::seed(&pool).await.unwrap();
    let commenter = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &author.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/comments", post.id),
            &commenter.token,
            &CreateCommentRequest::simple("drive-by"),
        )
        .await
        .unwrap();
    let comment: CommentResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // The post author does not get to moderate other people's comments
    let response = server
        .delete_auth(
            &format!("/api/v1/posts/{}/comments/{}", post.id, comment.id),
            &author.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .delete_auth(
            &format!("/api/v1/posts/{}/comments/{}", post.id, comment.id),
            &commenter.token,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[tokio::test]
async fn test_react_lifecycle() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &user.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reactions_path = format!("/api/v1/posts/{}/reactions", post.id);

    // First like creates
    let response = server
        .post_auth(&reactions_path, &user.token, &ReactRequest::like())
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reaction.outcome, "created");
    assert_eq!(reaction.kind.as_deref(), Some("like"));
    assert_eq!(reaction.counts.likes, 1);

    // Opposite kind flips
    let response = server
        .post_auth(&reactions_path, &user.token, &ReactRequest::dislike())
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reaction.outcome, "updated");
    assert_eq!(reaction.kind.as_deref(), Some("dislike"));
    assert_eq!(reaction.counts.likes, 0);
    assert_eq!(reaction.counts.dislikes, 1);

    // Same kind toggles off
    let response = server
        .post_auth(&reactions_path, &user.token, &ReactRequest::dislike())
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(reaction.outcome, "removed");
    assert!(reaction.kind.is_none());
    assert_eq!(reaction.counts.dislikes, 0);
}

#[tokio::test]
async fn test_react_unknown_kind() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &user.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let request = ReactRequest {
        kind: "love".to_string(),
    };
    let response = server
        .post_auth(
            &format!("/api/v1/posts/{}/reactions", post.id),
            &user.token,
            &request,
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reactions_from_two_users_tally() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let alice = TestUser::seed(&pool).await.unwrap();
    let bob = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth("/api/v1/posts", &alice.token, &CreatePostRequest::unique())
        .await
        .unwrap();
    let post: PostResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reactions_path = format!("/api/v1/posts/{}/reactions", post.id);

    server
        .post_auth(&reactions_path, &alice.token, &ReactRequest::like())
        .await
        .unwrap();
    let response = server
        .post_auth(&reactions_path, &bob.token, &ReactRequest::dislike())
        .await
        .unwrap();
    let reaction: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(reaction.counts.likes, 1);
    assert_eq!(reaction.counts.dislikes, 1);

    // Viewer-specific reaction shows up on the post
    let response = server
        .get_auth(&format!("/api/v1/posts/{}", post.id), &bob.token)
        .await
        .unwrap();
    let fetched: PostResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(fetched.my_reaction.as_deref(), Some("dislike"));

    // The summary endpoint reports the same, anonymously and authenticated
    let response = server.get(&reactions_path).await.unwrap();
    let summary: ReactionSummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.likes, 1);
    assert_eq!(summary.dislikes, 1);
    assert!(summary.my_reaction.is_none());

    let response = server.get_auth(&reactions_path, &alice.token).await.unwrap();
    let summary: ReactionSummaryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(summary.my_reaction.as_deref(), Some("like"));
}

// ============================================================================
// Chat Tests
// ============================================================================

#[tokio::test]
async fn test_send_and_poll_chat_messages() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/chat/messages",
            &user.token,
            &CreateChatMessageRequest::simple("first"),
        )
        .await
        .unwrap();
    let first: ChatMessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/chat/messages",
            &user.token,
            &CreateChatMessageRequest::simple("second"),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Poll for messages after the first one
    let response = server
        .get_auth(
            &format!("/api/v1/chat/messages?after={}", first.id),
            &user.token,
        )
        .await
        .unwrap();
    let messages: Vec<ChatMessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(messages.iter().all(|m| m.id > first.id));
    assert!(messages.iter().any(|m| m.content == "second"));
}

#[tokio::test]
async fn test_chat_requires_auth() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/v1/chat/messages").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Gaming Profile Tests
// ============================================================================

#[tokio::test]
async fn test_replace_gaming_profiles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = ReplaceProfilesRequest {
        profiles: vec![
            ProfileEntry {
                platform: "steam".to_string(),
                handle: "gamer42".to_string(),
            },
            ProfileEntry {
                platform: "psn".to_string(),
                handle: "gamer_42".to_string(),
            },
        ],
    };
    let response = server
        .put_auth("/api/v1/users/@me/gaming-profiles", &user.token, &request)
        .await
        .unwrap();
    let profiles: Vec<GamingProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profiles.len(), 2);

    // Resubmitting an unchanged platform keeps its row identity
    let steam_id = profiles
        .iter()
        .find(|p| p.platform == "steam")
        .map(|p| p.id.clone())
        .unwrap();

    let request = ReplaceProfilesRequest {
        profiles: vec![ProfileEntry {
            platform: "steam".to_string(),
            handle: "gamer42".to_string(),
        }],
    };
    let response = server
        .put_auth("/api/v1/users/@me/gaming-profiles", &user.token, &request)
        .await
        .unwrap();
    let profiles: Vec<GamingProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].id, steam_id);
}

#[tokio::test]
async fn test_replace_profiles_duplicate_platform() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let user = TestUser::seed(&pool).await.unwrap();

    let request = ReplaceProfilesRequest {
        profiles: vec![
            ProfileEntry {
                platform: "steam".to_string(),
                handle: "one".to_string(),
            },
            ProfileEntry {
                platform: "Steam".to_string(),
                handle: "two".to_string(),
            },
        ],
    };
    let response = server
        .put_auth("/api/v1/users/@me/gaming-profiles", &user.token, &request)
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_view_other_users_profiles() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pool = seed_pool().await.unwrap();
    let owner = TestUser::seed(&pool).await.unwrap();
    let viewer = TestUser::seed(&pool).await.unwrap();

    let request = ReplaceProfilesRequest {
        profiles: vec![ProfileEntry {
            platform: "xbox".to_string(),
            handle: "OwnerTag".to_string(),
        }],
    };
    server
        .put_auth("/api/v1/users/@me/gaming-profiles", &owner.token, &request)
        .await
        .unwrap();

    let response = server
        .get_auth(
            &format!("/api/v1/users/{}/gaming-profiles", owner.id),
            &viewer.token,
        )
        .await
        .unwrap();
    let profiles: Vec<GamingProfileResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].handle, "OwnerTag");
}
