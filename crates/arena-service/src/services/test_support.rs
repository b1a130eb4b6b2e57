//! In-memory repositories and context builders for service tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use arena_common::auth::JwtService;
use arena_core::entities::{
    ChatMessage, Comment, GamingProfile, Post, Reaction, ReactionCounts, ReactionKind, User,
};
use arena_core::error::DomainError;
use arena_core::traits::{
    ChatMessageRepository, CommentRepository, CursorQuery, GamingProfileRepository,
    PostRepository, ReactionRepository, RepoResult, UserRepository,
};
use arena_core::{Snowflake, SnowflakeGenerator};

use super::context::{ServiceContext, ServiceContextBuilder};

type Shared<T> = Arc<Mutex<T>>;

/// Shared in-memory state behind the test repositories
#[derive(Clone, Default)]
pub struct TestRepos {
    pub users: Shared<HashMap<Snowflake, User>>,
    pub posts: Shared<HashMap<Snowflake, Post>>,
    pub comments: Shared<HashMap<Snowflake, Comment>>,
    pub reactions: Shared<HashMap<(Snowflake, Snowflake), ReactionKind>>,
    pub chat: Shared<Vec<ChatMessage>>,
    pub profiles: Shared<HashMap<Snowflake, GamingProfile>>,
}

/// Seed a user and return its ID
pub fn seed_user(repos: &TestRepos) -> Snowflake {
    static NEXT: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(100);
    let id = Snowflake::new(NEXT.fetch_add(1, std::sync::atomic::Ordering::SeqCst));
    let user = User::new(id, format!("user_{}", id.into_inner()), "User".to_string());
    repos.users.lock().unwrap().insert(id, user);
    id
}

/// Seed a post and return its ID
pub fn seed_post(repos: &TestRepos) -> Snowflake {
    static NEXT: std::sync::atomic::AtomicI64 = std::sync::atomic::AtomicI64::new(1000);
    let id = Snowflake::new(NEXT.fetch_add(1, std::sync::atomic::Ordering::SeqCst));
    let post = Post::new(
        id,
        Snowflake::new(1),
        "Seeded post".to_string(),
        "content".to_string(),
    );
    repos.posts.lock().unwrap().insert(id, post);
    id
}

/// Build a ServiceContext over the shared in-memory state
///
/// The pool is lazy and never connected; nothing in the services under test
/// touches it directly.
pub fn test_context(repos: TestRepos) -> ServiceContext {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgresql://localhost/unused")
        .unwrap();

    ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(Arc::new(MemUserRepo(repos.users.clone())))
        .post_repo(Arc::new(MemPostRepo(repos.posts.clone())))
        .comment_repo(Arc::new(MemCommentRepo(repos.comments.clone())))
        .reaction_repo(Arc::new(MemReactionRepo(repos.reactions.clone())))
        .chat_repo(Arc::new(MemChatRepo(repos.chat.clone())))
        .profile_repo(Arc::new(MemProfileRepo(repos.profiles.clone())))
        .jwt_service(Arc::new(JwtService::new("test-secret", 3600)))
        .snowflake_generator(Arc::new(SnowflakeGenerator::new(1)))
        .build()
        .unwrap()
}

struct MemUserRepo(Shared<HashMap<Snowflake, User>>);

#[async_trait]
impl UserRepository for MemUserRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        Ok(self.0.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn update(&self, user: &User) -> RepoResult<()> {
        self.0.lock().unwrap().insert(user.id, user.clone());
        Ok(())
    }
}

struct MemPostRepo(Shared<HashMap<Snowflake, Post>>);

#[async_trait]
impl PostRepository for MemPostRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Post>> {
        Ok(self.0.lock().unwrap().get(&id).cloned())
    }

    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .0
            .lock()
            .unwrap()
            .values()
            .filter(|p| query.before.is_none_or(|b| p.id < b))
            .filter(|p| query.after.is_none_or(|a| p.id > a))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        posts.truncate(usize::try_from(query.limit.clamp(1, 100)).unwrap());
        Ok(posts)
    }

    async fn create(&self, post: &Post) -> RepoResult<()> {
        self.0.lock().unwrap().insert(post.id, post.clone());
        Ok(())
    }

    async fn update(&self, post: &Post) -> RepoResult<()> {
        self.0.lock().unwrap().insert(post.id, post.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.0.lock().unwrap().remove(&id);
        Ok(())
    }
}

struct MemCommentRepo(Shared<HashMap<Snowflake, Comment>>);

#[async_trait]
impl CommentRepository for MemCommentRepo {
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Comment>> {
        Ok(self.0.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_post(
        &self,
        post_id: Snowflake,
        query: &CursorQuery,
    ) -> RepoResult<Vec<Comment>> {
        let mut comments: Vec<Comment> = self
            .0
            .lock()
            .unwrap()
            .values()
            .filter(|c| c.post_id == post_id)
            .filter(|c| query.before.is_none_or(|b| c.id < b))
            .filter(|c| query.after.is_none_or(|a| c.id > a))
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.id.cmp(&b.id));
        comments.truncate(usize::try_from(query.limit.clamp(1, 100)).unwrap());
        Ok(comments)
    }

    async fn create(&self, comment: &Comment) -> RepoResult<()> {
        self.0.lock().unwrap().insert(comment.id, comment.clone());
        Ok(())
    }

    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        self.0.lock().unwrap().remove(&id);
        Ok(())
    }
}

struct MemReactionRepo(Shared<HashMap<(Snowflake, Snowflake), ReactionKind>>);

#[async_trait]
impl ReactionRepository for MemReactionRepo {
    async fn find(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<Option<Reaction>> {
        Ok(self
            .0
            .lock()
            .unwrap()
            .get(&(post_id, user_id))
            .map(|kind| Reaction::new(post_id, user_id, *kind)))
    }

    async fn insert(&self, reaction: &Reaction) -> RepoResult<()> {
        let mut map = self.0.lock().unwrap();
        let key = (reaction.post_id, reaction.user_id);
        if map.contains_key(&key) {
            return Err(DomainError::ReactionAlreadyExists);
        }
        map.insert(key, reaction.kind);
        Ok(())
    }

    async fn update_kind(
        &self,
        post_id: Snowflake,
        user_id: Snowflake,
        kind: ReactionKind,
    ) -> RepoResult<()> {
        self.0.lock().unwrap().insert((post_id, user_id), kind);
        Ok(())
    }

    async fn delete(&self, post_id: Snowflake, user_id: Snowflake) -> RepoResult<()> {
        self.0.lock().unwrap().remove(&(post_id, user_id));
        Ok(())
    }

    async fn counts(&self, post_id: Snowflake) -> RepoResult<ReactionCounts> {
        let map = self.0.lock().unwrap();
        let mut counts = ReactionCounts::default();
        for ((pid, _), kind) in map.iter() {
            if *pid == post_id {
                match kind {
                    ReactionKind::Like => counts.likes += 1,
                    ReactionKind::Dislike => counts.dislikes += 1,
                }
            }
        }
        Ok(counts)
    }

    async fn counts_for(
        &self,
        post_ids: &[Snowflake],
    ) -> RepoResult<HashMap<Snowflake, ReactionCounts>> {
        let map = self.0.lock().unwrap();
        let mut tallies: HashMap<Snowflake, ReactionCounts> = HashMap::new();
        for ((pid, _), kind) in map.iter() {
            if post_ids.contains(pid) {
                let counts = tallies.entry(*pid).or_default();
                match kind {
                    ReactionKind::Like => counts.likes += 1,
                    ReactionKind::Dislike => counts.dislikes += 1,
                }
            }
        }
        Ok(tallies)
    }

    async fn kinds_for(
        &self,
        post_ids: &[Snowflake],
        user_id: Snowflake,
    ) -> RepoResult<HashMap<Snowflake, ReactionKind>> {
        let map = self.0.lock().unwrap();
        Ok(post_ids
            .iter()
            .filter_map(|pid| map.get(&(*pid, user_id)).map(|kind| (*pid, *kind)))
            .collect())
    }
}

struct MemChatRepo(Shared<Vec<ChatMessage>>);

#[async_trait]
impl ChatMessageRepository for MemChatRepo {
    async fn list(&self, query: &CursorQuery) -> RepoResult<Vec<ChatMessage>> {
        let mut messages: Vec<ChatMessage> = self
            .0
            .lock()
            .unwrap()
            .iter()
            .filter(|m| query.before.is_none_or(|b| m.id < b))
            .filter(|m| query.after.is_none_or(|a| m.id > a))
            .cloned()
            .collect();
        if query.after.is_some() {
            messages.sort_by(|a, b| a.id.cmp(&b.id));
        } else {
            messages.sort_by(|a, b| b.id.cmp(&a.id));
        }
        messages.truncate(usize::try_from(query.limit.clamp(1, 100)).unwrap());
        Ok(messages)
    }

    async fn create(&self, message: &ChatMessage) -> RepoResult<()> {
        self.0.lock().unwrap().push(message.clone());
        Ok(())
    }
}

struct MemProfileRepo(Shared<HashMap<Snowflake, GamingProfile>>);

#[async_trait]
impl GamingProfileRepository for MemProfileRepo {
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<GamingProfile>> {
        let mut profiles: Vec<GamingProfile> = self
            .0
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect();
        profiles.sort_by(|a, b| a.platform.cmp(&b.platform));
        Ok(profiles)
    }

    async fn apply_changes(
        &self,
        user_id: Snowflake,
        inserts: &[GamingProfile],
        updates: &[(Snowflake, String)],
        deletes: &[Snowflake],
    ) -> RepoResult<()> {
        let mut map = self.0.lock().unwrap();
        for id in deletes {
            map.remove(id);
        }
        for (id, handle) in updates {
            if let Some(profile) = map.get_mut(id) {
                profile.handle.clone_from(handle);
                profile.updated_at = chrono::Utc::now();
            }
        }
        for profile in inserts {
            let duplicate = map
                .values()
                .any(|p| p.user_id == user_id && p.platform == profile.platform);
            if duplicate {
                return Err(DomainError::PlatformAlreadyLinked(profile.platform.clone()));
            }
            map.insert(profile.id, profile.clone());
        }
        Ok(())
    }
}
