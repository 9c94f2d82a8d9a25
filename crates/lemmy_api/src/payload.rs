//! Wire shapes of the v3 listing responses.
//!
//! Only the fields the content models need are declared; serde ignores the rest.

use serde::Deserialize;

use crate::models::{Comment, CommunityRef, Post, PostContent};

#[derive(Debug, Clone, Deserialize)]
pub struct PostListResponse {
    #[serde(default)]
    pub posts: Vec<PostView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentListResponse {
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostView {
    pub post: PostRecord,
    pub creator: PersonRecord,
    pub community: CommunityRecord,
    pub counts: PostCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PersonRecord {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommunityRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostCounts {
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentView {
    pub comment: CommentRecord,
    pub creator: PersonRecord,
    pub community: CommunityRecord,
    pub counts: CommentCounts,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentRecord {
    pub id: i64,
    pub content: String,
    pub ap_id: String,
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

impl From<CommunityRecord> for CommunityRef {
    fn from(record: CommunityRecord) -> Self {
        CommunityRef {
            id: record.id,
            name: record.name,
        }
    }
}

impl From<PostView> for Post {
    fn from(view: PostView) -> Self {
        Post {
            id: view.post.id,
            title: view.post.name,
            community: view.community.into(),
            creator: view.creator.name,
            content: PostContent::from_parts(view.post.body, view.post.url),
            upvotes: view.counts.upvotes,
            downvotes: view.counts.downvotes,
            comments: view.counts.comments,
        }
    }
}

impl From<CommentView> for Comment {
    fn from(view: CommentView) -> Self {
        Comment {
            id: view.comment.id,
            community: view.community.into(),
            creator: view.creator.name,
            body: view.comment.content,
            url: view.comment.ap_id,
            path: view.comment.path,
            upvotes: view.counts.upvotes,
            downvotes: view.counts.downvotes,
        }
    }
}

impl PostListResponse {
    pub fn into_posts(self) -> Vec<Post> {
        self.posts.into_iter().map(Post::from).collect()
    }
}

impl CommentListResponse {
    pub fn into_comments(self) -> Vec<Comment> {
        self.comments.into_iter().map(Comment::from).collect()
    }
}
