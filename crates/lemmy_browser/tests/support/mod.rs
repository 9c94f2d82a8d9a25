#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::Mutex;

use lemmy_api::{Comment, CommentQuery, CommunityRef, Post, PostContent, PostQuery};
use lemmy_browser::gateway::{ContentGateway, FetchError};
use lemmy_tui::{AcceptKind, MenuRequest, MenuSelection, SelectionSurface};

/// What the scripted user does with the next menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Select(usize),
    Back,
    Close,
    Fail,
}

/// A menu as it was presented, with every entry's preview resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    pub title: String,
    pub labels: Vec<String>,
    pub status: Option<String>,
    pub previews: Vec<Option<String>>,
}

/// Selection surface that replays a key script and records each menu. An exhausted script
/// behaves like closed input.
#[derive(Debug, Default)]
pub struct ScriptedSurface {
    script: VecDeque<Key>,
    pub shown: Vec<Shown>,
}

impl ScriptedSurface {
    pub fn new(script: impl IntoIterator<Item = Key>) -> Self {
        Self {
            script: script.into_iter().collect(),
            shown: Vec::new(),
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.shown.iter().map(|shown| shown.title.as_str()).collect()
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl SelectionSurface for ScriptedSurface {
    fn select(&mut self, request: &MenuRequest<'_>) -> io::Result<Option<MenuSelection>> {
        self.shown.push(Shown {
            title: request.title().to_string(),
            labels: request.labels().to_vec(),
            status: request.status().map(str::to_string),
            previews: (0..request.labels().len())
                .map(|index| request.preview(index))
                .collect(),
        });
        match self.script.pop_front().unwrap_or(Key::Close) {
            Key::Select(index) => Ok(Some(MenuSelection {
                index,
                accept: AcceptKind::Select,
            })),
            Key::Back => Ok(Some(MenuSelection {
                index: 0,
                accept: AcceptKind::Back,
            })),
            Key::Close => Ok(None),
            Key::Fail => Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal gone")),
        }
    }
}

/// Gateway serving queued responses and recording every query. An empty queue serves an
/// empty listing.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    posts: Mutex<VecDeque<Result<Vec<Post>, FetchError>>>,
    comments: Mutex<VecDeque<Result<Vec<Comment>, FetchError>>>,
    post_queries: Mutex<Vec<PostQuery>>,
    comment_queries: Mutex<Vec<CommentQuery>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_posts(self, posts: Result<Vec<Post>, FetchError>) -> Self {
        self.posts.lock().expect("posts").push_back(posts);
        self
    }

    pub fn with_comments(self, comments: Result<Vec<Comment>, FetchError>) -> Self {
        self.comments.lock().expect("comments").push_back(comments);
        self
    }

    pub fn post_queries(&self) -> Vec<PostQuery> {
        self.post_queries.lock().expect("post queries").clone()
    }

    pub fn comment_queries(&self) -> Vec<CommentQuery> {
        self.comment_queries.lock().expect("comment queries").clone()
    }
}

impl ContentGateway for RecordingGateway {
    fn fetch_posts(&self, query: &PostQuery) -> Result<Vec<Post>, FetchError> {
        self.post_queries
            .lock()
            .expect("post queries")
            .push(query.clone());
        self.posts
            .lock()
            .expect("posts")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn fetch_comments(&self, query: &CommentQuery) -> Result<Vec<Comment>, FetchError> {
        self.comment_queries
            .lock()
            .expect("comment queries")
            .push(query.clone());
        self.comments
            .lock()
            .expect("comments")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn post(id: i64, title: &str, community: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        community: CommunityRef {
            id: Some(100),
            name: community.to_string(),
        },
        creator: "alice".to_string(),
        content: PostContent::Text(format!("body of {id}")),
        upvotes: 5,
        downvotes: 2,
        comments: 4,
    }
}

pub fn comment(id: i64, path: &str) -> Comment {
    Comment {
        id,
        community: CommunityRef::named("linux"),
        creator: "bob".to_string(),
        body: format!("comment {id}"),
        url: format!("https://lemmy.ml/comment/{id}"),
        path: path.to_string(),
        upvotes: 1,
        downvotes: 0,
    }
}

pub fn communities(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}
