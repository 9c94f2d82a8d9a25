//! The screens of the browser and how each one turns a selection into a navigation decision.

use std::collections::BTreeMap;
use std::fmt;
use std::io;

use lemmy_api::models::PathKey;
use lemmy_api::{Comment, CommentQuery, CommentSort, Post, PostQuery, PostSort};
use lemmy_tui::{AcceptKind, MenuRequest, MenuSelection, SelectionSurface};
use log::info;
use thiserror::Error;

use crate::context::{ContextKey, ContextPatch, ContractViolation, NavigationContext};
use crate::gateway::{ContentGateway, FetchError};

pub const POST_PAGE_SIZE: u32 = 10;
pub const COMMENT_LIMIT: u32 = 30;
pub const COMMENT_MAX_DEPTH: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    CommunityPicker,
    /// Instance-wide top posts, needing no selected community.
    FrontPage,
    PostList,
    CommentList,
}

impl ViewKind {
    /// The context key this view reads, cleared again when it is popped.
    pub fn required_key(self) -> Option<ContextKey> {
        match self {
            ViewKind::CommunityPicker | ViewKind::FrontPage => None,
            ViewKind::PostList => Some(ContextKey::SelectedCommunity),
            ViewKind::CommentList => Some(ContextKey::SelectedPost),
        }
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViewKind::CommunityPicker => "CommunityPicker",
            ViewKind::FrontPage => "FrontPage",
            ViewKind::PostList => "PostList",
            ViewKind::CommentList => "CommentList",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationDecision {
    Descend { next: ViewKind, patch: ContextPatch },
    Return,
    Exit,
}

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("terminal I/O failed: {0}")]
    Surface(#[from] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommunityPicker {
    communities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostList {
    kind: ViewKind,
    title: String,
    query: PostQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentList {
    title: String,
    query: CommentQuery,
}

/// A freshly built screen. Never reused across activations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    CommunityPicker(CommunityPicker),
    PostList(PostList),
    CommentList(CommentList),
}

impl View {
    /// Build the view for `kind` from the current context.
    pub fn build(kind: ViewKind, context: &NavigationContext) -> Result<Self, ContractViolation> {
        let view = match kind {
            ViewKind::CommunityPicker => View::CommunityPicker(CommunityPicker {
                communities: context.communities().to_vec(),
            }),
            ViewKind::FrontPage => View::PostList(PostList {
                kind,
                title: "Front page · top of the year".to_string(),
                query: PostQuery::front_page(PostSort::TopYear, POST_PAGE_SIZE),
            }),
            ViewKind::PostList => {
                let community = context.require_community(kind)?;
                View::PostList(PostList {
                    kind,
                    title: format!("Posts · {community}"),
                    query: PostQuery::for_community(community, PostSort::Hot, POST_PAGE_SIZE),
                })
            }
            ViewKind::CommentList => {
                let post = context.require_post(kind)?;
                View::CommentList(CommentList {
                    title: format!("Comments · {}", post.title),
                    query: CommentQuery::new(
                        post.id,
                        post.community.name.clone(),
                        COMMENT_LIMIT,
                        COMMENT_MAX_DEPTH,
                        CommentSort::Hot,
                    ),
                })
            }
        };
        Ok(view)
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            View::CommunityPicker(_) => ViewKind::CommunityPicker,
            View::PostList(view) => view.kind,
            View::CommentList(_) => ViewKind::CommentList,
        }
    }

    /// Fetch, present and block until the user decides where to go next.
    pub fn activate<G, S>(
        &self,
        gateway: &G,
        surface: &mut S,
    ) -> Result<NavigationDecision, ViewError>
    where
        G: ContentGateway + ?Sized,
        S: SelectionSurface + ?Sized,
    {
        match self {
            View::CommunityPicker(view) => view.activate(surface),
            View::PostList(view) => view.activate(gateway, surface),
            View::CommentList(view) => view.activate(gateway, surface),
        }
    }
}

impl CommunityPicker {
    fn activate<S>(&self, surface: &mut S) -> Result<NavigationDecision, ViewError>
    where
        S: SelectionSurface + ?Sized,
    {
        let request = MenuRequest::new("Communities 💬", self.communities.clone());
        loop {
            let Some(selection) = surface.select(&request)? else {
                return Ok(NavigationDecision::Exit);
            };
            match selection.accept {
                AcceptKind::Back => return Ok(NavigationDecision::Return),
                AcceptKind::Select => {
                    if let Some(name) = self.communities.get(selection.index) {
                        return Ok(NavigationDecision::Descend {
                            next: ViewKind::PostList,
                            patch: ContextPatch::SelectCommunity(name.clone()),
                        });
                    }
                }
            }
        }
    }
}

impl PostList {
    fn activate<G, S>(&self, gateway: &G, surface: &mut S) -> Result<NavigationDecision, ViewError>
    where
        G: ContentGateway + ?Sized,
        S: SelectionSurface + ?Sized,
    {
        let posts = gateway.fetch_posts(&self.query)?;
        info!("{}: fetched {} posts", self.kind, posts.len());

        let labels = posts.iter().map(Post::menu_label).collect();
        let mut request =
            MenuRequest::new(self.title.clone(), labels).with_preview(|index| posts[index].preview());
        if posts.is_empty() {
            request = request.with_status("No posts here yet.");
        }

        loop {
            let Some(selection) = surface.select(&request)? else {
                return Ok(NavigationDecision::Exit);
            };
            match selection.accept {
                AcceptKind::Back => return Ok(NavigationDecision::Return),
                AcceptKind::Select => {
                    if let Some(post) = posts.get(selection.index) {
                        return Ok(NavigationDecision::Descend {
                            next: ViewKind::CommentList,
                            patch: ContextPatch::SelectPost(post.clone()),
                        });
                    }
                }
            }
        }
    }
}

impl CommentList {
    fn activate<G, S>(&self, gateway: &G, surface: &mut S) -> Result<NavigationDecision, ViewError>
    where
        G: ContentGateway + ?Sized,
        S: SelectionSurface + ?Sized,
    {
        let comments = thread_order(gateway.fetch_comments(&self.query)?);
        info!(
            "CommentList: {} comments for post {}",
            comments.len(),
            self.query.post_id
        );

        let labels: Vec<String> = comments.iter().map(Comment::menu_label).collect();
        let mut status: Option<String> = None;

        // Leaf view: selecting a comment only reports it and shows the same list again.
        loop {
            let mut request = MenuRequest::new(self.title.clone(), labels.clone())
                .with_preview(|index| comments[index].preview());
            if let Some(status) = &status {
                request = request.with_status(status.clone());
            } else if comments.is_empty() {
                request = request.with_status("No comments yet.");
            }

            let Some(MenuSelection { index, accept }) = surface.select(&request)? else {
                return Ok(NavigationDecision::Exit);
            };
            match accept {
                AcceptKind::Back => return Ok(NavigationDecision::Return),
                AcceptKind::Select => {
                    if let Some(comment) = comments.get(index) {
                        info!("selected comment {} ({})", comment.id, comment.url);
                        status = Some(format!(
                            "Selected {} · 👤{} · score {} · {}",
                            comment.path,
                            comment.creator,
                            comment.score(),
                            comment.url
                        ));
                    }
                }
            }
        }
    }
}

/// Order comments parent-before-child by path. A later comment with the same path replaces an
/// earlier one.
///
/// Siblings compare by numeric id rather than by string, so `0.9` precedes `0.10`. The two
/// orders only agree when sibling ids have the same number of digits.
pub fn thread_order(comments: Vec<Comment>) -> Vec<Comment> {
    comments
        .into_iter()
        .map(|comment| (PathKey(comment.path.clone()), comment))
        .collect::<BTreeMap<_, _>>()
        .into_values()
        .collect()
}
