//! Cross-view navigation state.

use std::fmt;

use lemmy_api::Post;
use thiserror::Error;

use crate::view::ViewKind;

/// A piece of context one view hands to its child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextKey {
    SelectedCommunity,
    SelectedPost,
}

impl fmt::Display for ContextKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKey::SelectedCommunity => write!(f, "selected_community"),
            ContextKey::SelectedPost => write!(f, "selected_post"),
        }
    }
}

/// A view was activated without the context key it needs. Always a programming error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{view} was activated without required context key `{key}`")]
pub struct ContractViolation {
    pub view: ViewKind,
    pub key: ContextKey,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("the community list must not be empty")]
    EmptyCommunityList,
}

/// What a descending view writes into the context for its child.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextPatch {
    SelectCommunity(String),
    SelectPost(Post),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationContext {
    communities: Vec<String>,
    selected_community: Option<String>,
    selected_post: Option<Post>,
    root: ViewKind,
    history: Vec<ViewKind>,
}

impl NavigationContext {
    pub fn new(communities: Vec<String>, root: ViewKind) -> Result<Self, ContextError> {
        if communities.is_empty() {
            return Err(ContextError::EmptyCommunityList);
        }
        Ok(Self {
            communities,
            selected_community: None,
            selected_post: None,
            root,
            history: Vec::new(),
        })
    }

    pub fn communities(&self) -> &[String] {
        &self.communities
    }

    pub fn selected_community(&self) -> Option<&str> {
        self.selected_community.as_deref()
    }

    pub fn selected_post(&self) -> Option<&Post> {
        self.selected_post.as_ref()
    }

    pub fn root(&self) -> ViewKind {
        self.root
    }

    /// The active view.
    pub fn current(&self) -> ViewKind {
        self.history.last().copied().unwrap_or(self.root)
    }

    /// Visited views from the root to the active one.
    pub fn stack(&self) -> Vec<ViewKind> {
        std::iter::once(self.root)
            .chain(self.history.iter().copied())
            .collect()
    }

    pub fn depth(&self) -> usize {
        self.history.len() + 1
    }

    pub fn is_at_root(&self) -> bool {
        self.history.is_empty()
    }

    /// Apply `patch` and make `next` the active view.
    pub fn descend(&mut self, next: ViewKind, patch: ContextPatch) {
        match patch {
            ContextPatch::SelectCommunity(name) => self.selected_community = Some(name),
            ContextPatch::SelectPost(post) => self.selected_post = Some(post),
        }
        self.history.push(next);
    }

    /// Pop the active view and drop the context it required. `None` at the root.
    pub fn pop(&mut self) -> Option<ViewKind> {
        let popped = self.history.pop()?;
        if let Some(key) = popped.required_key() {
            self.clear(key);
        }
        Some(popped)
    }

    fn clear(&mut self, key: ContextKey) {
        match key {
            ContextKey::SelectedCommunity => self.selected_community = None,
            ContextKey::SelectedPost => self.selected_post = None,
        }
    }

    pub fn require_community(&self, view: ViewKind) -> Result<&str, ContractViolation> {
        self.selected_community().ok_or(ContractViolation {
            view,
            key: ContextKey::SelectedCommunity,
        })
    }

    pub fn require_post(&self, view: ViewKind) -> Result<&Post, ContractViolation> {
        self.selected_post().ok_or(ContractViolation {
            view,
            key: ContextKey::SelectedPost,
        })
    }
}
