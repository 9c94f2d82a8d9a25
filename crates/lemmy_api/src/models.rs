//! Content models decoded from listing payloads.
//!
//! Values are immutable once built. Display helpers only ever clip the rendered string; the
//! stored title and body stay intact.

use std::cmp::Ordering;

const POST_TITLE_CHARS: usize = 50;
const COMMENT_LABEL_CHARS: usize = 60;
const PREVIEW_WORDS_PER_LINE: usize = 10;

/// A community by name, with its id when it came from a payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommunityRef {
    pub id: Option<i64>,
    pub name: String,
}

impl CommunityRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }
}

/// A post carries either a text body or a link, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostContent {
    Text(String),
    Link(String),
}

impl PostContent {
    /// A non-empty body wins; otherwise the url; otherwise empty text.
    pub fn from_parts(body: Option<String>, url: Option<String>) -> Self {
        match (body, url) {
            (Some(body), _) if !body.is_empty() => PostContent::Text(body),
            (_, Some(url)) if !url.is_empty() => PostContent::Link(url),
            _ => PostContent::Text(String::new()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PostContent::Text(text) | PostContent::Link(text) => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub community: CommunityRef,
    pub creator: String,
    pub content: PostContent,
    pub upvotes: i64,
    pub downvotes: i64,
    pub comments: i64,
}

impl Post {
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    pub fn menu_label(&self) -> String {
        let title: String = self.title.chars().take(POST_TITLE_CHARS).collect();
        format!(
            "{title}::⬆️{}::⬇️{}::💬{}",
            self.upvotes, self.downvotes, self.comments
        )
    }

    pub fn preview(&self) -> String {
        format!(
            "🔈{} ::👤{} :: 💬 {}\n{}",
            self.community.name,
            self.creator,
            self.comments,
            self.content.as_str()
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: i64,
    pub community: CommunityRef,
    pub creator: String,
    pub body: String,
    /// Canonical ActivityPub link of the comment.
    pub url: String,
    /// Ancestor chain such as `0.123.333`, ending in this comment's id.
    pub path: String,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl Comment {
    pub fn score(&self) -> i64 {
        self.upvotes - self.downvotes
    }

    /// Number of ancestor comments; top-level comments sit at depth 0.
    pub fn depth(&self) -> usize {
        path_segments(&self.path).count().saturating_sub(2)
    }

    pub fn menu_label(&self) -> String {
        let label: String = format!("{}:::{}", self.path, self.body)
            .chars()
            .take(COMMENT_LABEL_CHARS)
            .collect();
        label.replace('\n', " ")
    }

    /// Body reflowed with a line break after every ten words.
    pub fn preview(&self) -> String {
        let words: Vec<&str> = self.body.split_whitespace().collect();
        words
            .chunks(PREVIEW_WORDS_PER_LINE)
            .map(|line| line.join(" "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|segment| !segment.is_empty())
}

/// Tree order for comment paths: a parent sorts before its replies and siblings sort by the
/// numeric value of their ids. Non-numeric segments fall back to string order.
pub fn compare_paths(left: &str, right: &str) -> Ordering {
    let mut left_segments = path_segments(left);
    let mut right_segments = path_segments(right);
    loop {
        match (left_segments.next(), right_segments.next()) {
            (None, None) => return left.cmp(right),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(a), Some(b)) => {
                let ordering = match (a.parse::<u64>(), b.parse::<u64>()) {
                    (Ok(a), Ok(b)) => a.cmp(&b),
                    _ => a.cmp(b),
                };
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
        }
    }
}

/// Map key ordering comment paths with [`compare_paths`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathKey(pub String);

impl Ord for PathKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_paths(&self.0, &other.0)
    }
}

impl PartialOrd for PathKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
