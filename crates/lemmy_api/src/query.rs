//! Listing queries and their wire encoding.

/// Listings only ever cover the instance's own communities.
const LISTING_TYPE: &str = "Local";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostSort {
    Hot,
    TopYear,
}

impl PostSort {
    pub fn as_str(self) -> &'static str {
        match self {
            PostSort::Hot => "Hot",
            PostSort::TopYear => "TopYear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentSort {
    Hot,
}

impl CommentSort {
    pub fn as_str(self) -> &'static str {
        match self {
            CommentSort::Hot => "Hot",
        }
    }
}

/// One page of posts, optionally scoped to a community.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub sort: PostSort,
    pub limit: u32,
    pub community: Option<String>,
}

impl PostQuery {
    pub fn for_community(community: impl Into<String>, sort: PostSort, limit: u32) -> Self {
        Self {
            sort,
            limit,
            community: Some(community.into()),
        }
    }

    /// Instance-wide listing with no community filter.
    pub fn front_page(sort: PostSort, limit: u32) -> Self {
        Self {
            sort,
            limit,
            community: None,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("type_", LISTING_TYPE.to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(community) = &self.community {
            pairs.push(("community_name", community.clone()));
        }
        pairs
    }
}

/// The comment tree of one post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentQuery {
    pub post_id: i64,
    pub community: String,
    pub limit: u32,
    pub max_depth: u32,
    pub sort: CommentSort,
}

impl CommentQuery {
    pub fn new(
        post_id: i64,
        community: impl Into<String>,
        limit: u32,
        max_depth: u32,
        sort: CommentSort,
    ) -> Self {
        Self {
            post_id,
            community: community.into(),
            limit,
            max_depth,
            sort,
        }
    }

    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type_", LISTING_TYPE.to_string()),
            ("limit", self.limit.to_string()),
            ("max_depth", self.max_depth.to_string()),
            ("sort", self.sort.as_str().to_string()),
            ("post_id", self.post_id.to_string()),
            ("community_name", self.community.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{CommentQuery, CommentSort, PostQuery, PostSort};
    use pretty_assertions::assert_eq;

    fn owned(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs
            .iter()
            .map(|(key, value)| (*key, value.to_string()))
            .collect()
    }

    #[test]
    fn community_posts_carry_community_name_last() {
        let query = PostQuery::for_community("linux", PostSort::Hot, 10);
        assert_eq!(
            query.query_pairs(),
            owned(&[
                ("type_", "Local"),
                ("sort", "Hot"),
                ("limit", "10"),
                ("community_name", "linux"),
            ])
        );
    }

    #[test]
    fn front_page_omits_community() {
        let query = PostQuery::front_page(PostSort::TopYear, 10);
        assert_eq!(
            query.query_pairs(),
            owned(&[("type_", "Local"), ("sort", "TopYear"), ("limit", "10")])
        );
    }

    #[test]
    fn comment_query_matches_listing_order() {
        let query = CommentQuery::new(42, "linux", 30, 3, CommentSort::Hot);
        assert_eq!(
            query.query_pairs(),
            owned(&[
                ("type_", "Local"),
                ("limit", "30"),
                ("max_depth", "3"),
                ("sort", "Hot"),
                ("post_id", "42"),
                ("community_name", "linux"),
            ])
        );
    }
}
