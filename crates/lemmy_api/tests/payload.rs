use lemmy_api::payload::{CommentListResponse, PostListResponse};
use lemmy_api::{CommunityRef, PostContent};
use pretty_assertions::assert_eq;

const POST_LIST: &str = include_str!("fixtures/post_list.json");
const COMMENT_LIST: &str = include_str!("fixtures/comment_list.json");

#[test]
fn post_list_decodes_into_posts_in_order() {
    let posts = serde_json::from_str::<PostListResponse>(POST_LIST)
        .expect("decode post list")
        .into_posts();

    assert_eq!(posts.len(), 2);
    assert_eq!(posts[0].id, 101);
    assert_eq!(
        posts[0].community,
        CommunityRef {
            id: Some(9),
            name: "linux".to_string()
        }
    );
    assert_eq!(posts[0].creator, "alice");
    assert_eq!(posts[0].content, PostContent::Text("Changelog inside.".to_string()));
    assert_eq!((posts[0].upvotes, posts[0].downvotes, posts[0].comments), (40, 2, 12));
    assert_eq!(posts[0].score(), 38);

    assert_eq!(
        posts[1].content,
        PostContent::Link("https://example.com/article".to_string())
    );
    assert_eq!(posts[1].score(), -3);
}

#[test]
fn post_list_without_posts_key_is_empty() {
    let posts = serde_json::from_str::<PostListResponse>("{}")
        .expect("decode empty post list")
        .into_posts();
    assert!(posts.is_empty());
}

#[test]
fn comment_list_decodes_paths_and_links() {
    let comments = serde_json::from_str::<CommentListResponse>(COMMENT_LIST)
        .expect("decode comment list")
        .into_comments();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].path, "0.123.333");
    assert_eq!(comments[0].url, "https://lemmy.ml/comment/333");
    assert_eq!(comments[0].body, "A reply to the top comment.");
    assert_eq!(comments[0].creator, "carol");
    assert_eq!(comments[0].depth(), 1);
    assert_eq!(comments[1].score(), -2);
}

#[test]
fn comment_list_requires_comments_key() {
    assert!(serde_json::from_str::<CommentListResponse>(r#"{"posts":[]}"#).is_err());
}

#[test]
fn missing_counts_is_a_decode_failure() {
    let body = r#"{"posts":[{"post":{"id":1,"name":"t"},"creator":{"name":"a"},"community":{"name":"c"}}]}"#;
    assert!(serde_json::from_str::<PostListResponse>(body).is_err());
}
