use std::time::Duration;

use lemmy_api::{
    CommentQuery, CommentSort, LemmyApiClient, LemmyApiConfig, LemmyApiError, PostQuery, PostSort,
};

fn client() -> LemmyApiClient {
    LemmyApiClient::new(LemmyApiConfig::new("https://lemmy.ml")).expect("client")
}

#[test]
fn http_posts_request_targets_post_list() {
    let request = client()
        .build_posts_request(&PostQuery::for_community("linux", PostSort::Hot, 10))
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(request.method(), "GET");
    assert_eq!(
        request.url().as_str(),
        "https://lemmy.ml/api/v3/post/list?type_=Local&sort=Hot&limit=10&community_name=linux"
    );
    assert_eq!(
        request
            .headers()
            .get("accept")
            .and_then(|value| value.to_str().ok()),
        Some("application/json")
    );
    assert!(request.headers().get("authorization").is_none());
}

#[test]
fn http_front_page_request_has_no_community() {
    let request = client()
        .build_posts_request(&PostQuery::front_page(PostSort::TopYear, 10))
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(
        request.url().as_str(),
        "https://lemmy.ml/api/v3/post/list?type_=Local&sort=TopYear&limit=10"
    );
}

#[test]
fn http_comments_request_targets_comment_list() {
    let request = client()
        .build_comments_request(&CommentQuery::new(1234, "linux", 30, 3, CommentSort::Hot))
        .expect("build request")
        .build()
        .expect("request");

    assert_eq!(
        request.url().as_str(),
        "https://lemmy.ml/api/v3/comment/list?type_=Local&limit=30&max_depth=3&sort=Hot&post_id=1234&community_name=linux"
    );
}

#[test]
fn http_community_names_are_percent_encoded() {
    let request = client()
        .build_posts_request(&PostQuery::for_community("a b&c", PostSort::Hot, 10))
        .expect("build request")
        .build()
        .expect("request");

    assert!(request.url().as_str().ends_with("community_name=a+b%26c"));
}

#[test]
fn client_rejects_non_http_base() {
    let error = LemmyApiClient::new(LemmyApiConfig::new("ftp://lemmy.ml")).expect_err("invalid");
    assert!(matches!(error, LemmyApiError::InvalidBaseUrl(_)));
}

#[test]
fn client_keeps_config() {
    let client = LemmyApiClient::new(
        LemmyApiConfig::new("https://lemmy.world/api").with_timeout(Duration::from_secs(2)),
    )
    .expect("client");
    assert_eq!(client.api_base(), "https://lemmy.world/api/v3");
    assert_eq!(client.config().timeout, Some(Duration::from_secs(2)));
}
