use maud::Markup;
use tags_core::{tag_list, TagList, Validation};
use tracing::instrument;

use crate::error::ApiResult;

/// Renders the tag list described by the JSON request body and returns just
/// the list markup. Uses the build's default validation, so in release builds
/// broken props degrade instead of failing the request.
#[instrument(skip(body), fields(len = body.len()))]
pub async fn render_tags(body: String) -> ApiResult<Markup> {
    let list = TagList::from_json(&body, Validation::default())?;
    Ok(tag_list(&list))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[tokio::test]
    async fn renders_a_fragment() {
        let body = r##"{ "tags": [{ "text": "foo" }, { "text": "bar", "link": "#url" }] }"##;
        let markup = render_tags(body.to_string()).await.unwrap();
        assert_eq!(
            markup.into_string(),
            r##"<ul class="au-tags"><li><a href="#">foo</a></li><li><a href="#url">bar</a></li></ul>"##
        );
    }

    #[tokio::test]
    async fn malformed_body_is_a_bad_request() {
        let err = render_tags("[".to_string()).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[cfg(debug_assertions)]
    #[tokio::test]
    async fn broken_props_are_rejected_in_debug_builds() {
        let err = render_tags(r#"{ "tags": [{}] }"#.to_string()).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
