use axum::{
    response::{IntoResponse, Response},
    Form,
};
use maud::{html, Markup};
use serde::Deserialize;
use tags_core::{tag_list, TagList, TagsError, Validation};
use tracing::{info, warn};

use crate::{
    components::{page::page, tabs::Tabs},
    error::status_for,
};

/// What the textarea is filled with when the page is first opened.
const EXAMPLE_PROPS: &str = r##"{
  "tags": [
    { "text": "foo" },
    { "text": "bar", "link": "#url" },
    { "text": "baz", "li": { "className": "current" } }
  ],
  "dark": false,
  "className": "testing"
}"##;

#[derive(Debug, Deserialize)]
pub struct PreviewForm {
    props: String,
}

/// Returns the preview page with the example props filled in.
pub async fn preview_form() -> Markup {
    preview_page(EXAMPLE_PROPS, None)
}

/// Renders the submitted props. Props that break the contract are never
/// tolerated here, the point of the page is to see what is wrong with them.
pub async fn preview_submit(Form(form): Form<PreviewForm>) -> Response {
    match TagList::from_json(&form.props, Validation::Strict) {
        Ok(list) => {
            info!("Previewing a tag list with {} tags", list.tags().len());
            preview_page(&form.props, Some(Ok(&list))).into_response()
        }
        Err(err) => {
            warn!("Preview rejected: {err}");
            let code = status_for(&err);
            (code, preview_page(&form.props, Some(Err(&err)))).into_response()
        }
    }
}

fn preview_page(props: &str, outcome: Option<Result<&TagList, &TagsError>>) -> Markup {
    page(
        Tabs::Preview,
        html! {
            form action="/preview" method="post" {
                label for="props" { "Tag list props (JSON):" }
                textarea id="props" name="props" rows="14" cols="72" { (props) }
                input type="submit" value="Render";
            }
            @match outcome {
                Some(Ok(list)) => {
                    @let markup = tag_list(list).into_string();
                    @let class = if list.is_dark() { "split split--dark" } else { "split" };
                    h2 { "Result" }
                    div class=(class) {
                        (maud::PreEscaped(&markup))
                    }
                    h2 { "Markup" }
                    pre { code { (markup) } }
                }
                Some(Err(err)) => {
                    p class="error" { (err.to_string()) }
                }
                None => {}
            }
        },
    )
}
