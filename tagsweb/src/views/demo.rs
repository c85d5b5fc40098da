use maud::{html, Markup};
use tags_core::{tag_list, TagDescriptor, TagList, TagsError};

use crate::{
    components::{page::page, tabs::Tabs},
    error::ApiResult,
};

/// Returns the demo page: every variation of the tags component, once in the
/// light column and once in the dark one.
pub async fn demo_view() -> ApiResult<Markup> {
    let light = demo_column(false)?;
    let dark = demo_column(true)?;

    Ok(page(
        Tabs::Demo,
        html! {
            div class="split-wrapper" {
                div class="split" { (light) }
                div class="split split--dark" { (dark) }
            }
        },
    ))
}

fn demo_column(dark: bool) -> Result<Markup, TagsError> {
    let sections = demo_sections(dark)?;

    Ok(html! {
        @for (i, (heading, list)) in sections.iter().enumerate() {
            @if i > 0 {
                hr;
            }
            h2 { (heading) }
            (tag_list(list))
        }
    })
}

fn demo_sections(dark: bool) -> Result<Vec<(&'static str, TagList)>, TagsError> {
    let without_links = TagList::new(plain_tags(&["foo", "bar", "baz", "boing"])?);

    let with_classes = TagList::new(vec![
        TagDescriptor::new("foo")?,
        TagDescriptor::new("bar")?.with_attr("className", "testing")?,
        TagDescriptor::new("baz")?,
    ])
    .with_class("testing");

    let with_links = TagList::new(
        plain_tags(&["foo", "bar", "baz", "boing"])?
            .into_iter()
            .map(|tag| tag.with_link("#url"))
            .collect(),
    );

    let with_onclick = TagList::new(vec![
        TagDescriptor::new("link")?
            .with_link("#url1")
            .on_click(click_script("first")),
        TagDescriptor::new("link")?
            .with_link("#url2")
            .on_click(click_script("second")),
        TagDescriptor::new("nolink")?.on_click(click_script("third")),
        TagDescriptor::new("nolink")?.on_click(click_script("forth")),
    ]);

    Ok(vec![
        ("tags without links", without_links.dark(dark)),
        ("tags with additional classes", with_classes.dark(dark)),
        ("tags with links", with_links.dark(dark)),
        ("tags with onclick", with_onclick.dark(dark)),
    ])
}

fn plain_tags(texts: &[&str]) -> Result<Vec<TagDescriptor>, TagsError> {
    texts.iter().map(|text| TagDescriptor::new(*text)).collect()
}

fn click_script(ordinal: &str) -> String {
    format!(
        "event.preventDefault(); console.log('This function is called when the {ordinal} tag is clicked')"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_page_shows_both_variants() {
        let html = demo_view().await.unwrap().into_string();
        assert_eq!(html.matches(r#"<ul class="au-tags"#).count(), 8);
        assert_eq!(html.matches("au-tags--dark").count(), 4);
        assert_eq!(html.matches("<hr>").count(), 6);
        assert!(html.contains(r#"<ul class="au-tags testing au-tags--dark">"#));
    }

    #[test]
    fn onclick_section_mixes_links_and_placeholders() {
        let sections = demo_sections(false).unwrap();
        let (heading, list) = &sections[3];
        assert_eq!(*heading, "tags with onclick");

        let html = tag_list(list).into_string();
        assert!(html.contains(r##"<a href="#url1" onclick="event.preventDefault();"##));
        assert_eq!(html.matches(r##"<a href="#" onclick="##).count(), 2);
    }

    #[test]
    fn class_section_puts_the_class_on_the_anchor() {
        let sections = demo_sections(false).unwrap();
        let html = tag_list(&sections[1].1).into_string();
        assert!(html.starts_with(r#"<ul class="au-tags testing">"#));
        assert!(html.contains(r##"<li><a href="#" class="testing">bar</a></li>"##));
    }
}
