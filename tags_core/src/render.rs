use log::{debug, trace};
use logging_timer::time;
use maud::{Markup, PreEscaped, Render};

use crate::{
    attributes::write_text_attribute,
    model::{LinkFallback, TagDescriptor, TagList},
};

/// Returns the markup for a single tag: a list item wrapping an anchor whose
/// content is the tag's text.
pub fn tag_item(tag: &TagDescriptor, fallback: LinkFallback) -> Markup {
    let mut buf = String::new();
    write_tag_item(&mut buf, tag, fallback, None);
    PreEscaped(buf)
}

/// Returns the markup for a whole tag list: the container and one list item
/// per tag, in the order the tags were given.
#[time]
pub fn tag_list(list: &TagList) -> Markup {
    let mut buf = String::new();
    write_tag_list(&mut buf, list);
    debug!(
        "Rendered tag list with {} tags, {} bytes",
        list.tags().len(),
        buf.len()
    );
    PreEscaped(buf)
}

impl Render for TagDescriptor {
    fn render_to(&self, buffer: &mut String) {
        write_tag_item(buffer, self, LinkFallback::default(), None);
    }
}

impl Render for TagList {
    fn render_to(&self, buffer: &mut String) {
        write_tag_list(buffer, self);
    }
}

fn write_tag_list(buf: &mut String, list: &TagList) {
    buf.push_str("<ul");
    write_text_attribute(buf, "class", &list.container_class());
    // The container's own `class` attribute is already part of the class list.
    list.attributes().write_to(buf, &["class"]);
    buf.push('>');

    for (index, tag) in list.tags().iter().enumerate() {
        let key = list.emits_keys().then(|| tag.identity(index));
        write_tag_item(buf, tag, list.fallback(), key.as_deref());
    }

    buf.push_str("</ul>");
}

fn write_tag_item(
    buf: &mut String,
    tag: &TagDescriptor,
    fallback: LinkFallback,
    key: Option<&str>,
) {
    buf.push_str("<li");
    match key {
        Some(key) => {
            write_text_attribute(buf, "data-key", key);
            tag.li_attributes().write_to(buf, &["data-key"]);
        }
        None => tag.li_attributes().write_to(buf, &[]),
    }
    buf.push('>');

    if fallback == LinkFallback::StaticText && !tag.is_interactive() {
        trace!("Rendering tag {:?} as static text", tag.text());
        tag.text().render_to(buf);
    } else {
        write_anchor(buf, tag);
    }

    buf.push_str("</li>");
}

/// Writes the anchor. It always carries exactly one `href`, see
/// [`TagDescriptor::destination`].
fn write_anchor(buf: &mut String, tag: &TagDescriptor) {
    buf.push_str("<a");
    write_text_attribute(buf, "href", tag.destination());
    tag.attributes().write_to(buf, &["href"]);
    buf.push('>');
    tag.text().render_to(buf);
    buf.push_str("</a>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::props::Validation;
    use serde_json::json;

    fn tag(text: &str) -> TagDescriptor {
        TagDescriptor::new(text).unwrap()
    }

    #[test]
    fn list_without_links_or_dark() {
        let list = TagList::new(vec![tag("foo"), tag("bar").with_link("#url")]);
        assert_eq!(
            tag_list(&list).into_string(),
            concat!(
                r#"<ul class="au-tags">"#,
                r##"<li><a href="#">foo</a></li>"##,
                r##"<li><a href="#url">bar</a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn item_without_link_points_at_placeholder() {
        let markup = tag_item(&tag("foo"), LinkFallback::Placeholder);
        assert_eq!(markup.into_string(), r##"<li><a href="#">foo</a></li>"##);
    }

    #[test]
    fn item_with_link_points_at_it_exactly() {
        let tag = tag("foo").with_link("http://example.com");
        let markup = tag_item(&tag, LinkFallback::Placeholder);
        assert_eq!(
            markup.into_string(),
            r#"<li><a href="http://example.com">foo</a></li>"#
        );
    }

    #[test]
    fn items_keep_their_order() {
        let list = TagList::new(vec![tag("A"), tag("B"), tag("C")]);
        let html = tag_list(&list).into_string();
        let a = html.find(">A<").unwrap();
        let b = html.find(">B<").unwrap();
        let c = html.find(">C<").unwrap();
        assert!(a < b && b < c);
        assert_eq!(html.matches("<li>").count(), 3);
    }

    #[test]
    fn empty_list_has_no_children() {
        let html = tag_list(&TagList::new(vec![])).into_string();
        assert_eq!(html, r#"<ul class="au-tags"></ul>"#);
    }

    #[test]
    fn dark_variant_adds_modifier() {
        let list = TagList::new(vec![tag("foo")]).with_class("testing").dark(true);
        let html = tag_list(&list).into_string();
        assert!(html.starts_with(r#"<ul class="au-tags testing au-tags--dark">"#));

        let html = tag_list(&list.dark(false)).into_string();
        assert!(html.starts_with(r#"<ul class="au-tags testing">"#));
        assert!(!html.contains("au-tags--dark"));
    }

    #[test]
    fn anchor_attributes_are_passed_through() {
        let tag = tag("x").with_attr("someCustomAttr", "y").unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li><a href="#" someCustomAttr="y">x</a></li>"##
        );
    }

    #[test]
    fn container_attributes_are_passed_through() {
        let list = TagList::new(vec![])
            .with_attr("someCustomAttr", "y")
            .unwrap()
            .with_attr("className", "extra")
            .unwrap();
        assert_eq!(
            tag_list(&list).into_string(),
            r#"<ul class="au-tags extra" someCustomAttr="y"></ul>"#
        );
    }

    #[test]
    fn list_item_attributes_are_passed_through() {
        let tag = tag("x")
            .with_li_attr("className", "current")
            .unwrap()
            .on_click("event.preventDefault()");
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li class="current"><a href="#" onclick="event.preventDefault()">x</a></li>"##
        );
    }

    #[test]
    fn href_attribute_overrides_link() {
        let tag = tag("x").with_link("#url").with_attr("href", "/elsewhere").unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r#"<li><a href="/elsewhere">x</a></li>"#
        );
    }

    #[test]
    fn href_flag_keeps_the_resolved_link() {
        let tag = tag("x").with_attr("href", false).unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li><a href="#">x</a></li>"##
        );

        let tag = tag.with_link("#url").with_attr("href", true).unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li><a href="#url">x</a></li>"##
        );
    }

    #[test]
    fn container_class_number_is_not_dropped() {
        let list = TagList::from_json_value(json!({ "tags": [], "class": 5 }), Validation::Strict)
            .unwrap();
        assert_eq!(tag_list(&list).into_string(), r#"<ul class="au-tags 5"></ul>"#);
    }

    #[test]
    fn large_integer_attributes_render_exactly() {
        let tag = TagDescriptor::from_json_value(
            json!({ "text": "x", "data-id": 9007199254740993_u64 }),
            Validation::Strict,
        )
        .unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li><a href="#" data-id="9007199254740993">x</a></li>"##
        );
    }

    #[test]
    fn text_and_values_are_escaped() {
        let tag = tag("<b>&</b>")
            .with_link("/search?q=a&b")
            .with_attr("title", "\"quoted\"")
            .unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r#"<li><a href="/search?q=a&amp;b" title="&quot;quoted&quot;">&lt;b&gt;&amp;&lt;/b&gt;</a></li>"#
        );
    }

    #[test]
    fn static_text_fallback_only_for_plain_tags() {
        let plain = tag("foo");
        assert_eq!(
            tag_item(&plain, LinkFallback::StaticText).into_string(),
            "<li>foo</li>"
        );

        let clickable = tag("bar").on_click("go()");
        assert_eq!(
            tag_item(&clickable, LinkFallback::StaticText).into_string(),
            r##"<li><a href="#" onclick="go()">bar</a></li>"##
        );

        let linked = tag("baz").with_link("#url");
        assert_eq!(
            tag_item(&linked, LinkFallback::StaticText).into_string(),
            r##"<li><a href="#url">baz</a></li>"##
        );
    }

    #[test]
    fn list_applies_its_fallback_to_every_item() {
        let list = TagList::new(vec![tag("foo"), tag("bar").with_link("#url")])
            .with_fallback(LinkFallback::StaticText);
        assert_eq!(
            tag_list(&list).into_string(),
            r##"<ul class="au-tags"><li>foo</li><li><a href="#url">bar</a></li></ul>"##
        );
    }

    #[test]
    fn keys_are_emitted_on_request() {
        let list = TagList::new(vec![tag("foo").with_key("f"), tag("bar")]).with_keys(true);
        assert_eq!(
            tag_list(&list).into_string(),
            concat!(
                r#"<ul class="au-tags">"#,
                r##"<li data-key="f"><a href="#">foo</a></li>"##,
                r##"<li data-key="1"><a href="#">bar</a></li>"##,
                "</ul>"
            )
        );
    }

    #[test]
    fn emitted_key_replaces_li_data_key() {
        let list = TagList::new(vec![tag("foo").with_li_attr("data-key", "mine").unwrap()])
            .with_keys(true);
        let html = tag_list(&list).into_string();
        assert!(html.contains(r#"<li data-key="0">"#));
        assert!(!html.contains("mine"));
    }

    #[test]
    fn rendering_twice_gives_identical_output() {
        let props = json!({
            "tags": [
                { "text": "foo", "zeta": "1", "alpha": "2", "onClick": "go()" },
                { "text": "bar", "link": "#url", "li": { "id": "b", "class": "c" } },
            ],
            "dark": true,
            "role": "list",
        });
        let first = TagList::from_json_value(props.clone(), Validation::Strict).unwrap();
        let second = TagList::from_json_value(props, Validation::Strict).unwrap();

        let html = tag_list(&first).into_string();
        assert_eq!(html, tag_list(&first).into_string());
        assert_eq!(html, tag_list(&second).into_string());
    }

    #[test]
    fn render_trait_matches_free_functions() {
        let list = TagList::new(vec![tag("foo")]).dark(true);
        assert_eq!(list.render().into_string(), tag_list(&list).into_string());

        let item = tag("foo").with_link("#url");
        assert_eq!(
            item.render().into_string(),
            tag_item(&item, LinkFallback::Placeholder).into_string()
        );
    }

    #[test]
    fn flags_render_as_bare_names() {
        let tag = tag("x")
            .with_attr("hidden", true)
            .unwrap()
            .with_attr("inert", false)
            .unwrap();
        assert_eq!(
            tag_item(&tag, LinkFallback::Placeholder).into_string(),
            r##"<li><a href="#" hidden>x</a></li>"##
        );
    }
}
