use crate::{
    attributes::{AttrValue, Attributes},
    error::{Component, TagsError},
};

/// The destination given to a tag that has no link of its own, so that it
/// still renders as something focusable and clickable.
pub const PLACEHOLDER_LINK: &str = "#";

/// The class every tag list container carries.
pub const CONTAINER_CLASS: &str = "au-tags";

/// The modifier class added to the container for the dark variant.
pub const DARK_CLASS: &str = "au-tags--dark";

/// Controls how a tag without a destination is rendered.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LinkFallback {
    /// Always render an anchor, pointing at [`PLACEHOLDER_LINK`] when the tag
    /// has no link.
    Placeholder,
    /// Render the bare text when the tag has neither a link nor any anchor
    /// attributes (such as a click handler). Tags with either still get an
    /// anchor.
    StaticText,
}

impl Default for LinkFallback {
    /// Returns LinkFallback::Placeholder.
    fn default() -> Self {
        Self::Placeholder
    }
}

/// One tag: its label, optional destination and the attributes forwarded to
/// the anchor and to the wrapping list item.
#[derive(Debug, Clone, PartialEq)]
pub struct TagDescriptor {
    text: String,
    link: Option<String>,
    key: Option<String>,
    attributes: Attributes,
    li: Attributes,
}

impl TagDescriptor {
    /// Creates a tag with the given label. The label is mandatory and must
    /// not be empty.
    pub fn new<S: Into<String>>(text: S) -> Result<Self, TagsError> {
        let text = text.into();
        if text.is_empty() {
            return Err(TagsError::empty(Component::TagItem, "text"));
        }

        Ok(Self {
            text,
            link: None,
            key: None,
            attributes: Attributes::new(),
            li: Attributes::new(),
        })
    }

    pub fn with_link<S: Into<String>>(mut self, link: S) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Gives the tag an explicit identity, used instead of its position in
    /// the list when keys are emitted.
    pub fn with_key<S: Into<String>>(mut self, key: S) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Adds an attribute to the anchor.
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Result<Self, TagsError>
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.attributes.insert(key, value)?;
        Ok(self)
    }

    /// Adds an attribute to the wrapping list item.
    pub fn with_li_attr<K, V>(mut self, key: K, value: V) -> Result<Self, TagsError>
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.li.insert(key, value)?;
        Ok(self)
    }

    /// Sets the script run when the anchor is clicked.
    pub fn on_click<S: Into<String>>(mut self, script: S) -> Self {
        self.attributes.insert_known("onclick", AttrValue::Script(script.into()));
        self
    }

    pub(crate) fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub(crate) fn set_li_attributes(&mut self, li: Attributes) {
        self.li = li;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn li_attributes(&self) -> &Attributes {
        &self.li
    }

    /// Returns the destination the anchor points at: the link if there is a
    /// non-empty one, otherwise [`PLACEHOLDER_LINK`].
    pub fn resolved_link(&self) -> &str {
        match self.link.as_deref() {
            Some(link) if !link.is_empty() => link,
            _ => PLACEHOLDER_LINK,
        }
    }

    /// Returns the `href` the anchor is written with. A non-empty `href`
    /// attribute wins over the resolved link, anything else (absent, empty or
    /// a flag) falls back to [`TagDescriptor::resolved_link`].
    pub fn destination(&self) -> &str {
        match self.attributes.get("href").and_then(AttrValue::as_text) {
            Some(href) if !href.is_empty() => href,
            _ => self.resolved_link(),
        }
    }

    /// Returns true if the tag has a real destination or anything else that
    /// needs an anchor to hang off.
    pub fn is_interactive(&self) -> bool {
        self.link.as_deref().is_some_and(|l| !l.is_empty()) || !self.attributes.is_empty()
    }

    /// The identity of the tag when it sits at `index` in a list. Positional
    /// identity only tracks a tag while the list is not reordered, so an
    /// explicit key wins when one was supplied.
    pub fn identity(&self, index: usize) -> String {
        match &self.key {
            Some(key) => key.clone(),
            None => index.to_string(),
        }
    }
}

/// An ordered collection of tags plus the styling hooks of their container.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagList {
    tags: Vec<TagDescriptor>,
    dark: bool,
    class_name: String,
    attributes: Attributes,
    fallback: LinkFallback,
    emit_keys: bool,
}

impl TagList {
    pub fn new(tags: Vec<TagDescriptor>) -> Self {
        Self {
            tags,
            ..Default::default()
        }
    }

    /// Turns the dark variant on or off.
    pub fn dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Sets an additional class for the container.
    pub fn with_class<S: Into<String>>(mut self, class_name: S) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Adds an attribute to the container.
    pub fn with_attr<K, V>(mut self, key: K, value: V) -> Result<Self, TagsError>
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        self.attributes.insert(key, value)?;
        Ok(self)
    }

    pub fn with_fallback(mut self, fallback: LinkFallback) -> Self {
        self.fallback = fallback;
        self
    }

    /// When set, every list item carries a `data-key` attribute holding the
    /// tag's identity (see [`TagDescriptor::identity`]).
    pub fn with_keys(mut self, emit_keys: bool) -> Self {
        self.emit_keys = emit_keys;
        self
    }

    pub(crate) fn set_attributes(&mut self, attributes: Attributes) {
        self.attributes = attributes;
    }

    pub fn tags(&self) -> &[TagDescriptor] {
        &self.tags
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn fallback(&self) -> LinkFallback {
        self.fallback
    }

    pub fn emits_keys(&self) -> bool {
        self.emit_keys
    }

    /// Returns the class list of the container: the base class, then the
    /// additional class, then the dark modifier if wanted, then any `class`
    /// passed as a container attribute. Empty tokens are dropped.
    pub fn container_class(&self) -> String {
        let mut classes = vec![CONTAINER_CLASS];
        classes.extend(self.class_name.split_whitespace());
        if self.dark {
            classes.push(DARK_CLASS);
        }
        if let Some(extra) = self.attributes.get("class").and_then(AttrValue::as_text) {
            classes.extend(extra.split_whitespace());
        }

        classes.join(" ")
    }
}
