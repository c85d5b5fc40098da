use std::collections::{btree_map, BTreeMap};

use maud::Render;

use crate::error::TagsError;

/// A value forwarded verbatim onto a rendered element.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    /// A number, held as its decimal text so that integers of any size are
    /// written exactly as given.
    Number(String),
    /// A boolean attribute such as `hidden`. Written as a bare name when true,
    /// omitted entirely when false.
    Flag(bool),
    /// The body of an event handler, e.g. the value of `onclick`.
    Script(String),
}

impl AttrValue {
    /// Returns the text written as the attribute's value, or `None` for a
    /// flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Number(s) | Self::Script(s) => Some(s),
            Self::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&serde_json::Number> for AttrValue {
    fn from(value: &serde_json::Number) -> Self {
        Self::Number(value.to_string())
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(impl From<$t> for AttrValue {
            fn from(value: $t) -> Self {
                Self::Number(value.to_string())
            }
        })*
    };
}

number_from!(f64, i32, i64, u32, u64);

/// A set of pass-through attributes, keyed by their HTML name.
///
/// Keys are sorted so that the same set always renders the same way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    data: BTreeMap<String, AttrValue>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an attribute, translating React-style prop names into their
    /// HTML equivalents first (see [`html_attribute_name`]). Returns the value
    /// previously stored under the same name, if any.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<AttrValue>, TagsError>
    where
        K: AsRef<str>,
        V: Into<AttrValue>,
    {
        let name = html_attribute_name(key.as_ref())?;
        Ok(self.data.insert(name, value.into()))
    }

    /// Inserts under a name that is already known to be a legal HTML
    /// attribute name.
    pub(crate) fn insert_known(&mut self, name: &str, value: AttrValue) {
        self.data.insert(name.to_string(), value);
    }

    /// Gets an attribute by either its HTML or its React-style name.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        let name = html_attribute_name(key).ok()?;
        self.data.get(&name)
    }

    /// Removes an attribute and returns it to the caller.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let name = html_attribute_name(key).ok()?;
        self.data.remove(&name)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the attribute set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttrValue> {
        self.data.iter()
    }

    /// Writes every attribute as ` name="value"`, skipping the names in
    /// `exclude`. Values are HTML-escaped.
    pub(crate) fn write_to(&self, buf: &mut String, exclude: &[&str]) {
        for (name, value) in self.iter() {
            if exclude.contains(&name.as_str()) {
                continue;
            }
            write_attribute(buf, name, value);
        }
    }
}

impl<'a> IntoIterator for &'a Attributes {
    type Item = (&'a String, &'a AttrValue);
    type IntoIter = btree_map::Iter<'a, String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn write_attribute(buf: &mut String, name: &str, value: &AttrValue) {
    match value {
        AttrValue::Flag(false) => {}
        AttrValue::Flag(true) => {
            buf.push(' ');
            buf.push_str(name);
        }
        AttrValue::Text(s) | AttrValue::Number(s) | AttrValue::Script(s) => {
            write_text_attribute(buf, name, s)
        }
    }
}

pub(crate) fn write_text_attribute(buf: &mut String, name: &str, value: &str) {
    buf.push(' ');
    buf.push_str(name);
    buf.push_str("=\"");
    value.render_to(buf);
    buf.push('"');
}

/// Translates a prop name into the attribute name it renders as:
/// `className` becomes `class`, `htmlFor` becomes `for` and camel-cased
/// event handlers such as `onClick` become `onclick`. Anything else is kept
/// as-is, provided it is a legal HTML attribute name.
pub fn html_attribute_name(key: &str) -> Result<String, TagsError> {
    let name = match key {
        "className" => "class".to_string(),
        "htmlFor" => "for".to_string(),
        k if is_camel_case_handler(k) => k.to_ascii_lowercase(),
        k => k.to_string(),
    };

    if !is_valid_attribute_name(&name) {
        return Err(TagsError::InvalidAttributeName(key.to_string()));
    }

    Ok(name)
}

/// Returns true if `name` is an inline event handler attribute of HTML, such
/// as `onclick`. Names that merely start with "on" (`one`, `open`) are not.
pub fn is_event_handler(name: &str) -> bool {
    EVENT_HANDLERS.contains(&name)
}

// https://html.spec.whatwg.org/multipage/webappapis.html#globaleventhandlers
const EVENT_HANDLERS: &[&str] = &[
    "onabort", "onafterprint", "onanimationcancel", "onanimationend",
    "onanimationiteration", "onanimationstart", "onauxclick", "onbeforeinput",
    "onbeforeprint", "onbeforetoggle", "onbeforeunload", "onblur", "oncancel",
    "oncanplay", "oncanplaythrough", "onchange", "onclick", "onclose",
    "oncontextlost", "oncontextmenu", "oncontextrestored", "oncopy",
    "oncuechange", "oncut", "ondblclick", "ondrag", "ondragend", "ondragenter",
    "ondragleave", "ondragover", "ondragstart", "ondrop", "ondurationchange",
    "onemptied", "onended", "onerror", "onfocus", "onfocusin", "onfocusout",
    "onformdata", "onhashchange", "oninput", "oninvalid", "onkeydown",
    "onkeypress", "onkeyup", "onload", "onloadeddata", "onloadedmetadata",
    "onloadstart", "onmessage", "onmousedown", "onmouseenter", "onmouseleave",
    "onmousemove", "onmouseout", "onmouseover", "onmouseup", "onpaste",
    "onpause", "onplay", "onplaying", "onpointercancel", "onpointerdown",
    "onpointerenter", "onpointerleave", "onpointermove", "onpointerout",
    "onpointerover", "onpointerup", "onprogress", "onratechange", "onreset",
    "onresize", "onscroll", "onscrollend", "onsecuritypolicyviolation",
    "onseeked", "onseeking", "onselect", "onslotchange", "onstalled",
    "onsubmit", "onsuspend", "ontimeupdate", "ontoggle", "ontouchcancel",
    "ontouchend", "ontouchmove", "ontouchstart", "ontransitioncancel",
    "ontransitionend", "ontransitionrun", "ontransitionstart",
    "onvolumechange", "onwaiting", "onwheel",
];

fn is_camel_case_handler(key: &str) -> bool {
    key.starts_with("on") && key[2..].starts_with(|c: char| c.is_ascii_uppercase())
}

// https://html.spec.whatwg.org/multipage/syntax.html#attributes-2
fn is_valid_attribute_name(name: &str) -> bool {
    !name.is_empty()
        && !name.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '"' | '\'' | '>' | '/' | '=' | '<' | '&')
        })
}
