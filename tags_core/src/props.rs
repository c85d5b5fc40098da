//! Building tags from the plain structured data a host page hands over.
//!
//! The data has the same shape as the component props a page would pass. A tag
//! is `{ "text": .., "link": .., "li": {..}, "key": .., ...rest }` and a list is
//! `{ "tags": [..], "dark": .., "className": .., ...rest }`, where `rest` is
//! forwarded onto the anchor (for a tag) or the container (for a list).

use log::{debug, warn};
use serde_json::{Map, Value};

use crate::{
    attributes::{html_attribute_name, is_event_handler, AttrValue, Attributes},
    error::{Component, TagsError},
    model::{TagDescriptor, TagList},
};

/// What to do when the props break their contract.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Validation {
    /// Every violation is returned to the caller.
    Strict,
    /// The offending prop is treated as absent and a warning is logged. Tags
    /// without usable text are skipped.
    Lenient,
}

impl Default for Validation {
    /// Returns Validation::Strict in debug builds and Validation::Lenient in
    /// release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

impl TagDescriptor {
    /// Builds a single tag from JSON text.
    pub fn from_json(json: &str, validation: Validation) -> Result<Self, TagsError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value, validation)
    }

    /// Builds a single tag from an already parsed JSON value. A missing or
    /// empty `text` is an error even in lenient mode, there is nothing to
    /// render without it.
    pub fn from_json_value(value: Value, validation: Validation) -> Result<Self, TagsError> {
        parse_tag(Component::TagItem, String::new(), value, validation)
    }
}

impl TagList {
    /// Builds a tag list from JSON text.
    pub fn from_json(json: &str, validation: Validation) -> Result<Self, TagsError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value, validation)
    }

    /// Builds a tag list from an already parsed JSON value.
    pub fn from_json_value(value: Value, validation: Validation) -> Result<Self, TagsError> {
        let mut props = match Props::new(Component::TagList, String::new(), value, validation) {
            Ok(props) => props,
            Err(err) if validation == Validation::Lenient => {
                warn!("{err}, rendering an empty tag list");
                return Ok(TagList::default());
            }
            Err(err) => return Err(err),
        };

        let values = match props.data.remove("tags") {
            Some(Value::Array(values)) => values,
            None | Some(Value::Null) => props
                .tolerate(TagsError::missing(Component::TagList, "tags"))?
                .unwrap_or_default(),
            Some(other) => {
                let err = props.wrong_shape("tags", "an array", &other);
                props.tolerate(err)?.unwrap_or_default()
            }
        };

        let mut tags = Vec::with_capacity(values.len());
        for (index, value) in values.into_iter().enumerate() {
            match parse_tag(Component::TagList, format!("tags[{index}]"), value, validation) {
                Ok(tag) => tags.push(tag),
                Err(err) => {
                    props.tolerate::<()>(err)?;
                }
            }
        }

        let mut list = TagList::new(tags);
        if let Some(dark) = props.take_bool("dark")? {
            list = list.dark(dark);
        }
        if let Some(class_name) = props.take_string("className")? {
            list = list.with_class(class_name);
        }
        list.set_attributes(props.into_attributes()?);

        debug!(
            "Built tag list with {} tags and {} container attributes",
            list.tags().len(),
            list.attributes().len()
        );
        Ok(list)
    }
}

fn parse_tag(
    component: Component,
    path: String,
    value: Value,
    validation: Validation,
) -> Result<TagDescriptor, TagsError> {
    let mut props = Props::new(component, path, value, validation)?;

    let text = match props.take_string("text")? {
        Some(text) if text.is_empty() => {
            return Err(TagsError::empty(component, props.prop("text")));
        }
        Some(text) => text,
        None => return Err(TagsError::missing(component, props.prop("text"))),
    };

    let mut tag = TagDescriptor::new(text)?;
    if let Some(link) = props.take_string("link")? {
        tag = tag.with_link(link);
    }
    if let Some(key) = props.take_key("key")? {
        tag = tag.with_key(key);
    }
    if let Some(li) = props.take_object("li")? {
        let li = Props::new(component, props.prop("li"), Value::Object(li), validation)?;
        tag.set_li_attributes(li.into_attributes()?);
    }
    tag.set_attributes(props.into_attributes()?);

    Ok(tag)
}

/// The props of one component instance held as name=value pairs. Named props
/// are removed as they are consumed, whatever is left at the end is converted
/// into pass-through attributes.
#[derive(Debug)]
struct Props {
    component: Component,
    path: String,
    data: Map<String, Value>,
    validation: Validation,
}

impl Props {
    fn new(
        component: Component,
        path: String,
        value: Value,
        validation: Validation,
    ) -> Result<Self, TagsError> {
        match value {
            Value::Object(data) => Ok(Self {
                component,
                path,
                data,
                validation,
            }),
            other => Err(TagsError::WrongShape {
                component,
                prop: if path.is_empty() { "props".to_string() } else { path },
                expected: "an object",
                found: kind(&other),
            }),
        }
    }

    /// The full name of a prop, as used in error messages.
    fn prop(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_string()
        } else {
            format!("{}.{key}", self.path)
        }
    }

    fn wrong_shape(&self, key: &str, expected: &'static str, found: &Value) -> TagsError {
        TagsError::WrongShape {
            component: self.component,
            prop: self.prop(key),
            expected,
            found: kind(found),
        }
    }

    /// In strict mode returns the error, in lenient mode logs it and carries
    /// on as if the prop had not been supplied.
    fn tolerate<T>(&self, err: TagsError) -> Result<Option<T>, TagsError> {
        match self.validation {
            Validation::Strict => Err(err),
            Validation::Lenient => {
                warn!("{err}, ignoring it");
                Ok(None)
            }
        }
    }

    fn take_string(&mut self, key: &str) -> Result<Option<String>, TagsError> {
        match self.data.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(other) => self.tolerate(self.wrong_shape(key, "a string", &other)),
        }
    }

    fn take_bool(&mut self, key: &str) -> Result<Option<bool>, TagsError> {
        match self.data.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(b)),
            Some(other) => self.tolerate(self.wrong_shape(key, "a boolean", &other)),
        }
    }

    /// Keys may be given as strings or numbers.
    fn take_key(&mut self, key: &str) -> Result<Option<String>, TagsError> {
        match self.data.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(Value::Number(n)) => Ok(Some(n.to_string())),
            Some(other) => self.tolerate(self.wrong_shape(key, "a string or number", &other)),
        }
    }

    fn take_object(&mut self, key: &str) -> Result<Option<Map<String, Value>>, TagsError> {
        match self.data.remove(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Object(map)) => Ok(Some(map)),
            Some(other) => self.tolerate(self.wrong_shape(key, "an object", &other)),
        }
    }

    /// Converts every prop not consumed yet into attributes and consumes Self.
    fn into_attributes(mut self) -> Result<Attributes, TagsError> {
        let mut attributes = Attributes::new();

        for (key, value) in std::mem::take(&mut self.data) {
            let name = match html_attribute_name(&key) {
                Ok(name) => name,
                Err(err) => {
                    self.tolerate::<()>(err)?;
                    continue;
                }
            };

            let value = match value {
                Value::Null => continue,
                // A class list made of a bare flag has nothing to add.
                Value::Bool(b) if name == "class" => {
                    let err = self.wrong_shape(&key, "a string or number", &Value::Bool(b));
                    self.tolerate::<()>(err)?;
                    continue;
                }
                Value::Bool(b) => AttrValue::Flag(b),
                Value::String(s) if is_event_handler(&name) => AttrValue::Script(s),
                Value::String(s) => AttrValue::Text(s),
                Value::Number(n) => AttrValue::from(&n),
                other => {
                    let err = self.wrong_shape(&key, "a string, number or boolean", &other);
                    self.tolerate::<()>(err)?;
                    continue;
                }
            };

            attributes.insert_known(&name, value);
        }

        Ok(attributes)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
