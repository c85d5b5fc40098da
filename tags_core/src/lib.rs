#![forbid(unsafe_code)]

//! Markup for the "tags" component: a list of labels, each rendered as an
//! anchor, inside a container that has an optional dark variant.

mod error;
pub mod attributes;
pub mod model;
pub mod props;
pub mod render;

pub use attributes::{AttrValue, Attributes};
pub use error::{Component, TagsError};
pub use model::{
    LinkFallback, TagDescriptor, TagList, CONTAINER_CLASS, DARK_CLASS, PLACEHOLDER_LINK,
};
pub use props::Validation;
pub use render::{tag_item, tag_list};
