mod error;
mod fragment;
mod record;
mod token;

pub use error::*;
pub use fragment::{STORY_FRAGMENT_KEY, ShareLink, VIDEO_FRAGMENT_KEY};
pub use record::{FieldValue, LinkRecord, StoryRecord, TEMPLATE_KEY};
pub use token::{Record, decode, encode};
