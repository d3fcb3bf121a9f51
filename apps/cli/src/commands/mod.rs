pub mod captions;
pub mod decode;
pub mod encode;
pub mod fill;
pub mod prompt;
pub mod templates;
