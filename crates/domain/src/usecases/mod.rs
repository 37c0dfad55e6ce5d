//! Application use cases / business logic

pub mod compose;
pub mod pipeline;
pub mod profile;
pub mod publish;

pub use compose::{MAX_POST_CHARS, TITLE_BUDGET, compose};
pub use pipeline::{Pipeline, PipelineConfig};
pub use profile::{ProfileAggregator, RECENT_POSTS_LIMIT};
pub use publish::{PublishError, Publisher};
