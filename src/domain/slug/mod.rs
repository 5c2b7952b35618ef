pub mod engine;
pub mod events;
pub mod field_config;
pub mod locale;
pub mod record;
pub mod resolver;
pub mod store;
pub mod value_objects;

pub use engine::{SlugEngine, SlugOutcome};
pub use events::SlugObserver;
pub use field_config::{ReservedSlugs, SlugFieldConfig, SlugSource, SluggableConfig};
pub use record::{SluggableRecord, TranslatableAttributes, Translations};
pub use resolver::UniquenessResolver;
pub use store::{SimilarSlugQuery, SlugStore};
pub use value_objects::{RecordId, Slug};
