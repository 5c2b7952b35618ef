use std::sync::Arc;

mod support;

use sluggable_core::config::SlugSettings;
use sluggable_core::domain::errors::DomainError;
use sluggable_core::domain::slug::engine::{SlugEngine, SlugOutcome};
use sluggable_core::domain::slug::field_config::{
    ReservedSlugs, SlugFieldConfig, SlugSource, SluggableConfig,
};
use sluggable_core::domain::slug::record::SluggableRecord;
use sluggable_core::infrastructure::stores::InMemorySlugStore;
use sluggable_core::infrastructure::util::DefaultSlugifier;

use support::mocks::observers::{RecordingObserver, VetoObserver};
use support::mocks::records::Post;
use support::mocks::slugifier::PassthroughSlugifier;

fn engine(store: Arc<InMemorySlugStore>) -> SlugEngine {
    SlugEngine::new(store, Arc::new(DefaultSlugifier), SlugSettings::new())
}

fn title_config() -> SlugFieldConfig {
    SlugFieldConfig::new("title")
}

fn single_field(config: SlugFieldConfig) -> SluggableConfig {
    SluggableConfig::new().field("slug", config)
}

#[tokio::test]
async fn derives_slug_from_source_attribute() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::new(single_field(title_config())).with_attribute("title", "Hello World");

    let outcome = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert!(matches!(outcome, SlugOutcome::Set(slug) if slug.as_str() == "hello-world"));
    assert_eq!(post.attribute("slug").as_deref(), Some("hello-world"));
}

#[tokio::test]
async fn collisions_get_a_numeric_suffix() {
    let store = Arc::new(InMemorySlugStore::new());
    store.insert("posts", "slug", "hello-world", None);
    let engine = engine(store);
    let mut post = Post::new(single_field(title_config())).with_attribute("title", "Hello World");

    engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("hello-world-1"));
}

#[tokio::test]
async fn existing_slug_is_kept_on_update_by_default() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::persisted("5", single_field(title_config()))
        .with_attribute("title", "Changed Title")
        .with_attribute("slug", "hello-world");

    let outcome = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert!(matches!(outcome, SlugOutcome::Unchanged(slug) if slug.as_str() == "hello-world"));
    assert_eq!(post.attribute("slug").as_deref(), Some("hello-world"));
}

#[tokio::test]
async fn second_pass_is_idempotent() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::persisted("5", single_field(title_config()))
        .with_attribute("title", "Hello World");

    engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();
    let first = post.attribute("slug").unwrap();

    let outcome = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert!(matches!(outcome, SlugOutcome::Unchanged(_)));
    assert_eq!(post.attribute("slug").unwrap(), first);
}

#[tokio::test]
async fn on_update_reslugs_persisted_records() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = title_config().with_on_update(true);
    let mut post = Post::persisted("5", single_field(config.clone()))
        .with_attribute("title", "Changed Title")
        .with_attribute("slug", "hello-world");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("changed-title"));
}

#[tokio::test]
async fn unsaved_records_are_always_slugged() {
    // The skip check only applies to records that exist in the store.
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::new(single_field(title_config()))
        .with_attribute("title", "Hello World")
        .with_attribute("slug", "stale-value");

    engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("hello-world"));
}

#[tokio::test]
async fn force_overwrites_existing_slug() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::persisted("5", single_field(title_config()))
        .with_attribute("title", "Fresh Title")
        .with_attribute("slug", "hello-world");

    engine
        .slug_for(&mut post, "slug", &title_config(), true)
        .await
        .unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("fresh-title"));
}

#[tokio::test]
async fn list_sources_are_joined_with_the_separator() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = SlugFieldConfig::new(SlugSource::Attributes(vec![
        "first_name".into(),
        "last_name".into(),
    ]));
    let mut post = Post::new(single_field(config.clone()))
        .with_attribute("first_name", "Jane")
        .with_attribute("last_name", "Doe");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("jane-doe"));
}

#[tokio::test]
async fn missing_source_is_an_error() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::new(single_field(title_config()));

    let err = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MissingSource(_)));
    assert_eq!(post.attribute("slug"), None);
}

#[tokio::test]
async fn fallback_source_covers_an_empty_primary() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = title_config().with_source_fallback("username");
    let mut post = Post::new(single_field(config.clone())).with_attribute("username", "jdoe");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("jdoe"));
}

#[tokio::test]
async fn candidate_is_truncated_on_a_token_boundary() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = title_config().with_max_length(8);
    let mut post =
        Post::new(single_field(config.clone())).with_attribute("title", "Hello Wonderful World");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    // "hello-wonderful-world" cut back to the last whole token within 8.
    assert_eq!(post.attribute("slug").as_deref(), Some("hello"));
}

#[tokio::test]
async fn non_unique_fields_skip_resolution() {
    let store = Arc::new(InMemorySlugStore::new());
    store.insert("posts", "slug", "hello-world", None);
    let engine = engine(store);
    let config = title_config().with_unique(false);
    let mut post = Post::new(single_field(config.clone())).with_attribute("title", "Hello World");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("hello-world"));
}

#[tokio::test]
async fn reserved_candidate_is_a_forced_collision() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = title_config().with_reserved(ReservedSlugs::literals(["admin"]));
    let mut post = Post::new(single_field(config.clone())).with_attribute("title", "Admin");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("admin-1"));
}

#[tokio::test]
async fn per_field_method_overrides_the_default_slugifier() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let config = title_config().with_method(Arc::new(PassthroughSlugifier));
    let mut post = Post::new(single_field(config.clone())).with_attribute("title", "Kept Verbatim");

    engine.slug_for(&mut post, "slug", &config, false).await.unwrap();

    assert_eq!(post.attribute("slug").as_deref(), Some("Kept Verbatim"));
}

#[tokio::test]
async fn veto_cancels_the_pass_before_any_write() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store).with_observer(Arc::new(VetoObserver));
    let mut post = Post::new(single_field(title_config())).with_attribute("title", "Hello World");

    let outcome = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert_eq!(outcome, SlugOutcome::Vetoed);
    assert_eq!(post.attribute("slug"), None);
}

#[tokio::test]
async fn observers_see_slugging_then_slugged() {
    let store = Arc::new(InMemorySlugStore::new());
    store.insert("posts", "slug", "hello-world", None);
    let observer = Arc::new(RecordingObserver::new());
    let shared: Arc<dyn sluggable_core::domain::slug::events::SlugObserver> = observer.clone();
    let engine = engine(store).with_observer(shared);
    let mut post = Post::new(single_field(title_config())).with_attribute("title", "Hello World");

    engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap();

    assert_eq!(
        observer.recorded(),
        vec![
            "slugging:slug:hello-world".to_string(),
            "slugged:slug:hello-world-1".to_string(),
        ]
    );
}

#[tokio::test]
async fn unsluggable_source_text_is_reported_missing() {
    let store = Arc::new(InMemorySlugStore::new());
    let engine = engine(store);
    let mut post = Post::new(single_field(title_config())).with_attribute("title", "!!!");

    let err = engine
        .slug_for(&mut post, "slug", &title_config(), false)
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::MissingSource(_)));
}
