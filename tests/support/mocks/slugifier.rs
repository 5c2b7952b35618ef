// tests/support/mocks/slugifier.rs
use sluggable_core::application::ports::util::Slugifier;

/// 入力をそのまま返すスラグ生成器
#[derive(Clone)]
pub struct PassthroughSlugifier;

impl Slugifier for PassthroughSlugifier {
    fn slugify(&self, input: &str, _separator: &str) -> String {
        input.to_string()
    }
}
