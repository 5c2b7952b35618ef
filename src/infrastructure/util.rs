use crate::application::ports::util::Slugifier;
use slug::slugify;

/// Default slugifier backed by the `slug` crate. The crate always joins
/// tokens with `-`, so other separators are rewritten after the fact.
#[derive(Default, Clone)]
pub struct DefaultSlugifier;

impl Slugifier for DefaultSlugifier {
    fn slugify(&self, input: &str, separator: &str) -> String {
        let normalized = slugify(input);
        if separator == "-" {
            normalized
        } else {
            normalized.replace('-', separator)
        }
    }
}
