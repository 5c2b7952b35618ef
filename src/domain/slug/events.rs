use crate::domain::slug::record::SluggableRecord;

/// Hooks around one slug field's generation pass.
///
/// `slugging` fires after the candidate is derived but before uniqueness
/// resolution commits; returning `false` cancels the pass and leaves the
/// record unslugged. `slugged` fires after the final value is written back.
pub trait SlugObserver: Send + Sync {
    fn slugging(&self, record: &dyn SluggableRecord, field: &str, candidate: &str) -> bool {
        let _ = (record, field, candidate);
        true
    }

    fn slugged(&self, record: &dyn SluggableRecord, field: &str, slug: &str) {
        let _ = (record, field, slug);
    }
}
