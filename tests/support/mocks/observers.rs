// tests/support/mocks/observers.rs
use std::sync::Mutex;

use sluggable_core::domain::slug::events::SlugObserver;
use sluggable_core::domain::slug::record::SluggableRecord;

/// すべてのスラグ生成を拒否するオブザーバ
pub struct VetoObserver;

impl SlugObserver for VetoObserver {
    fn slugging(&self, _record: &dyn SluggableRecord, _field: &str, _candidate: &str) -> bool {
        false
    }
}

/// 通知を記録するオブザーバ
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recorded(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl SlugObserver for RecordingObserver {
    fn slugging(&self, _record: &dyn SluggableRecord, field: &str, candidate: &str) -> bool {
        self.events
            .lock()
            .unwrap()
            .push(format!("slugging:{field}:{candidate}"));
        true
    }

    fn slugged(&self, _record: &dyn SluggableRecord, field: &str, slug: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("slugged:{field}:{slug}"));
    }
}
