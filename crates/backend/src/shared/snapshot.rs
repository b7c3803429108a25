//! Снимок коллекций, полученных от внешнего сервиса.
//!
//! Запрос берёт `Arc<Snapshot>` и работает с неизменяемой копией до конца.
//! Изменения не сливаются: после подтверждённого ответа сервиса список
//! заменяется целиком.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use contracts::domain::a001_document::aggregate::DocumentRecord;
use contracts::domain::a002_staff::aggregate::StaffRecord;
use contracts::shared::activity_log::ActivityLogEntry;

use super::remote::InitialBundle;

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub documents: Vec<DocumentRecord>,
    pub staff: Vec<StaffRecord>,
    pub recent_activity: Vec<ActivityLogEntry>,
    /// Время последней замены любого из списков; `None` — данных ещё не было
    pub updated_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn find_document(&self, doc_number: &str) -> Option<&DocumentRecord> {
        self.documents.iter().find(|d| d.doc_number == doc_number)
    }
}

#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Arc<Snapshot> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&*guard)
    }

    /// Заменить все три списка (начальная загрузка, обновление)
    pub fn replace_all(&self, bundle: InitialBundle) -> Arc<Snapshot> {
        let next = Arc::new(Snapshot {
            documents: dedupe_documents(bundle.documents),
            staff: bundle.staff,
            recent_activity: bundle.recent_activity,
            updated_at: Some(Utc::now()),
        });
        self.swap(|_| Arc::clone(&next));
        next
    }

    pub fn replace_documents(&self, documents: Vec<DocumentRecord>) -> Arc<Snapshot> {
        let documents = dedupe_documents(documents);
        self.swap(move |prev| {
            Arc::new(Snapshot {
                documents,
                staff: prev.staff.clone(),
                recent_activity: prev.recent_activity.clone(),
                updated_at: Some(Utc::now()),
            })
        })
    }

    pub fn replace_staff(&self, staff: Vec<StaffRecord>) -> Arc<Snapshot> {
        self.swap(move |prev| {
            Arc::new(Snapshot {
                documents: prev.documents.clone(),
                staff,
                recent_activity: prev.recent_activity.clone(),
                updated_at: Some(Utc::now()),
            })
        })
    }

    // Следующий снимок строится из предыдущего под блокировкой записи
    fn swap(&self, build: impl FnOnce(&Snapshot) -> Arc<Snapshot>) -> Arc<Snapshot> {
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        let next = build(&guard);
        *guard = Arc::clone(&next);
        next
    }
}

/// Оставить первое вхождение каждого номера документа.
///
/// Повторы означают нарушение уникальности на стороне таблицы; о них
/// пишется предупреждение. Документы без номера не сравниваются между собой.
pub fn dedupe_documents(documents: Vec<DocumentRecord>) -> Vec<DocumentRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(documents.len());
    let mut result = Vec::with_capacity(documents.len());
    let mut unnumbered = 0usize;

    for doc in documents {
        if doc.doc_number.is_empty() {
            unnumbered += 1;
            result.push(doc);
            continue;
        }
        if seen.insert(doc.doc_number.clone()) {
            result.push(doc);
        } else {
            tracing::warn!(
                "Duplicate doc_number '{}' in external data, keeping first occurrence",
                doc.doc_number
            );
        }
    }

    if unnumbered > 0 {
        tracing::warn!("{} document(s) without doc_number in external data", unnumbered);
    }
    result
}
