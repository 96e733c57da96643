//! In-memory resume store.
//!
//! A record's identifier is its zero-based position in its collection at the
//! time of access. Removing record `i` shifts every later identifier down by
//! one. Only `Collection` knows this; handlers go through its methods and never
//! index the underlying vector themselves.

use std::sync::{Mutex, MutexGuard};

use crate::models::resume::{Education, Experience, Record, Skill};

/// Ordered records of one type, addressed by position.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn with_records(records: Vec<T>) -> Self {
        Self { records }
    }

    pub fn list(&self) -> &[T] {
        &self.records
    }

    /// Appends a record and returns its identifier (the new length minus one).
    pub fn push(&mut self, record: T) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn get(&self, id: i64) -> Option<&T> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Overwrites the record at `id` wholesale, returning the stored copy.
    pub fn replace(&mut self, id: i64, record: T) -> Option<&T> {
        let i = self.position(id)?;
        self.records[i] = record;
        Some(&self.records[i])
    }

    pub fn remove(&mut self, id: i64) -> Option<T> {
        self.position(id).map(|i| self.records.remove(i))
    }

    fn position(&self, id: i64) -> Option<usize> {
        usize::try_from(id).ok().filter(|&i| i < self.records.len())
    }
}

/// Owns the three resume collections. Shared through `AppState` behind an `Arc`.
///
/// Each collection has its own lock; guards are short-lived and never held
/// across an `.await`.
#[derive(Debug, Default)]
pub struct ResumeStore {
    experience: Mutex<Collection<Experience>>,
    education: Mutex<Collection<Education>>,
    skill: Mutex<Collection<Skill>>,
}

impl ResumeStore {
    /// Store holding one example record per section.
    pub fn seeded() -> Self {
        Self {
            experience: Mutex::new(Collection::with_records(vec![Experience {
                title: "Software Developer".to_string(),
                company: "A Cool Company".to_string(),
                start_date: "October 2022".to_string(),
                end_date: "Present".to_string(),
                description: "Writing Python Code".to_string(),
                logo: "example-logo.png".to_string(),
            }])),
            education: Mutex::new(Collection::with_records(vec![Education {
                course: "Computer Science".to_string(),
                school: "University of Tech".to_string(),
                start_date: "September 2019".to_string(),
                end_date: "July 2022".to_string(),
                grade: "80%".to_string(),
                logo: "example-logo.png".to_string(),
            }])),
            skill: Mutex::new(Collection::with_records(vec![Skill {
                name: "Python".to_string(),
                proficiency: "1-2 Years".to_string(),
                logo: "example-logo.png".to_string(),
            }])),
        }
    }

    /// Copies every collection, taking each lock only for the copy.
    pub fn snapshot(&self) -> ResumeSnapshot {
        ResumeSnapshot {
            experience: self.section::<Experience>().list().to_vec(),
            education: self.section::<Education>().list().to_vec(),
            skill: self.section::<Skill>().list().to_vec(),
        }
    }

    /// Locks the collection for record type `T`.
    pub fn section<T: Section>(&self) -> MutexGuard<'_, Collection<T>> {
        // A panic while holding the guard cannot leave a Vec half-mutated, so a
        // poisoned lock is still safe to use.
        T::collection(self)
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Point-in-time copy of the store for read-only passes that must not hold locks.
#[derive(Debug, Clone, Default)]
pub struct ResumeSnapshot {
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skill: Vec<Skill>,
}

/// Maps a record type to its collection inside `ResumeStore`.
pub trait Section: Record {
    fn collection(store: &ResumeStore) -> &Mutex<Collection<Self>>;
}

impl Section for Experience {
    fn collection(store: &ResumeStore) -> &Mutex<Collection<Self>> {
        &store.experience
    }
}

impl Section for Education {
    fn collection(store: &ResumeStore) -> &Mutex<Collection<Self>> {
        &store.education
    }
}

impl Section for Skill {
    fn collection(store: &ResumeStore) -> &Mutex<Collection<Self>> {
        &store.skill
    }
}
