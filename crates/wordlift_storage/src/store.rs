//! Entity storage.
//!
//! The `EntityStore` keeps entity records keyed by post id, with an index
//! from every URI an entity is known by (canonical and `same_as`) to its
//! post. Both maps are persistent, so cloning a store for a read-only
//! snapshot is cheap.

use im::{HashMap, OrdMap};
use tracing::debug;
use wordlift_foundation::{EntityRecord, EntityResolver, Error, ErrorKind, Result};

use crate::query::TitleQuery;

/// In-memory store of entity records.
#[derive(Debug, Clone, Default)]
pub struct EntityStore {
    /// Records by post id.
    entities: OrdMap<u64, EntityRecord>,
    /// Post id by every URI an entity is known by.
    by_uri: HashMap<String, u64>,
    /// Next post id handed out to records without one.
    next_post_id: u64,
}

impl EntityStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entities: OrdMap::new(),
            by_uri: HashMap::new(),
            next_post_id: 1,
        }
    }

    /// Creates an entity with the given URI and title, returning its record.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity is already known by `uri`.
    pub fn create(&mut self, uri: impl Into<String>, title: impl Into<String>) -> Result<EntityRecord> {
        let post_id = self.insert(EntityRecord::new(uri, title))?;
        self.get_by_post_id(post_id).cloned().ok_or_else(|| {
            Error::new(ErrorKind::Internal(format!(
                "entity {post_id} missing after insertion"
            )))
        })
    }

    /// Inserts a record, returning its post id.
    ///
    /// A record with post id `0` is assigned the next free id.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the record's URIs, or its post id, is
    /// already taken.
    pub fn insert(&mut self, mut record: EntityRecord) -> Result<u64> {
        if let Some(uri) = known_uris(&record).find(|uri| self.by_uri.contains_key(*uri)) {
            return Err(Error::duplicate_entity(uri));
        }
        if record.post_id == 0 {
            record.post_id = self.next_post_id.max(1);
        } else if self.entities.contains_key(&record.post_id) {
            return Err(Error::duplicate_entity(format!("post {}", record.post_id)));
        }

        let post_id = record.post_id;
        for uri in known_uris(&record) {
            self.by_uri.insert(uri.to_string(), post_id);
        }
        self.next_post_id = self.next_post_id.max(post_id + 1);
        debug!(uri = %record.uri, post_id, "entity inserted");
        self.entities.insert(post_id, record);
        Ok(post_id)
    }

    /// Inserts a record, replacing the entity with the same canonical URI.
    ///
    /// The replaced entity keeps its post id unless the new record sets one.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the record's other URIs belongs to a
    /// different entity.
    pub fn upsert(&mut self, mut record: EntityRecord) -> Result<u64> {
        let Some(existing) = self.get_by_uri(&record.uri).cloned() else {
            return self.insert(record);
        };
        if record.post_id == 0 {
            record.post_id = existing.post_id;
        }
        self.remove(&existing.uri)?;
        match self.insert(record) {
            Ok(post_id) => Ok(post_id),
            Err(err) => {
                // Restore the previous record; its URIs were just freed.
                self.insert(existing)?;
                Err(err)
            }
        }
    }

    /// Removes the entity known by `uri`, returning its record.
    ///
    /// # Errors
    ///
    /// Returns an error if no entity is known by `uri`.
    pub fn remove(&mut self, uri: &str) -> Result<EntityRecord> {
        let post_id = *self
            .by_uri
            .get(uri)
            .ok_or_else(|| Error::entity_not_found(uri))?;
        let record = self
            .entities
            .remove(&post_id)
            .ok_or_else(|| Error::entity_not_found(uri))?;
        for known in known_uris(&record) {
            self.by_uri.remove(known);
        }
        debug!(uri = %record.uri, post_id, "entity removed");
        Ok(record)
    }

    /// Returns the entity known by `uri`, canonically or through `same_as`.
    #[must_use]
    pub fn get_by_uri(&self, uri: &str) -> Option<&EntityRecord> {
        self.by_uri
            .get(uri)
            .and_then(|post_id| self.entities.get(post_id))
    }

    /// Returns the entity with the given post id.
    #[must_use]
    pub fn get_by_post_id(&self, post_id: u64) -> Option<&EntityRecord> {
        self.entities.get(&post_id)
    }

    /// Finds entities by title, ordered by post id.
    ///
    /// See [`TitleQuery`] for the matching options.
    #[must_use]
    pub fn find_by_title(&self, title: &str, query: TitleQuery) -> Vec<&EntityRecord> {
        let pattern = query.pattern(title);
        self.entities
            .values()
            .filter(|record| {
                pattern.matches(&record.title)
                    || (query.include_aliases
                        && record
                            .alternative_labels
                            .iter()
                            .any(|label| pattern.matches(label)))
            })
            .collect()
    }

    /// Replaces the alternative labels of the entity known by `uri`.
    ///
    /// Labels are trimmed; blank labels and case-insensitive duplicates are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if no entity is known by `uri`.
    pub fn set_alternative_labels<I, S>(&mut self, uri: &str, labels: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let post_id = *self
            .by_uri
            .get(uri)
            .ok_or_else(|| Error::entity_not_found(uri))?;
        let record = self
            .entities
            .get_mut(&post_id)
            .ok_or_else(|| Error::entity_not_found(uri))?;

        let mut cleaned: Vec<String> = Vec::new();
        for label in labels {
            let label: String = label.into();
            let label = label.trim();
            if label.is_empty() || cleaned.iter().any(|l| l.eq_ignore_ascii_case(label)) {
                continue;
            }
            cleaned.push(label.to_string());
        }
        record.alternative_labels = cleaned;
        Ok(())
    }

    /// Returns the alternative labels of the entity known by `uri`.
    ///
    /// # Errors
    ///
    /// Returns an error if no entity is known by `uri`.
    pub fn alternative_labels(&self, uri: &str) -> Result<&[String]> {
        self.get_by_uri(uri)
            .map(|record| record.alternative_labels.as_slice())
            .ok_or_else(|| Error::entity_not_found(uri))
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns true if the store holds no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all entities in post id order.
    pub fn iter(&self) -> impl Iterator<Item = &EntityRecord> + '_ {
        self.entities.values()
    }
}

impl EntityResolver for EntityStore {
    fn resolve(&self, uri: &str) -> Result<Option<EntityRecord>> {
        Ok(self.get_by_uri(uri).cloned())
    }
}

impl FromIterator<EntityRecord> for EntityStore {
    /// Collects records into a store; later records replace earlier ones
    /// with the same canonical URI.
    fn from_iter<T: IntoIterator<Item = EntityRecord>>(iter: T) -> Self {
        let mut store = Self::new();
        for record in iter {
            let uri = record.uri.clone();
            if let Err(err) = store.upsert(record) {
                debug!(%uri, %err, "skipping conflicting entity");
            }
        }
        store
    }
}

/// URIs a record is known by.
fn known_uris(record: &EntityRecord) -> impl Iterator<Item = &str> {
    std::iter::once(record.uri.as_str()).chain(record.same_as.iter().map(String::as_str))
}
