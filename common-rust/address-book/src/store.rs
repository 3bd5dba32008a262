use crate::error::StoreError;
use crate::model::{DeliveryAddress, NewAddressRecord};
use chrono::Utc;
use log::debug;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use uuid::Uuid;

/// Persistence boundary for delivery addresses. Every lookup is scoped by
/// customer: a record owned by someone else is reported as absent.
pub trait AddressStore {
    /// Default first, then newest first.
    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<DeliveryAddress>, StoreError>;

    fn find_by_id(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<Option<DeliveryAddress>, StoreError>;

    /// Stores a new document, assigning its id and timestamps.
    fn insert(&self, record: NewAddressRecord) -> Result<DeliveryAddress, StoreError>;

    /// Persists `record` and refreshes `updated_at`.
    fn update(&self, record: &DeliveryAddress) -> Result<DeliveryAddress, StoreError>;

    fn delete(&self, customer_id: &str, address_id: &str) -> Result<(), StoreError>;

    /// Unsets the default flag on every record of the customer except
    /// `except_id`. Returns the number of records changed.
    fn clear_default_for_customer(
        &self,
        customer_id: &str,
        except_id: Option<&str>,
    ) -> Result<usize, StoreError>;

    /// Any other address of the customer; which one is unspecified.
    fn find_one_other_than(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<Option<DeliveryAddress>, StoreError>;

    fn find_default(&self, customer_id: &str) -> Result<Option<DeliveryAddress>, StoreError>;

    /// Makes `address_id` the only default of the customer in one step.
    fn set_exclusive_default(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<DeliveryAddress, StoreError>;
}

fn not_found(customer_id: &str, address_id: &str) -> StoreError {
    StoreError::NotFound {
        customer_id: customer_id.to_string(),
        address_id: address_id.to_string(),
    }
}

fn owned_by(record: &DeliveryAddress, customer_id: &str, address_id: &str) -> bool {
    record.customer_id == customer_id && record.id == address_id
}

/// Document collection kept in process memory, in insertion order. The lock
/// is the connection handle: each trait call holds it once, so bulk updates
/// are atomic with respect to other calls.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct InMemoryAddressStore {
    documents: RwLock<Vec<DeliveryAddress>>,
}

impl InMemoryAddressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl AddressStore for InMemoryAddressStore {
    fn list_by_customer(&self, customer_id: &str) -> Result<Vec<DeliveryAddress>, StoreError> {
        let documents = self.documents.read();

        // Reverse insertion order first so equal timestamps keep the newest on top.
        let mut result: Vec<DeliveryAddress> = documents
            .iter()
            .rev()
            .filter(|d| d.customer_id == customer_id)
            .cloned()
            .collect();

        result.sort_by_key(|d| (!d.is_default, Reverse(d.created_at)));

        Ok(result)
    }

    fn find_by_id(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<Option<DeliveryAddress>, StoreError> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| owned_by(d, customer_id, address_id))
            .cloned())
    }

    fn insert(&self, record: NewAddressRecord) -> Result<DeliveryAddress, StoreError> {
        let now = Utc::now();
        let document = DeliveryAddress {
            id: Uuid::new_v4().to_string(),
            customer_id: record.customer_id,
            fields: record.fields,
            is_default: record.is_default,
            created_at: now,
            updated_at: now,
        };

        debug!(
            "Inserting address {} for customer {} (default: {})",
            document.id, document.customer_id, document.is_default
        );

        self.documents.write().push(document.clone());

        Ok(document)
    }

    fn update(&self, record: &DeliveryAddress) -> Result<DeliveryAddress, StoreError> {
        let mut documents = self.documents.write();

        let document = documents
            .iter_mut()
            .find(|d| owned_by(d, &record.customer_id, &record.id))
            .ok_or_else(|| not_found(&record.customer_id, &record.id))?;

        debug!(
            "Updating address {} for customer {}",
            record.id, record.customer_id
        );

        document.fields = record.fields.clone();
        document.is_default = record.is_default;
        document.updated_at = Utc::now();

        Ok(document.clone())
    }

    fn delete(&self, customer_id: &str, address_id: &str) -> Result<(), StoreError> {
        let mut documents = self.documents.write();
        let before = documents.len();

        documents.retain(|d| !owned_by(d, customer_id, address_id));

        if documents.len() == before {
            Err(not_found(customer_id, address_id))
        } else {
            debug!("Deleted address {address_id} for customer {customer_id}");
            Ok(())
        }
    }

    fn clear_default_for_customer(
        &self,
        customer_id: &str,
        except_id: Option<&str>,
    ) -> Result<usize, StoreError> {
        let now = Utc::now();
        let mut cleared = 0;

        for document in self.documents.write().iter_mut() {
            if document.customer_id == customer_id
                && document.is_default
                && except_id != Some(document.id.as_str())
            {
                document.is_default = false;
                document.updated_at = now;
                cleared += 1;
            }
        }

        debug!("Cleared default flag on {cleared} addresses for customer {customer_id}");

        Ok(cleared)
    }

    fn find_one_other_than(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<Option<DeliveryAddress>, StoreError> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| d.customer_id == customer_id && d.id != address_id)
            .cloned())
    }

    fn find_default(&self, customer_id: &str) -> Result<Option<DeliveryAddress>, StoreError> {
        Ok(self
            .documents
            .read()
            .iter()
            .find(|d| d.customer_id == customer_id && d.is_default)
            .cloned())
    }

    fn set_exclusive_default(
        &self,
        customer_id: &str,
        address_id: &str,
    ) -> Result<DeliveryAddress, StoreError> {
        let mut documents = self.documents.write();

        if !documents.iter().any(|d| owned_by(d, customer_id, address_id)) {
            return Err(not_found(customer_id, address_id));
        }

        let now = Utc::now();
        let mut target = None;

        for document in documents.iter_mut().filter(|d| d.customer_id == customer_id) {
            let is_target = document.id == address_id;
            if document.is_default != is_target {
                document.is_default = is_target;
                document.updated_at = now;
            }
            if is_target {
                target = Some(document.clone());
            }
        }

        debug!("Address {address_id} is now the default for customer {customer_id}");

        target.ok_or_else(|| not_found(customer_id, address_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AddressFields;
    use pretty_assertions::assert_eq;

    fn record(customer_id: &str, street: &str, is_default: bool) -> NewAddressRecord {
        NewAddressRecord {
            customer_id: customer_id.to_string(),
            fields: AddressFields {
                recipient_name: "A".to_string(),
                recipient_mobile: "0912345678".to_string(),
                street: street.to_string(),
                barangay: "B".to_string(),
                municipality: "M".to_string(),
                province: "P".to_string(),
                zip_code: "1000".to_string(),
                latitude: None,
                longitude: None,
            },
            is_default,
        }
    }

    fn streets(records: &[DeliveryAddress]) -> Vec<&str> {
        records.iter().map(|r| r.fields.street.as_str()).collect()
    }

    #[test]
    fn insert_assigns_id_and_timestamps() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", false)).unwrap();
        let b = store.insert(record("c1", "2 Rd", false)).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(a.created_at, a.updated_at);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn lists_default_first_then_newest() {
        let store = InMemoryAddressStore::new();
        store.insert(record("c1", "1 Rd", false)).unwrap();
        store.insert(record("c1", "2 Rd", true)).unwrap();
        store.insert(record("c1", "3 Rd", false)).unwrap();
        store.insert(record("c2", "4 Rd", true)).unwrap();

        let listed = store.list_by_customer("c1").unwrap();

        assert_eq!(streets(&listed), vec!["2 Rd", "3 Rd", "1 Rd"]);
        assert!(store.list_by_customer("nobody").unwrap().is_empty());
    }

    #[test]
    fn lookups_are_scoped_by_customer() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", true)).unwrap();

        assert_eq!(store.find_by_id("c1", &a.id).unwrap(), Some(a.clone()));
        assert_eq!(store.find_by_id("c2", &a.id).unwrap(), None);
        assert_eq!(store.find_default("c2").unwrap(), None);
        assert_eq!(
            store.delete("c2", &a.id),
            Err(StoreError::NotFound {
                customer_id: "c2".to_string(),
                address_id: a.id.clone(),
            })
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_missing_record_fails() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", false)).unwrap();
        store.delete("c1", &a.id).unwrap();

        assert!(matches!(
            store.update(&a),
            Err(StoreError::NotFound { .. })
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn clear_default_respects_exception_and_customer() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", true)).unwrap();
        let b = store.insert(record("c1", "2 Rd", true)).unwrap();
        let other = store.insert(record("c2", "3 Rd", true)).unwrap();

        assert_eq!(store.clear_default_for_customer("c1", Some(&b.id)).unwrap(), 1);
        assert!(!store.find_by_id("c1", &a.id).unwrap().unwrap().is_default);
        assert!(store.find_by_id("c1", &b.id).unwrap().unwrap().is_default);
        assert!(store.find_by_id("c2", &other.id).unwrap().unwrap().is_default);

        assert_eq!(store.clear_default_for_customer("c1", None).unwrap(), 1);
        assert_eq!(store.find_default("c1").unwrap(), None);
    }

    #[test]
    fn find_one_other_than_skips_target() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", true)).unwrap();
        store.insert(record("c2", "2 Rd", false)).unwrap();

        assert_eq!(store.find_one_other_than("c1", &a.id).unwrap(), None);

        let b = store.insert(record("c1", "3 Rd", false)).unwrap();
        assert_eq!(store.find_one_other_than("c1", &a.id).unwrap(), Some(b));
    }

    #[test]
    fn set_exclusive_default_moves_the_flag() {
        let store = InMemoryAddressStore::new();
        let a = store.insert(record("c1", "1 Rd", true)).unwrap();
        let b = store.insert(record("c1", "2 Rd", false)).unwrap();

        let updated = store.set_exclusive_default("c1", &b.id).unwrap();

        assert!(updated.is_default);
        assert_eq!(store.find_default("c1").unwrap().map(|d| d.id), Some(b.id));
        assert!(!store.find_by_id("c1", &a.id).unwrap().unwrap().is_default);

        assert!(matches!(
            store.set_exclusive_default("c2", &a.id),
            Err(StoreError::NotFound { .. })
        ));
        assert!(!store.find_by_id("c1", &a.id).unwrap().unwrap().is_default);
    }

    #[test]
    fn round_trips_through_snapshot() {
        let store = InMemoryAddressStore::new();
        store.insert(record("c1", "1 Rd", true)).unwrap();
        store.insert(record("c1", "2 Rd", false)).unwrap();

        let snapshot = serde_json::to_vec(&store).unwrap();
        let restored: InMemoryAddressStore = serde_json::from_slice(&snapshot).unwrap();

        assert_eq!(
            restored.list_by_customer("c1").unwrap(),
            store.list_by_customer("c1").unwrap()
        );
    }
}
