use crate::error::{AddressError, StoreError};
use crate::model::{
    AddressPatch, AddressSummary, DeliveryAddress, NewAddressRecord, NewDeliveryAddress,
};
use crate::store::AddressStore;
use crate::validation::{validate_new, validate_patch};
use log::{error, info};

/// Business rules over an [`AddressStore`] for one authenticated customer.
///
/// Every operation leaves the customer with at most one default address.
/// `add` and `update` clear the previous default before flagging the new one;
/// `set_default` is a single store call. A failure half-way is not rolled
/// back: a promotion that succeeded before a failed delete stays in place.
pub struct AddressService<'a, S: AddressStore + ?Sized> {
    store: &'a S,
    customer_id: &'a str,
}

impl<'a, S: AddressStore + ?Sized> AddressService<'a, S> {
    pub fn new(store: &'a S, customer_id: &'a str) -> Self {
        Self { store, customer_id }
    }

    pub fn list(&self) -> Result<Vec<AddressSummary>, AddressError> {
        let records = self
            .store
            .list_by_customer(self.customer_id)
            .map_err(|e| self.storage_failure("list", e.into()))?;

        Ok(records.iter().map(AddressSummary::from).collect())
    }

    pub fn get(&self, address_id: &str) -> Result<AddressSummary, AddressError> {
        self.lookup(address_id).map(AddressSummary::from)
    }

    pub fn get_default(&self) -> Result<AddressSummary, AddressError> {
        self.store
            .find_default(self.customer_id)
            .map_err(|e| self.storage_failure("get default", e.into()))?
            .map(AddressSummary::from)
            .ok_or(AddressError::NoDefault)
    }

    pub fn add(&self, request: NewDeliveryAddress) -> Result<AddressSummary, AddressError> {
        let fields = validate_new(&request)?;
        let is_default = request.is_default.unwrap_or(false);

        info!(
            "Adding address for customer {} (default: {})",
            self.customer_id, is_default
        );

        self.run("add", || {
            if is_default {
                self.store.clear_default_for_customer(self.customer_id, None)?;
            }

            let created = self.store.insert(NewAddressRecord {
                customer_id: self.customer_id.to_string(),
                fields,
                is_default,
            })?;

            Ok(created.summary())
        })
    }

    pub fn update(
        &self,
        address_id: &str,
        patch: AddressPatch,
    ) -> Result<AddressSummary, AddressError> {
        let mut record = self.lookup(address_id)?;
        validate_patch(&patch)?;

        info!(
            "Updating address {} for customer {}",
            address_id, self.customer_id
        );

        self.run("update", || {
            if patch.is_default == Some(true) {
                self.store
                    .clear_default_for_customer(self.customer_id, Some(address_id))?;
            }

            patch.apply_to(&mut record.fields);
            if let Some(is_default) = patch.is_default {
                record.is_default = is_default;
            }

            Ok(self.store.update(&record)?.summary())
        })
    }

    pub fn delete(&self, address_id: &str) -> Result<(), AddressError> {
        let record = self.lookup(address_id)?;

        info!(
            "Deleting address {} for customer {}",
            address_id, self.customer_id
        );

        self.run("delete", || {
            if record.is_default {
                if let Some(successor) =
                    self.store.find_one_other_than(self.customer_id, address_id)?
                {
                    info!(
                        "Promoting address {} to default for customer {}",
                        successor.id, self.customer_id
                    );
                    // Unsets the target too, so a failed delete below still
                    // leaves a single default.
                    self.store
                        .set_exclusive_default(self.customer_id, &successor.id)?;
                }
            }

            self.store.delete(self.customer_id, address_id)?;
            Ok(())
        })
    }

    pub fn set_default(&self, address_id: &str) -> Result<AddressSummary, AddressError> {
        self.lookup(address_id)?;

        info!(
            "Setting address {} as default for customer {}",
            address_id, self.customer_id
        );

        self.run("set default", || {
            Ok(self
                .store
                .set_exclusive_default(self.customer_id, address_id)?
                .summary())
        })
    }

    fn lookup(&self, address_id: &str) -> Result<DeliveryAddress, AddressError> {
        self.store
            .find_by_id(self.customer_id, address_id)
            .map_err(|e| self.storage_failure("lookup", e.into()))?
            .ok_or_else(|| AddressError::NotFound(address_id.to_string()))
    }

    fn run<T>(
        &self,
        operation: &str,
        f: impl FnOnce() -> Result<T, StoreError>,
    ) -> Result<T, AddressError> {
        f().map_err(|e| self.storage_failure(operation, e.into()))
    }

    fn storage_failure(&self, operation: &str, e: AddressError) -> AddressError {
        if let AddressError::Storage(detail) = &e {
            error!(
                "Address {} failed for customer {}: {}",
                operation, self.customer_id, detail
            );
        }
        e
    }
}
