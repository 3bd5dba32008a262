use address_book::logger;
use address_book::{
    AckResponse, AddressHandler, AddressListResponse, AddressPatch, AddressResponse,
    InMemoryAddressStore, NewDeliveryAddress,
};
use golem_rust::{agent_definition, agent_implementation};

/// Delivery address book of one customer. The agent id is the customer id
/// resolved by the caller's authentication layer.
#[agent_definition]
trait DeliveryAddressAgent {
    fn new(id: String) -> Self;

    fn list_addresses(&self) -> AddressListResponse;
    fn get_address(&self, address_id: String) -> AddressResponse;
    fn get_default_address(&self) -> AddressResponse;
    fn add_address(&mut self, request: NewDeliveryAddress) -> AddressResponse;
    fn update_address(&mut self, address_id: String, patch: AddressPatch) -> AddressResponse;
    fn delete_address(&mut self, address_id: String) -> AckResponse;
    fn set_default_address(&mut self, address_id: String) -> AddressResponse;
}

struct DeliveryAddressAgentImpl {
    _id: String,
    store: InMemoryAddressStore,
}

impl DeliveryAddressAgentImpl {
    fn handler(&self) -> AddressHandler<'_, InMemoryAddressStore> {
        AddressHandler::new(&self.store, &self._id)
    }
}

#[agent_implementation]
impl DeliveryAddressAgent for DeliveryAddressAgentImpl {
    fn new(id: String) -> Self {
        // Errs when another agent in this instance already installed it.
        let _ = logger::init(logger::env_level().unwrap_or(logger::DEFAULT_LEVEL));

        DeliveryAddressAgentImpl {
            _id: id,
            store: InMemoryAddressStore::new(),
        }
    }

    fn list_addresses(&self) -> AddressListResponse {
        println!("Listing addresses of customer {}", self._id);
        self.handler().list()
    }

    fn get_address(&self, address_id: String) -> AddressResponse {
        println!("Getting address {} of customer {}", address_id, self._id);
        self.handler().get(&address_id)
    }

    fn get_default_address(&self) -> AddressResponse {
        println!("Getting default address of customer {}", self._id);
        self.handler().get_default()
    }

    fn add_address(&mut self, request: NewDeliveryAddress) -> AddressResponse {
        println!(
            "Adding address for customer {} (default: {})",
            self._id,
            request.is_default.unwrap_or(false)
        );
        let response = self.handler().add(request);
        if let Some(address) = &response.data {
            println!("Added address {} for customer {}", address.id, self._id);
        }
        response
    }

    fn update_address(&mut self, address_id: String, patch: AddressPatch) -> AddressResponse {
        println!("Updating address {} of customer {}", address_id, self._id);
        self.handler().update(&address_id, patch)
    }

    fn delete_address(&mut self, address_id: String) -> AckResponse {
        println!("Deleting address {} of customer {}", address_id, self._id);
        self.handler().delete(&address_id)
    }

    fn set_default_address(&mut self, address_id: String) -> AddressResponse {
        println!(
            "Setting address {} as default for customer {}",
            address_id, self._id
        );
        self.handler().set_default(&address_id)
    }
}
