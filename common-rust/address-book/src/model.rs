use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated, trimmed address fields shared by stored records.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    pub recipient_name: String,
    pub recipient_mobile: String,
    pub street: String,
    pub barangay: String,
    pub municipality: String,
    pub province: String,
    pub zip_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl AddressFields {
    pub fn full_address(&self) -> String {
        format!(
            "{}, {}, {}, {} {}",
            self.street, self.barangay, self.municipality, self.province, self.zip_code
        )
    }
}

/// A stored delivery address document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryAddress {
    pub id: String,
    pub customer_id: String,
    #[serde(flatten)]
    pub fields: AddressFields,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryAddress {
    pub fn summary(&self) -> AddressSummary {
        AddressSummary::from(self)
    }
}

/// Document handed to the store on insert; id and timestamps are assigned there.
#[derive(Clone, Debug, PartialEq)]
pub struct NewAddressRecord {
    pub customer_id: String,
    pub fields: AddressFields,
    pub is_default: bool,
}

/// Add-address request as received from the caller. Required fields are
/// optional here so a missing one can be reported instead of rejected by the
/// decoder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct NewDeliveryAddress {
    pub recipient_name: Option<String>,
    pub recipient_mobile: Option<String>,
    pub street: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_default: Option<bool>,
}

/// Partial update. `None` leaves the stored value untouched, so
/// `is_default: Some(false)` is distinct from not sending the flag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct AddressPatch {
    pub recipient_name: Option<String>,
    pub recipient_mobile: Option<String>,
    pub street: Option<String>,
    pub barangay: Option<String>,
    pub municipality: Option<String>,
    pub province: Option<String>,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_default: Option<bool>,
}

impl AddressPatch {
    /// Copies every supplied field onto `fields`. Values must already be validated.
    pub(crate) fn apply_to(&self, fields: &mut AddressFields) {
        fn set(target: &mut String, value: &Option<String>) {
            if let Some(value) = value {
                *target = value.trim().to_string();
            }
        }

        set(&mut fields.recipient_name, &self.recipient_name);
        set(&mut fields.recipient_mobile, &self.recipient_mobile);
        set(&mut fields.street, &self.street);
        set(&mut fields.barangay, &self.barangay);
        set(&mut fields.municipality, &self.municipality);
        set(&mut fields.province, &self.province);
        set(&mut fields.zip_code, &self.zip_code);

        if self.latitude.is_some() {
            fields.latitude = self.latitude;
        }
        if self.longitude.is_some() {
            fields.longitude = self.longitude;
        }
    }
}

/// Projection returned across the API boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct AddressSummary {
    pub id: String,
    pub recipient_name: String,
    pub recipient_mobile: String,
    pub street: String,
    pub barangay: String,
    pub municipality: String,
    pub province: String,
    pub zip_code: String,
    pub full_address: String,
    pub is_default: bool,
}

impl From<&DeliveryAddress> for AddressSummary {
    fn from(value: &DeliveryAddress) -> Self {
        let fields = &value.fields;
        Self {
            id: value.id.clone(),
            recipient_name: fields.recipient_name.clone(),
            recipient_mobile: fields.recipient_mobile.clone(),
            street: fields.street.clone(),
            barangay: fields.barangay.clone(),
            municipality: fields.municipality.clone(),
            province: fields.province.clone(),
            zip_code: fields.zip_code.clone(),
            full_address: fields.full_address(),
            is_default: value.is_default,
        }
    }
}

impl From<DeliveryAddress> for AddressSummary {
    fn from(value: DeliveryAddress) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields() -> AddressFields {
        AddressFields {
            recipient_name: "A".to_string(),
            recipient_mobile: "0912345678".to_string(),
            street: "1 Rd".to_string(),
            barangay: "B".to_string(),
            municipality: "M".to_string(),
            province: "P".to_string(),
            zip_code: "1000".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[test]
    fn full_address_joins_parts() {
        assert_eq!(fields().full_address(), "1 Rd, B, M, P 1000");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut target = fields();
        let patch = AddressPatch {
            recipient_name: Some("  X ".to_string()),
            latitude: Some(14.5),
            ..Default::default()
        };

        patch.apply_to(&mut target);

        assert_eq!(
            target,
            AddressFields {
                recipient_name: "X".to_string(),
                latitude: Some(14.5),
                ..fields()
            }
        );
    }

    #[test]
    fn record_serializes_as_flat_camel_case_document() {
        let now = Utc::now();
        let record = DeliveryAddress {
            id: "a1".to_string(),
            customer_id: "c1".to_string(),
            fields: fields(),
            is_default: true,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["customerId"], "c1");
        assert_eq!(json["zipCode"], "1000");
        assert_eq!(json["isDefault"], true);
        assert!(json.get("latitude").is_none());

        let decoded: DeliveryAddress = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, record);
    }
}
