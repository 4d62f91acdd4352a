//! Hotel record shared by the API and store layers.
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use utoipa::ToSchema;

/// A hotel as stored in the `hotels` table and exchanged over HTTP.
///
/// `id` is assigned by the store on first save and is `None` before that. Any
/// `id` sent by a client is ignored by the service layer.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub address: String,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rating: f64,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub rooms_available: i32,
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub price_per_night: f64,
}

impl Hotel {
    /// Overwrite every mutable field with the values from `other`.
    ///
    /// The identifier of `self` is left untouched.
    pub fn replace_fields(&mut self, other: Hotel) {
        self.name = other.name;
        self.address = other.address;
        self.rating = other.rating;
        self.rooms_available = other.rooms_available;
        self.price_per_night = other.price_per_night;
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString<T> {
    Number(T),
    Text(String),
}

/// HTML number inputs submit their value as a string, so `"4.5"` binds like `4.5`.
fn number_or_numeric_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match NumberOrString::<T>::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|err| serde::de::Error::custom(format!("invalid number {text:?}: {err}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_uses_camel_case_keys() {
        let hotel = Hotel {
            id: Some(7),
            name: "Grand".to_string(),
            address: "1 Main St".to_string(),
            rating: 4.5,
            rooms_available: 10,
            price_per_night: 199.99,
        };
        let value = serde_json::to_value(&hotel).expect("serialize");
        assert_eq!(value["id"], 7);
        assert_eq!(value["roomsAvailable"], 10);
        assert_eq!(value["pricePerNight"], 199.99);
        assert!(value.get("rooms_available").is_none());
    }

    #[test]
    fn id_is_optional_on_input() {
        let hotel: Hotel = serde_json::from_value(serde_json::json!({
            "name": "Grand",
            "address": "1 Main St",
            "rating": 4.5,
            "roomsAvailable": 10,
            "pricePerNight": 199.99
        }))
        .expect("deserialize");
        assert_eq!(hotel.id, None);

        let hotel: Hotel = serde_json::from_value(serde_json::json!({
            "id": null,
            "name": "",
            "address": "",
            "rating": -1.0,
            "roomsAvailable": -3,
            "pricePerNight": -10.0
        }))
        .expect("negative and empty values are accepted");
        assert_eq!(hotel.rooms_available, -3);
    }

    #[test]
    fn numeric_fields_accept_numeric_strings() {
        let hotel: Hotel = serde_json::from_value(serde_json::json!({
            "name": "Grand",
            "address": "1 Main St",
            "rating": "4.5",
            "roomsAvailable": " 10 ",
            "pricePerNight": "199.99"
        }))
        .expect("string numbers bind");
        assert_eq!(hotel.rating, 4.5);
        assert_eq!(hotel.rooms_available, 10);
        assert_eq!(hotel.price_per_night, 199.99);

        let hotel: Hotel = serde_json::from_value(serde_json::json!({
            "name": "Grand",
            "address": "1 Main St",
            "rating": 4,
            "roomsAvailable": 10,
            "pricePerNight": 200
        }))
        .expect("integer literals bind to floats");
        assert_eq!(hotel.rating, 4.0);
        assert_eq!(hotel.price_per_night, 200.0);
    }

    #[test]
    fn non_numeric_strings_are_rejected() {
        for (field, value) in [
            ("rating", "high"),
            ("roomsAvailable", "2.5"),
            ("pricePerNight", ""),
        ] {
            let mut body = serde_json::json!({
                "name": "Grand",
                "address": "1 Main St",
                "rating": 4.5,
                "roomsAvailable": 10,
                "pricePerNight": 199.99
            });
            body[field] = serde_json::json!(value);
            let err = serde_json::from_value::<Hotel>(body).expect_err(field);
            assert!(err.to_string().contains("invalid number"), "{field}: {err}");
        }
    }

    #[test]
    fn replace_fields_keeps_identity() {
        let mut stored = Hotel {
            id: Some(1),
            name: "Grand".to_string(),
            address: "1 Main St".to_string(),
            rating: 4.5,
            rooms_available: 10,
            price_per_night: 199.99,
        };
        stored.replace_fields(Hotel {
            id: Some(99),
            name: "Grand Updated".to_string(),
            address: "2 Main St".to_string(),
            rating: 3.0,
            rooms_available: 0,
            price_per_night: 80.0,
        });
        assert_eq!(stored.id, Some(1));
        assert_eq!(stored.name, "Grand Updated");
        assert_eq!(stored.address, "2 Main St");
        assert_eq!(stored.rating, 3.0);
        assert_eq!(stored.rooms_available, 0);
        assert_eq!(stored.price_per_night, 80.0);
    }
}
