use serde::{Deserialize, Serialize};

/// A single real estate listing as stored in the `properties` collection.
///
/// The shape mirrors the inbound JSON payload one to one. Nothing is
/// required: the collection accepts partial records, and the id is assigned
/// by the store on insert. Decoding the payload is the only typing check a
/// record ever gets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<String>,
    pub price: Option<f64>,
}
