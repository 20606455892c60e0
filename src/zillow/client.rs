use std::collections::HashMap;

use reqwest::blocking::Client;
use serde_json::Value;
use url::form_urlencoded;

use crate::zillow::api_list::result_tag;
use crate::zillow::models::DeepSearchParams;
use crate::zillow::xml::xml_to_value;
use crate::zillow::ZillowError;

const ROOT_URL: &str = "http://www.zillow.com/webservice/";

/// Client for the Zillow web-service API.
///
/// Every operation runs the same pipeline: build the request URL, issue one
/// GET, parse the XML body into a JSON value, and unwrap the operation's
/// result tag. One call maps to one request on the wire; there is no retry,
/// no timeout, and no caching.
pub struct ZillowClient {
    client: Client,
    zws_id: String,
    root_url: String,
}

impl ZillowClient {
    pub fn new(zws_id: impl Into<String>) -> Result<Self, ZillowError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ZillowError::Network(e.to_string()))?;

        Ok(Self {
            client,
            zws_id: zws_id.into(),
            root_url: ROOT_URL.to_string(),
        })
    }

    /// Deep search by street address.
    pub fn get_deep_search_results(
        &self,
        params: &DeepSearchParams,
    ) -> Result<Value, ZillowError> {
        let mut query = vec![
            ("address".to_string(), params.address.clone()),
            ("citystatezip".to_string(), params.citystatezip()),
        ];
        if params.rentzestimate {
            query.push(("rentzestimate".to_string(), "true".to_string()));
        }

        self.fetch_and_unwrap("GetDeepSearchResults", &query, "SearchResults:searchresults")
    }

    /// Owner-updated details for one property id. The zpid is passed through
    /// verbatim, numeric or not.
    pub fn get_updated_property_details(&self, zpid: &str) -> Result<Value, ZillowError> {
        let query = vec![("zpid".to_string(), zpid.to_string())];

        self.fetch_and_unwrap(
            "GetUpdatedPropertyDetails",
            &query,
            "UpdatedPropertyDetails:updatedPropertyDetails",
        )
    }

    /// Neighborhood demographics; `params` is passed through untouched.
    pub fn get_demographics(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<Value, ZillowError> {
        self.fetch_and_unwrap(
            "GetDemographics",
            &sorted_params(params),
            "Demographics:demographics",
        )
    }

    /// Any named web-service operation. The result tag comes from the fixed
    /// operation table; an unknown name fails before any network I/O.
    pub fn call_api(
        &self,
        api_name: &str,
        params: &HashMap<String, String>,
    ) -> Result<Value, ZillowError> {
        let tag = result_tag(api_name)
            .ok_or_else(|| ZillowError::UnknownOperation(api_name.to_string()))?;

        self.fetch_and_unwrap(api_name, &sorted_params(params), tag)
    }

    /// The shared pipeline. The endpoint name and the unwrap tag are the only
    /// two things that vary between operations.
    fn fetch_and_unwrap(
        &self,
        endpoint: &str,
        params: &[(String, String)],
        tag: &str,
    ) -> Result<Value, ZillowError> {
        let url = self.build_url(endpoint, params);
        let body = self.fetch(&url)?;
        let parsed = xml_to_value(&body)?;

        parsed
            .get(tag)
            .cloned()
            .ok_or_else(|| ZillowError::MissingResult(tag.to_string()))
    }

    /// `<root>/<Endpoint>.htm?zws-id=<id>&<params>`, values percent-encoded.
    pub(crate) fn build_url(&self, endpoint: &str, params: &[(String, String)]) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query.append_pair("zws-id", &self.zws_id);
        for (key, value) in params {
            query.append_pair(key, value);
        }

        format!("{}{}.htm?{}", self.root_url, endpoint, query.finish())
    }

    fn fetch(&self, url: &str) -> Result<String, ZillowError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ZillowError::Network(e.to_string()))?;

        let status = resp.status();
        if status.as_u16() != 200 {
            return Err(ZillowError::HttpStatus(status.as_u16()));
        }

        resp.text().map_err(|e| ZillowError::Network(e.to_string()))
    }
}

/// Arbitrary parameter maps are serialized in sorted key order so the built
/// URL is deterministic.
pub(crate) fn sorted_params(params: &HashMap<String, String>) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    pairs.sort();
    pairs
}
