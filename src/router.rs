use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use url::form_urlencoded;

use crate::db;
use crate::db::Database;
use crate::domain::property::Property;
use crate::errors::ServerError;
use crate::responses::{empty_response, html_response, json_response, ResultResp};
use crate::templates;
use crate::zillow::{DeepSearchParams, ZillowClient};

pub fn handle(req: Request, db: &Database, zillow: &ZillowClient) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::home_page()),

        ("POST", "/property") => create_property(req, db),
        ("GET", "/property") => list_properties(db),
        ("DELETE", "/property") => delete_all_properties(db),
        ("GET", p) if p.starts_with("/property/") => find_property(p, db),
        ("DELETE", p) if p.starts_with("/property/") => delete_property(p, db),

        ("GET", "/zillow/search") => zillow_deep_search(&req, zillow),
        ("GET", "/zillow/demographics") => zillow_demographics(&req, zillow),
        ("GET", p) if p.starts_with("/zillow/property/") => zillow_property_details(p, zillow),
        ("GET", p) if p.starts_with("/zillow/api/") => zillow_call_api(p, &req, zillow),

        _ => Err(ServerError::NotFound),
    }
}

fn create_property(mut req: Request, db: &Database) -> ResultResp {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;

    let mut property: Property = serde_json::from_slice(&body)
        .map_err(|e| ServerError::BadRequest(format!("Invalid property payload: {e}")))?;

    let id = db::properties::insert_property(db, &property)?;
    property.id = Some(id);

    json_response(200, &property)
}

fn list_properties(db: &Database) -> ResultResp {
    let properties = db::properties::list_properties(db)?;
    json_response(200, &properties)
}

fn find_property(path: &str, db: &Database) -> ResultResp {
    let id = parse_id(path, "/property/")?;
    match db::properties::find_property_by_id(db, id)? {
        Some(property) => json_response(200, &property),
        None => Err(ServerError::NotFound),
    }
}

fn delete_property(path: &str, db: &Database) -> ResultResp {
    let id = parse_id(path, "/property/")?;
    db::properties::delete_property_by_id(db, id)?;
    empty_response(204)
}

fn delete_all_properties(db: &Database) -> ResultResp {
    db::properties::delete_all_properties(db)?;
    empty_response(204)
}

fn zillow_deep_search(req: &Request, zillow: &ZillowClient) -> ResultResp {
    let query = parse_query(req);

    let params = DeepSearchParams {
        address: require_param(&query, "address")?,
        city: require_param(&query, "city")?,
        state: require_param(&query, "state")?,
        zip: require_param(&query, "zip")?,
        rentzestimate: query.get("rentzestimate").map(|v| v == "true").unwrap_or(false),
    };

    let result = zillow.get_deep_search_results(&params)?;
    json_response(200, &result)
}

fn zillow_property_details(path: &str, zillow: &ZillowClient) -> ResultResp {
    let zpid = tail_segment(path, "/zillow/property/")?;
    let result = zillow.get_updated_property_details(zpid)?;
    json_response(200, &result)
}

fn zillow_demographics(req: &Request, zillow: &ZillowClient) -> ResultResp {
    let query = parse_query(req);
    let result = zillow.get_demographics(&query)?;
    json_response(200, &result)
}

fn zillow_call_api(path: &str, req: &Request, zillow: &ZillowClient) -> ResultResp {
    let name = tail_segment(path, "/zillow/api/")?;
    let query = parse_query(req);
    let result = zillow.call_api(name, &query)?;
    json_response(200, &result)
}

/// Numeric id segment of `path` after `prefix`.
fn parse_id(path: &str, prefix: &str) -> Result<i64, ServerError> {
    let raw = tail_segment(path, prefix)?;
    raw.parse::<i64>()
        .map_err(|_| ServerError::BadRequest(format!("Invalid property id: {raw}")))
}

/// The single path segment after `prefix`. Anything deeper is not a route.
fn tail_segment<'a>(path: &'a str, prefix: &str) -> Result<&'a str, ServerError> {
    let tail = &path[prefix.len()..];
    if tail.is_empty() || tail.contains('/') {
        return Err(ServerError::NotFound);
    }
    Ok(tail)
}

/// Decoded query parameters of `req`. Later duplicates win.
fn parse_query(req: &Request) -> HashMap<String, String> {
    match req.uri().query() {
        Some(q) => form_urlencoded::parse(q.as_bytes()).into_owned().collect(),
        None => HashMap::new(),
    }
}

fn require_param(query: &HashMap<String, String>, key: &str) -> Result<String, ServerError> {
    query
        .get(key)
        .cloned()
        .ok_or_else(|| ServerError::BadRequest(format!("Missing query parameter: {key}")))
}
