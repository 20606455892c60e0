use astra::{Body, ResponseBuilder};
use maud::Markup;

use crate::responses::ResultResp;

/// Render a maud page as a 200 response. Only the landing page goes through
/// here; everything else the service says is JSON.
pub fn html_response(markup: Markup) -> ResultResp {
    Ok(ResponseBuilder::new()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .body(Body::from(markup.into_string()))
        .unwrap())
}
