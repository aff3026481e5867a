mod add;
mod featured;
mod get;
mod upvote;

pub use add::*;
pub use featured::*;
pub use get::*;
pub use upvote::*;

use crate::helpers::JsonResponse;

pub(crate) fn parse_id(raw: &str) -> Result<i32, actix_web::Error> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| JsonResponse::<()>::build().bad_request("Invalid product ID"))
}
