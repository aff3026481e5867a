use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, Error, HttpResponse};
use serde_derive::Serialize;

/// Envelope shared by every endpoint.
#[derive(Serialize, Debug)]
pub struct JsonResponse<T> {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list: Option<Vec<T>>,
}

#[derive(Debug)]
pub struct JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    message: String,
    id: Option<i32>,
    item: Option<T>,
    list: Option<Vec<T>>,
}

impl<T> Default for JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    fn default() -> Self {
        Self {
            message: String::new(),
            id: None,
            item: None,
            list: None,
        }
    }
}

impl<T> JsonResponse<T>
where
    T: serde::Serialize,
{
    pub fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder::default()
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: serde::Serialize,
{
    pub fn set_msg<I: Into<String>>(mut self, msg: I) -> Self {
        self.message = msg.into();
        self
    }

    pub fn set_id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn set_item(mut self, item: T) -> Self {
        self.item = Some(item);
        self
    }

    pub fn set_list(mut self, list: Vec<T>) -> Self {
        self.list = Some(list);
        self
    }

    pub fn to_json_response(self) -> JsonResponse<T> {
        JsonResponse {
            message: self.message,
            id: self.id,
            item: self.item,
            list: self.list,
        }
    }

    pub fn ok<I: Into<String>>(self, msg: I) -> web::Json<JsonResponse<T>> {
        web::Json(self.set_msg(msg).to_json_response())
    }

    pub fn created<I: Into<String>>(self, msg: I) -> HttpResponse {
        HttpResponse::Created().json(self.set_msg(msg).to_json_response())
    }

    pub fn bad_request<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).to_error(StatusCode::BAD_REQUEST)
    }

    /// `msg` is expected to be the serialized `serde_valid` errors.
    pub fn form_error<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).to_error(StatusCode::BAD_REQUEST)
    }

    pub fn unauthorized<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).to_error(StatusCode::UNAUTHORIZED)
    }

    pub fn forbidden<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).to_error(StatusCode::FORBIDDEN)
    }

    pub fn not_found<I: Into<String>>(self, msg: I) -> Error {
        self.set_msg(msg).to_error(StatusCode::NOT_FOUND)
    }

    pub fn internal_server_error<I: Into<String>>(self, msg: I) -> Error {
        let builder = self.set_msg(msg);
        let builder = if builder.message.trim().is_empty() {
            builder.set_msg("Internal Server Error")
        } else {
            builder
        };

        builder.to_error(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn to_error(self, status: StatusCode) -> Error {
        let cause = self.message.clone();
        let response = HttpResponse::build(status).json(self.to_json_response());

        InternalError::from_response(cause, response).into()
    }
}
