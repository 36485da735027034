// src/presentation/http/controllers/contact.rs
use crate::application::{commands::contact::SubmitContactCommand, error::ApplicationError};
use crate::presentation::http::error::{HttpError, HttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, http::StatusCode, response::Html};
use serde::{Deserialize, Serialize};

const PAGE_TITLE: &str = "Contact Us";
const THANK_YOU: &str = "Thank you for your message, we will be in touch shortly.";

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// What the visitor typed, echoed back when the form is rejected.
#[derive(Debug, Serialize)]
struct SubmittedForm<'a> {
    name: &'a str,
    phone: &'a str,
    message: &'a str,
}

impl<'a> From<&'a ContactRequest> for SubmittedForm<'a> {
    fn from(request: &'a ContactRequest) -> Self {
        Self {
            name: &request.name,
            phone: request.phone.as_deref().unwrap_or_default(),
            message: &request.message,
        }
    }
}

pub async fn show_contact(Extension(state): Extension<HttpState>) -> HttpResult<Html<String>> {
    state.views.render_page("contact.html", PAGE_TITLE)
}

pub async fn submit_contact(
    Extension(state): Extension<HttpState>,
    Form(payload): Form<ContactRequest>,
) -> HttpResult<(StatusCode, Html<String>)> {
    let command = SubmitContactCommand {
        name: payload.name.clone(),
        phone: payload.phone.clone(),
        message: payload.message.clone(),
    };

    let mut context = state.views.page_context(PAGE_TITLE);
    let status = match state.services.contact_commands.submit(command).await {
        Ok(()) => {
            context.insert("message", THANK_YOU);
            StatusCode::OK
        }
        Err(ApplicationError::Validation(reason)) => {
            context.insert("error", &reason);
            context.insert("form", &SubmittedForm::from(&payload));
            StatusCode::BAD_REQUEST
        }
        Err(other) => return Err(HttpError::from_error(other)),
    };

    Ok((status, state.views.render("contact.html", &context)?))
}
