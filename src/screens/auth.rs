use askama::Template;
use midining_client::{ApiClient, ClientError};
use midining_shared::user::Credentials;

use crate::{
    error::{Alert, AppError},
    navigation::{Route, header},
};

/// Which credentials form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    SignUp,
    Login,
}

impl AuthMode {
    pub fn route(&self) -> Route {
        match self {
            AuthMode::SignUp => Route::SignUp,
            AuthMode::Login => Route::Login,
        }
    }

    fn failure(&self) -> &'static str {
        match self {
            AuthMode::SignUp => "Sign up failed. Please try again.",
            AuthMode::Login => "Invalid uniqname or password.",
        }
    }

    /// The auth endpoints explain a refusal in `message` ("User not found",
    /// "User already exists"), so it is shown when `error` is absent.
    fn alert(&self, err: &ClientError) -> Alert {
        match err.server_message() {
            Some(message) if err.server_error().is_none() => Alert::error(message),
            _ => Alert::from_client_error(err, self.failure()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthScreen {
    pub mode: AuthMode,
    pub alert: Option<Alert>,
}

impl AuthScreen {
    pub fn new(mode: AuthMode) -> Self {
        Self { mode, alert: None }
    }

    /// Validates and submits the form. Returns where to go next: home on
    /// success, the same form otherwise.
    pub async fn submit(&mut self, client: &ApiClient, uniqname: &str, password: &str) -> Route {
        let credentials = match Credentials::new(uniqname, password) {
            Ok(credentials) => credentials,
            Err(e) => {
                self.alert = Some(Alert::error(e.to_string()));
                return self.mode.route();
            }
        };

        let result = match self.mode {
            AuthMode::SignUp => client.signup(&credentials).await,
            AuthMode::Login => client.login(&credentials).await,
        };

        match result {
            Ok(()) => {
                tracing::info!(uniqname = %credentials.uniqname, "authenticated");
                self.alert = None;
                Route::Home
            }
            Err(e) => {
                tracing::warn!("{} failed: {e}", self.mode.route().command());
                self.alert = Some(self.mode.alert(&e));
                self.mode.route()
            }
        }
    }

    pub fn render(&self) -> Result<String, AppError> {
        let template = AlertTemplate {
            header: header(self.mode.route()),
            title: self.mode.route().label(),
            alert: self.alert.as_ref().map(ToString::to_string),
        };

        Ok(template.render()?)
    }
}

#[derive(Template)]
#[template(path = "alert.txt")]
struct AlertTemplate {
    header: String,
    title: &'static str,
    alert: Option<String>,
}
