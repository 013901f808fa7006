//! Authentication route handlers.
//!
//! There are no accounts: logging in only flips the session's login flag,
//! which decides whether the header shows Login/Register or Logout.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::{IntoResponse, Redirect};
use tower_sessions::Session;
use tracing::instrument;

use lapgalaxy_core::Route;

use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{CurrentAuth, log_in, log_out};
use crate::routes::layout::HeaderView;

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/login.html")]
pub struct LoginTemplate {
    pub header: HeaderView,
}

/// Register page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/register.html")]
pub struct RegisterTemplate {
    pub header: HeaderView,
}

/// Display the login page.
#[instrument(skip(session, auth))]
pub async fn login_page(session: Session, CurrentAuth(auth): CurrentAuth) -> impl IntoResponse {
    LoginTemplate {
        header: HeaderView::load(&session, auth).await,
    }
}

/// Display the registration page.
#[instrument(skip(session, auth))]
pub async fn register_page(session: Session, CurrentAuth(auth): CurrentAuth) -> impl IntoResponse {
    RegisterTemplate {
        header: HeaderView::load(&session, auth).await,
    }
}

/// Set the login flag and go to the login page.
#[instrument(skip(session))]
pub async fn login(session: Session) -> Result<Redirect> {
    log_in(&session).await?;
    add_breadcrumb("auth", "Logged in", None);
    Ok(Redirect::to(&Route::Login.path()))
}

/// Clear the login flag and go home.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    log_out(&session).await?;
    add_breadcrumb("auth", "Logged out", None);
    Ok(Redirect::to(&Route::Home.path()))
}
