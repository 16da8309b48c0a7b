//! Login and registration pages

use std::sync::Arc;

use crate::forms::{LoginForm, RegisterForm, ValidationErrors};
use crate::pages::{track, Route};
use crate::services::{AuthRepository, ServiceFactory, SessionStore};
use crate::utils::errors::{Result, SmartAdventuresError};
use crate::utils::logging::log_validation_failure;

fn reject(form: &str, errors: ValidationErrors, slot: &mut Option<ValidationErrors>) -> SmartAdventuresError {
    log_validation_failure(form, &errors);
    *slot = Some(errors.clone());
    SmartAdventuresError::Validation(errors)
}

pub struct LoginPage {
    auth: Arc<dyn AuthRepository>,
    session: SessionStore,
    pub form: LoginForm,
    pub field_errors: Option<ValidationErrors>,
    pub error_message: Option<String>,
}

impl LoginPage {
    pub fn new(services: &ServiceFactory, form: LoginForm) -> Self {
        Self {
            auth: services.auth.clone(),
            session: services.session.clone(),
            form,
            field_errors: None,
            error_message: None,
        }
    }

    /// Log in and store the token; navigates to the trips list
    pub async fn submit(&mut self) -> Result<Route> {
        if let Err(errors) = self.form.validate() {
            return Err(reject("login", errors, &mut self.field_errors));
        }
        self.field_errors = None;

        let result = self.auth.login(&self.form.email, &self.form.password).await;
        let token = track(&mut self.error_message, result)?;
        self.session.set(token).await?;
        Ok(Route::Trips)
    }
}

pub struct RegisterPage {
    auth: Arc<dyn AuthRepository>,
    session: SessionStore,
    pub form: RegisterForm,
    pub field_errors: Option<ValidationErrors>,
    pub error_message: Option<String>,
}

impl RegisterPage {
    pub fn new(services: &ServiceFactory, form: RegisterForm) -> Self {
        Self {
            auth: services.auth.clone(),
            session: services.session.clone(),
            form,
            field_errors: None,
            error_message: None,
        }
    }

    /// Create the account and keep the returned token; navigates to the trips list
    pub async fn submit(&mut self) -> Result<Route> {
        if let Err(errors) = self.form.validate() {
            return Err(reject("register", errors, &mut self.field_errors));
        }
        self.field_errors = None;

        let result = self.auth.register(&self.form.to_request()).await;
        let token = track(&mut self.error_message, result)?;
        self.session.set(token).await?;
        Ok(Route::Trips)
    }
}
