//! Form models
//!
//! Forms keep raw user input, validate it and build request bodies.

pub mod validation;
pub mod trip;
pub mod comment;
pub mod auth;

pub use validation::{FieldError, ValidationErrorKind, ValidationErrors};
pub use trip::{PersonList, TripForm};
pub use comment::CommentForm;
pub use auth::{LoginForm, RegisterForm};
