//! Newsletter builders module.
//!
//! This module contains all builders for the newsletter operations.

#[doc(inline)]
pub use get_info::{GetNewsletterInfoRequest, GetNewsletterInfoRequestBuilder};
pub mod get_info;

#[doc(inline)]
pub use subscribed::{GetSubscribedNewslettersRequest, GetSubscribedNewslettersRequestBuilder};
pub mod subscribed;

#[doc(inline)]
pub use create::{CreateNewsletterRequest, CreateNewsletterRequestBuilder};
pub mod create;

#[doc(inline)]
pub use action::{NewsletterAction, NewsletterActionRequest, NewsletterActionRequestBuilder};
pub mod action;
