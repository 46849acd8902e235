//! Image uploads for logos, banners, hero images, and block images.

pub mod service;
pub mod validator;

pub use service::{UploadRequest, UploadService, UploadedFile};
pub use validator::UploadValidator;
