pub mod catalog;
pub mod logo;
pub mod render;

pub use crate::domain::model::{CardDescriptor, CardIcon, CardStatus, EncodedLogo, SiteChrome};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
