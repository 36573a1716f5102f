//! Core layer - banner rendering and title catalogs

pub mod banner;
pub mod catalog;

pub use banner::{Banner, BannerRenderer, BannerStyle};
pub use catalog::{TitleSet, sample_titles};
