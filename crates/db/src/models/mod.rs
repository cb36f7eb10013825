//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` input DTO used by both create (POST) and replace (PUT)
//! - A [`Localize`](ngocms_core::locale::Localize) impl for bilingual rows

pub mod award;
pub mod banner;
pub mod blog;
pub mod career;
pub mod carousel;
pub mod center;
pub mod electronic_media;
pub mod enquiry;
pub mod feature;
pub mod gallery;
pub mod initiative;
pub mod join_application;
pub mod news;
pub mod page_view;
pub mod search;
pub mod site_statistic;
pub mod success_story;
pub mod testimonial;
pub mod user;
