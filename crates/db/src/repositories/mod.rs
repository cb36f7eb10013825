//! Data access layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods that
//! accept `&PgPool` as the first argument. Lookups return `Option`, deletes
//! return whether a row was removed.

pub mod author_repo;
pub mod award_repo;
pub mod banner_repo;
pub mod blog_repo;
pub mod career_repo;
pub mod carousel_repo;
pub mod center_repo;
pub mod electronic_media_repo;
pub mod enquiry_repo;
pub mod feature_repo;
pub mod gallery_repo;
pub mod initiative_repo;
pub mod join_application_repo;
pub mod news_repo;
pub mod ordering;
pub mod page_view_repo;
pub mod search_repo;
pub mod site_statistic_repo;
pub mod success_story_repo;
pub mod taxonomy_repo;
pub mod testimonial_repo;
pub mod user_repo;

pub use author_repo::AuthorRepo;
pub use award_repo::AwardRepo;
pub use banner_repo::BannerRepo;
pub use blog_repo::{BlogFilter, BlogRepo};
pub use career_repo::CareerRepo;
pub use carousel_repo::CarouselRepo;
pub use center_repo::CenterRepo;
pub use electronic_media_repo::ElectronicMediaRepo;
pub use enquiry_repo::EnquiryRepo;
pub use feature_repo::FeatureRepo;
pub use gallery_repo::GalleryRepo;
pub use initiative_repo::InitiativeRepo;
pub use join_application_repo::JoinApplicationRepo;
pub use news_repo::NewsRepo;
pub use ordering::{swap_order, Swappable};
pub use page_view_repo::PageViewRepo;
pub use search_repo::SearchRepo;
pub use site_statistic_repo::SiteStatisticRepo;
pub use success_story_repo::SuccessStoryRepo;
pub use taxonomy_repo::{Taxonomy, TaxonomyRepo};
pub use testimonial_repo::TestimonialRepo;
pub use user_repo::UserRepo;
