//! Content management services.
//!
//! Announcements, news articles, and video items. Each follows the same
//! lifecycle: created as a draft, edited freely, then published onto the
//! public surface. The public read paths live here too so view counting
//! stays next to the queries that trigger it.

pub mod announcement;
pub mod article;
pub mod video;

pub use announcement::AnnouncementService;
pub use article::NewsArticleService;
pub use video::VideoItemService;
