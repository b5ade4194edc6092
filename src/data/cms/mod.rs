//! CMS repositories: announcements, news articles, and videos.
//!
//! Each content type gets its own repository. The public read queries filter
//! to published rows; view counters are bumped with a single SQL increment so
//! concurrent reads never clobber each other's counts.

pub mod announcement;
pub mod article;
pub mod video;
