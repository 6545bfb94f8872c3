//! Display formatting for terminal output
//!
//! Plain-text renderings of the onboarding record used by the command-line
//! interface: session status, the review summary and the post-submission
//! dashboard.

pub mod review;
pub mod status;

pub use review::{format_review, review_sections, ReviewSection, EMPTY_VALUE};
pub use status::{format_bar, format_dashboard, format_status, format_timestamp};
