// Server-side page rendering. Each page view is a pure function from the
// static content registry to a full HTML document, wrapped by the shared
// layout shell.

pub mod about;
pub mod home;
pub mod layout;
pub mod phase;
pub mod projects;
pub mod resume;

// Re-export the public API consumed by the route handlers.
pub use about::about_page;
pub use home::home_page;
pub use layout::{error_page, shell};
pub use phase::phase_page;
pub use projects::projects_page;
pub use resume::resume_page;
