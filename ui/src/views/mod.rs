mod home;
pub use home::Home;

mod recent_posts;
pub use recent_posts::RecentPosts;

mod services;
pub use services::ServicesView;

mod static_tabs;
pub use static_tabs::{AboutTab, ContactTab, FallbackTab, NewsTab};
