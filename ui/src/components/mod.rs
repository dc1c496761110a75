mod content_page;
pub use content_page::ContentPage;

mod footer;
pub use footer::Footer;

mod home_nav;
pub use home_nav::HomeNav;

mod page_head;
pub use page_head::PageHead;

mod services_toc;
pub(crate) use services_toc::section_label;
pub use services_toc::ServicesToc;

mod site_navbar;
pub use site_navbar::SiteNavbar;
