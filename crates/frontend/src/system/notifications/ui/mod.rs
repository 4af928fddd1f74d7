pub mod page;

pub use page::UpcomingPage;
