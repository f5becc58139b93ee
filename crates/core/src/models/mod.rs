pub mod category;
pub mod chart;
pub mod period;
pub mod purchase;
pub mod session;
pub mod settings;
pub mod summary;
