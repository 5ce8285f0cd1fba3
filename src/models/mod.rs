pub mod listing;
pub mod map_view;
pub mod neighbourhood;
pub mod query;
pub mod review;
