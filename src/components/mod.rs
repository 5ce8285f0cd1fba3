pub mod chart;
pub mod checklist;
pub mod date_range;
pub mod detail_table;
pub mod distribution;
pub mod map_section;
pub mod map_settings;
pub mod range_input;
pub mod score_card;
pub mod trend;
