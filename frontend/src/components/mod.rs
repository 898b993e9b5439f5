pub mod charts;
pub mod confirm_modal;
pub mod header;
pub mod pagination;
pub mod stat_card;
pub mod toast;
pub mod user_table;
