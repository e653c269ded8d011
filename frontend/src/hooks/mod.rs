pub mod use_balance;
pub mod use_notice;
pub mod use_reveal;

pub use use_balance::*;
pub use use_notice::*;
pub use use_reveal::*;
