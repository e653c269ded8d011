pub mod balance_display;
pub mod case_card;
pub mod item_tile;
pub mod notice_toast;
pub mod open_case_modal;
pub mod shortfall_modal;

pub use balance_display::BalanceDisplay;
pub use case_card::CaseCard;
pub use item_tile::{ItemTile, WinnerCard};
pub use notice_toast::NoticeToast;
pub use open_case_modal::OpenCaseModal;
pub use shortfall_modal::ShortfallModal;
