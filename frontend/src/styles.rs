pub const PAGE: &str = "min-h-screen bg-[#161A27] text-white";
pub const CONTAINER: &str = "container mx-auto px-4";
pub const HEADER: &str = "border-b border-gray-800 bg-[#0F131C]";
pub const BRAND: &str = "text-2xl font-bold text-purple-400";
pub const BETA_BADGE: &str = "rounded-full bg-green-500 px-2 py-0.5 text-xs";
pub const NAV_ACTIVE: &str = "font-medium";
pub const NAV_LINK: &str = "font-medium text-gray-400 transition-colors hover:text-white";
pub const FOOTER: &str = "border-t border-gray-800 bg-[#0F131C] py-6";

pub const TEXT_H1: &str = "mb-2 text-4xl font-bold";
pub const TEXT_H2: &str = "text-3xl font-bold";
pub const TEXT_BODY: &str = "text-gray-300";
pub const TEXT_MUTED: &str = "text-sm text-gray-400";
pub const TEXT_PRICE: &str = "font-bold text-yellow-400";

pub const CASE_GRID: &str = "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-5";
pub const CASE_CARD: &str = "rounded-lg border-2 overflow-hidden transition-all duration-300 hover:-translate-y-1 hover:shadow-[0_0_15px_0] hover:shadow-purple-500/50";
pub const RARITY_TAG: &str = "absolute top-2 right-2 rounded bg-black/70 px-2 py-1 text-xs font-semibold";

pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center rounded-lg bg-purple-600 px-4 py-2 font-medium text-white transition-all hover:bg-purple-700";
pub const BUTTON_PRIMARY_LG: &str = "inline-flex items-center justify-center rounded-lg bg-purple-600 px-8 py-4 text-lg font-medium text-white transition-all hover:bg-purple-700";
pub const BUTTON_OUTLINE: &str = "inline-flex items-center justify-center rounded-lg border border-gray-700 px-4 py-2 font-medium text-white hover:bg-gray-700";
pub const BUTTON_OUTLINE_ACCENT: &str = "inline-flex items-center justify-center rounded-lg border border-purple-600 px-8 py-4 text-lg font-medium text-purple-400 hover:bg-purple-600/20";
pub const BUTTON_BALANCE: &str = "flex items-center gap-2 rounded-lg bg-purple-500/20 px-3 py-1.5 font-bold hover:bg-purple-500/30";

pub const INPUT: &str = "block w-full rounded-lg border border-gray-700 bg-[#0F131C] py-2 px-3 text-white placeholder:text-gray-500 focus:outline-none focus:ring-2 focus:ring-purple-600";
pub const POPOVER: &str = "absolute right-0 top-full z-40 mt-2 w-80 rounded-lg border border-gray-700 bg-[#1A1F2C] p-4 text-white shadow-xl";

pub const MODAL_BACKDROP: &str = "fixed inset-0 z-[1100] bg-black/80 backdrop-blur-sm overflow-y-auto";
pub const MODAL_BACKDROP_TOP: &str = "fixed inset-0 z-[1200] bg-black/80 backdrop-blur-sm overflow-y-auto";
pub const MODAL_WRAPPER: &str = "flex min-h-full items-center justify-center p-4";
pub const MODAL_WRAPPER_FLUSH: &str = "flex min-h-full items-center justify-center";
pub const MODAL_PANEL: &str = "relative w-full max-w-4xl overflow-hidden rounded-xl bg-[#1A1F2C] text-white shadow-xl";
pub const MODAL_PANEL_WIDE: &str = "relative w-screen overflow-hidden bg-[#1A1F2C] text-white shadow-xl";
pub const MODAL_PANEL_SM: &str = "relative w-full max-w-md overflow-hidden rounded-xl border border-gray-700 bg-[#1A1F2C] p-6 text-white shadow-xl";

pub const REEL_WINDOW: &str = "relative h-[280px] overflow-hidden";
pub const REEL_STRIP: &str = "absolute left-0 top-1/2 -translate-y-1/2 flex";
pub const REEL_MARKER: &str = "absolute left-1/2 top-0 bottom-0 w-0.5 bg-yellow-400 z-20 -translate-x-1/2";
pub const REEL_MARKER_DOT: &str = "absolute left-1/2 top-1/2 w-4 h-4 rounded-full bg-yellow-400 shadow-[0_0_15px_5px] shadow-yellow-400/50 z-20 -translate-x-1/2 -translate-y-1/2";
pub const REEL_FADE_LEFT: &str = "absolute left-0 top-0 bottom-0 w-24 bg-gradient-to-r from-[#1A1F2C] to-transparent z-10";
pub const REEL_FADE_RIGHT: &str = "absolute right-0 top-0 bottom-0 w-24 bg-gradient-to-l from-[#1A1F2C] to-transparent z-10";
pub const ITEM_TILE: &str = "flex-shrink-0 w-40 h-60 mr-5 border-2 bg-gradient-to-b rounded-lg p-3 flex flex-col";

pub const NOTICE: &str = "fixed bottom-6 right-6 z-[1300] w-80 rounded-lg border p-4 shadow-xl";
pub const NOTICE_SUCCESS: &str = "border-gray-700 bg-[#1A1F2C] text-white";
pub const NOTICE_ERROR: &str = "border-red-800 bg-red-900/80 text-red-100";
