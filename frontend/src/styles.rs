use shared::shared_prediction_game::{GameKind, Prediction};

pub const CONTAINER_SM: &str = "max-w-md mx-auto px-4 sm:px-6 py-4";
pub const CONTAINER_LG: &str = "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-6";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-gray-700/60 backdrop-blur-md border-b border-gray-200/50 dark:border-gray-700/50";
pub const NAV_BRAND: &str = "flex items-center text-xl font-bold text-gray-900 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200";
pub const NAV_ITEMS: &str = "flex items-center space-x-4";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400 transition-all duration-200 after:absolute after:left-0 after:bottom-0 after:h-0.5 after:w-full after:origin-right after:scale-x-0 after:bg-blue-600 dark:after:bg-blue-400 after:transition-transform hover:after:origin-left hover:after:scale-x-100";
pub const BUTTON_ICON: &str = "p-2 text-gray-800 dark:text-white hover:text-blue-600 dark:hover:text-blue-400 rounded-lg transition-colors duration-200";
pub const CARD: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] p-6";
pub const CARD_HOVER: &str = "bg-white dark:bg-gray-800 rounded-lg shadow-lg dark:shadow-[0_4px_12px_-4px_rgba(255,255,255,0.03)] hover:shadow-xl dark:hover:shadow-[0_6px_16px_-6px_rgba(255,255,255,0.06)] p-6 transform hover:-translate-y-1 transition-all duration-300 cursor-pointer";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 shadow-lg disabled:opacity-50 disabled:cursor-not-allowed transition-all duration-300";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-gray-300 dark:border-gray-600 text-gray-900 dark:text-white hover:bg-gray-50 dark:hover:bg-gray-800 disabled:opacity-50";
pub const INPUT: &str = "mt-2 block w-full rounded-lg border-0 bg-white dark:bg-gray-900 py-2 px-3 text-gray-900 dark:text-white shadow-sm ring-1 ring-inset ring-gray-300 dark:ring-gray-700 placeholder:text-gray-400 focus:ring-2 focus:ring-blue-600";
pub const FORM: &str = "mt-4 space-y-4";
pub const TEXT_H1: &str = "text-3xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H2: &str = "text-2xl font-bold text-gray-900 dark:text-white";
pub const TEXT_H3: &str = "text-xl font-bold text-gray-900 dark:text-white";
pub const TEXT_BODY: &str = "text-gray-600 dark:text-gray-300";
pub const TEXT_SMALL: &str = "text-sm text-gray-500 dark:text-gray-400";
pub const TEXT_ERROR: &str = "text-sm text-red-500 dark:text-red-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-gray-900 dark:text-white";
pub const AUTH_CARD: &str = "rounded-xl shadow-xl dark:shadow-[0_6px_20px_-6px_rgba(255,255,255,0.04)] p-8 max-w-md w-full mx-auto backdrop-blur-lg bg-white/80 dark:bg-gray-900/80 border border-gray-200/50 dark:border-gray-700/50";
pub const AUTH_BUTTON: &str = "w-full py-3 px-4 text-sm font-semibold text-white bg-gradient-to-r from-blue-600 to-blue-700 hover:from-blue-700 hover:to-blue-800 rounded-lg transition-all duration-200 disabled:opacity-50 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 dark:focus:ring-offset-gray-900";
pub const FLEX_CENTER: &str = "flex min-h-[80vh] flex-col justify-center px-6 py-12 lg:px-8";
pub const ALERT_ERROR: &str = "bg-red-50 dark:bg-red-900/50 border border-red-200 dark:border-red-800 rounded-lg p-4 text-red-700 dark:text-red-200";
pub const ALERT_WARNING: &str = "p-4 mb-4 text-sm text-yellow-800 rounded-lg bg-yellow-50 dark:bg-gray-900 dark:text-yellow-400";
pub const DROPDOWN: &str = "absolute right-0 bg-white dark:bg-gray-800 rounded-lg shadow-lg ring-1 ring-black ring-opacity-5 focus:outline-none divide-y divide-gray-100 dark:divide-gray-700";
pub const DROPDOWN_BUTTON: &str = "w-full px-2 py-3 text-sm text-center text-gray-700 dark:text-gray-300 hover:bg-gray-100 dark:hover:bg-gray-700 hover:text-blue-600 dark:hover:text-blue-400 transition-colors duration-200 first:rounded-t-lg last:rounded-b-lg";
pub const BALANCE_CHIP: &str = "flex items-center space-x-1 px-2 py-1 bg-gray-100 dark:bg-gray-700 rounded-lg text-sm";
pub const TOAST_SUCCESS: &str = "fixed top-20 right-6 z-50 max-w-md bg-green-50 border border-green-200 text-green-800 px-4 py-3 rounded-lg shadow-lg animate-fade-in flex items-center";
pub const TOAST_ERROR: &str = "fixed top-20 right-6 z-50 max-w-md bg-red-50 border border-red-200 text-red-800 px-4 py-3 rounded-lg shadow-lg animate-fade-in flex items-center";
pub const TABLE: &str = "min-w-full divide-y divide-gray-200 dark:divide-gray-700";
pub const TABLE_HEAD: &str = "px-4 py-2 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400";
pub const TABLE_CELL: &str = "px-4 py-2 text-sm text-gray-900 dark:text-white whitespace-nowrap";
pub const MODAL_BACKDROP: &str = "fixed inset-0 z-40 flex items-center justify-center bg-black/50 backdrop-blur-sm";
pub const MODAL: &str = "w-full max-w-md bg-white dark:bg-gray-900 rounded-2xl p-6 shadow-2xl ring-1 ring-gray-200 dark:ring-white/10";

/// Per-game accent colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub gradient: &'static str,
    pub accent_text: &'static str,
    pub accent_button: &'static str,
    pub ring: &'static str,
}

pub fn theme_for(kind: GameKind) -> Theme {
    match kind {
        GameKind::BigSmall => Theme {
            gradient: "bg-gradient-to-br from-amber-50 via-white to-sky-50 dark:from-amber-950/40 dark:via-gray-950 dark:to-sky-950/40",
            accent_text: "text-amber-600 dark:text-amber-400",
            accent_button: "bg-gradient-to-r from-amber-500 to-orange-600 hover:from-amber-600 hover:to-orange-700",
            ring: "ring-amber-400",
        },
        GameKind::Color => Theme {
            gradient: "bg-gradient-to-br from-emerald-50 via-white to-violet-50 dark:from-emerald-950/40 dark:via-gray-950 dark:to-violet-950/40",
            accent_text: "text-violet-600 dark:text-violet-400",
            accent_button: "bg-gradient-to-r from-violet-500 to-fuchsia-600 hover:from-violet-600 hover:to-fuchsia-700",
            ring: "ring-violet-400",
        },
    }
}

pub fn prediction_chip(prediction: Prediction) -> &'static str {
    match prediction {
        Prediction::Big => "bg-amber-500 text-white",
        Prediction::Small => "bg-sky-500 text-white",
        Prediction::Red => "bg-red-500 text-white",
        Prediction::Green => "bg-green-500 text-white",
        Prediction::Violet => "bg-violet-500 text-white",
        Prediction::Unknown => "bg-gray-400 text-white",
    }
}

/// Keyframes the utility classes do not ship with. Injected once by `Base`.
pub const APP_CSS: &str = r#"
@keyframes fadeIn {
    0% { opacity: 0; }
    100% { opacity: 1; }
}

.animate-fade-in {
    animation: fadeIn 0.3s ease-in-out;
}

.countdown-pulse {
    animation: pulse 1s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}
"#;
