// Backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const SUGGESTIONS_PATH: &str = "/suggestions";
pub const CHAT_PATH: &str = "/chat";
pub const HEALTH_PATH: &str = "/health";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// Presentation
pub const DEFAULT_TYPEWRITER_DELAY_MS: u64 = 10;
pub const MAX_TYPEWRITER_DELAY_MS: u64 = 1000;
pub const APOLOGY_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

pub const THINKING_TITLE: &str = "Thinking Process";
pub const CHEVRON_COLLAPSED: char = '▾';
pub const CHEVRON_EXPANDED: char = '▴';

/// Shown when `/suggestions` cannot be loaded.
pub const FALLBACK_SUGGESTIONS: [&str; 4] = [
    "Nguyễn Hồng Phong là ai?",
    "Kinh nghiệm làm việc của Phong?",
    "Liên hệ với Phong như thế nào?",
    "Kỹ năng chính của Phong là gì?",
];

// Environment
pub const BASE_URL_ENV: &str = "CVCHAT_BASE_URL";
pub const APP_DIR_NAME: &str = "cvchat";
pub const LOG_FILE_BASENAME: &str = "cvchat";
