pub const SITE_NAME: &str = "Sonora";

/// How long a [`StatusBanner`](crate::client::component::StatusBanner) stays up, in milliseconds.
pub const BANNER_TIMEOUT_MS: u32 = 5_000;

pub const GUILD_POLL_MS: u32 = 5_000;
pub const TICKET_LIST_POLL_MS: u32 = 10_000;
pub const TICKET_DETAIL_POLL_MS: u32 = 5_000;
pub const DEV_CONSOLE_POLL_MS: u32 = 3_000;
pub const ACCOUNTS_POLL_MS: u32 = 15_000;
