//! Action IDs for Cookie World click targets.

pub const CLICK_COOKIE: u16 = 0;
pub const RESTART: u16 = 1;

/// Shop purchase: base + display index.
pub const BUY_UPGRADE_BASE: u16 = 100;
