//! Cookie World game logic. Pure functions over `CookieState`.

use super::state::{find_upgrade, CookieState, Upgrade, CATALOG};
use crate::time::TICKS_PER_SEC;

const CLICK_FLASH_TICKS: u32 = 3;
const PURCHASE_FLASH_TICKS: u32 = 5;

/// Advance production by `delta_ticks` ticks. Each tick yields
/// `production_rate / TICKS_PER_SEC` cookies.
pub fn tick(state: &mut CookieState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    let produced = state.production_rate / TICKS_PER_SEC as f64 * delta_ticks as f64;
    state.cookies += produced;
    state.total_produced += produced;

    state.click_flash = state.click_flash.saturating_sub(delta_ticks);
    state.purchase_flash = state.purchase_flash.saturating_sub(delta_ticks);
}

/// Manual click: exactly one cookie.
pub fn click(state: &mut CookieState) {
    state.cookies += 1.0;
    state.total_clicks += 1;
    state.click_flash = CLICK_FLASH_TICKS;
}

pub fn can_afford(state: &CookieState, upgrade: &Upgrade) -> bool {
    state.cookies >= upgrade.cost
}

/// Try to buy catalog entry `id`. Returns false, leaving the state
/// untouched, when the id is unknown or the player cannot afford it.
pub fn buy(state: &mut CookieState, id: u32) -> bool {
    let upgrade = match find_upgrade(id) {
        Some(u) => u,
        None => return false,
    };
    if !can_afford(state, upgrade) {
        return false;
    }

    state.cookies -= upgrade.cost;
    state.production_rate += upgrade.production;
    if let Some(idx) = CATALOG.iter().position(|u| u.id == id) {
        state.owned[idx] += 1;
    }
    state.purchase_flash = PURCHASE_FLASH_TICKS;
    state.add_log(
        &format!(
            "{} 구매! (+{} CPS, {}개 보유)",
            upgrade.label(),
            format_number(upgrade.production),
            state.owned_count(id)
        ),
        false,
    );
    true
}

/// Buy the catalog entry shown at `index` (0-based display position).
pub fn buy_at(state: &mut CookieState, index: usize) -> bool {
    match CATALOG.get(index) {
        Some(u) => buy(state, u.id),
        None => false,
    }
}

/// Floor and group thousands: `1234.9` -> `"1,234"`.
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    group_thousands(n.floor() as u64)
}

/// One decimal place, no grouping, halves rounded up: `1234.56` -> `"1234.6"`.
pub fn format_rate(rate: f64) -> String {
    let tenths = (rate.abs() * 10.0).round() as u64;
    let sign = if rate < 0.0 && tenths > 0 { "-" } else { "" };
    format!("{}{}.{}", sign, tenths / 10, tenths % 10)
}

fn group_thousands(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn click_adds_one() {
        let mut state = CookieState::new();
        click(&mut state);
        assert_eq!(state.cookies, 1.0);
        assert_eq!(state.total_clicks, 1);
        assert!(state.click_flash > 0);
    }

    #[test]
    fn tick_without_production_does_nothing() {
        let mut state = CookieState::new();
        tick(&mut state, 100);
        assert_eq!(state.cookies, 0.0);
    }

    #[test]
    fn tick_zero_does_nothing() {
        let mut state = CookieState::new();
        state.production_rate = 10.0;
        tick(&mut state, 0);
        assert_eq!(state.cookies, 0.0);
    }

    #[test]
    fn ten_ticks_is_one_second_of_production() {
        let mut state = CookieState::new();
        state.production_rate = 61.0;
        tick(&mut state, 10);
        assert!((state.cookies - 61.0).abs() < 1e-9);
        assert!((state.total_produced - 61.0).abs() < 1e-9);
    }

    #[test]
    fn single_ticks_accumulate_fractions() {
        let mut state = CookieState::new();
        state.production_rate = 1.0;
        for _ in 0..5 {
            tick(&mut state, 1);
        }
        assert!((state.cookies - 0.5).abs() < 1e-9);
    }

    #[test]
    fn tick_counts_down_flashes() {
        let mut state = CookieState::new();
        click(&mut state);
        tick(&mut state, 1);
        assert_eq!(state.click_flash, CLICK_FLASH_TICKS - 1);
        tick(&mut state, 100);
        assert_eq!(state.click_flash, 0);
    }

    #[test]
    fn buy_success() {
        let mut state = CookieState::new();
        state.cookies = 120.0;
        assert!(buy(&mut state, 2));
        assert!((state.cookies - 20.0).abs() < 1e-9);
        assert_eq!(state.production_rate, 10.0);
        assert_eq!(state.owned_count(2), 1);
        assert!(state.purchase_flash > 0);
        assert!(state.log.last().is_some_and(|e| e.text.contains("숙련된 제과사")));
    }

    #[test]
    fn buy_exact_cost_leaves_zero() {
        let mut state = CookieState::new();
        state.cookies = 500.0;
        assert!(buy(&mut state, 3));
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.production_rate, 50.0);
    }

    #[test]
    fn buy_insufficient_funds_is_noop() {
        let mut state = CookieState::new();
        state.cookies = 9.999;
        let log_len = state.log.len();
        assert!(!buy(&mut state, 1));
        assert_eq!(state.cookies, 9.999);
        assert_eq!(state.production_rate, 0.0);
        assert_eq!(state.owned_count(1), 0);
        assert_eq!(state.log.len(), log_len);
    }

    #[test]
    fn buy_unknown_id_is_noop() {
        let mut state = CookieState::new();
        state.cookies = 1_000.0;
        assert!(!buy(&mut state, 0));
        assert_eq!(state.cookies, 1_000.0);
    }

    #[test]
    fn repeat_purchases_keep_constant_price() {
        let mut state = CookieState::new();
        state.cookies = 30.0;
        assert!(buy(&mut state, 1));
        assert!(buy(&mut state, 1));
        assert!(buy(&mut state, 1));
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.production_rate, 3.0);
        assert_eq!(state.owned_count(1), 3);
        assert!(!buy(&mut state, 1));
    }

    #[test]
    fn buy_at_display_index() {
        let mut state = CookieState::new();
        state.cookies = 100.0;
        assert!(buy_at(&mut state, 1));
        assert_eq!(state.production_rate, 10.0);
        assert!(!buy_at(&mut state, 3));
    }

    #[test]
    fn can_afford_threshold() {
        let mut state = CookieState::new();
        state.cookies = 10.0;
        assert!(can_afford(&state, &CATALOG[0]));
        assert!(!can_afford(&state, &CATALOG[1]));
    }

    #[test]
    fn scenario_clicks_buy_tick_reject() {
        let mut state = CookieState::new();
        for _ in 0..10 {
            click(&mut state);
        }
        assert_eq!(state.cookies, 10.0);

        assert!(buy(&mut state, 1));
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.production_rate, 1.0);

        for _ in 0..10 {
            tick(&mut state, 1);
        }
        assert!((state.cookies - 1.0).abs() < 1e-9);

        let before = state.cookies;
        assert!(!buy(&mut state, 2));
        assert_eq!(state.cookies, before);
        assert_eq!(state.production_rate, 1.0);
    }

    #[test]
    fn format_number_floors_and_groups() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(0.99), "0");
        assert_eq!(format_number(999.9), "999");
        assert_eq!(format_number(1_000.0), "1,000");
        assert_eq!(format_number(1_234_567.8), "1,234,567");
        assert_eq!(format_number(-1_500.0), "-1,500");
    }

    #[test]
    fn format_rate_one_decimal() {
        assert_eq!(format_rate(0.0), "0.0");
        assert_eq!(format_rate(1.0), "1.0");
        assert_eq!(format_rate(61.0), "61.0");
        assert_eq!(format_rate(0.25), "0.3");
        assert_eq!(format_rate(12_345.0), "12345.0");
        assert_eq!(format_rate(1_000_000.5), "1000000.5");
    }
}
