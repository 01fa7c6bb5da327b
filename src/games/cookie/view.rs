//! Pure projection of `CookieState` into what the screen shows.

use super::logic::{can_afford, format_number, format_rate};
use super::state::{CookieState, CATALOG};

#[derive(Clone, Debug, PartialEq)]
pub struct ShopEntry {
    pub name: &'static str,
    pub cost: String,
    pub production: String,
    pub owned: u32,
    pub affordable: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CookieView {
    /// Floored, grouped cookie count.
    pub cookies: String,
    /// Cookies per second, one decimal place.
    pub rate: String,
    pub shop: Vec<ShopEntry>,
    pub total_clicks: u64,
}

pub fn view(state: &CookieState) -> CookieView {
    CookieView {
        cookies: format_number(state.cookies),
        rate: format_rate(state.production_rate),
        shop: CATALOG
            .iter()
            .map(|u| ShopEntry {
                name: u.label(),
                cost: format_number(u.cost),
                production: format_number(u.production),
                owned: state.owned_count(u.id),
                affordable: can_afford(state, u),
            })
            .collect(),
        total_clicks: state.total_clicks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::cookie::logic;

    #[test]
    fn fresh_state_view() {
        let v = view(&CookieState::new());
        assert_eq!(v.cookies, "0");
        assert_eq!(v.rate, "0.0");
        assert_eq!(v.shop.len(), CATALOG.len());
        assert!(v.shop.iter().all(|e| !e.affordable));
    }

    #[test]
    fn affordability_tracks_cookies() {
        let mut state = CookieState::new();
        state.cookies = 100.0;
        let v = view(&state);
        let flags: Vec<bool> = v.shop.iter().map(|e| e.affordable).collect();
        assert_eq!(flags, vec![true, true, false]);
    }

    #[test]
    fn count_is_floored_and_rate_has_one_decimal() {
        let mut state = CookieState::new();
        state.cookies = 1_234.99;
        state.production_rate = 11.0;
        let v = view(&state);
        assert_eq!(v.cookies, "1,234");
        assert_eq!(v.rate, "11.0");
    }

    #[test]
    fn owned_counts_follow_purchases() {
        let mut state = CookieState::new();
        state.cookies = 20.0;
        logic::buy(&mut state, 1);
        logic::buy(&mut state, 1);
        let v = view(&state);
        assert_eq!(v.shop[0].owned, 2);
        assert_eq!(v.shop[1].owned, 0);
    }
}
