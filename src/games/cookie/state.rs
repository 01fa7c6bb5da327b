/// Cookie World game state definitions.

/// A shop entry. Buying one adds `production` cookies per second, forever,
/// at the same `cost` every time. `name` carries an icon prefix.
#[derive(Clone, Debug, PartialEq)]
pub struct Upgrade {
    pub id: u32,
    pub name: &'static str,
    pub cost: f64,
    pub production: f64,
}

/// The shop, in display order.
pub const CATALOG: &[Upgrade] = &[
    Upgrade {
        id: 1,
        name: "🖱️ 자동 클릭커",
        cost: 10.0,
        production: 1.0,
    },
    Upgrade {
        id: 2,
        name: "👩‍🍳 숙련된 제과사",
        cost: 100.0,
        production: 10.0,
    },
    Upgrade {
        id: 3,
        name: "🏭 쿠키 공장",
        cost: 500.0,
        production: 50.0,
    },
];

impl Upgrade {
    /// `name` without its icon prefix. Emoji widths are unreliable in the
    /// cell grid, so the screen shows this.
    pub fn label(&self) -> &'static str {
        match self.name.split_once(' ') {
            Some((icon, rest)) if !icon.chars().any(|c| c.is_alphanumeric()) => rest,
            _ => self.name,
        }
    }
}

/// Look up a catalog entry by its id.
pub fn find_upgrade(id: u32) -> Option<&'static Upgrade> {
    CATALOG.iter().find(|u| u.id == id)
}

/// Log entry shown in the side panel.
#[derive(Clone, Debug)]
pub struct CookieLogEntry {
    pub text: String,
    pub is_important: bool,
}

const LOG_CAPACITY: usize = 50;

pub struct CookieState {
    /// Spendable cookies. Fractional; shown floored.
    pub cookies: f64,
    /// Cookies per second from all purchases.
    pub production_rate: f64,
    /// Times each catalog entry was bought, indexed like `CATALOG`.
    pub owned: Vec<u32>,
    pub total_clicks: u64,
    /// Cookies produced by the clock this session.
    pub total_produced: f64,
    pub log: Vec<CookieLogEntry>,
    /// Ticks left on the click highlight.
    pub click_flash: u32,
    /// Ticks left on the purchase highlight.
    pub purchase_flash: u32,
}

impl CookieState {
    pub fn new() -> Self {
        Self {
            cookies: 0.0,
            production_rate: 0.0,
            owned: vec![0; CATALOG.len()],
            total_clicks: 0,
            total_produced: 0.0,
            log: vec![CookieLogEntry {
                text: "승리의 쿠키 월드에 오신 것을 환영합니다!".into(),
                is_important: true,
            }],
            click_flash: 0,
            purchase_flash: 0,
        }
    }

    pub fn owned_count(&self, id: u32) -> u32 {
        CATALOG
            .iter()
            .position(|u| u.id == id)
            .and_then(|i| self.owned.get(i).copied())
            .unwrap_or(0)
    }

    pub fn add_log(&mut self, text: &str, is_important: bool) {
        self.log.push(CookieLogEntry {
            text: text.to_string(),
            is_important,
        });
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty() {
        let state = CookieState::new();
        assert_eq!(state.cookies, 0.0);
        assert_eq!(state.production_rate, 0.0);
        assert_eq!(state.owned, vec![0, 0, 0]);
    }

    #[test]
    fn catalog_ids_are_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn catalog_is_sorted_by_cost() {
        assert!(CATALOG.windows(2).all(|w| w[0].cost < w[1].cost));
    }

    #[test]
    fn labels_drop_icon_prefix() {
        let labels: Vec<&str> = CATALOG.iter().map(|u| u.label()).collect();
        assert_eq!(labels, vec!["자동 클릭커", "숙련된 제과사", "쿠키 공장"]);
        assert_eq!(CATALOG[0].name, "🖱️ 자동 클릭커");
    }

    #[test]
    fn label_without_icon_is_unchanged() {
        let plain = Upgrade {
            id: 9,
            name: "쿠키 은행",
            cost: 1.0,
            production: 1.0,
        };
        assert_eq!(plain.label(), "쿠키 은행");
    }

    #[test]
    fn find_upgrade_by_id() {
        assert_eq!(find_upgrade(2).map(|u| u.cost), Some(100.0));
        assert!(find_upgrade(99).is_none());
    }

    #[test]
    fn owned_count_unknown_id_is_zero() {
        let mut state = CookieState::new();
        state.owned[0] = 3;
        assert_eq!(state.owned_count(1), 3);
        assert_eq!(state.owned_count(42), 0);
    }

    #[test]
    fn log_truncation() {
        let mut state = CookieState::new();
        for i in 0..60 {
            state.add_log(&format!("msg {}", i), false);
        }
        assert_eq!(state.log.len(), 50);
        assert_eq!(state.log.last().map(|e| e.text.as_str()), Some("msg 59"));
    }
}
