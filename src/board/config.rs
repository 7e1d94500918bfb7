//! Board construction settings.

/// Seed used for every board unless overridden.
pub const DEFAULT_SEED: u64 = 42;

const FULL_BORDER_ENV: &str = "LIFE_BOARD_FULL_BORDER";

/// Which coordinates the single-cell accessors accept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BorderPolicy {
    /// Requires `x-1 >= 0 && x+1 < size` on both axes. The outermost ring
    /// always reads as dead and rejects writes, although the advance still
    /// treats those cells as full participants.
    #[default]
    Interior,
    /// Every coordinate in `[0, size)` is addressable.
    Full,
}

impl BorderPolicy {
    #[inline(always)]
    pub(crate) fn accepts(self, coord: i64, size: usize) -> bool {
        let size = size as i64;
        match self {
            // Same as `coord - 1 >= 0 && coord + 1 < size`, without overflow.
            BorderPolicy::Interior => coord >= 1 && coord < size - 1,
            BorderPolicy::Full => coord >= 0 && coord < size,
        }
    }
}

/// Configuration for a `LifeBoard`.
///
/// `BoardConfig::default()` gives the fixed seed and the border policy from
/// the environment; the builder methods pin either explicitly.
#[derive(Clone, Debug, Default)]
pub struct BoardConfig {
    /// PRNG seed for the initial pattern. `None` means `DEFAULT_SEED`.
    pub seed: Option<u64>,
    /// Border policy for `get_cell`/`set_cell`.
    /// `None` reads `LIFE_BOARD_FULL_BORDER` (`1`/`true` selects `Full`).
    pub border: Option<BorderPolicy>,
}

impl BoardConfig {
    /// Seed the initial pattern from `seed` instead of `DEFAULT_SEED`.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Force a specific border policy.
    pub fn border_policy(mut self, policy: BorderPolicy) -> Self {
        self.border = Some(policy);
        self
    }

    pub(crate) fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or(DEFAULT_SEED)
    }

    pub(crate) fn resolve_border(&self) -> BorderPolicy {
        self.border.unwrap_or_else(detect_border_policy)
    }
}

fn detect_border_policy() -> BorderPolicy {
    let Ok(raw) = std::env::var(FULL_BORDER_ENV) else {
        return BorderPolicy::Interior;
    };
    match parse_flag(&raw) {
        Some(true) => {
            log::debug!("{FULL_BORDER_ENV}={raw}: full border addressing");
            BorderPolicy::Full
        }
        Some(false) => BorderPolicy::Interior,
        None => {
            log::warn!("ignoring {FULL_BORDER_ENV}={raw:?}, expected 1/0/true/false");
            BorderPolicy::Interior
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    let v = value.trim();
    if v.is_empty() {
        Some(false)
    } else if v == "1" || v.eq_ignore_ascii_case("true") {
        Some(true)
    } else if v == "0" || v.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
