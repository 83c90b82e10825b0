//! Process-wide switch for experimental features.
//!
//! Renderers and parsers ask the switch whether a named experimental feature
//! is available.  The answer depends on the switch [`FeatureMode`]:
//!
//! | Mode             | `is_enabled(name)`                                  |
//! |------------------|-----------------------------------------------------|
//! | `PerFeature`     | the default registered for `name`, else `false`     |
//! | `AlwaysEnabled`  | `true`                                              |
//! | `AlwaysDisabled` | `false`                                             |
//!
//! The configuration store forces the mode when experimental features are
//! toggled.  Production code shares [`FeatureSwitch::global`]; tests create an
//! isolated switch with [`FeatureSwitch::new`] and inject it, so parallel test
//! cases never observe each other's toggles.
//!
//! The mode has no scoping beyond "last writer wins".

use std::collections::HashMap;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, OnceLock};

use tracing::debug;

/// How the switch answers [`FeatureSwitch::is_enabled`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FeatureMode {
    /// Each feature uses its registered default.
    #[default]
    PerFeature,
    /// Every feature reports enabled.
    AlwaysEnabled,
    /// Every feature reports disabled.
    AlwaysDisabled,
}

impl FeatureMode {
    fn to_raw(self) -> u8 {
        match self {
            FeatureMode::PerFeature => 0,
            FeatureMode::AlwaysEnabled => 1,
            FeatureMode::AlwaysDisabled => 2,
        }
    }

    fn from_raw(raw: u8) -> Self {
        match raw {
            1 => FeatureMode::AlwaysEnabled,
            2 => FeatureMode::AlwaysDisabled,
            _ => FeatureMode::PerFeature,
        }
    }
}

/// Switch consulted to decide whether experimental behaviour is available.
#[derive(Debug, Default)]
pub struct FeatureSwitch {
    mode: AtomicU8,
    defaults: Mutex<HashMap<String, bool>>,
}

static GLOBAL: OnceLock<Arc<FeatureSwitch>> = OnceLock::new();

impl FeatureSwitch {
    /// Creates an isolated switch in [`FeatureMode::PerFeature`] mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the switch shared by the whole process.
    pub fn global() -> Arc<FeatureSwitch> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(FeatureSwitch::new())))
    }

    /// Forces every feature on.
    pub fn force_all_enabled(&self) {
        self.set_mode(FeatureMode::AlwaysEnabled);
    }

    /// Forces every feature off.
    pub fn force_all_disabled(&self) {
        self.set_mode(FeatureMode::AlwaysDisabled);
    }

    /// Returns to per-feature defaults.
    pub fn reset(&self) {
        self.set_mode(FeatureMode::PerFeature);
    }

    /// Current mode.
    pub fn mode(&self) -> FeatureMode {
        FeatureMode::from_raw(self.mode.load(Ordering::SeqCst))
    }

    /// Registers the answer for `name` while in [`FeatureMode::PerFeature`] mode.
    pub fn set_default(&self, name: &str, enabled: bool) {
        self.defaults
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(name.to_string(), enabled);
    }

    /// Returns `true` if the experimental feature `name` is available.
    pub fn is_enabled(&self, name: &str) -> bool {
        match self.mode() {
            FeatureMode::AlwaysEnabled => true,
            FeatureMode::AlwaysDisabled => false,
            FeatureMode::PerFeature => self
                .defaults
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .get(name)
                .copied()
                .unwrap_or(false),
        }
    }

    fn set_mode(&self, mode: FeatureMode) {
        self.mode.store(mode.to_raw(), Ordering::SeqCst);
        debug!(?mode, "feature switch mode changed");
    }
}
