//! Browser engine selection for the host's embedded browser control.
//!
//! The document itself does not depend on the engine; this only records which engine the
//! host should create its browser control with.

use std::sync::atomic::{AtomicU32, Ordering};

/// A browser engine the host can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebBrowserType {
    /// Platform default engine.
    Default,
    /// Gecko (XULRunner).
    Mozilla,
    /// WebKit.
    WebKit,
}

impl WebBrowserType {
    /// All engines.
    pub const ALL: [WebBrowserType; 3] = [Self::Default, Self::Mozilla, Self::WebKit];

    /// The name stored in preferences.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Mozilla => "MOZILLA",
            Self::WebKit => "WEBKIT",
        }
    }

    /// Parse a stored name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Style bits the host passes when creating a browser control.
    pub fn style(&self) -> u32 {
        match self {
            Self::Default => 0,
            Self::Mozilla => 1 << 15,
            Self::WebKit => 1 << 16,
        }
    }
}

/// Holds the default browser style used when the host creates browser controls.
///
/// A process normally uses the instance returned by [`BrowserFactory::global`]; tests and hosts
/// that want isolation can create their own.
#[derive(Debug, Default)]
pub struct BrowserFactory {
    default_style: AtomicU32,
}

static GLOBAL: BrowserFactory = BrowserFactory::new();

impl BrowserFactory {
    /// Create a factory with the platform default style.
    pub const fn new() -> Self {
        Self {
            default_style: AtomicU32::new(0),
        }
    }

    /// The process-wide factory.
    pub fn global() -> &'static BrowserFactory {
        &GLOBAL
    }

    /// Current default style bits.
    pub fn default_style(&self) -> u32 {
        self.default_style.load(Ordering::Relaxed)
    }

    /// Replace the default style bits.
    pub fn set_default_style(&self, style: u32) {
        self.default_style.store(style, Ordering::Relaxed);
    }
}
