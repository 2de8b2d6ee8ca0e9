//! Copies preference values into builders.
//!
//! Synchronization is one-directional (store → builder). A preference the store knows nothing
//! about (no value, no default) leaves the corresponding option untouched.

use crate::store::{PreferenceStore, PreferenceValue};
use cm_embed::{
    BrowserFactory, BuilderRegistry, CmBuilder, FoldType, Mode, ShowTokenType, Theme,
    WebBrowserType,
};

/// Preference key of the theme name.
pub const THEME_PREFERENCE_NAME: &str = "theme";
/// Preference key of the hover flag.
pub const HOVER_ENABLED_PREFERENCE_NAME: &str = "hoverEnabled";
/// Preference key of the hover delay in milliseconds.
pub const HOVER_DELAY_PREFERENCE_NAME: &str = "hoverDelay";
/// Preference key of the browser engine name.
pub const BROWSER_PREFERENCE_NAME: &str = "browser";

/// Apply every preference to `builder` and the browser engine to `browser`.
pub fn initialize(builder: &mut CmBuilder, store: &dyn PreferenceStore, browser: &BrowserFactory) {
    update_theme(builder, store);
    update_fold(builder, store);
    update_hover(builder, store);
    update_mark_occurrences(builder, store);
    update_default_browser_type(store, browser);
}

/// Look up the builder for `mode` in `registry` and [`initialize`] it.
pub fn initialize_mode(
    registry: &mut BuilderRegistry,
    mode: &Mode,
    store: &dyn PreferenceStore,
    browser: &BrowserFactory,
) {
    initialize(registry.get_builder(mode), store, browser);
}

// ------------------------ Theme

/// Register `theme` as the default theme.
pub fn set_default_theme(store: &mut dyn PreferenceStore, theme: &Theme) {
    store.set_default(THEME_PREFERENCE_NAME, theme.name().into());
}

/// The theme named in the store, if the name is known.
pub fn get_theme(store: &dyn PreferenceStore) -> Option<Theme> {
    if !store.contains(THEME_PREFERENCE_NAME) {
        return None;
    }
    let name = store.get_string(THEME_PREFERENCE_NAME);
    let theme = Theme::from_name(&name);
    if theme.is_none() {
        log::warn!("unknown theme '{name}' in preferences");
    }
    theme
}

/// Set the builder's theme from the store.
pub fn update_theme(builder: &mut CmBuilder, store: &dyn PreferenceStore) {
    if let Some(theme) = get_theme(store) {
        builder.set_theme(Some(&theme));
    }
}

// ------------------------ Folding

/// Register whether `fold_type` is enabled by default.
pub fn set_default_fold_type(store: &mut dyn PreferenceStore, fold_type: FoldType, enabled: bool) {
    store.set_default(fold_type.name(), enabled.into());
}

/// Set the range finder to the builder's supported fold types that are enabled in the store.
pub fn update_fold(builder: &mut CmBuilder, store: &dyn PreferenceStore) {
    let supported = builder.supported_fold_types();
    if !supported.iter().any(|t| store.contains(t.name())) {
        return;
    }
    let enabled: Vec<FoldType> = supported
        .iter()
        .copied()
        .filter(|t| store.get_bool(t.name()))
        .collect();
    builder.options_mut().fold_gutter().set_range_finder(&enabled);
}

// ------------------------ Hover

/// Register whether hover is enabled by default.
pub fn set_default_hover_enabled(store: &mut dyn PreferenceStore, enabled: bool) {
    store.set_default(HOVER_ENABLED_PREFERENCE_NAME, enabled.into());
}

/// Register the default hover delay.
pub fn set_default_hover_delay(store: &mut dyn PreferenceStore, delay: u32) {
    store.set_default(HOVER_DELAY_PREFERENCE_NAME, PreferenceValue::Int(delay.into()));
}

/// Set hover from the store. A delay of `0` means CodeMirror's default delay.
pub fn update_hover(builder: &mut CmBuilder, store: &dyn PreferenceStore) {
    if !store.contains(HOVER_ENABLED_PREFERENCE_NAME) {
        return;
    }
    let mut hover = builder.options_mut().text_hover();
    if store.get_bool(HOVER_ENABLED_PREFERENCE_NAME) {
        hover.set_enabled(true);
        if store.contains(HOVER_DELAY_PREFERENCE_NAME) {
            let delay = store.get_int(HOVER_DELAY_PREFERENCE_NAME);
            hover.set_delay(u32::try_from(delay).ok().filter(|d| *d > 0));
        }
    } else {
        hover.set_enabled(false);
    }
}

// ------------------------ Web browser type

/// Register the default browser engine.
pub fn set_default_web_browser_type(store: &mut dyn PreferenceStore, browser_type: WebBrowserType) {
    store.set_default(BROWSER_PREFERENCE_NAME, browser_type.name().into());
}

/// The browser engine named in the store, if the name is non-empty and known.
pub fn get_web_browser_type(store: &dyn PreferenceStore) -> Option<WebBrowserType> {
    let name = store.get_string(BROWSER_PREFERENCE_NAME);
    if name.trim().is_empty() {
        return None;
    }
    let browser_type = WebBrowserType::from_name(&name);
    if browser_type.is_none() {
        log::warn!("unknown browser type '{name}' in preferences");
    }
    browser_type
}

/// Set the default browser style from the store.
pub fn update_default_browser_type(store: &dyn PreferenceStore, browser: &BrowserFactory) {
    if let Some(browser_type) = get_web_browser_type(store) {
        browser.set_default_style(browser_type.style());
    }
}

// ------------------------ Mark occurrences

/// Register whether occurrences of `token_type` are marked by default.
pub fn set_default_mark_occurrences(
    store: &mut dyn PreferenceStore,
    token_type: ShowTokenType,
    enabled: bool,
) {
    store.set_default(token_type.token(), enabled.into());
}

/// Set the highlighted token types from the store.
pub fn update_mark_occurrences(builder: &mut CmBuilder, store: &dyn PreferenceStore) {
    let all = ShowTokenType::all();
    if !all.iter().any(|t| store.contains(t.token())) {
        return;
    }
    let enabled: Vec<ShowTokenType> = all
        .iter()
        .copied()
        .filter(|t| store.get_bool(t.token()))
        .collect();
    builder
        .options_mut()
        .match_highlighter()
        .set_show_token_types(&enabled);
}
