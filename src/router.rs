//! Routing Interface
//!
//! The storefront core does not own routing; pages only need "what is the
//! current path" and "go to path X". This module defines that interface and
//! a stub implementation for tests and the demo binary.

use std::sync::Mutex;

/// The storefront's navigable paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPath {
    Home,
    Products,
    About,
    Contact,
    Cart,
}

impl AppPath {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppPath::Home => "/",
            AppPath::Products => "/products",
            AppPath::About => "/about",
            AppPath::Contact => "/contact",
            AppPath::Cart => "/cart",
        }
    }
}

/// Maps a raw path onto a known [`AppPath`], stripping trailing slashes;
/// unknown paths degrade to home.
pub fn normalize_path(pathname: &str) -> AppPath {
    let trimmed = pathname.trim_end_matches('/');
    let normalized = if trimmed.is_empty() { "/" } else { trimmed };
    match normalized {
        "/" => AppPath::Home,
        "/products" => AppPath::Products,
        "/about" => AppPath::About,
        "/contact" => AppPath::Contact,
        "/cart" => AppPath::Cart,
        _ => AppPath::Home,
    }
}

/// The navigation surface pages consume.
pub trait Navigator: Send + Sync {
    fn current_path(&self) -> AppPath;
    fn navigate(&self, to: AppPath);
}

/// In-memory navigator for tests and headless use.
pub struct StubNavigator {
    current: Mutex<AppPath>,
}

impl Default for StubNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl StubNavigator {
    pub fn new() -> Self {
        Self {
            current: Mutex::new(AppPath::Home),
        }
    }
}

impl Navigator for StubNavigator {
    fn current_path(&self) -> AppPath {
        *self.current.lock().expect("navigator poisoned")
    }

    fn navigate(&self, to: AppPath) {
        *self.current.lock().expect("navigator poisoned") = to;
    }
}
