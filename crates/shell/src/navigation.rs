//! Tab navigation and the platform-selected chrome around screens.

use crate::config::Platform;

/// Top-level destinations, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Jobs,
    Customers,
    Inventory,
    Marketing,
    Profile,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Jobs,
        Tab::Customers,
        Tab::Inventory,
        Tab::Marketing,
        Tab::Profile,
    ];

    pub fn route(self) -> &'static str {
        match self {
            Tab::Dashboard => "/(tabs)/(home)/",
            Tab::Jobs => "/(tabs)/jobs",
            Tab::Customers => "/(tabs)/customers",
            Tab::Inventory => "/(tabs)/inventory",
            Tab::Marketing => "/(tabs)/marketing",
            Tab::Profile => "/(tabs)/profile",
        }
    }

    /// SF Symbol name.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Dashboard => "house.fill",
            Tab::Jobs => "wrench.and.screwdriver.fill",
            Tab::Customers => "person.2.fill",
            Tab::Inventory => "square.stack.3d.up.fill",
            Tab::Marketing => "megaphone.fill",
            Tab::Profile => "person.fill",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Jobs => "Jobs",
            Tab::Customers => "Customers",
            Tab::Inventory => "Inventory",
            Tab::Marketing => "Marketing",
            Tab::Profile => "Profile",
        }
    }
}

/// How a screen's title and the tab bar are drawn on a given platform.
pub trait TabChrome {
    fn name(&self) -> &'static str;

    /// Title line drawn by the platform navigation bar, if any.
    fn navigation_title(&self, title: &str) -> Option<String>;

    /// Header the screen must draw inside its own content, if any.
    fn in_content_header(&self, title: &str) -> Option<String>;

    /// Space the screen reserves below its content for an overlaid tab bar.
    fn bottom_padding(&self) -> u16;

    fn render_tab_bar(&self, active: Tab) -> String;
}

/// The platform's own tab strip (iOS).
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTabStrip;

impl TabChrome for NativeTabStrip {
    fn name(&self) -> &'static str {
        "native-tabs"
    }

    fn navigation_title(&self, title: &str) -> Option<String> {
        Some(format!("< {title} >"))
    }

    fn in_content_header(&self, _title: &str) -> Option<String> {
        None
    }

    fn bottom_padding(&self) -> u16 {
        0
    }

    fn render_tab_bar(&self, active: Tab) -> String {
        Tab::ALL
            .iter()
            .map(|&tab| {
                if tab == active {
                    format!("[{}]", tab.label())
                } else {
                    tab.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}

/// A custom bar floating over stack-navigated screens (Android, Web).
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatingTabBar;

impl FloatingTabBar {
    pub const RESERVED_HEIGHT: u16 = 100;
}

impl TabChrome for FloatingTabBar {
    fn name(&self) -> &'static str {
        "floating-tab-bar"
    }

    fn navigation_title(&self, _title: &str) -> Option<String> {
        None
    }

    fn in_content_header(&self, title: &str) -> Option<String> {
        Some(format!("{title}  (+)"))
    }

    fn bottom_padding(&self) -> u16 {
        Self::RESERVED_HEIGHT
    }

    fn render_tab_bar(&self, active: Tab) -> String {
        let tabs = Tab::ALL
            .iter()
            .map(|&tab| {
                if tab == active {
                    format!("*{}*", tab.label())
                } else {
                    tab.label().to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ");
        format!("( {tabs} )")
    }
}

/// Select the chrome strategy once, at startup.
pub fn chrome_for(platform: Platform) -> Box<dyn TabChrome> {
    match platform {
        Platform::Ios => Box::new(NativeTabStrip),
        Platform::Android | Platform::Web => Box::new(FloatingTabBar),
    }
}
