use leptos::prelude::*;

/// SVG icon from `public/icons`
///
/// Rendered as a CSS mask over `currentColor`, so the icon takes the text
/// colour of its parent.
#[component]
pub fn Icon(
    /// Icon name (file name without the .svg extension)
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <span
            class=format!("icon inline-block shrink-0 bg-current {}", class)
            style=mask_style(name)
            aria-hidden="true"
        ></span>
    }
}

fn mask_style(name: &str) -> String {
    let url = format!("url(/icons/{}.svg)", name);
    format!("mask-image: {url}; -webkit-mask-image: {url};")
}

/// Icon names shipped in `public/icons`
pub mod icons {
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const ARROW_LEFT: &str = "arrow-left";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const AWARD: &str = "award";
    pub const BUILDING: &str = "building";
    pub const CALENDAR: &str = "calendar";
    pub const CAR: &str = "car";
    pub const CHECK_CIRCLE: &str = "check-circle";
    pub const CLOCK: &str = "clock";
    pub const COFFEE: &str = "coffee";
    pub const HEART: &str = "heart";
    pub const INFO: &str = "info";
    pub const MAIL: &str = "mail";
    pub const MAP_PIN: &str = "map-pin";
    pub const MENU: &str = "menu";
    pub const MESSAGE_SQUARE: &str = "message-square";
    pub const PHONE: &str = "phone";
    pub const SEND: &str = "send";
    pub const SHIELD: &str = "shield";
    pub const STAR: &str = "star";
    pub const TARGET: &str = "target";
    pub const USERS: &str = "users";
    pub const WIFI: &str = "wifi";
    pub const X: &str = "x";

    /// Every icon above, for asset checks
    pub const ALL: &[&str] = &[
        ALERT_CIRCLE, ARROW_LEFT, ARROW_RIGHT, AWARD, BUILDING, CALENDAR, CAR, CHECK_CIRCLE,
        CLOCK, COFFEE, HEART, INFO, MAIL, MAP_PIN, MENU, MESSAGE_SQUARE, PHONE, SEND, SHIELD,
        STAR, TARGET, USERS, WIFI, X,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{ABOUT_CARDS, BOOKING_PROCESS, COMMON_AMENITIES, COMPANY_VALUES, CONTACT_CHANNELS};
    use std::path::Path;

    #[test]
    fn test_mask_style() {
        assert_eq!(
            mask_style("star"),
            "mask-image: url(/icons/star.svg); -webkit-mask-image: url(/icons/star.svg);"
        );
    }

    #[test]
    fn test_every_icon_has_an_svg() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("public/icons");
        for name in icons::ALL {
            assert!(dir.join(format!("{name}.svg")).is_file(), "missing icon {name}");
        }
    }

    #[test]
    fn test_catalog_icons_are_known() {
        let names = ABOUT_CARDS
            .iter()
            .map(|c| c.icon)
            .chain(BOOKING_PROCESS.iter().map(|s| s.icon))
            .chain(COMPANY_VALUES.iter().map(|v| v.icon))
            .chain(COMMON_AMENITIES.iter().map(|a| a.icon))
            .chain(CONTACT_CHANNELS.iter().map(|c| c.icon));
        for name in names {
            assert!(icons::ALL.contains(&name), "unknown icon {name}");
        }
    }
}
