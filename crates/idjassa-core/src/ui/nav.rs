use super::dom::Dom;
use super::styles::{DISPLAY_FLEX, DISPLAY_NONE};
use crate::auth::Session;

pub const NAV_GUEST: &str = "nav-guest";
pub const NAV_USER: &str = "nav-user";
pub const NAV_USERNAME: &str = "nav-username";

/// Show the guest or the signed-in navbar depending on the stored user.
pub fn init_nav(dom: &mut impl Dom, session: &Session) {
    match session.user {
        Some(ref user) => {
            dom.set_display(NAV_GUEST, DISPLAY_NONE);
            dom.set_display(NAV_USER, DISPLAY_FLEX);
            dom.set_text(NAV_USERNAME, user.display_name());
        }
        None => {
            dom.set_display(NAV_GUEST, DISPLAY_FLEX);
            dom.set_display(NAV_USER, DISPLAY_NONE);
        }
    }
}
