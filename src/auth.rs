//! Session Role Helpers
//!
//! The login flow leaves the visitor's role in browser storage; admin
//! gating on this side only controls what renders, the backend re-checks
//! every mutating call.

const ROLE_KEY: &str = "role";

/// Role string for the current visitor, empty when logged out.
pub fn load_role() -> String {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(ROLE_KEY).ok().flatten())
        .unwrap_or_default()
}

/// The login flow stores the admin flag as the literal string "true".
pub fn is_admin_value(role: &str) -> bool {
    role == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_literal_true_marks_an_admin() {
        assert!(is_admin_value("true"));
        assert!(!is_admin_value("TRUE"));
        assert!(!is_admin_value("admin"));
        assert!(!is_admin_value("false"));
        assert!(!is_admin_value(""));
    }
}
