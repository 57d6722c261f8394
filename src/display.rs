//! Pure display helpers for the profile screen.
//!
//! Every function here is total: unknown or absent input maps to a
//! fallback, never to a panic.

use crate::models::Role;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#rrggbb`
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Colour used for unknown or absent roles.
pub const NEUTRAL_GRAY: Rgb = Rgb(0x75, 0x75, 0x75);

/// Label used when there is no role at all.
pub const UNKNOWN_ROLE_LABEL: &str = "UNKNOWN";

/// Icon shown next to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleIcon {
    AdminShield,
    Person,
    School,
    Supervisor,
    AccountBalance,
    Group,
}

impl RoleIcon {
    /// Single-cell terminal glyph.
    pub fn glyph(&self) -> &'static str {
        match self {
            RoleIcon::AdminShield => "⛨",
            RoleIcon::Person => "●",
            RoleIcon::School => "✎",
            RoleIcon::Supervisor => "◆",
            RoleIcon::AccountBalance => "⌂",
            RoleIcon::Group => "⁂",
        }
    }
}

pub fn role_icon(role: Option<&Role>) -> RoleIcon {
    match role {
        Some(Role::Admin) | Some(Role::SuperAdmin) => RoleIcon::AdminShield,
        Some(Role::Teacher) => RoleIcon::Person,
        Some(Role::Student) => RoleIcon::School,
        Some(Role::HeadOfDepartment) => RoleIcon::Supervisor,
        Some(Role::Dean) => RoleIcon::AccountBalance,
        Some(Role::CourseCoordinator) => RoleIcon::Group,
        Some(Role::Other(_)) | None => RoleIcon::Person,
    }
}

pub fn role_color(role: Option<&Role>) -> Rgb {
    match role {
        Some(Role::Admin) => Rgb(0xd3, 0x2f, 0x2f),
        Some(Role::SuperAdmin) => Rgb(0x7b, 0x1f, 0xa2),
        Some(Role::Teacher) => Rgb(0x19, 0x76, 0xd2),
        Some(Role::Student) => Rgb(0x38, 0x8e, 0x3c),
        Some(Role::HeadOfDepartment) => Rgb(0xf5, 0x7c, 0x00),
        Some(Role::Dean) => Rgb(0x5d, 0x40, 0x37),
        Some(Role::CourseCoordinator) => Rgb(0x00, 0x97, 0xa7),
        Some(Role::Other(_)) | None => NEUTRAL_GRAY,
    }
}

/// Human-readable role name. Unknown tags are shown upper-cased.
pub fn role_label(role: Option<&Role>) -> String {
    match role {
        Some(Role::Admin) => "Administrator".to_string(),
        Some(Role::SuperAdmin) => "Super Administrator".to_string(),
        Some(Role::Teacher) => "Teacher".to_string(),
        Some(Role::Student) => "Student".to_string(),
        Some(Role::HeadOfDepartment) => "Head of Department".to_string(),
        Some(Role::Dean) => "Dean".to_string(),
        Some(Role::CourseCoordinator) => "Course Coordinator".to_string(),
        Some(Role::Other(tag)) if !tag.trim().is_empty() => tag.to_uppercase(),
        Some(Role::Other(_)) | None => UNKNOWN_ROLE_LABEL.to_string(),
    }
}

/// Up to two upper-case initials, one per whitespace-separated word.
///
/// ```
/// use campus_profile::display::initials;
///
/// assert_eq!(initials(Some("Jane Doe")), "JD");
/// assert_eq!(initials(None), "?");
/// ```
pub fn initials(name: Option<&str>) -> String {
    let firsts: String = name
        .unwrap_or_default()
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect();

    if firsts.is_empty() {
        return "?".to_string();
    }

    firsts.to_uppercase().chars().take(2).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_mappings() {
        let expected = [
            (Role::Admin, RoleIcon::AdminShield, "#d32f2f", "Administrator"),
            (Role::SuperAdmin, RoleIcon::AdminShield, "#7b1fa2", "Super Administrator"),
            (Role::Teacher, RoleIcon::Person, "#1976d2", "Teacher"),
            (Role::Student, RoleIcon::School, "#388e3c", "Student"),
            (Role::HeadOfDepartment, RoleIcon::Supervisor, "#f57c00", "Head of Department"),
            (Role::Dean, RoleIcon::AccountBalance, "#5d4037", "Dean"),
            (Role::CourseCoordinator, RoleIcon::Group, "#0097a7", "Course Coordinator"),
        ];

        for (role, icon, color, label) in expected {
            assert_eq!(role_icon(Some(&role)), icon, "icon for {}", role);
            assert_eq!(role_color(Some(&role)).hex(), color, "color for {}", role);
            assert_eq!(role_label(Some(&role)), label, "label for {}", role);
        }
    }

    #[test]
    fn test_unknown_role_fallbacks() {
        let librarian = Role::Other("librarian".to_string());
        assert_eq!(role_icon(Some(&librarian)), RoleIcon::Person);
        assert_eq!(role_color(Some(&librarian)), NEUTRAL_GRAY);
        assert_eq!(role_color(Some(&librarian)).hex(), "#757575");
        assert_eq!(role_label(Some(&librarian)), "LIBRARIAN");
    }

    #[test]
    fn test_absent_role_fallbacks() {
        assert_eq!(role_icon(None), RoleIcon::Person);
        assert_eq!(role_color(None), NEUTRAL_GRAY);
        assert_eq!(role_label(None), UNKNOWN_ROLE_LABEL);
    }

    #[test]
    fn test_blank_unknown_tag_label() {
        let blank = Role::Other(String::new());
        assert_eq!(role_label(Some(&blank)), UNKNOWN_ROLE_LABEL);
    }

    #[test]
    fn test_uppercasing_non_latin_tag() {
        let tag = Role::Other("教务".to_string());
        assert_eq!(role_label(Some(&tag)), "教务");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials(Some("Jane Doe")), "JD");
        assert_eq!(initials(Some("Madonna")), "M");
        assert_eq!(initials(Some("")), "?");
        assert_eq!(initials(None), "?");
        assert_eq!(initials(Some("ana maria lopez")), "AM");
    }

    #[test]
    fn test_initials_whitespace() {
        assert_eq!(initials(Some("   ")), "?");
        assert_eq!(initials(Some("  jane   doe  ")), "JD");
        assert_eq!(initials(Some("jane\tdoe")), "JD");
    }

    #[test]
    fn test_initials_non_ascii() {
        assert_eq!(initials(Some("élodie ñúñez")), "ÉÑ");
        assert_eq!(initials(Some("李 小龙")), "李小");
    }

    #[test]
    fn test_glyphs_are_non_empty() {
        for icon in [
            RoleIcon::AdminShield,
            RoleIcon::Person,
            RoleIcon::School,
            RoleIcon::Supervisor,
            RoleIcon::AccountBalance,
            RoleIcon::Group,
        ] {
            assert!(!icon.glyph().is_empty());
        }
    }
}
