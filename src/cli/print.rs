//! Plain-text output for the non-interactive modes.

use crate::controller::ViewState;
use crate::display::role_label;
use crate::error::GENERIC_FETCH_MESSAGE;
use crate::models::UserProfile;

/// Separator width under the summary title.
const LINE_WIDTH: usize = 60;

/// Label column width in the summary.
const LABEL_WIDTH: usize = 16;

pub const EMPTY_MESSAGE: &str = "No profile data available";

/// Text to print and where it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Printed {
    Stdout(String),
    Stderr(String),
}

impl Printed {
    pub fn exit_code(&self) -> u8 {
        match self {
            Printed::Stdout(_) => 0,
            Printed::Stderr(_) => 1,
        }
    }

    pub fn emit(&self) -> u8 {
        match self {
            Printed::Stdout(text) => println!("{}", text),
            Printed::Stderr(text) => eprintln!("{}", text),
        }
        self.exit_code()
    }
}

fn non_loaded(state: &ViewState) -> Printed {
    match state {
        ViewState::Empty => Printed::Stdout(EMPTY_MESSAGE.to_string()),
        ViewState::Error(message) => Printed::Stderr(message.clone()),
        // A finished load never leaves the controller in Loading
        ViewState::Loading | ViewState::Loaded(_) => Printed::Stderr(GENERIC_FETCH_MESSAGE.to_string()),
    }
}

/// `--json`: the complete record, pretty-printed.
pub fn json_output(state: &ViewState) -> Printed {
    match state {
        ViewState::Loaded(profile) => Printed::Stdout(profile.to_pretty_json()),
        other => non_loaded(other),
    }
}

/// `--summary`: the profile card as text.
pub fn summary_output(state: &ViewState) -> Printed {
    match state {
        ViewState::Loaded(profile) => Printed::Stdout(summary_text(profile)),
        other => non_loaded(other),
    }
}

fn row(out: &mut Vec<String>, label: &str, value: impl AsRef<str>) {
    out.push(format!(
        "  {:<width$}{}",
        format!("{}:", label),
        value.as_ref(),
        width = LABEL_WIDTH
    ));
}

/// ```text
/// Jane Doe
/// ════════════════════════════════════════════════════════════
///   Role:           Teacher
///   Email:          jane@campus.edu
/// ```
pub fn summary_text(profile: &UserProfile) -> String {
    let mut out = vec![
        profile.name().unwrap_or("-").to_string(),
        "═".repeat(LINE_WIDTH),
    ];

    row(&mut out, "Role", role_label(profile.role()));
    row(&mut out, "Email", profile.email().unwrap_or("-"));
    row(&mut out, "User ID", profile.id().unwrap_or("-"));
    if let Some(reg_no) = profile.registration_number() {
        row(&mut out, "Reg. Number", reg_no);
    }
    if let Some(teacher_id) = profile.staff_id() {
        row(&mut out, "Teacher ID", teacher_id);
    }
    if let Some(school) = profile.school() {
        row(&mut out, "School", school.display());
    }
    if let Some(department) = profile.department() {
        row(&mut out, "Department", department.display());
    }
    if profile.has_multiple_roles() {
        let labels: Vec<String> = profile.roles().iter().map(|r| role_label(Some(r))).collect();
        row(&mut out, "All Roles", labels.join(", "));
    }
    if profile.course_count() > 0 {
        row(&mut out, "Courses", profile.course_count().to_string());
    }
    row(&mut out, "Created", profile.created_date());
    row(&mut out, "Last Updated", profile.updated_date());

    out.join("\n")
}
