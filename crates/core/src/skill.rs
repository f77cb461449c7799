//! Skill categories and the advisory skill-match hint.

/// Escape-hatch category: the requester supplies free text instead.
pub const SKILL_OTHER: &str = "Other";

/// Fixed skill categories offered at request intake.
///
/// A request's `skill_needed` may also be empty (no category chosen) or
/// free text via the [`SKILL_OTHER`] escape hatch, so this list is a menu,
/// not a validation whitelist.
pub const SKILL_CATEGORIES: &[&str] = &[
    "Electrical",
    "Carpentry/Woodwork",
    "Sewing/Textiles",
    "Plumbing",
    "Mechanical",
    "Electronics",
    "General Handyman",
    SKILL_OTHER,
];

/// Advisory "you could help with this" hint for one user and one request.
///
/// True when any of the user's skills contains, or is contained in, the
/// request's needed skill (case-insensitive). Display signal only: any user
/// may claim any open request regardless of the hint.
///
/// An empty `skill_needed` matches any user that lists at least one skill;
/// a user with no skills never matches.
pub fn skill_match(user_skills: &[String], skill_needed: &str) -> bool {
    let needed = skill_needed.to_lowercase();
    user_skills.iter().any(|skill| {
        let skill = skill.to_lowercase();
        skill.contains(&needed) || needed.contains(&skill)
    })
}
