//! Pulls editor names out of a credits crew list.

use tmdb_client::CrewMember;

/// Department value that marks a crew member as an editor
pub const EDITING_DEPARTMENT: &str = "Editing";

/// Names of crew members in the editing department, in upstream order.
///
/// Matching is exact and case-sensitive. A missing crew list yields no
/// editors.
pub fn extract_editors(crew: Option<&[CrewMember]>) -> Vec<String> {
    crew.unwrap_or_default()
        .iter()
        .filter(|member| member.department() == Some(EDITING_DEPARTMENT))
        .map(|member| member.name.clone())
        .collect()
}
