use crate::model::{Lead, LeadStatus, LeadType, User};

/// Dashboard filter state. `None` means "all" for the three dropdowns; an
/// empty search term matches everything.
#[derive(Debug, Clone, Default)]
pub struct LeadFilters {
    pub search_term: String,
    pub status: Option<LeadStatus>,
    pub lead_type: Option<LeadType>,
    pub county: Option<String>,
}

/// Derive the visible subset of `leads` for `viewer`. All predicates must
/// pass; non-admins additionally only see leads assigned to them. The result
/// preserves the source collection's order.
pub fn visible_leads<'a>(leads: &'a [Lead], filters: &LeadFilters, viewer: &User) -> Vec<&'a Lead> {
    let term = filters.search_term.trim().to_lowercase();
    leads
        .iter()
        .filter(|lead| term.is_empty() || matches_search(lead, &term))
        .filter(|lead| filters.status.map_or(true, |s| lead.status == s))
        .filter(|lead| filters.lead_type.map_or(true, |t| lead.lead_type == t))
        .filter(|lead| {
            filters
                .county
                .as_deref()
                .map_or(true, |county| lead.county == county)
        })
        .filter(|lead| {
            viewer.role.is_admin() || lead.assigned_to.as_deref() == Some(viewer.id.as_str())
        })
        .collect()
}

/// Case-insensitive substring match against case number, property address,
/// county, or defendants. `term` must already be lowercased.
fn matches_search(lead: &Lead, term: &str) -> bool {
    lead.case_number.to_lowercase().contains(term)
        || lead.property_address.to_lowercase().contains(term)
        || lead.county.to_lowercase().contains(term)
        || lead.defendants.to_lowercase().contains(term)
}
