use crate::model::{Lead, LeadStatus, LeadType, User, UserRole};

/// Accounts written to storage on first run. The admin entry may be
/// overridden from the environment before bootstrap (see `app::App`).
pub fn default_users() -> Vec<User> {
    vec![
        User {
            id: "admin".to_string(),
            username: "ReboundCapitalGroup".to_string(),
            password: "RCG123".to_string(),
            role: UserRole::Admin,
            name: "Admin User".to_string(),
        },
        User {
            id: "user1".to_string(),
            username: "agent1".to_string(),
            password: "agent123".to_string(),
            role: UserRole::User,
            name: "Agent One".to_string(),
        },
    ]
}

/// Sample lead written to storage on first run, replaced by real feed data
/// through bulk upload.
pub fn default_leads() -> Vec<Lead> {
    vec![Lead {
        id: "LEAD_00001".to_string(),
        case_number: "2024-004542-CA-01".to_string(),
        county: "Miami-Dade".to_string(),
        lead_type: LeadType::FutureAuction,
        auction_date: "02/17/2026".to_string(),
        property_address: "527 E DI LIDO DR MIAMI BEACH".to_string(),
        property_city: "Miami Beach".to_string(),
        property_zip: "33139".to_string(),
        assessed_value: "$8,631,405".to_string(),
        judgment_amount: "$5,671,374".to_string(),
        sold_amount: String::new(),
        surplus: String::new(),
        defendants: "527 Edilido LLC; Siffin, Mark A".to_string(),
        plaintiffs: "So-Cal Capital, Inc.".to_string(),
        parcel_id: "02-3232-011-0620".to_string(),
        case_url: "https://miami-dade.realforeclose.com".to_string(),
        zillow_url: "http://www.zillow.com/homes/map/527-E-DI-LIDO-DR,MIAMI-BEACH,33139,fl_rb/"
            .to_string(),
        property_appraiser_url: "https://www.miamidade.gov/Apps/PA/propertysearch/".to_string(),
        status: LeadStatus::New,
        assigned_to: None,
        notes: Vec::new(),
        created_at: "2026-02-17T12:00:00Z".to_string(),
        last_modified: "2026-02-17T12:00:00Z".to_string(),
    }]
}
