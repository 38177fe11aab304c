use serde::{Deserialize, Serialize};

/// Descriptive strings passed through unmodified to the backend and into
/// reports; nothing here interprets them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub name: String,
    pub industry: String,
    pub business_type: String,
}

/// A registered company as returned by `POST /companies/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    #[serde(flatten)]
    pub profile: CompanyProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn company_decodes_with_flattened_profile() {
        let company: Company = serde_json::from_value(serde_json::json!({
            "id": 7,
            "name": "Demo SME Ltd",
            "industry": "Retail",
            "business_type": "E-Commerce",
            "created_at": "2026-08-25T00:00:00",
        }))
        .unwrap();
        assert_eq!(company.id, 7);
        assert_eq!(company.profile.name, "Demo SME Ltd");
    }
}
