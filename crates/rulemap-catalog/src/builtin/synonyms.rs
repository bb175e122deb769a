use crate::synonyms::SynonymTable;

/// Alternative phrasings for the sample data model.
const SYNONYMS: &[(&str, &[&str])] = &[
    (
        "bureau.score",
        &[
            "credit score",
            "cibil score",
            "cibil",
            "credit rating",
            "credit bureau score",
        ],
    ),
    (
        "bureau.dpd",
        &[
            "days past due",
            "dpd",
            "overdue days",
            "delay days",
            "payment delay",
        ],
    ),
    (
        "bureau.wilful_default",
        &[
            "willful default",
            "intentional default",
            "deliberate default",
        ],
    ),
    (
        "bureau.is_ntc",
        &[
            "new to credit",
            "ntc",
            "no credit history",
            "first time borrower",
        ],
    ),
    (
        "bureau.overdue_amount",
        &[
            "outstanding amount",
            "pending amount",
            "dues",
            "arrears",
        ],
    ),
    (
        "bureau.enquiries",
        &[
            "credit inquiries",
            "credit checks",
            "hard pulls",
            "credit applications",
        ],
    ),
    (
        "bureau.suit_filed",
        &[
            "legal case",
            "court case",
            "lawsuit",
            "legal action",
        ],
    ),
    (
        "business.vintage_in_years",
        &[
            "business age",
            "company age",
            "years in business",
            "business duration",
            "establishment years",
            "vintage",
        ],
    ),
    (
        "business.commercial_cibil_score",
        &[
            "commercial credit score",
            "business credit score",
            "company cibil",
        ],
    ),
    (
        "primary_applicant.age",
        &[
            "applicant age",
            "customer age",
            "borrower age",
            "age",
        ],
    ),
    (
        "primary_applicant.monthly_income",
        &[
            "income",
            "salary",
            "monthly salary",
            "earnings",
            "monthly earnings",
        ],
    ),
    (
        "primary_applicant.tags",
        &[
            "applicant tags",
            "customer tags",
            "labels",
            "categories",
            "veteran",
            "employee type",
        ],
    ),
    (
        "banking.abb",
        &[
            "average bank balance",
            "abb",
            "average balance",
            "bank balance",
        ],
    ),
    (
        "banking.avg_monthly_turnover",
        &[
            "monthly turnover",
            "bank turnover",
            "account turnover",
        ],
    ),
    (
        "banking.inward_bounces",
        &[
            "cheque bounce",
            "check bounce",
            "inward return",
            "deposit bounce",
        ],
    ),
    (
        "banking.outward_bounces",
        &[
            "issued cheque bounce",
            "payment bounce",
            "outward return",
        ],
    ),
    (
        "gst.turnover",
        &[
            "gst turnover",
            "sales turnover",
            "revenue",
            "sales",
        ],
    ),
    (
        "gst.missed_returns",
        &[
            "gst default",
            "filing default",
            "missed filings",
        ],
    ),
    (
        "gst.registration_age_months",
        &[
            "gst age",
            "gst vintage",
            "registration duration",
        ],
    ),
    (
        "foir",
        &[
            "fixed obligation to income ratio",
            "foir ratio",
            "obligation ratio",
            "emi to income",
        ],
    ),
    (
        "debt_to_income",
        &[
            "dti",
            "debt ratio",
            "leverage ratio",
            "debt burden",
        ],
    ),
    (
        "itr.years_filed",
        &[
            "tax returns filed",
            "itr filings",
            "income tax years",
        ],
    ),
];

/// Synonym table for the sample data model.
pub fn synonym_table() -> SynonymTable {
    SYNONYMS
        .iter()
        .map(|&(identifier, phrases)| (identifier, phrases.iter().copied()))
        .collect()
}
