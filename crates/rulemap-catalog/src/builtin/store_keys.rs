use rulemap_core::models::KeyDescriptor;

/// (identifier, label, group) for every field of the sample lending data model.
const STORE_KEYS: &[(&str, &str, &str)] = &[
    ("business.address.pincode", "Business Pincode", "business"),
    ("business.address.state", "Business State", "business"),
    ("business.vintage_in_years", "Business Vintage In Years", "business"),
    ("business.commercial_cibil_score", "Commercial Cibil Score", "business"),
    ("primary_applicant.age", "Primary Applicant Age", "primary_applicant"),
    ("primary_applicant.monthly_income", "Primary Applicant Monthly Income", "primary_applicant"),
    ("primary_applicant.tags", "Primary Applicant Tags", "primary_applicant"),
    ("bureau.score", "Bureau Score", "bureau"),
    ("bureau.is_ntc", "Is New to Credit?", "bureau"),
    ("bureau.overdue_amount", "Overdue Amount", "bureau"),
    ("bureau.dpd", "DPD", "bureau"),
    ("bureau.active_accounts", "Active Accounts", "bureau"),
    ("bureau.enquiries", "Enquiries", "bureau"),
    ("bureau.suit_filed", "Suit Filed", "bureau"),
    ("bureau.wilful_default", "Wilful Default", "bureau"),
    ("banking.abb", "ABB", "banking"),
    ("banking.avg_monthly_turnover", "Avg Monthly Turnover", "banking"),
    ("banking.total_credits", "Total Credits", "banking"),
    ("banking.total_debits", "Total Debits", "banking"),
    ("banking.inward_bounces", "Inward Bounces", "banking"),
    ("banking.outward_bounces", "Outward Bounces", "banking"),
    ("gst.registration_age_months", "Registration Age Months", "gst"),
    ("gst.place_of_supply_count", "Place Of Supply Count", "gst"),
    ("gst.is_gstin", "Is GSTIN", "gst"),
    ("gst.filing_amount", "Filing Amount", "gst"),
    ("gst.missed_returns", "Missed Returns", "gst"),
    ("gst.monthly_turnover_avg", "Monthly Turnover Avg", "gst"),
    ("gst.turnover", "Turnover", "gst"),
    ("gst.turnover_growth_rate", "Turnover Growth Rate", "gst"),
    ("gst.output_tax_liability", "Output Tax Liability", "gst"),
    ("gst.tax_paid_cash_vs_credit_ratio", "Tax Paid Cash Vs Credit Ratio", "gst"),
    ("gst.high_risk_suppliers_count", "High Risk Suppliers Count", "gst"),
    ("gst.supplier_concentration_ratio", "Supplier Concentration Ratio", "gst"),
    ("gst.customer_concentration_ratio", "Customer Concentration Ratio", "gst"),
    ("itr.years_filed", "Years Filed", "itr"),
    ("foir", "FOIR", "metrics"),
    ("debt_to_income", "Debt To Income", "metrics"),
];

/// Descriptors of the sample data model, in catalog order, without synonyms.
pub fn store_keys() -> Vec<KeyDescriptor> {
    STORE_KEYS
        .iter()
        .map(|&(identifier, label, group)| KeyDescriptor::new(identifier, label, group))
        .collect()
}
