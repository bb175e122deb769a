/// Domain terms scanned for by literal containment in the lowercased prompt.
///
/// Containment is plain substring search, so short terms also fire inside
/// longer words ("age" in "vintage").
pub const DEFAULT_VOCABULARY: &[&str] = &[
    "credit score",
    "bureau score",
    "cibil",
    "cibil score",
    "business vintage",
    "business age",
    "company age",
    "vintage",
    "applicant age",
    "age",
    "customer age",
    "monthly income",
    "income",
    "salary",
    "dpd",
    "days past due",
    "overdue",
    "wilful default",
    "willful default",
    "default",
    "overdue amount",
    "outstanding",
    "turnover",
    "gst turnover",
    "revenue",
    "bank balance",
    "abb",
    "bounces",
    "cheque bounce",
    "foir",
    "debt to income",
    "tags",
    "veteran",
    "new to credit",
    "ntc",
];
