/// Word lists the schema generators draw attribute values from.
///
/// Loaded once and passed to generators through the generator context, so
/// tests and alternative deployments can swap lists without touching the
/// generator code. Every list must be non-empty.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub company_adjectives: &'static [&'static str],
    pub company_nouns: &'static [&'static str],
    pub company_suffixes: &'static [&'static str],
    pub industries: &'static [&'static str],
    pub company_sizes: &'static [&'static str],
    pub job_titles: &'static [&'static str],
    pub departments: &'static [&'static str],
    pub opportunity_stages: &'static [&'static str],
    pub deal_names: &'static [&'static str],
    pub account_types: &'static [&'static str],
    pub account_names: &'static [&'static str],
    pub currencies: &'static [&'static str],
    pub transaction_descriptions: &'static [&'static str],
    pub vendor_categories: &'static [&'static str],
    pub payment_terms: &'static [&'static str],
    pub positions: &'static [&'static str],
    pub department_names: &'static [&'static str],
    pub office_locations: &'static [&'static str],
    pub campaign_types: &'static [&'static str],
    pub campaign_themes: &'static [&'static str],
    pub seasons: &'static [&'static str],
    pub audiences: &'static [&'static str],
    pub campaign_statuses: &'static [&'static str],
    pub lead_sources: &'static [&'static str],
    pub lead_statuses: &'static [&'static str],
    pub product_adjectives: &'static [&'static str],
    pub product_items: &'static [&'static str],
    pub product_categories: &'static [&'static str],
    pub order_statuses: &'static [&'static str],
    pub supplier_categories: &'static [&'static str],
    pub countries: &'static [&'static str],
}

impl Vocabulary {
    pub fn builtin() -> Self {
        Self {
            first_names: FIRST_NAMES,
            last_names: LAST_NAMES,
            company_adjectives: COMPANY_ADJECTIVES,
            company_nouns: COMPANY_NOUNS,
            company_suffixes: COMPANY_SUFFIXES,
            industries: INDUSTRIES,
            company_sizes: COMPANY_SIZES,
            job_titles: JOB_TITLES,
            departments: DEPARTMENTS,
            opportunity_stages: OPPORTUNITY_STAGES,
            deal_names: DEAL_NAMES,
            account_types: ACCOUNT_TYPES,
            account_names: ACCOUNT_NAMES,
            currencies: CURRENCIES,
            transaction_descriptions: TRANSACTION_DESCRIPTIONS,
            vendor_categories: VENDOR_CATEGORIES,
            payment_terms: PAYMENT_TERMS,
            positions: POSITIONS,
            department_names: DEPARTMENT_NAMES,
            office_locations: OFFICE_LOCATIONS,
            campaign_types: CAMPAIGN_TYPES,
            campaign_themes: CAMPAIGN_THEMES,
            seasons: SEASONS,
            audiences: AUDIENCES,
            campaign_statuses: CAMPAIGN_STATUSES,
            lead_sources: LEAD_SOURCES,
            lead_statuses: LEAD_STATUSES,
            product_adjectives: PRODUCT_ADJECTIVES,
            product_items: PRODUCT_ITEMS,
            product_categories: PRODUCT_CATEGORIES,
            order_statuses: ORDER_STATUSES,
            supplier_categories: SUPPLIER_CATEGORIES,
            countries: COUNTRIES,
        }
    }

    /// Names of empty lists, if any.
    pub fn empty_lists(&self) -> Vec<&'static str> {
        let lists: [(&'static str, &[&str]); 33] = [
            ("first_names", self.first_names),
            ("last_names", self.last_names),
            ("company_adjectives", self.company_adjectives),
            ("company_nouns", self.company_nouns),
            ("company_suffixes", self.company_suffixes),
            ("industries", self.industries),
            ("company_sizes", self.company_sizes),
            ("job_titles", self.job_titles),
            ("departments", self.departments),
            ("opportunity_stages", self.opportunity_stages),
            ("deal_names", self.deal_names),
            ("account_types", self.account_types),
            ("account_names", self.account_names),
            ("currencies", self.currencies),
            ("transaction_descriptions", self.transaction_descriptions),
            ("vendor_categories", self.vendor_categories),
            ("payment_terms", self.payment_terms),
            ("positions", self.positions),
            ("department_names", self.department_names),
            ("office_locations", self.office_locations),
            ("campaign_types", self.campaign_types),
            ("campaign_themes", self.campaign_themes),
            ("seasons", self.seasons),
            ("audiences", self.audiences),
            ("campaign_statuses", self.campaign_statuses),
            ("lead_sources", self.lead_sources),
            ("lead_statuses", self.lead_statuses),
            ("product_adjectives", self.product_adjectives),
            ("product_items", self.product_items),
            ("product_categories", self.product_categories),
            ("order_statuses", self.order_statuses),
            ("supplier_categories", self.supplier_categories),
            ("countries", self.countries),
        ];
        lists
            .into_iter()
            .filter(|(_, values)| values.is_empty())
            .map(|(name, _)| name)
            .collect()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Daniel", "Nancy", "Matthew", "Lisa", "Anthony", "Priya", "Wei", "Sofia",
    "Mateo", "Aisha",
];

const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Patel", "Chen",
    "Nakamura", "O'Brien", "Okafor",
];

const COMPANY_ADJECTIVES: &[&str] = &[
    "Global", "Pacific", "Summit", "Blue", "Silver", "Northern", "Bright", "Prime", "Apex",
    "Evergreen", "Pioneer", "Quantum", "Horizon", "Vertex", "Atlas",
];

const COMPANY_NOUNS: &[&str] = &[
    "Dynamics", "Systems", "Logistics", "Analytics", "Labs", "Networks", "Solutions", "Industries",
    "Ventures", "Partners", "Holdings", "Works", "Digital", "Energy", "Health",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc.", "LLC", "Corp.", "Ltd.", "Group", "Co."];

const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "Manufacturing",
    "Retail",
    "Education",
    "Energy",
    "Telecommunications",
    "Real Estate",
    "Transportation",
    "Hospitality",
    "Media",
];

const COMPANY_SIZES: &[&str] = &["1-10", "11-50", "51-200", "201-500", "501-1000", "1000+"];

const JOB_TITLES: &[&str] = &[
    "CEO",
    "CTO",
    "CFO",
    "VP of Sales",
    "VP of Marketing",
    "Sales Manager",
    "Account Executive",
    "Marketing Director",
    "Product Manager",
    "Operations Manager",
    "IT Director",
    "Procurement Specialist",
];

const DEPARTMENTS: &[&str] = &[
    "Sales",
    "Marketing",
    "Engineering",
    "Finance",
    "Operations",
    "Human Resources",
    "Customer Success",
    "Legal",
    "IT",
    "Procurement",
];

const OPPORTUNITY_STAGES: &[&str] = &[
    "Prospecting",
    "Qualification",
    "Needs Analysis",
    "Proposal",
    "Negotiation",
    "Closed Won",
    "Closed Lost",
];

const DEAL_NAMES: &[&str] = &[
    "Platform Upgrade",
    "Enterprise License",
    "Annual Renewal",
    "Cloud Migration",
    "Support Expansion",
    "Pilot Program",
    "Data Integration",
    "Security Audit",
];

const ACCOUNT_TYPES: &[&str] = &["Asset", "Liability", "Equity", "Revenue", "Expense"];

const ACCOUNT_NAMES: &[&str] = &[
    "Operating Cash",
    "Accounts Receivable",
    "Accounts Payable",
    "Inventory",
    "Prepaid Expenses",
    "Retained Earnings",
    "Sales Revenue",
    "Payroll Expense",
    "Office Equipment",
    "Accrued Liabilities",
];

const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CAD", "AUD"];

const TRANSACTION_DESCRIPTIONS: &[&str] = &[
    "Office supplies",
    "Software subscription",
    "Client payment",
    "Consulting services",
    "Equipment purchase",
    "Travel reimbursement",
    "Utility bill",
    "Marketing services",
    "Payroll transfer",
    "Maintenance contract",
];

const VENDOR_CATEGORIES: &[&str] = &[
    "Office Supplies",
    "IT Services",
    "Consulting",
    "Logistics",
    "Facilities",
    "Marketing",
    "Legal",
    "Raw Materials",
];

const PAYMENT_TERMS: &[&str] = &["Net 15", "Net 30", "Net 45", "Net 60", "Due on receipt"];

const POSITIONS: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Data Analyst",
    "HR Specialist",
    "Accountant",
    "Sales Representative",
    "Marketing Coordinator",
    "Operations Analyst",
    "Team Lead",
    "Director",
    "Recruiter",
    "Support Specialist",
];

const DEPARTMENT_NAMES: &[&str] = &[
    "Engineering",
    "Sales",
    "Marketing",
    "Finance",
    "Human Resources",
    "Operations",
    "Customer Support",
    "Legal",
    "Research & Development",
    "Information Technology",
];

const OFFICE_LOCATIONS: &[&str] = &[
    "New York",
    "San Francisco",
    "Chicago",
    "Austin",
    "London",
    "Berlin",
    "Toronto",
    "Singapore",
    "Sydney",
    "Remote",
];

const CAMPAIGN_TYPES: &[&str] = &[
    "Email",
    "Social Media",
    "Paid Search",
    "Webinar",
    "Trade Show",
    "Content Marketing",
    "Display Ads",
];

const CAMPAIGN_THEMES: &[&str] = &[
    "Product Launch",
    "Brand Awareness",
    "Customer Retention",
    "Lead Nurture",
    "Holiday Promotion",
    "Partner Spotlight",
];

const SEASONS: &[&str] = &["Spring", "Summer", "Fall", "Winter"];

const AUDIENCES: &[&str] = &[
    "Small Businesses",
    "Enterprise IT Leaders",
    "Marketing Professionals",
    "Developers",
    "Finance Teams",
    "Existing Customers",
];

const CAMPAIGN_STATUSES: &[&str] = &["Planned", "Active", "Paused", "Completed"];

const LEAD_SOURCES: &[&str] = &[
    "Website",
    "Referral",
    "Webinar",
    "Trade Show",
    "Cold Call",
    "Social Media",
    "Paid Ads",
];

const LEAD_STATUSES: &[&str] = &["New", "Contacted", "Qualified", "Unqualified", "Converted"];

const PRODUCT_ADJECTIVES: &[&str] = &[
    "Premium", "Compact", "Industrial", "Wireless", "Ergonomic", "Heavy-Duty", "Smart", "Eco",
];

const PRODUCT_ITEMS: &[&str] = &[
    "Widget",
    "Sensor",
    "Controller",
    "Bracket",
    "Pump",
    "Valve",
    "Monitor",
    "Keyboard",
    "Cable Kit",
    "Filter",
];

const PRODUCT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Hardware",
    "Office Equipment",
    "Industrial Parts",
    "Packaging",
    "Furniture",
];

const ORDER_STATUSES: &[&str] = &["Pending", "Processing", "Shipped", "Delivered", "Cancelled"];

const SUPPLIER_CATEGORIES: &[&str] = &[
    "Electronics",
    "Raw Materials",
    "Packaging",
    "Components",
    "Logistics",
    "Chemicals",
];

const COUNTRIES: &[&str] = &[
    "United States",
    "Canada",
    "Mexico",
    "Germany",
    "China",
    "Japan",
    "India",
    "Vietnam",
    "Brazil",
    "United Kingdom",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_lists_are_populated() {
        assert!(Vocabulary::builtin().empty_lists().is_empty());
    }

    #[test]
    fn empty_lists_are_reported_by_name() {
        let vocabulary = Vocabulary {
            countries: &[],
            ..Vocabulary::builtin()
        };
        assert_eq!(vocabulary.empty_lists(), vec!["countries"]);
    }
}
