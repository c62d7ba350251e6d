use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Business domain grouping several related schemas.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    SalesCrm,
    FinanceErp,
    HumanResources,
    MarketingCampaigns,
    SupplyChain,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::SalesCrm,
        Category::FinanceErp,
        Category::HumanResources,
        Category::MarketingCampaigns,
        Category::SupplyChain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::SalesCrm => "sales-crm",
            Category::FinanceErp => "finance-erp",
            Category::HumanResources => "human-resources",
            Category::MarketingCampaigns => "marketing-campaigns",
            Category::SupplyChain => "supply-chain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| Error::UnknownCategory(value.to_string()))
    }
}

/// Target-system label attached to a request. Cosmetic: it only shows up in
/// export file names and manifests.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum Platform {
    General,
    Salesforce,
    Oracle,
    Sap,
    Shopify,
    GeneralErp,
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::General,
        Platform::Salesforce,
        Platform::Oracle,
        Platform::Sap,
        Platform::Shopify,
        Platform::GeneralErp,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::General => "general",
            Platform::Salesforce => "salesforce",
            Platform::Oracle => "oracle",
            Platform::Sap => "sap",
            Platform::Shopify => "shopify",
            Platform::GeneralErp => "general-erp",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::General => "General",
            Platform::Salesforce => "Salesforce",
            Platform::Oracle => "Oracle",
            Platform::Sap => "SAP",
            Platform::Shopify => "Shopify",
            Platform::GeneralErp => "General ERP",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == value)
            .ok_or_else(|| Error::UnknownPlatform(value.to_string()))
    }
}

/// One generated entity/table type.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum SchemaKind {
    Companies,
    Contacts,
    Opportunities,
    Accounts,
    Transactions,
    Vendors,
    Employees,
    Departments,
    Campaigns,
    Leads,
    Products,
    Orders,
    Suppliers,
}

impl SchemaKind {
    pub const ALL: [SchemaKind; 13] = [
        SchemaKind::Companies,
        SchemaKind::Contacts,
        SchemaKind::Opportunities,
        SchemaKind::Accounts,
        SchemaKind::Transactions,
        SchemaKind::Vendors,
        SchemaKind::Employees,
        SchemaKind::Departments,
        SchemaKind::Campaigns,
        SchemaKind::Leads,
        SchemaKind::Products,
        SchemaKind::Orders,
        SchemaKind::Suppliers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaKind::Companies => "companies",
            SchemaKind::Contacts => "contacts",
            SchemaKind::Opportunities => "opportunities",
            SchemaKind::Accounts => "accounts",
            SchemaKind::Transactions => "transactions",
            SchemaKind::Vendors => "vendors",
            SchemaKind::Employees => "employees",
            SchemaKind::Departments => "departments",
            SchemaKind::Campaigns => "campaigns",
            SchemaKind::Leads => "leads",
            SchemaKind::Products => "products",
            SchemaKind::Orders => "orders",
            SchemaKind::Suppliers => "suppliers",
        }
    }

    /// Category that owns this schema.
    pub fn category(&self) -> Category {
        match self {
            SchemaKind::Companies | SchemaKind::Contacts | SchemaKind::Opportunities => {
                Category::SalesCrm
            }
            SchemaKind::Accounts | SchemaKind::Transactions | SchemaKind::Vendors => {
                Category::FinanceErp
            }
            SchemaKind::Employees | SchemaKind::Departments => Category::HumanResources,
            SchemaKind::Campaigns | SchemaKind::Leads => Category::MarketingCampaigns,
            SchemaKind::Products | SchemaKind::Orders | SchemaKind::Suppliers => {
                Category::SupplyChain
            }
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SchemaKind {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SchemaKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| Error::UnknownSchema(value.to_string()))
    }
}
