use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::Serialize;

use crate::constraints::Dependency;
use crate::types::{Category, Platform, SchemaKind};

/// Static definition of one business category.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct CategoryDefinition {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    /// Schemas in display order.
    pub schemas: Vec<SchemaKind>,
    /// Relationship map: schema -> foreign-key dependencies.
    pub relationships: BTreeMap<SchemaKind, Vec<Dependency>>,
}

impl CategoryDefinition {
    pub fn dependencies(&self, schema: SchemaKind) -> &[Dependency] {
        self.relationships
            .get(&schema)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Immutable catalog of categories, schemas and relationship maps.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Catalog {
    pub categories: Vec<CategoryDefinition>,
    pub platforms: Vec<Platform>,
}

impl Catalog {
    pub fn new(categories: Vec<CategoryDefinition>, platforms: Vec<Platform>) -> Self {
        Self {
            categories,
            platforms,
        }
    }

    /// The catalog MockEm ships with.
    pub fn builtin() -> Self {
        use SchemaKind::*;

        let categories = vec![
            definition(
                Category::SalesCrm,
                "Sales & CRM",
                "Customer relationship management, sales opportunities, and pipeline data",
                vec![Companies, Contacts, Opportunities],
                vec![
                    (Contacts, vec![Dependency::new(Companies, "company_id")]),
                    (
                        Opportunities,
                        vec![
                            Dependency::new(Companies, "company_id"),
                            Dependency::new(Contacts, "contact_id"),
                        ],
                    ),
                ],
            ),
            definition(
                Category::FinanceErp,
                "Finance & ERP",
                "Financial records, accounting transactions, and vendor management",
                vec![Accounts, Transactions, Vendors],
                vec![(
                    Transactions,
                    vec![
                        Dependency::new(Accounts, "account_id"),
                        Dependency::new(Vendors, "vendor_id"),
                    ],
                )],
            ),
            definition(
                Category::HumanResources,
                "Human Resources",
                "Employee data, organizational structures, and department management",
                vec![Employees, Departments],
                vec![(
                    Employees,
                    vec![Dependency::new(Departments, "department_id")],
                )],
            ),
            definition(
                Category::MarketingCampaigns,
                "Marketing & Campaigns",
                "Campaign management, lead tracking, and marketing analytics",
                vec![Campaigns, Leads],
                vec![(Leads, vec![Dependency::new(Campaigns, "campaign_id")])],
            ),
            definition(
                Category::SupplyChain,
                "Supply Chain & Inventory",
                "Product catalogs, order management, and supplier relationships",
                vec![Products, Orders, Suppliers],
                vec![
                    (Products, vec![Dependency::new(Suppliers, "supplier_id")]),
                    (Orders, vec![Dependency::new(Products, "product_id")]),
                ],
            ),
        ];

        Self::new(categories, Platform::ALL.to_vec())
    }

    /// Categories in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.iter().map(|definition| definition.category)
    }

    pub fn definition(&self, category: Category) -> Option<&CategoryDefinition> {
        self.categories
            .iter()
            .find(|definition| definition.category == category)
    }

    pub fn schemas(&self, category: Category) -> &[SchemaKind] {
        self.definition(category)
            .map(|definition| definition.schemas.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category: Category, schema: SchemaKind) -> bool {
        self.schemas(category).contains(&schema)
    }

    pub fn dependencies(&self, category: Category, schema: SchemaKind) -> &[Dependency] {
        self.definition(category)
            .map(|definition| definition.dependencies(schema))
            .unwrap_or(&[])
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn definition(
    category: Category,
    title: &'static str,
    description: &'static str,
    schemas: Vec<SchemaKind>,
    relationships: Vec<(SchemaKind, Vec<Dependency>)>,
) -> CategoryDefinition {
    CategoryDefinition {
        category,
        title,
        description,
        schemas,
        relationships: relationships.into_iter().collect(),
    }
}
