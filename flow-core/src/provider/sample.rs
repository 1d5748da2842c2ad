use time::macros::date;
use time::OffsetDateTime;

use super::DataProvider;
use crate::domain::{
    Address, AmountByLabel, Client, ClientStatus, Credential, ExpenseBreakdown, MonthlyFigure,
    Project, ProjectStatus, ReportPeriod, RevenueBreakdown, Template, TemplateSection, TimeEntry,
    WorkItem,
};
use crate::reports::profit_margin;

/// Static in-memory sample data, seeded fresh on every call. Stands in for
/// a backend during demos and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleData;

impl SampleData {
    pub fn new() -> Self {
        Self
    }
}

impl DataProvider for SampleData {
    fn credentials(&self) -> Vec<Credential> {
        vec![
            Credential {
                id: "c1".to_string(),
                email: "client@example.com".to_string(),
                password: "password123".to_string(),
                name: "Demo Client".to_string(),
                company: "ABC Corporation".to_string(),
            },
            Credential {
                id: "c2".to_string(),
                email: "client2@example.com".to_string(),
                password: "password123".to_string(),
                name: "Test Client".to_string(),
                company: "XYZ Industries".to_string(),
            },
        ]
    }

    fn clients(&self) -> Vec<Client> {
        vec![
            Client {
                id: "c1".to_string(),
                email: "client@example.com".to_string(),
                name: "Demo Client".to_string(),
                company: "ABC Corporation".to_string(),
                phone: "+1 (555) 123-4567".to_string(),
                address: Address {
                    street: "123 Business Ave".to_string(),
                    city: "San Francisco".to_string(),
                    state: "CA".to_string(),
                    zip_code: "94105".to_string(),
                    country: "USA".to_string(),
                },
                website: "https://abccorp.example.com".to_string(),
                tax_id: "US-ABC-12345".to_string(),
                notes: "Key client with multiple ongoing projects".to_string(),
                status: ClientStatus::Active,
            },
            Client {
                id: "c2".to_string(),
                email: "client2@example.com".to_string(),
                name: "Test Client".to_string(),
                company: "XYZ Industries".to_string(),
                phone: "+1 (555) 987-6543".to_string(),
                address: Address {
                    street: "456 Tech Park".to_string(),
                    city: "Boston".to_string(),
                    state: "MA".to_string(),
                    zip_code: "02110".to_string(),
                    country: "USA".to_string(),
                },
                website: "https://xyz-industries.example.com".to_string(),
                tax_id: "US-XYZ-67890".to_string(),
                notes: "New client, started with a small project".to_string(),
                status: ClientStatus::Active,
            },
        ]
    }

    fn projects(&self) -> Vec<Project> {
        vec![
            Project {
                id: "p1".to_string(),
                name: "Website Redesign".to_string(),
                description: "Complete overhaul of company website with new branding".to_string(),
                client_id: "c1".to_string(),
                status: ProjectStatus::InProgress,
                progress: 65,
                start_date: date!(2023 - 09 - 15),
                due_date: date!(2023 - 12 - 15),
                budget: 8500.0,
                hourly_rate: 85.0,
                estimated_hours: 100.0,
                total_tracked_hours: 65.0,
                pending_approvals: 2,
            },
            Project {
                id: "p2".to_string(),
                name: "Mobile App Development".to_string(),
                description: "iOS and Android application for customer engagement".to_string(),
                client_id: "c1".to_string(),
                status: ProjectStatus::InProgress,
                progress: 40,
                start_date: date!(2023 - 10 - 20),
                due_date: date!(2024 - 02 - 28),
                budget: 12000.0,
                hourly_rate: 100.0,
                estimated_hours: 120.0,
                total_tracked_hours: 48.0,
                pending_approvals: 1,
            },
            Project {
                id: "p3".to_string(),
                name: "Branding Package".to_string(),
                description: "Logo design and brand guidelines".to_string(),
                client_id: "c1".to_string(),
                status: ProjectStatus::Completed,
                progress: 100,
                start_date: date!(2023 - 08 - 01),
                due_date: date!(2023 - 10 - 30),
                budget: 4500.0,
                hourly_rate: 90.0,
                estimated_hours: 50.0,
                total_tracked_hours: 52.0,
                pending_approvals: 0,
            },
            Project {
                id: "p4".to_string(),
                name: "SEO Optimization".to_string(),
                description: "Improve search engine rankings and visibility".to_string(),
                client_id: "c2".to_string(),
                status: ProjectStatus::InProgress,
                progress: 70,
                start_date: date!(2023 - 11 - 01),
                due_date: date!(2023 - 12 - 31),
                budget: 3000.0,
                hourly_rate: 75.0,
                estimated_hours: 40.0,
                total_tracked_hours: 28.0,
                pending_approvals: 0,
            },
            Project {
                id: "p5".to_string(),
                name: "Content Marketing Strategy".to_string(),
                description: "Develop and implement content marketing plan".to_string(),
                client_id: "c2".to_string(),
                status: ProjectStatus::NotStarted,
                progress: 0,
                start_date: date!(2024 - 01 - 15),
                due_date: date!(2024 - 03 - 15),
                budget: 5000.0,
                hourly_rate: 80.0,
                estimated_hours: 62.5,
                total_tracked_hours: 0.0,
                pending_approvals: 0,
            },
        ]
    }

    fn work_items(&self, project_id: &str) -> Vec<WorkItem> {
        let item = |id: &str, date: time::Date, description: &str, hours: f64| WorkItem {
            id: id.to_string(),
            project_id: project_id.to_string(),
            description: description.to_string(),
            date,
            hours,
            billable: true,
        };
        match project_id {
            "p1" => vec![
                item("t1", date!(2023 - 09 - 20), "Initial wireframes", 6.0),
                item("t2", date!(2023 - 09 - 25), "Design system setup", 8.0),
                item("t3", date!(2023 - 10 - 05), "Homepage implementation", 10.0),
                item("t4", date!(2023 - 10 - 10), "About page implementation", 7.0),
                item("t5", date!(2023 - 10 - 20), "Services section", 12.0),
                item("t6", date!(2023 - 11 - 01), "Contact form implementation", 5.0),
                item("t7", date!(2023 - 11 - 10), "Client feedback revisions", 8.0),
                item("t8", date!(2023 - 11 - 15), "Responsive design fixes", 9.0),
            ],
            "p2" => vec![
                item("t9", date!(2023 - 10 - 25), "App architecture planning", 10.0),
                item("t10", date!(2023 - 11 - 05), "UI design", 15.0),
                item(
                    "t11",
                    date!(2023 - 11 - 15),
                    "Core functionality implementation",
                    18.0,
                ),
                item("t12", date!(2023 - 11 - 25), "API integration", 5.0),
            ],
            "p3" => vec![
                item("t13", date!(2023 - 08 - 05), "Logo concepts", 12.0),
                item("t14", date!(2023 - 08 - 15), "Color palette development", 6.0),
                item("t15", date!(2023 - 08 - 25), "Typography selection", 4.0),
                item("t16", date!(2023 - 09 - 10), "Brand guidelines document", 15.0),
                item("t17", date!(2023 - 09 - 20), "Stationery design", 8.0),
                item("t18", date!(2023 - 10 - 05), "Social media templates", 7.0),
            ],
            "p4" => vec![
                item("t19", date!(2023 - 11 - 05), "Keyword research", 8.0),
                item("t20", date!(2023 - 11 - 15), "On-page optimization", 12.0),
                item("t21", date!(2023 - 11 - 25), "Content optimization", 8.0),
            ],
            _ => Vec::new(),
        }
    }

    fn seed_entries(&self) -> Vec<TimeEntry> {
        let today = OffsetDateTime::now_utc().date();
        vec![
            TimeEntry {
                id: 1,
                date: today,
                project: "Website Redesign".to_string(),
                client: "Acme Inc".to_string(),
                description: "Homepage UI development".to_string(),
                duration_seconds: 5400,
                billable: true,
                rate: 75.0,
            },
            TimeEntry {
                id: 2,
                date: today,
                project: "Mobile App".to_string(),
                client: "TechStart".to_string(),
                description: "API integration".to_string(),
                duration_seconds: 7200,
                billable: true,
                rate: 90.0,
            },
        ]
    }

    fn project_names(&self) -> Vec<String> {
        ["Website Redesign", "Mobile App", "Logo Design", "Marketing Campaign"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn client_names(&self) -> Vec<String> {
        ["Acme Inc", "TechStart", "DesignHub", "MarketBoost"]
            .into_iter()
            .map(String::from)
            .collect()
    }

    fn proposal_templates(&self) -> Vec<Template> {
        vec![
            template(
                "p1",
                "Standard Proposal",
                "A comprehensive proposal template for most freelance services",
                date!(2023 - 03 - 15),
                &[
                    (
                        "intro",
                        "Introduction",
                        "# Introduction\n\nThank you for the opportunity to submit this proposal. This proposal outlines my approach, deliverables, timeline, and investment required for the project.",
                    ),
                    (
                        "overview",
                        "Project Overview",
                        "# Project Overview\n\nBased on our discussions, I understand that {CLIENT_NAME} needs {PROJECT_DESCRIPTION}. The main goals of this project are:\n\n- Goal 1\n- Goal 2\n- Goal 3",
                    ),
                    (
                        "approach",
                        "Approach & Methodology",
                        "# Approach & Methodology\n\nTo achieve your goals, I will follow this proven process:\n\n1. Discovery & Research\n2. Planning & Strategy\n3. Development & Implementation\n4. Testing & Refinement\n5. Delivery & Support",
                    ),
                    (
                        "deliverables",
                        "Deliverables",
                        "# Deliverables\n\nUpon completion of this project, you will receive:\n\n- Deliverable 1\n- Deliverable 2\n- Deliverable 3\n\nAll deliverables will be provided in the following formats: {FORMATS}",
                    ),
                    (
                        "timeline",
                        "Timeline",
                        "# Timeline\n\nI estimate this project will take {DURATION} to complete:\n\n- Week 1: Phase 1\n- Week 2: Phase 2\n- Week 3: Phase 3\n- Week 4: Final delivery",
                    ),
                    (
                        "investment",
                        "Investment",
                        "# Investment\n\nThe total investment for this project is {TOTAL_AMOUNT}.\n\nPayment Schedule:\n- 50% deposit to secure the project start date\n- 25% at project midpoint\n- 25% upon project completion\n\nAll payments are due within 14 days of invoice date.",
                    ),
                    (
                        "terms",
                        "Terms & Conditions",
                        "# Terms & Conditions\n\n1. This proposal is valid for 30 days from the date of submission.\n2. Any changes to the project scope may affect the timeline and cost.\n3. {CLIENT_NAME} will provide all necessary content and feedback in a timely manner.\n4. Additional revisions beyond those specified will be billed at my hourly rate of {HOURLY_RATE}.",
                    ),
                ],
            ),
            template(
                "p2",
                "Web Development Proposal",
                "Tailored for web design and development projects",
                date!(2023 - 04 - 22),
                &[
                    (
                        "intro",
                        "Introduction",
                        "# Introduction\n\nThank you for considering me for your web development needs. This proposal outlines how I plan to create a website that meets your business objectives.",
                    ),
                    (
                        "scope",
                        "Project Scope",
                        "# Project Scope\n\nThis project includes the design and development of a {PAGE_COUNT}-page website with the following features:\n\n- Responsive design for all devices\n- Content management system\n- Contact form with email notifications\n- Integration with {INTEGRATIONS}\n- Basic SEO setup",
                    ),
                    (
                        "design",
                        "Design Process",
                        "# Design Process\n\nThe design process will include:\n\n1. Wireframing key pages\n2. Creating mockups for your approval\n3. Developing a style guide\n4. Implementing responsive design principles",
                    ),
                    (
                        "development",
                        "Development",
                        "# Development\n\nThe website will be built using {TECHNOLOGIES}. The development process includes:\n\n1. Frontend development\n2. Backend functionality\n3. CMS implementation\n4. Testing across browsers and devices",
                    ),
                    (
                        "timeline",
                        "Timeline",
                        "# Timeline\n\nThe project is estimated to take {DURATION} weeks:\n\n- Week 1: Discovery and wireframing\n- Weeks 2-3: Design and client feedback\n- Weeks 4-6: Development\n- Week 7: Testing and refinement\n- Week 8: Launch and training",
                    ),
                    (
                        "pricing",
                        "Pricing",
                        "# Pricing\n\nThe total investment for this project is {TOTAL_AMOUNT}.\n\nThis includes:\n- All design and development work\n- 2 rounds of revisions at each stage\n- CMS training (2 hours)\n- 30 days of post-launch support\n\nPayment Schedule:\n- 40% deposit\n- 30% after design approval\n- 30% upon project completion",
                    ),
                ],
            ),
        ]
    }

    fn contract_templates(&self) -> Vec<Template> {
        vec![template(
            "c1",
            "Standard Service Agreement",
            "A general contract for freelance services",
            date!(2023 - 02 - 10),
            &[
                (
                    "parties",
                    "Parties",
                    "# Service Agreement\n\nThis Service Agreement (the \"Agreement\") is entered into as of {DATE} (the \"Effective Date\"), by and between:\n\n{YOUR_NAME}, with a principal place of business at {YOUR_ADDRESS} (\"Service Provider\")\n\nand\n\n{CLIENT_NAME}, with a principal place of business at {CLIENT_ADDRESS} (\"Client\")",
                ),
                (
                    "services",
                    "Services",
                    "# Services\n\nService Provider agrees to provide the following services to Client (the \"Services\"):\n\n{DETAILED_SERVICES_DESCRIPTION}\n\nAny additional services not specified in this Agreement will require a separate agreement and additional fees.",
                ),
                (
                    "compensation",
                    "Compensation",
                    "# Compensation\n\nClient agrees to compensate Service Provider as follows:\n\n- Rate: {RATE}\n- Estimated Total: {TOTAL_AMOUNT}\n- Payment Schedule: {PAYMENT_SCHEDULE}\n\nAll invoices are due within {PAYMENT_TERMS} days of receipt.",
                ),
                (
                    "timeline",
                    "Timeline",
                    "# Timeline\n\nService Provider will commence work on {START_DATE} and complete the Services by {END_DATE}, subject to timely receipt of necessary information and materials from Client.",
                ),
                (
                    "ownership",
                    "Ownership & Rights",
                    "# Ownership & Rights\n\nUpon receipt of full payment, Service Provider assigns to Client all rights, title, and interest in the deliverables, except for:\n\n- Third-party materials, which are subject to their respective licenses\n- Service Provider's pre-existing work and tools",
                ),
                (
                    "termination",
                    "Termination",
                    "# Termination\n\nEither Party may terminate this Agreement with {NOTICE_PERIOD} days written notice. In the event of termination:\n\n- Client shall pay for all Services completed up to the termination date\n- Client shall reimburse any non-cancellable expenses incurred by Service Provider",
                ),
                (
                    "liability",
                    "Limitation of Liability",
                    "# Limitation of Liability\n\nService Provider's liability is limited to the total amount paid by Client under this Agreement. Service Provider is not liable for any indirect, consequential, special, or punitive damages.",
                ),
            ],
        )]
    }

    fn quarterly_reports(&self) -> Vec<ReportPeriod> {
        vec![
            period(
                2023,
                Some(4),
                RevenueBreakdown {
                    total: 12450.75,
                    by_category: vec![
                        AmountByLabel::new("Web Development", 5825.00),
                        AmountByLabel::new("Design Services", 3260.50),
                        AmountByLabel::new("Consulting", 2750.00),
                        AmountByLabel::new("Content Creation", 615.25),
                    ],
                    by_client: vec![
                        AmountByLabel::new("TechCorp Inc.", 4580.00),
                        AmountByLabel::new("Design Studio", 3260.50),
                        AmountByLabel::new("StartupX", 2750.00),
                        AmountByLabel::new("Local Business", 1860.25),
                    ],
                },
                ExpenseBreakdown {
                    total: 4325.80,
                    by_category: vec![
                        AmountByLabel::new("Software Subscriptions", 925.45),
                        AmountByLabel::new("Office Supplies", 210.65),
                        AmountByLabel::new("Marketing", 1250.00),
                        AmountByLabel::new("Contractors", 1500.00),
                        AmountByLabel::new("Miscellaneous", 439.70),
                    ],
                },
                vec![
                    month("Oct", 3950.25, 1425.30),
                    month("Nov", 4250.50, 1500.50),
                    month("Dec", 4250.00, 1400.00),
                ],
            ),
            period(
                2023,
                Some(3),
                RevenueBreakdown {
                    total: 10250.50,
                    by_category: vec![
                        AmountByLabel::new("Web Development", 4825.00),
                        AmountByLabel::new("Design Services", 2950.50),
                        AmountByLabel::new("Consulting", 1875.00),
                        AmountByLabel::new("Content Creation", 600.00),
                    ],
                    by_client: vec![
                        AmountByLabel::new("TechCorp Inc.", 3580.00),
                        AmountByLabel::new("Design Studio", 2950.50),
                        AmountByLabel::new("StartupX", 1875.00),
                        AmountByLabel::new("Local Business", 1845.00),
                    ],
                },
                ExpenseBreakdown {
                    total: 3825.75,
                    by_category: vec![
                        AmountByLabel::new("Software Subscriptions", 825.45),
                        AmountByLabel::new("Office Supplies", 190.65),
                        AmountByLabel::new("Marketing", 1150.00),
                        AmountByLabel::new("Contractors", 1250.00),
                        AmountByLabel::new("Miscellaneous", 409.65),
                    ],
                },
                vec![
                    month("Jul", 3250.25, 1225.30),
                    month("Aug", 3500.25, 1300.45),
                    month("Sep", 3500.00, 1300.00),
                ],
            ),
        ]
    }

    fn annual_reports(&self) -> Vec<ReportPeriod> {
        vec![
            period(
                2023,
                None,
                RevenueBreakdown {
                    total: 43250.75,
                    by_category: vec![
                        AmountByLabel::new("Web Development", 19825.00),
                        AmountByLabel::new("Design Services", 11460.50),
                        AmountByLabel::new("Consulting", 8750.00),
                        AmountByLabel::new("Content Creation", 3215.25),
                    ],
                    by_client: vec![
                        AmountByLabel::new("TechCorp Inc.", 15580.00),
                        AmountByLabel::new("Design Studio", 11460.50),
                        AmountByLabel::new("StartupX", 8750.00),
                        AmountByLabel::new("Local Business", 7460.25),
                    ],
                },
                ExpenseBreakdown {
                    total: 16325.80,
                    by_category: vec![
                        AmountByLabel::new("Software Subscriptions", 3525.45),
                        AmountByLabel::new("Office Supplies", 810.65),
                        AmountByLabel::new("Marketing", 5250.00),
                        AmountByLabel::new("Contractors", 5500.00),
                        AmountByLabel::new("Miscellaneous", 1239.70),
                    ],
                },
                vec![
                    month("Jan", 3250.25, 1325.30),
                    month("Feb", 3450.50, 1300.50),
                    month("Mar", 3650.00, 1400.00),
                    month("Apr", 3450.25, 1325.30),
                    month("May", 3550.50, 1300.50),
                    month("Jun", 3750.00, 1400.00),
                    month("Jul", 3250.25, 1225.30),
                    month("Aug", 3500.25, 1300.45),
                    month("Sep", 3500.00, 1300.00),
                    month("Oct", 3950.25, 1425.30),
                    month("Nov", 4250.50, 1500.50),
                    month("Dec", 4250.00, 1400.00),
                ],
            ),
            period(
                2022,
                None,
                RevenueBreakdown {
                    total: 38450.50,
                    by_category: Vec::new(),
                    by_client: Vec::new(),
                },
                ExpenseBreakdown {
                    total: 15250.75,
                    by_category: Vec::new(),
                },
                vec![
                    month("Jan", 3000.25, 1200.30),
                    month("Feb", 3100.50, 1250.50),
                    month("Mar", 3200.00, 1300.00),
                    month("Dec", 3950.00, 1350.00),
                ],
            ),
        ]
    }
}

fn template(
    id: &str,
    name: &str,
    description: &str,
    last_modified: time::Date,
    sections: &[(&str, &str, &str)],
) -> Template {
    Template {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        last_modified,
        sections: sections
            .iter()
            .map(|(id, title, content)| TemplateSection {
                id: id.to_string(),
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect(),
    }
}

fn month(month: &str, revenue: f64, expenses: f64) -> MonthlyFigure {
    MonthlyFigure {
        month: month.to_string(),
        revenue,
        expenses,
    }
}

fn period(
    year: i32,
    quarter: Option<u8>,
    revenue: RevenueBreakdown,
    expenses: ExpenseBreakdown,
    monthly_breakdown: Vec<MonthlyFigure>,
) -> ReportPeriod {
    let profit = revenue.total - expenses.total;
    ReportPeriod {
        year,
        quarter,
        profit,
        profit_margin: profit_margin(profit, revenue.total),
        revenue,
        expenses,
        monthly_breakdown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_lookup_by_id() {
        let data = SampleData::new();
        assert_eq!(data.client("c1").unwrap().company, "ABC Corporation");
        assert!(data.client("missing").is_none());
    }

    #[test]
    fn projects_are_scoped_to_their_client() {
        let data = SampleData::new();
        let ids: Vec<String> = data
            .projects_for_client("c1")
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, ["p1", "p2", "p3"]);
        assert_eq!(data.projects_for_client("c2").len(), 2);
        assert!(data.projects_for_client("nobody").is_empty());
    }

    #[test]
    fn work_items_match_tracked_hours_shape() {
        let data = SampleData::new();
        let items = data.work_items("p4");
        assert_eq!(items.len(), 3);
        let total: f64 = items.iter().map(|i| i.hours).sum();
        assert_eq!(total, 28.0);
        assert!(data.work_items("p5").is_empty());
    }

    #[test]
    fn report_fixtures_are_internally_consistent() {
        let data = SampleData::new();
        for p in data
            .quarterly_reports()
            .iter()
            .chain(data.annual_reports().iter())
        {
            assert!((p.profit - (p.revenue.total - p.expenses.total)).abs() < 1e-9);
        }
    }
}
