//! Seed data for pages, behind a provider interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages ask the [`DataProvider`] in context for their initial records on
//! mount and keep any edits in page-local signals. [`MockDataProvider`] is
//! the fixed in-memory data set; a backend-backed provider can replace it
//! without touching view logic.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use std::sync::Arc;

use crate::state::dashboard::{
    ActivityEntry, AdminDashboard, AlertKind, BrokerContact, BrokerDashboard, BrokerPerformance, CaseStatus,
    CaseSummary, StatTile, SystemAlert,
};
use crate::state::roles::{
    AccessLevel, AccessRule, AccessRuleGroup, ApprovalLimit, ModuleAccess, PermissionMatrix, RoleCategory, RoleLevel,
    RoleRecord, RoleStatus,
};
use crate::state::users::{UserRecord, UserStatus};

/// Source of the records each page starts from.
pub trait DataProvider: Send + Sync {
    fn users(&self) -> Vec<UserRecord>;
    fn roles(&self) -> Vec<RoleRecord>;
    /// Module access, data rules and approval limits for `role_id`.
    fn permission_matrix(&self, role_id: &str) -> PermissionMatrix;
    fn broker_dashboard(&self) -> BrokerDashboard;
    fn admin_dashboard(&self) -> AdminDashboard;
}

/// Shared handle provided through Leptos context.
pub type SharedDataProvider = Arc<dyn DataProvider>;

/// Fixed in-memory data set.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockDataProvider;

#[allow(clippy::too_many_arguments)]
fn user(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    status: UserStatus,
    last_login: &str,
    phone: &str,
    position: &str,
    manager: &str,
    join_date: &str,
    permissions: &[&str],
) -> UserRecord {
    UserRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        email: email.to_owned(),
        role: role.to_owned(),
        department: department.to_owned(),
        status,
        last_login: last_login.to_owned(),
        phone: Some(phone.to_owned()),
        position: Some(position.to_owned()),
        manager: Some(manager.to_owned()),
        join_date: join_date.to_owned(),
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
    }
}

#[allow(clippy::too_many_arguments)]
fn role(
    id: &str,
    name: &str,
    code: &str,
    category: RoleCategory,
    department: &str,
    level: RoleLevel,
    description: &str,
    users_count: u32,
    permissions_count: u32,
    reports_to: Option<&str>,
) -> RoleRecord {
    RoleRecord {
        id: id.to_owned(),
        name: name.to_owned(),
        code: code.to_owned(),
        category,
        department: department.to_owned(),
        level,
        description: description.to_owned(),
        status: RoleStatus::Active,
        users_count,
        permissions_count,
        reports_to: reports_to.map(str::to_owned),
    }
}

fn tile(label: &str, value: &str, trend: Option<&str>) -> StatTile {
    StatTile { label: label.to_owned(), value: value.to_owned(), trend: trend.map(str::to_owned) }
}

impl DataProvider for MockDataProvider {
    fn users(&self) -> Vec<UserRecord> {
        use UserStatus::{Active, Inactive, Pending};
        vec![
            user(
                "1",
                "Sarah Johnson",
                "sarah.johnson@maxhealth.ae",
                "Sales Manager",
                "Sales",
                Active,
                "2 hours ago",
                "+971 50 123 4567",
                "Senior Sales Manager",
                "VP Sales",
                "2022-03-15",
                &["view_deals", "edit_deals", "manage_team"],
            ),
            user(
                "2",
                "Mike Chen",
                "mike.chen@maxhealth.ae",
                "Operations Manager",
                "Operations",
                Active,
                "1 hour ago",
                "+971 50 234 5678",
                "Operations Manager",
                "COO",
                "2021-08-20",
                &["view_policies", "edit_policies", "approve_claims"],
            ),
            user(
                "3",
                "Lisa Wang",
                "lisa.wang@maxhealth.ae",
                "Medical Manager",
                "Medical",
                Active,
                "30 min ago",
                "+971 50 345 6789",
                "Medical Director",
                "Chief Medical Officer",
                "2020-11-10",
                &["view_medical", "edit_medical", "approve_medical"],
            ),
            user(
                "4",
                "David Kim",
                "david.kim@maxhealth.ae",
                "Finance Manager",
                "Finance",
                Active,
                "3 hours ago",
                "+971 50 456 7890",
                "Finance Manager",
                "CFO",
                "2021-01-05",
                &["view_financial", "edit_financial", "approve_payments"],
            ),
            user(
                "5",
                "Ahmed Hassan",
                "ahmed.hassan@maxhealth.ae",
                "Senior Broker",
                "External",
                Active,
                "1 day ago",
                "+971 50 567 8901",
                "Senior Insurance Broker",
                "Broker Relations Manager",
                "2022-06-12",
                &["view_clients", "edit_clients", "create_deals"],
            ),
            user(
                "6",
                "Fatima Al-Zahra",
                "fatima.alzahra@maxhealth.ae",
                "Standard Broker",
                "External",
                Pending,
                "Never",
                "+971 50 678 9012",
                "Insurance Broker",
                "Broker Relations Manager",
                "2023-01-20",
                &["view_clients", "create_deals"],
            ),
            user(
                "7",
                "John Smith",
                "john.smith@maxhealth.ae",
                "IT Manager",
                "IT",
                Active,
                "4 hours ago",
                "+971 50 789 0123",
                "IT Manager",
                "CTO",
                "2021-12-01",
                &["view_system", "edit_system", "manage_users"],
            ),
            user(
                "8",
                "Maria Garcia",
                "maria.garcia@maxhealth.ae",
                "HR Manager",
                "HR",
                Inactive,
                "1 week ago",
                "+971 50 890 1234",
                "HR Manager",
                "VP HR",
                "2020-05-15",
                &["view_hr", "edit_hr", "manage_employees"],
            ),
        ]
    }

    fn roles(&self) -> Vec<RoleRecord> {
        use RoleCategory::{Client, External, Internal, System};
        vec![
            role(
                "1",
                "System Administrator",
                "SYS_ADMIN",
                System,
                "IT",
                RoleLevel::Executive,
                "Full system access and configuration rights",
                3,
                247,
                None,
            ),
            role(
                "2",
                "Sales Manager",
                "SALES_MGR",
                Internal,
                "Sales",
                RoleLevel::Manager,
                "Oversee sales team operations and performance",
                4,
                89,
                Some("VP Sales"),
            ),
            role(
                "3",
                "Sales Representative",
                "SALES_REP",
                Internal,
                "Sales",
                RoleLevel::Specialist,
                "Manage assigned deals and client relationships",
                12,
                45,
                Some("Sales Manager"),
            ),
            role(
                "4",
                "Operations Manager",
                "OPS_MGR",
                Internal,
                "Operations",
                RoleLevel::Manager,
                "Oversee policy operations and document management",
                3,
                76,
                Some("COO"),
            ),
            role(
                "5",
                "Medical Manager",
                "MED_MGR",
                Internal,
                "Medical",
                RoleLevel::Manager,
                "Oversee medical underwriting and claims processes",
                2,
                68,
                Some("Chief Medical Officer"),
            ),
            role(
                "6",
                "Finance Manager",
                "FIN_MGR",
                Internal,
                "Finance",
                RoleLevel::Manager,
                "Oversee financial operations and accounting",
                2,
                71,
                Some("CFO"),
            ),
            role(
                "7",
                "Senior Broker",
                "SEN_BROKER",
                External,
                "External",
                RoleLevel::External,
                "Experienced broker with established client portfolio",
                8,
                28,
                None,
            ),
            role(
                "8",
                "Standard Broker",
                "STD_BROKER",
                External,
                "External",
                RoleLevel::External,
                "Regular broker with standard access and features",
                15,
                22,
                None,
            ),
            role(
                "9",
                "Corporate Client",
                "CORP_CLIENT",
                Client,
                "External",
                RoleLevel::External,
                "Company representatives with group policy access",
                12,
                15,
                None,
            ),
        ]
    }

    /// The matrix is the same for every role.
    fn permission_matrix(&self, _role_id: &str) -> PermissionMatrix {
        let modules = [
            ("Dashboard & Analytics", AccessLevel::Full),
            ("Deal Management", AccessLevel::Full),
            ("User Management", AccessLevel::Read),
            ("Broker Relations", AccessLevel::Full),
            ("Client Management", AccessLevel::Full),
            ("Policy Management", AccessLevel::Read),
            ("Medical & Claims", AccessLevel::None),
            ("Financial Management", AccessLevel::Read),
            ("Communication Hub", AccessLevel::Full),
        ]
        .into_iter()
        .map(|(module, access)| ModuleAccess { module: module.to_owned(), access })
        .collect();

        let group = |title: &str, rules: &[(bool, &str)]| AccessRuleGroup {
            title: title.to_owned(),
            rules: rules.iter().map(|(allowed, text)| AccessRule { allowed: *allowed, text: (*text).to_owned() }).collect(),
        };
        let limit = |label: &str, value: &str| ApprovalLimit { label: label.to_owned(), value: value.to_owned() };

        PermissionMatrix {
            modules,
            data_rules: vec![
                group(
                    "Client Data",
                    &[
                        (true, "Can view all client basic information"),
                        (true, "Can view financial summary (premium, commission)"),
                        (false, "Cannot view detailed financial records"),
                        (false, "Cannot view medical information"),
                    ],
                ),
                group(
                    "Deal Data",
                    &[
                        (true, "Can view all sales team deals"),
                        (true, "Can view deal financial details"),
                        (true, "Can view deal progression and timeline"),
                        (false, "Cannot view medical underwriting details"),
                    ],
                ),
            ],
            approval_limits: vec![
                limit("Deal Approval", "AED 500,000"),
                limit("Discount Authority", "15%"),
                limit("SLA Extensions", "24 hours"),
            ],
            additional_permissions: vec![
                "Can approve team member actions".to_owned(),
                "Can assign team members".to_owned(),
                "Can view performance analytics".to_owned(),
            ],
        }
    }

    fn broker_dashboard(&self) -> BrokerDashboard {
        let case = |number: &str, company: &str, client: &str, network: &str, date: &str, census, premium: &str, status| {
            CaseSummary {
                case_number: number.to_owned(),
                broker_company: company.to_owned(),
                client_name: client.to_owned(),
                network: network.to_owned(),
                issuance_date: date.to_owned(),
                census_count: census,
                net_premium: premium.to_owned(),
                status,
            }
        };
        let contact = |code: &str, name: &str, broker_type: &str, email: &str, phone: &str| BrokerContact {
            code: code.to_owned(),
            name: name.to_owned(),
            broker_type: broker_type.to_owned(),
            office_email: email.to_owned(),
            office_phone: phone.to_owned(),
        };
        let performer = |name: &str, company: &str, premium: &str, cases, growth: &str| BrokerPerformance {
            name: name.to_owned(),
            company: company.to_owned(),
            premium: premium.to_owned(),
            cases,
            growth: growth.to_owned(),
        };

        BrokerDashboard {
            stats: vec![
                tile("Total Cases", "1,247", Some("+12.5% from last month")),
                tile("Active Brokers", "89", Some("+5.2% from last month")),
                tile("Total Premium", "$2.4M", Some("+18.7% from last month")),
                tile("Pending Cases", "23", Some("Requires attention")),
            ],
            recent_cases: vec![
                case(
                    "CS-170725-BS9105-V1",
                    "ABC Insurance Agency",
                    "TechCorp Solutions",
                    "MEDNET",
                    "2024-01-15",
                    150,
                    "$45,678.90",
                    CaseStatus::Draft,
                ),
                case(
                    "CS-170725-BS9106-V1",
                    "XYZ Brokers Ltd",
                    "Global Manufacturing",
                    "PREMIUM",
                    "2024-01-14",
                    89,
                    "$32,450.00",
                    CaseStatus::Submitted,
                ),
                case(
                    "CS-170725-BS9107-V1",
                    "First Choice Insurance",
                    "Startup Innovations",
                    "BASIC",
                    "2024-01-13",
                    45,
                    "$18,750.50",
                    CaseStatus::Approved,
                ),
            ],
            top_brokers: vec![
                performer("John Smith", "ABC Insurance Agency", "$125,450.00", 15, "+12.5%"),
                performer("Sarah Johnson", "XYZ Brokers Ltd", "$98,750.00", 12, "+8.3%"),
                performer("Mike Chen", "First Choice Insurance", "$87,320.00", 10, "+15.2%"),
                performer("Lisa Wang", "Elite Insurance Group", "$76,890.00", 8, "+6.7%"),
                performer("David Kim", "Premier Brokers Inc", "$65,430.00", 7, "+9.1%"),
            ],
            recent_brokers: vec![
                contact("BRK001", "John Smith", "Standard Broker", "john.smith@abcagency.com", "+1 (555) 123-4567"),
                contact("BRK002", "Sarah Johnson", "Premium Broker", "sarah.j@xyzbrokers.com", "+1 (555) 234-5678"),
                contact("BRK003", "Mike Chen", "Standard Broker", "mike.chen@firstchoice.com", "+1 (555) 345-6789"),
            ],
        }
    }

    fn admin_dashboard(&self) -> AdminDashboard {
        let alert = |id, kind, message: &str, time: &str| SystemAlert {
            id,
            kind,
            message: message.to_owned(),
            time: time.to_owned(),
        };
        let activity = |id, action: &str, user: &str, time: &str| ActivityEntry {
            id,
            action: action.to_owned(),
            user: user.to_owned(),
            status: "completed".to_owned(),
            time: time.to_owned(),
        };

        AdminDashboard {
            stats: vec![
                tile("Total Users", "247", None),
                tile("Active Users", "189", None),
                tile("Total Deals", "1234", None),
                tile("Pending Approvals", "23", None),
            ],
            system_health: "excellent".to_owned(),
            uptime: "99.9%".to_owned(),
            last_backup: "2 hours ago".to_owned(),
            storage_used: "67%".to_owned(),
            alerts: vec![
                alert(1, AlertKind::Warning, "3 deals require urgent approval", "5 min ago"),
                alert(2, AlertKind::Error, "TPA connection failed", "15 min ago"),
                alert(3, AlertKind::Info, "System update completed successfully", "1 hour ago"),
            ],
            activities: vec![
                activity(1, "New user created", "Sarah Johnson", "2 min ago"),
                activity(2, "Permissions updated", "Mike Chen", "5 min ago"),
                activity(3, "Notification sent", "Admin System", "10 min ago"),
                activity(4, "Data exported", "Lisa Wang", "15 min ago"),
                activity(5, "Report generated", "David Kim", "20 min ago"),
            ],
        }
    }
}
