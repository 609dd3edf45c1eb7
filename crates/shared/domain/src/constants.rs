//! Names shared between the server, its OpenAPI document and the database.

/// OpenAPI tag for the content endpoints.
pub const PORTFOLIO_TAG: &str = "Portfolio";
/// OpenAPI tag for the contact endpoints.
pub const CONTACT_TAG: &str = "Contact";
/// OpenAPI tag for the analytics endpoints.
pub const ANALYTICS_TAG: &str = "Analytics";
/// OpenAPI tag for health and system endpoints.
pub const SYSTEM_TAG: &str = "System";

/// Table holding one record per portfolio section.
pub const SECTION_TABLE: &str = "section";
/// Table holding contact form submissions.
pub const SUBMISSION_TABLE: &str = "submission";
/// Table holding command usage counters.
pub const COMMAND_USAGE_TABLE: &str = "command_usage";

/// Length of server-assigned submission identifiers.
pub const SUBMISSION_ID_LEN: usize = 12;
/// Longest command accepted by the analytics endpoint.
pub const MAX_COMMAND_LEN: usize = 100;
